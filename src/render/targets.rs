use super::helpers;
use rings_core::SHADOW_MAP_SIZE;

/// Depth attachments: the swapchain-sized depth buffer and the fixed-size
/// spot-light shadow map. Only the former follows the canvas size.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) shadow_tex: wgpu::Texture,
    pub(crate) shadow_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(
            device,
            "depth_tex",
            width,
            height,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (shadow_tex, shadow_view) = helpers::create_depth_texture(
            device,
            "shadow_map",
            SHADOW_MAP_SIZE,
            SHADOW_MAP_SIZE,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        Self {
            depth_tex,
            depth_view,
            shadow_tex,
            shadow_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.depth_tex, self.depth_view) = helpers::create_depth_texture(
            device,
            "depth_tex",
            width,
            height,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
    }
}
