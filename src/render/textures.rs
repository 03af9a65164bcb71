//! Floor normal map and environment cube: GPU upload plus the
//! fire-and-forget fetch that feeds them.

use crate::constants::{CUBE_FACE_URLS, FLAT_NORMAL_TEXEL, NEUTRAL_ENV_TEXEL, NORMAL_MAP_URL};
use rings_core::{assemble_cube, decode_rgba, CubeImage, DecodedImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A decoded texture waiting for the frame loop to upload it.
pub enum LoadedTexture {
    NormalMap(DecodedImage),
    Environment(CubeImage),
}

pub type PendingTextures = Rc<RefCell<Vec<LoadedTexture>>>;

fn write_layer(queue: &wgpu::Queue, texture: &wgpu::Texture, layer: u32, img: &DecodedImage) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d { x: 0, y: 0, z: layer },
            aspect: wgpu::TextureAspect::All,
        },
        &img.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(img.bytes_per_row()),
            rows_per_image: Some(img.height),
        },
        wgpu::Extent3d {
            width: img.width,
            height: img.height,
            depth_or_array_layers: 1,
        },
    );
}

/// Linear RGBA8 2D texture (normal data must not be sRGB-decoded).
pub(crate) fn upload_normal_map(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    img: &DecodedImage,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("floor_normal_map"),
        size: wgpu::Extent3d {
            width: img.width,
            height: img.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    write_layer(queue, &texture, 0, img);
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

pub(crate) fn upload_cube(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    cube: &CubeImage,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("env_cube"),
        size: wgpu::Extent3d {
            width: cube.size,
            height: cube.size,
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    for (layer, face) in cube.faces.iter().enumerate() {
        write_layer(queue, &texture, layer as u32, face);
    }
    texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("env_cube_view"),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    })
}

pub(crate) fn placeholder_normal_map(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    upload_normal_map(device, queue, &DecodedImage::solid(FLAT_NORMAL_TEXEL))
}

pub(crate) fn placeholder_cube(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let cube = CubeImage {
        size: 1,
        faces: vec![DecodedImage::solid(NEUTRAL_ENV_TEXEL); 6],
    };
    upload_cube(device, queue, &cube)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {url}: not a Response"))?;
    if !response.ok() {
        anyhow::bail!("fetch {url}: status {}", response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("read {url}: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {url}: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

async fn load_normal_map() -> anyhow::Result<DecodedImage> {
    let bytes = fetch_bytes(NORMAL_MAP_URL).await?;
    Ok(decode_rgba(NORMAL_MAP_URL, &bytes)?)
}

async fn load_cube() -> anyhow::Result<CubeImage> {
    let mut faces = Vec::with_capacity(CUBE_FACE_URLS.len());
    for url in CUBE_FACE_URLS {
        let bytes = fetch_bytes(url).await?;
        faces.push(decode_rgba(url, &bytes)?);
    }
    Ok(assemble_cube(faces)?)
}

/// Start both texture downloads. Results land in `pending`; failures are
/// logged and the placeholders stay bound.
pub fn fetch_textures(pending: &PendingTextures) {
    let normal_pending = pending.clone();
    spawn_local(async move {
        match load_normal_map().await {
            Ok(img) => {
                log::info!("[gpu] normal map {}x{} decoded", img.width, img.height);
                normal_pending.borrow_mut().push(LoadedTexture::NormalMap(img));
            }
            Err(e) => log::error!("[gpu] normal map unavailable: {e:#}"),
        }
    });
    let cube_pending = pending.clone();
    spawn_local(async move {
        match load_cube().await {
            Ok(cube) => cube_pending.borrow_mut().push(LoadedTexture::Environment(cube)),
            Err(e) => log::error!("[gpu] environment map unavailable: {e:#}"),
        }
    });
}
