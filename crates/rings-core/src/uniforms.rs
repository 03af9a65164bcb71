//! GPU-facing buffer layouts shared by both shaders.
//!
//! Every uniform member is a `vec4`/`mat4` so the Rust and WGSL layouts line up
//! without manual padding.

use crate::constants::{FLOOR_METALNESS, FLOOR_ROUGHNESS, MAX_POINT_LIGHTS, MAX_RING_MATERIALS};
use crate::scene::SceneState;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    /// rgb = base colour, w = metalness
    pub color: [f32; 4],
    /// rgb = emissive, w = roughness
    pub emissive: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb premultiplied by intensity
    pub ambient: [f32; 4],
    /// xyz = position, w = cos(cone half-angle)
    pub spot_pos: [f32; 4],
    /// xyz = direction, w = intensity
    pub spot_dir: [f32; 4],
    pub spot_color: [f32; 4],
    /// xyz = position, w = intensity (0 for unused slots)
    pub point_pos: [[f32; 4]; MAX_POINT_LIGHTS],
    pub point_color: [[f32; 4]; MAX_POINT_LIGHTS],
    /// x = y offset, y = size, z = normal repeat, w = rotation (radians)
    pub floor: [f32; 4],
    /// rgb = colour, w = roughness
    pub floor_color: [f32; 4],
    /// x = metalness, yzw unused
    pub floor_extra: [f32; 4],
    pub materials: [MaterialUniform; MAX_RING_MATERIALS],
}

impl SceneUniforms {
    pub fn from_scene(scene: &SceneState) -> Self {
        let mut point_pos = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut point_color = [[0.0; 4]; MAX_POINT_LIGHTS];
        for (i, light) in scene.point_lights.iter().take(MAX_POINT_LIGHTS).enumerate() {
            point_pos[i] = light.position.extend(light.intensity).to_array();
            point_color[i] = light.color.extend(1.0);
        }

        let mut materials = [MaterialUniform::default(); MAX_RING_MATERIALS];
        for (slot, ring) in materials.iter_mut().zip(&scene.rings) {
            let m = &ring.material;
            *slot = MaterialUniform {
                color: m.color.extend(m.metalness),
                emissive: m.emissive.extend(m.roughness),
            };
        }

        let spot = &scene.spot;
        let floor = &scene.floor;
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            light_view_proj: spot.shadow_view_projection().to_cols_array_2d(),
            camera_pos: scene.camera.eye.extend(1.0).to_array(),
            ambient: scene.ambient.color.scaled(scene.ambient.intensity).extend(1.0),
            spot_pos: spot.position.extend(spot.angle.cos()).to_array(),
            spot_dir: spot.direction().extend(spot.intensity).to_array(),
            spot_color: spot.color.extend(1.0),
            point_pos,
            point_color,
            floor: [floor.y, floor.size, floor.normal_repeat, floor.rotation_y],
            floor_color: floor.color.extend(FLOOR_ROUGHNESS),
            floor_extra: [FLOOR_METALNESS, 0.0, 0.0, 0.0],
            materials,
        }
    }
}

/// Per-instance sphere data: world position and ring (material slot).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub offset: [f32; 3],
    pub ring: u32,
}

/// Fill `out` with one instance per sphere, reusing its allocation.
pub fn pack_instances(scene: &SceneState, out: &mut Vec<SphereInstance>) {
    out.clear();
    out.extend(scene.sphere_instances().map(|(pos, ring)| SphereInstance {
        offset: pos.to_array(),
        ring: ring as u32,
    }));
}
