//! The owned scene aggregate and its one-time builder.

use crate::color::Rgb;
use crate::constants::{
    camera_position_vec3, MATERIAL_EMISSIVE, MATERIAL_METALNESS, MATERIAL_ROUGHNESS, RING_LAYOUT,
    RING_ROTATION_STEPS,
};
use crate::rings::{ring_positions, RingGroup, RingSpec, Sphere};
use crate::state::{AmbientLight, Camera, Floor, LightParams, MaterialParams, SpotLight};
use glam::Vec3;

/// Everything the builder needs to lay out the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub camera_position: Vec3,
    pub ambient: AmbientLight,
    pub spot: SpotLight,
    pub point_lights: Vec<LightParams>,
    pub rings: Vec<RingSpec>,
    pub floor: Floor,
}

fn ring_material(name: &str, hex: &str) -> MaterialParams {
    MaterialParams {
        name: name.to_string(),
        color: Rgb::from_hex(hex).unwrap_or(Rgb::BLACK),
        emissive: Rgb::from_hex(MATERIAL_EMISSIVE).unwrap_or(Rgb::BLACK),
        metalness: MATERIAL_METALNESS,
        roughness: MATERIAL_ROUGHNESS,
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let point_lights = vec![
            LightParams::new("first light", "#6900ff", 4.0, [-15.0, 29.0, 29.0]),
            LightParams::new("second light", "#00ff00", 4.0, [18.0, 22.0, -9.0]),
            LightParams::new("third light", "#5a00ff", 3.2, [7.0, 62.0, -44.0]),
            LightParams::new("fourth light", "#1eff00", 1.0, [-90.0, 60.0, 5.0]),
        ];
        let materials = [
            ring_material("Mesh First", "#111111"),
            ring_material("Mesh Second", "#78ff00"),
            ring_material("Mesh Third", "#3c00ff"),
            ring_material("Mesh Fourth", "#ff005a"),
        ];
        let rings = RING_LAYOUT
            .iter()
            .zip(RING_ROTATION_STEPS)
            .zip(materials)
            .map(|((&(count, radius), rotation_step), material)| RingSpec {
                count,
                radius,
                rotation_step,
                material,
            })
            .collect();
        Self {
            camera_position: camera_position_vec3(),
            ambient: AmbientLight::default(),
            spot: SpotLight::default(),
            point_lights,
            rings,
            floor: Floor::default(),
        }
    }
}

/// Owned scene state: built once, then mutated by the frame update and panel.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub ambient: AmbientLight,
    pub spot: SpotLight,
    pub point_lights: Vec<LightParams>,
    pub floor: Floor,
    pub rings: Vec<RingGroup>,
    /// Flattened sphere list, ring 1 first, in creation order.
    pub spheres: Vec<Sphere>,
    /// Monotone floor angle accumulator, degrees.
    pub floor_angle_deg: f64,
    pub frame_count: u64,
}

/// Build the scene described by `config`. Sphere count per ring is fixed from here on.
pub fn build_scene(config: &SceneConfig, aspect: f32) -> SceneState {
    let total: usize = config.rings.iter().map(|r| r.count).sum();
    let mut spheres = Vec::with_capacity(total);
    let mut rings = Vec::with_capacity(config.rings.len());
    for (ring_index, spec) in config.rings.iter().enumerate() {
        let start = spheres.len();
        spheres.extend(
            ring_positions(spec.count, spec.radius)
                .into_iter()
                .map(|p| Sphere::new(ring_index, p)),
        );
        rings.push(RingGroup {
            radius: spec.radius,
            rotation_y: 0.0,
            rotation_step: spec.rotation_step,
            frames: 0,
            material: spec.material.clone(),
            spheres: start..spheres.len(),
        });
    }
    log::info!(
        "[scene] built rings={} spheres={} lights={}",
        rings.len(),
        spheres.len(),
        config.point_lights.len()
    );
    SceneState {
        camera: Camera::new(config.camera_position, aspect),
        ambient: config.ambient.clone(),
        spot: config.spot.clone(),
        point_lights: config.point_lights.clone(),
        floor: config.floor.clone(),
        rings,
        spheres,
        floor_angle_deg: 0.0,
        frame_count: 0,
    }
}

impl SceneState {
    /// World-space centre of sphere `index` (ring rotation applied).
    pub fn sphere_world_position(&self, index: usize) -> Option<Vec3> {
        let sphere = self.spheres.get(index)?;
        let ring = self.rings.get(sphere.ring)?;
        Some(ring.transform() * sphere.local)
    }

    /// `(world position, ring index)` for every sphere, in list order.
    pub fn sphere_instances(&self) -> impl Iterator<Item = (Vec3, usize)> + '_ {
        self.spheres.iter().map(move |s| {
            let world = self
                .rings
                .get(s.ring)
                .map(|r| r.transform() * s.local)
                .unwrap_or(s.local);
            (world, s.ring)
        })
    }

    pub fn material(&self, ring: usize) -> Option<&MaterialParams> {
        self.rings.get(ring).map(|r| &r.material)
    }

    pub fn material_mut(&mut self, ring: usize) -> Option<&mut MaterialParams> {
        self.rings.get_mut(ring).map(|r| &mut r.material)
    }

    pub fn point_light_mut(&mut self, index: usize) -> Option<&mut LightParams> {
        self.point_lights.get_mut(index)
    }
}
