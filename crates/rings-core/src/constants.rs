use glam::Vec3;

// Shared scene/update tuning constants used by the web frontend and the core update.

// Rings: (sphere count, radius) in creation order
pub const RING_LAYOUT: [(usize, f32); 4] = [(20, 1.0), (30, 2.0), (40, 3.0), (50, 4.0)];
pub const RING_RADIUS_SCALE: f32 = 2.0; // ring radius -> world distance from the centre
pub const RING_HEIGHT: f32 = 1.0; // resting y of every sphere
pub const RING_ROTATION_STEPS: [f32; 4] = [0.01, -0.01, 0.02, -0.02]; // radians per frame

// Audio reaction
pub const REACTIVE_SPHERES: usize = 140; // bins mapped onto the flattened sphere list
pub const DISPLACEMENT_DIVISOR: f32 = 30.0; // byte magnitude -> world units
pub const TWEEN_DURATION_SEC: f32 = 0.3;

// Sphere geometry
pub const SPHERE_RADIUS: f32 = 0.3;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

// Floor
pub const FLOOR_Y: f32 = -2.0;
pub const FLOOR_SIZE: f32 = 2000.0;
pub const FLOOR_NORMAL_REPEAT: f32 = 400.0;
pub const FLOOR_DEGREES_PER_FRAME: f64 = 0.05;

// Camera
pub const CAMERA_FOV_DEG: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: [f32; 3] = [15.0, 15.0, 5.0];

// Spot light (shadow caster)
pub const SPOT_POSITION: [f32; 3] = [0.0, 15.0, 0.0];
pub const SPOT_ANGLE_RAD: f32 = std::f32::consts::FRAC_PI_3;
pub const SPOT_SHADOW_NEAR: f32 = 0.5;
pub const SPOT_SHADOW_FAR: f32 = 500.0;

// Shared material defaults
pub const MATERIAL_METALNESS: f32 = 0.58;
pub const MATERIAL_ROUGHNESS: f32 = 0.18;
pub const MATERIAL_EMISSIVE: &str = "#000000";

// Floor surface (plain standard material defaults)
pub const FLOOR_METALNESS: f32 = 0.0;
pub const FLOOR_ROUGHNESS: f32 = 1.0;

// Fixed GPU-side slot counts
pub const MAX_POINT_LIGHTS: usize = 4;
pub const MAX_RING_MATERIALS: usize = 4;
pub const SHADOW_MAP_SIZE: u32 = 1024;

// Panel ranges
pub const INTENSITY_RANGE: (f32, f32) = (1.0, 10.0);
pub const POSITION_RANGE: (f32, f32) = (-100.0, 100.0);
pub const UNIT_RANGE: (f32, f32) = (0.0, 1.0);

// Orbit controls
pub const ORBIT_ZOOM_SCALE: f32 = 0.95;
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 1000.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3;

#[inline]
pub fn camera_position_vec3() -> Vec3 {
    Vec3::from(CAMERA_POSITION)
}

#[inline]
pub fn spot_position_vec3() -> Vec3 {
    Vec3::from(SPOT_POSITION)
}
