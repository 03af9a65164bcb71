//! Visual-side state types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs. The web
//! frontend reads them every frame to fill GPU uniforms, and the parameter
//! panel writes into them.

use crate::color::Rgb;
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, FLOOR_NORMAL_REPEAT, FLOOR_SIZE, FLOOR_Y,
    SPOT_ANGLE_RAD, SPOT_SHADOW_FAR, SPOT_SHADOW_NEAR,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Keep the projection in sync with the viewport.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Editable point light: `{color, intensity, position}`.
#[derive(Clone, Debug, PartialEq)]
pub struct LightParams {
    pub name: String,
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl LightParams {
    pub fn new(name: &str, hex: &str, intensity: f32, position: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            color: Rgb::from_hex(hex).unwrap_or(Rgb::WHITE),
            intensity,
            position: Vec3::from(position),
        }
    }
}

/// Shared material of one ring: `{color, emissive, metalness, roughness}`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialParams {
    pub name: String,
    pub color: Rgb,
    pub emissive: Rgb,
    pub metalness: f32,
    pub roughness: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: 1.0,
        }
    }
}

/// Shadow-casting cone light aimed at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub angle: f32,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// View-projection of the shadow camera (fov = full cone angle).
    pub fn shadow_view_projection(&self) -> Mat4 {
        let dir = self.direction();
        // looking straight down makes +Y a degenerate up vector
        let up = if dir.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let proj = Mat4::perspective_rh(
            (self.angle * 2.0).min(std::f32::consts::PI - 0.01),
            1.0,
            SPOT_SHADOW_NEAR,
            SPOT_SHADOW_FAR,
        );
        proj * Mat4::look_at_rh(self.position, self.target, up)
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: 1.0,
            position: crate::constants::spot_position_vec3(),
            target: Vec3::ZERO,
            angle: SPOT_ANGLE_RAD,
        }
    }
}

/// Normal-mapped ground plane that slowly turns.
#[derive(Clone, Debug, PartialEq)]
pub struct Floor {
    pub y: f32,
    pub size: f32,
    pub normal_repeat: f32,
    pub color: Rgb,
    pub rotation_y: f32,
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            y: FLOOR_Y,
            size: FLOOR_SIZE,
            normal_repeat: FLOOR_NORMAL_REPEAT,
            color: Rgb::BLACK,
            rotation_y: 0.0,
        }
    }
}
