use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON, ORBIT_ZOOM_SCALE,
};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Orbit camera controls around a fixed target.
///
/// Input handlers only accumulate deltas; [`OrbitControls::update`] applies
/// them to the camera once per frame.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    distance: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitControls {
    /// Start from the camera's current placement.
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        Self {
            target: camera.target,
            distance,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Pointer drag in pixels; one viewport height of travel is a full turn.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.pending_theta -= TAU * dx_px / h;
        self.pending_phi -= TAU * dy_px / h;
    }

    /// Wheel input: positive `delta_y` moves away, negative moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.pending_scale /= ORBIT_ZOOM_SCALE;
        } else if delta_y < 0.0 {
            self.pending_scale *= ORBIT_ZOOM_SCALE;
        }
    }

    /// Apply accumulated input and place the camera.
    pub fn update(&mut self, camera: &mut Camera) {
        self.theta = (self.theta + self.pending_theta).rem_euclid(TAU);
        self.phi = (self.phi + self.pending_phi)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.distance =
            (self.distance * self.pending_scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_scale = 1.0;

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.distance * sin_phi * self.theta.sin(),
            self.distance * self.phi.cos(),
            self.distance * sin_phi * self.theta.cos(),
        );
        camera.target = self.target;
        camera.eye = self.target + offset;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }
}
