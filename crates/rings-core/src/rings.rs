use crate::constants::{RING_HEIGHT, RING_RADIUS_SCALE, TWEEN_DURATION_SEC};
use crate::state::MaterialParams;
use crate::tween::Tween;
use glam::{Mat3, Vec3};
use std::ops::Range;

#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Local-space sphere positions for a ring of `count` spheres.
///
/// Sphere `i` sits at angle `i * 360 / count` degrees, `radius * 2` from the
/// centre, at the resting height.
pub fn ring_positions(count: usize, radius: f32) -> Vec<Vec3> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    let distance = radius * RING_RADIUS_SCALE;
    (0..count)
        .map(|index| {
            let angle = radians(step * index as f32);
            Vec3::new(angle.sin() * distance, RING_HEIGHT, angle.cos() * distance)
        })
        .collect()
}

/// Creation parameters of one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub count: usize,
    pub radius: f32,
    pub rotation_step: f32,
    pub material: MaterialParams,
}

/// One sphere of the flattened list. `local` is relative to its ring group.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub ring: usize,
    pub local: Vec3,
    tween: Option<Tween>,
}

impl Sphere {
    pub fn new(ring: usize, local: Vec3) -> Self {
        Self {
            ring,
            local,
            tween: None,
        }
    }

    pub fn y(&self) -> f32 {
        self.local.y
    }

    /// Start a new easing toward `y`, replacing any running one.
    pub fn retarget_y(&mut self, y: f32) {
        self.tween = Some(Tween::new(self.local.y, y, TWEEN_DURATION_SEC));
    }

    pub fn target_y(&self) -> Option<f32> {
        self.tween.map(|t| t.to)
    }

    pub(crate) fn advance(&mut self, dt_sec: f32) {
        if let Some(tween) = &mut self.tween {
            self.local.y = tween.advance(dt_sec);
            if tween.is_finished() {
                self.tween = None;
            }
        }
    }
}

/// A rotatable group of spheres sharing one material.
///
/// The spheres themselves live in the scene's flattened list; `spheres` is the
/// contiguous index range owned by this group.
#[derive(Clone, Debug, PartialEq)]
pub struct RingGroup {
    pub radius: f32,
    pub rotation_y: f32,
    pub rotation_step: f32,
    /// Frames stepped so far; `rotation_y` is derived from it.
    pub frames: u64,
    pub material: MaterialParams,
    pub spheres: Range<usize>,
}

impl RingGroup {
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Advance one frame. The angle is recomputed from the frame count in
    /// f64 so it stays exact over long sessions, kept in \[0, 2π).
    pub fn step_rotation(&mut self) {
        self.frames += 1;
        let angle = (self.frames as f64 * f64::from(self.rotation_step))
            .rem_euclid(std::f64::consts::TAU) as f32;
        // Narrowing can round up to exactly 2π
        self.rotation_y = if angle >= std::f32::consts::TAU { 0.0 } else { angle };
    }

    pub fn transform(&self) -> Mat3 {
        Mat3::from_rotation_y(self.rotation_y)
    }
}
