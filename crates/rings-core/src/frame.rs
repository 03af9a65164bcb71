//! Per-frame scene update, driven by the host render loop.
//!
//! The host calls [`step_frame`] once per display refresh. Rotations advance
//! per call, not per second; only sphere easing uses the wall-clock delta.

use crate::constants::{DISPLACEMENT_DIVISOR, FLOOR_DEGREES_PER_FRAME, REACTIVE_SPHERES};
use crate::scene::SceneState;

/// Inputs sampled by the host for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub playing: bool,
    /// Current analyser magnitudes; only read while `playing`.
    pub frequencies: &'a [u8],
    /// Wall-clock time since the previous frame.
    pub dt_sec: f32,
}

/// Number of spheres that react to this buffer.
#[inline]
pub fn reactive_bound(scene: &SceneState, buffer_len: usize) -> usize {
    REACTIVE_SPHERES.min(buffer_len).min(scene.spheres.len())
}

/// Audio displacement and ring rotation (everything before the render).
pub fn update_frame(scene: &mut SceneState, input: &FrameInput<'_>) {
    for sphere in &mut scene.spheres {
        sphere.advance(input.dt_sec);
    }

    if input.playing {
        let bound = reactive_bound(scene, input.frequencies.len());
        for (sphere, &magnitude) in scene.spheres[..bound]
            .iter_mut()
            .zip(&input.frequencies[..bound])
        {
            sphere.retarget_y(magnitude as f32 / DISPLACEMENT_DIVISOR);
        }
    }

    for ring in &mut scene.rings {
        ring.step_rotation();
    }
}

/// Advance the floor angle accumulator and apply it (everything after the render).
pub fn advance_floor(scene: &mut SceneState) {
    scene.floor_angle_deg += FLOOR_DEGREES_PER_FRAME;
    scene.floor.rotation_y = (scene.floor_angle_deg.to_radians()
        % std::f64::consts::TAU) as f32;
    scene.frame_count += 1;
}

/// One full frame: update, render through `render`, then turn the floor.
pub fn step_frame<R>(scene: &mut SceneState, input: &FrameInput<'_>, render: R)
where
    R: FnOnce(&SceneState),
{
    update_frame(scene, input);
    render(scene);
    advance_floor(scene);
}
