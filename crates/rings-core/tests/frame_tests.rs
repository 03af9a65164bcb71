// Per-frame update: rotations, audio displacement and the floor accumulator.

use rings_core::*;
use std::f32::consts::TAU;

fn scene() -> SceneState {
    build_scene(&SceneConfig::default(), 1.0)
}

fn angle_close(a: f32, b: f32) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < 1e-3 || d > TAU - 1e-3
}

fn idle(dt_sec: f32) -> FrameInput<'static> {
    FrameInput {
        playing: false,
        frequencies: &[],
        dt_sec,
    }
}

#[test]
fn rotations_follow_frame_count() {
    let mut s = scene();
    let frames = 250;
    for _ in 0..frames {
        step_frame(&mut s, &idle(0.016), |_| {});
    }
    for (ring, step) in s.rings.iter().zip(RING_ROTATION_STEPS) {
        let expected = (frames as f32 * step).rem_euclid(TAU);
        assert!(
            angle_close(ring.rotation_y, expected),
            "got {} want {}",
            ring.rotation_y,
            expected
        );
        assert!((0.0..TAU).contains(&ring.rotation_y));
    }
    assert_eq!(s.frame_count, frames);
}

#[test]
fn rotations_hold_after_an_hour_of_frames() {
    let mut s = scene();
    // One hour at 60 fps
    let frames: u64 = 216_000;
    for _ in 0..frames {
        for ring in &mut s.rings {
            ring.step_rotation();
        }
    }
    for (ring, step) in s.rings.iter().zip(RING_ROTATION_STEPS) {
        let expected = (frames as f64 * f64::from(step)).rem_euclid(std::f64::consts::TAU) as f32;
        let d = (ring.rotation_y - expected).rem_euclid(TAU);
        assert!(
            d < 1e-4 || d > TAU - 1e-4,
            "got {} want {}",
            ring.rotation_y,
            expected
        );
        assert!((0.0..TAU).contains(&ring.rotation_y));
        assert_eq!(ring.frames, frames);
    }
}

#[test]
fn rotations_ignore_elapsed_time() {
    let mut fast = scene();
    let mut slow = scene();
    for _ in 0..40 {
        step_frame(&mut fast, &idle(0.0), |_| {});
        step_frame(&mut slow, &idle(2.5), |_| {});
    }
    for (a, b) in fast.rings.iter().zip(&slow.rings) {
        assert_eq!(a.rotation_y, b.rotation_y);
    }
}

#[test]
fn paused_frames_leave_heights_alone() {
    let mut s = scene();
    let loud = [255u8; 256];
    let input = FrameInput {
        playing: false,
        frequencies: &loud,
        dt_sec: 0.1,
    };
    for _ in 0..5 {
        step_frame(&mut s, &input, |_| {});
    }
    assert!(s.spheres.iter().all(|sp| sp.y() == 1.0 && sp.target_y().is_none()));
}

#[test]
fn playing_frames_ease_spheres_toward_magnitude() {
    let mut s = scene();
    let bins: Vec<u8> = (0..1024).map(|i| (i % 256) as u8).collect();
    let input = FrameInput {
        playing: true,
        frequencies: &bins,
        dt_sec: 0.3,
    };
    step_frame(&mut s, &input, |_| {});
    assert_eq!(s.spheres[60].target_y(), Some(60.0 / 30.0));
    step_frame(&mut s, &input, |_| {});
    for (i, sphere) in s.spheres.iter().enumerate() {
        let want = bins[i] as f32 / 30.0;
        assert!((sphere.y() - want).abs() < 1e-4, "sphere {i}: {}", sphere.y());
    }
}

#[test]
fn short_buffer_bounds_the_reactive_window() {
    let mut s = scene();
    let bins = [90u8; 16];
    assert_eq!(reactive_bound(&s, bins.len()), 16);
    assert_eq!(reactive_bound(&s, 4096), 140);
    assert_eq!(reactive_bound(&s, 0), 0);

    let input = FrameInput {
        playing: true,
        frequencies: &bins,
        dt_sec: 0.0,
    };
    update_frame(&mut s, &input);
    assert!(s.spheres[..16].iter().all(|sp| sp.target_y() == Some(3.0)));
    assert!(s.spheres[16..].iter().all(|sp| sp.target_y().is_none()));
}

#[test]
fn empty_buffer_while_playing_is_harmless() {
    let mut s = scene();
    let input = FrameInput {
        playing: true,
        frequencies: &[],
        dt_sec: 0.016,
    };
    step_frame(&mut s, &input, |_| {});
    assert!(s.spheres.iter().all(|sp| sp.target_y().is_none()));
}

#[test]
fn tweens_finish_after_playback_stops() {
    let mut s = scene();
    let bins = [150u8; 140];
    let playing = FrameInput {
        playing: true,
        frequencies: &bins,
        dt_sec: 0.0,
    };
    update_frame(&mut s, &playing);
    for _ in 0..10 {
        update_frame(&mut s, &idle(0.05));
    }
    assert!((s.spheres[0].y() - 5.0).abs() < 1e-4);
    assert!(s.spheres[0].target_y().is_none());
}

#[test]
fn render_sees_state_before_the_floor_turns() {
    let mut s = scene();
    let mut seen = None;
    step_frame(&mut s, &idle(0.016), |state| {
        seen = Some((state.frame_count, state.floor_angle_deg, state.rings[0].rotation_y));
    });
    let (count, floor, ring) = seen.unwrap();
    assert_eq!(count, 0);
    assert_eq!(floor, 0.0);
    assert!((ring - 0.01).abs() < 1e-6);
    assert_eq!(s.frame_count, 1);
}

#[test]
fn floor_accumulates_point_zero_five_degrees_per_frame() {
    let mut s = scene();
    for _ in 0..3600 {
        advance_floor(&mut s);
    }
    assert!((s.floor_angle_deg - 180.0).abs() < 1e-6);
    assert!((s.floor.rotation_y - std::f32::consts::PI).abs() < 1e-4);
    for _ in 0..3600 {
        advance_floor(&mut s);
    }
    // a full turn wraps back to zero
    assert!(s.floor.rotation_y.abs() < 1e-4 || (s.floor.rotation_y - TAU).abs() < 1e-4);
}
