// Sphere easing and orbit camera controls.

use glam::Vec3;
use rings_core::*;
use std::f32::consts::PI;

#[test]
fn ease_out_quad_endpoints_and_shape() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert_eq!(ease_out_quad(0.5), 0.75);
    assert_eq!(ease_out_quad(-1.0), 0.0);
    assert_eq!(ease_out_quad(3.0), 1.0);
}

#[test]
fn tween_reaches_target_at_duration_and_is_monotone() {
    let mut tween = Tween::new(1.0, 5.0, TWEEN_DURATION_SEC);
    let mut prev = tween.value();
    assert_eq!(prev, 1.0);
    for _ in 0..35 {
        let v = tween.advance(0.01);
        assert!(v >= prev);
        prev = v;
    }
    assert!(tween.is_finished());
    assert!((tween.value() - 5.0).abs() < 1e-5);
    assert!((tween.advance(1.0) - 5.0).abs() < 1e-5);
}

#[test]
fn tween_downward_is_monotone_too() {
    let mut tween = Tween::new(8.0, 0.0, 0.3);
    let mut prev = 8.0;
    while !tween.is_finished() {
        let v = tween.advance(0.02);
        assert!(v <= prev);
        prev = v;
    }
    assert_eq!(tween.value(), 0.0);
}

#[test]
fn zero_duration_jumps() {
    let tween = Tween::new(0.0, 3.0, 0.0);
    assert_eq!(tween.value(), 3.0);
    assert!(tween.is_finished());
}

#[test]
fn retarget_mid_flight_starts_from_current_height() {
    let mut scene = build_scene(&SceneConfig::default(), 1.0);
    let up = [255u8; 1];
    update_frame(
        &mut scene,
        &FrameInput {
            playing: true,
            frequencies: &up,
            dt_sec: 0.0,
        },
    );
    let quiet = [0u8; 1];
    let input = FrameInput {
        playing: true,
        frequencies: &quiet,
        dt_sec: 0.15,
    };
    // advance half way toward 8.5, then retarget to 0 from there
    update_frame(&mut scene, &input);
    let mid = scene.spheres[0].y();
    assert!((mid - (1.0 + 7.5 * 0.75)).abs() < 1e-4, "{mid}");
    assert_eq!(scene.spheres[0].target_y(), Some(0.0));
    update_frame(&mut scene, &input);
    let next = scene.spheres[0].y();
    assert!(next < mid && next > 0.0);
}

fn camera() -> Camera {
    Camera::new(Vec3::new(15.0, 15.0, 5.0), 1.0)
}

#[test]
fn orbit_starts_at_camera_placement() {
    let mut cam = camera();
    let mut orbit = OrbitControls::from_camera(&cam);
    let before = cam.eye;
    orbit.update(&mut cam);
    assert!((cam.eye - before).length() < 1e-3, "{:?}", cam.eye);
    assert!((orbit.distance() - before.length()).abs() < 1e-4);
}

#[test]
fn rotating_preserves_distance() {
    let mut cam = camera();
    let mut orbit = OrbitControls::from_camera(&cam);
    let d = orbit.distance();
    orbit.rotate(123.0, -45.0, 800.0);
    orbit.update(&mut cam);
    assert!((cam.eye.length() - d).abs() < 1e-3);
    assert!((orbit.distance() - d).abs() < 1e-6);
}

#[test]
fn full_viewport_drag_is_a_full_turn() {
    let mut cam = camera();
    let mut orbit = OrbitControls::from_camera(&cam);
    let start = orbit.azimuth();
    orbit.rotate(600.0, 0.0, 600.0);
    orbit.update(&mut cam);
    let d = (orbit.azimuth() - start).rem_euclid(2.0 * PI);
    assert!(d < 1e-3 || d > 2.0 * PI - 1e-3);
}

#[test]
fn polar_angle_is_clamped() {
    let mut cam = camera();
    let mut orbit = OrbitControls::from_camera(&cam);
    orbit.rotate(0.0, 10_000.0, 100.0);
    orbit.update(&mut cam);
    assert!(orbit.polar_angle() > 0.0);
    assert!(orbit.polar_angle() <= ORBIT_POLAR_EPSILON + 1e-6);
    assert!(cam.eye.y > 0.0);

    orbit.rotate(0.0, -10_000.0, 100.0);
    orbit.update(&mut cam);
    assert!(orbit.polar_angle() < PI);
    assert!(orbit.polar_angle() >= PI - ORBIT_POLAR_EPSILON - 1e-6);
    assert!(cam.eye.y < 0.0);
}

#[test]
fn wheel_zoom_scales_and_clamps_distance() {
    let mut cam = camera();
    let mut orbit = OrbitControls::from_camera(&cam);
    let d = orbit.distance();
    orbit.zoom(-1.0);
    orbit.update(&mut cam);
    assert!((orbit.distance() - d * 0.95).abs() < 1e-3);
    orbit.zoom(1.0);
    orbit.update(&mut cam);
    assert!((orbit.distance() - d).abs() < 1e-3);
    orbit.zoom(0.0);
    orbit.update(&mut cam);
    assert!((orbit.distance() - d).abs() < 1e-3);

    for _ in 0..500 {
        orbit.zoom(-1.0);
    }
    orbit.update(&mut cam);
    assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);
    for _ in 0..500 {
        orbit.zoom(1.0);
        orbit.update(&mut cam);
    }
    assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
    assert!((cam.eye.length() - ORBIT_MAX_DISTANCE).abs() < 0.5);
}
