// Scene layout: ring generation, flattening order and the default rig.

use glam::Vec3;
use rings_core::*;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn first_ring_places_sphere_zero_and_five() {
    let positions = ring_positions(20, 1.0);
    assert_eq!(positions.len(), 20);
    assert!(approx(positions[0], Vec3::new(0.0, 1.0, 2.0)), "{:?}", positions[0]);
    assert!(approx(positions[5], Vec3::new(2.0, 1.0, 0.0)), "{:?}", positions[5]);
}

#[test]
fn ring_positions_are_evenly_spaced_on_the_circle() {
    for &(count, radius) in RING_LAYOUT.iter() {
        let positions = ring_positions(count, radius);
        assert_eq!(positions.len(), count);
        for p in &positions {
            let r = Vec3::new(p.x, 0.0, p.z).length();
            assert!((r - radius * 2.0).abs() < 1e-3);
            assert_eq!(p.y, 1.0);
        }
        let gap = (positions[1] - positions[0]).length();
        let wrap = (positions[0] - positions[count - 1]).length();
        assert!((gap - wrap).abs() < 1e-3);
    }
}

#[test]
fn empty_ring_has_no_spheres() {
    assert!(ring_positions(0, 3.0).is_empty());
}

#[test]
fn default_scene_flattens_140_spheres_in_ring_order() {
    let scene = build_scene(&SceneConfig::default(), 1.5);
    assert_eq!(scene.spheres.len(), 140);
    assert_eq!(scene.rings.len(), 4);

    let expected = [(0..20, 0usize), (20..50, 1), (50..90, 2), (90..140, 3)];
    for (ring, (range, index)) in scene.rings.iter().zip(expected) {
        assert_eq!(ring.spheres, range);
        assert!(scene.spheres[range].iter().all(|s| s.ring == index));
    }
    // creation order: the first sphere of each ring sits on +Z
    assert!(approx(scene.spheres[20].local, Vec3::new(0.0, 1.0, 4.0)));
    assert!(approx(scene.spheres[90].local, Vec3::new(0.0, 1.0, 8.0)));
}

#[test]
fn default_rig_matches_panel_folders() {
    let config = SceneConfig::default();
    let names: Vec<_> = config.point_lights.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        ["first light", "second light", "third light", "fourth light"]
    );
    let first = &config.point_lights[0];
    assert_eq!(first.color, Rgb::new(0x69 as f32 / 255.0, 0.0, 1.0));
    assert_eq!(first.intensity, 4.0);
    assert_eq!(first.position, Vec3::new(-15.0, 29.0, 29.0));

    let materials: Vec<_> = config.rings.iter().map(|r| r.material.name.as_str()).collect();
    assert_eq!(materials, ["Mesh First", "Mesh Second", "Mesh Third", "Mesh Fourth"]);
    for ring in &config.rings {
        assert_eq!(ring.material.metalness, MATERIAL_METALNESS);
        assert_eq!(ring.material.roughness, MATERIAL_ROUGHNESS);
        assert_eq!(ring.material.emissive, Rgb::BLACK);
    }
    assert_eq!(config.rings[3].material.color.to_hex(), "#ff005a");
}

#[test]
fn camera_and_floor_defaults() {
    let scene = build_scene(&SceneConfig::default(), 2.0);
    assert_eq!(scene.camera.eye, Vec3::new(15.0, 15.0, 5.0));
    assert_eq!(scene.camera.target, Vec3::ZERO);
    assert!((scene.camera.fovy_radians - 70f32.to_radians()).abs() < 1e-6);
    assert_eq!(scene.floor.y, -2.0);
    assert_eq!(scene.floor.size, 2000.0);
    assert_eq!(scene.floor.normal_repeat, 400.0);
    assert_eq!(scene.frame_count, 0);
}

#[test]
fn camera_viewport_updates_aspect() {
    let mut scene = build_scene(&SceneConfig::default(), 1.0);
    scene.camera.set_viewport(1920, 1080);
    assert!((scene.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    scene.camera.set_viewport(0, 0);
    assert_eq!(scene.camera.aspect, 1.0);
}

#[test]
fn world_position_applies_ring_rotation() {
    let mut scene = build_scene(&SceneConfig::default(), 1.0);
    scene.rings[0].rotation_y = std::f32::consts::FRAC_PI_2;
    let p = scene.sphere_world_position(0).unwrap();
    // +Z rotated a quarter turn about +Y lands on +X
    assert!(approx(p, Vec3::new(2.0, 1.0, 0.0)), "{p:?}");
    assert!(scene.sphere_world_position(140).is_none());
    assert_eq!(scene.sphere_instances().count(), 140);
}

#[test]
fn spot_shadow_matrix_is_finite_when_looking_straight_down() {
    let spot = SpotLight::default();
    assert_eq!(spot.direction(), Vec3::new(0.0, -1.0, 0.0));
    let m = spot.shadow_view_projection();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    let origin = m.project_point3(Vec3::ZERO);
    assert!(origin.x.abs() < 1e-4 && origin.y.abs() < 1e-4);
}
