// Parameter panel: clamping, typed errors, subscriptions and scene binding.

use rings_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn bound_panel() -> (ParamPanel, Rc<RefCell<SceneState>>, Vec<Subscription>) {
    let scene = Rc::new(RefCell::new(build_scene(&SceneConfig::default(), 1.0)));
    let mut panel = ParamPanel::new();
    let subs = bind_scene(&mut panel, &scene).unwrap();
    (panel, scene, subs)
}

#[test]
fn panel_starts_closed_and_toggles() {
    let mut panel = ParamPanel::new();
    assert!(panel.is_closed());
    assert!(!panel.toggle());
    assert!(panel.toggle());
}

#[test]
fn bind_scene_builds_one_folder_per_light_and_material() {
    let (panel, _scene, subs) = bound_panel();
    let names: Vec<_> = panel.folders().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "first light",
            "second light",
            "third light",
            "fourth light",
            "Mesh First",
            "Mesh Second",
            "Mesh Third",
            "Mesh Fourth"
        ]
    );
    assert_eq!(subs.len(), 4 * 5 + 4 * 4);
    let light_params: Vec<_> = panel.folders()[0]
        .params
        .iter()
        .map(|&id| panel.param(id).unwrap().name.clone())
        .collect();
    assert_eq!(light_params, ["intensity", "color", "x", "y", "z"]);
    let id = panel.find("Mesh Third", "roughness").unwrap();
    assert_eq!(panel.value(id).unwrap(), &ParamValue::Number(MATERIAL_ROUGHNESS));
    let id = panel.find("third light", "color").unwrap();
    assert_eq!(panel.value(id).unwrap().as_color(), Some("#5a00ff"));
}

#[test]
fn intensity_edits_reach_the_light_clamped() {
    let (mut panel, scene, _subs) = bound_panel();
    let id = panel.find("first light", "intensity").unwrap();

    let stored = panel.set(id, ParamValue::Number(7.5)).unwrap();
    assert_eq!(stored, ParamValue::Number(7.5));
    assert_eq!(scene.borrow().point_lights[0].intensity, 7.5);

    panel.set(id, ParamValue::Number(42.0)).unwrap();
    assert_eq!(scene.borrow().point_lights[0].intensity, 10.0);

    panel.set(id, ParamValue::Number(f32::NAN)).unwrap();
    assert_eq!(scene.borrow().point_lights[0].intensity, 1.0);
}

#[test]
fn position_edits_move_one_axis() {
    let (mut panel, scene, _subs) = bound_panel();
    let x = panel.find("second light", "x").unwrap();
    let z = panel.find("second light", "z").unwrap();
    panel.set(x, ParamValue::Number(50.0)).unwrap();
    panel.set(z, ParamValue::Number(-500.0)).unwrap();
    let pos = scene.borrow().point_lights[1].position;
    assert_eq!(pos, glam::Vec3::new(50.0, 22.0, -100.0));
}

#[test]
fn colour_edits_parse_hex_and_reject_garbage() {
    let (mut panel, scene, _subs) = bound_panel();
    let id = panel.find("Mesh Second", "color").unwrap();
    panel.set(id, ParamValue::Color("#FF0000".into())).unwrap();
    assert_eq!(scene.borrow().rings[1].material.color, Rgb::new(1.0, 0.0, 0.0));

    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let _sub = panel.on_change(id, move |_| seen.set(seen.get() + 1)).unwrap();
    assert_eq!(
        panel.set(id, ParamValue::Color("notacolor".into())),
        Err(PanelError::InvalidColor {
            name: "color".into(),
            value: "notacolor".into(),
        })
    );
    // Stored value, listeners and scene are all untouched
    assert_eq!(panel.value(id).unwrap(), &ParamValue::Color("#FF0000".into()));
    assert_eq!(calls.get(), 0);
    assert_eq!(scene.borrow().rings[1].material.color, Rgb::new(1.0, 0.0, 0.0));

    let emissive = panel.find("Mesh Second", "emissive").unwrap();
    panel.set(emissive, ParamValue::Color("00ff00".into())).unwrap();
    assert_eq!(scene.borrow().rings[1].material.emissive, Rgb::new(0.0, 1.0, 0.0));
}

#[test]
fn material_scalars_clamp_to_unit_range() {
    let (mut panel, scene, _subs) = bound_panel();
    let metal = panel.find("Mesh Fourth", "metalness").unwrap();
    let rough = panel.find("Mesh Fourth", "roughness").unwrap();
    panel.set(metal, ParamValue::Number(1.7)).unwrap();
    panel.set(rough, ParamValue::Number(-0.2)).unwrap();
    let s = scene.borrow();
    assert_eq!(s.rings[3].material.metalness, 1.0);
    assert_eq!(s.rings[3].material.roughness, 0.0);
}

#[test]
fn wrong_kind_is_a_typed_error() {
    let (mut panel, scene, _subs) = bound_panel();
    let colour = panel.find("first light", "color").unwrap();
    let err = panel.set(colour, ParamValue::Number(1.0)).unwrap_err();
    assert_eq!(
        err,
        PanelError::KindMismatch {
            name: "color".into(),
            expected: "colour"
        }
    );
    let intensity = panel.find("first light", "intensity").unwrap();
    assert!(matches!(
        panel.set(intensity, ParamValue::Color("#ffffff".into())),
        Err(PanelError::KindMismatch { .. })
    ));
    assert_eq!(scene.borrow().point_lights[0].intensity, 4.0);
}

#[test]
fn unknown_param_is_rejected() {
    let mut other = ParamPanel::new();
    let f = other.add_folder("other");
    other.add_number(f, "a", 0.0, (0.0, 1.0)).unwrap();
    other.add_number(f, "b", 0.0, (0.0, 1.0)).unwrap();
    let foreign = other.add_number(f, "c", 0.0, (0.0, 1.0)).unwrap();

    let mut panel = ParamPanel::new();
    let f = panel.add_folder("only");
    panel.add_color(f, "tint", "#000000").unwrap();
    assert_eq!(
        panel.set(foreign, ParamValue::Number(0.5)),
        Err(PanelError::UnknownParam(2))
    );
    assert!(panel.on_change(foreign, |_| {}).is_err());
}

#[test]
fn initial_values_are_clamped() {
    let mut panel = ParamPanel::new();
    let f = panel.add_folder("f");
    let id = panel.add_number(f, "n", 25.0, (1.0, 10.0)).unwrap();
    assert_eq!(panel.value(id).unwrap().as_number(), Some(10.0));
}

#[test]
fn unsubscribed_listener_stops_hearing_changes() {
    let mut panel = ParamPanel::new();
    let f = panel.add_folder("f");
    let id = panel.add_number(f, "n", 0.5, (0.0, 1.0)).unwrap();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let sub = panel.on_change(id, move |_| h.set(h.get() + 1)).unwrap();
    panel.set(id, ParamValue::Number(0.1)).unwrap();
    assert!(sub.is_active());
    sub.unsubscribe();
    panel.set(id, ParamValue::Number(0.2)).unwrap();
    assert_eq!(hits.get(), 1);
    assert_eq!(panel.value(id).unwrap().as_number(), Some(0.2));
}

#[test]
fn listeners_run_in_registration_order_and_can_self_detach() {
    let listeners: Listeners<u32> = Listeners::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let l1 = log.clone();
    let _a = listeners.subscribe(move |v| l1.borrow_mut().push(("a", *v)));
    let l2 = log.clone();
    let b = listeners.subscribe(move |v| l2.borrow_mut().push(("b", *v)));
    assert_eq!(listeners.len(), 2);
    assert_eq!(listeners.emit(&1), 2);
    b.unsubscribe();
    assert_eq!(listeners.emit(&2), 1);
    assert_eq!(*log.borrow(), [("a", 1), ("b", 1), ("a", 2)]);
    assert!(!listeners.is_empty());
}
