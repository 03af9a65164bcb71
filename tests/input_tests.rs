// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn only_primary_button_starts_a_drag() {
    let mut drag = DragTracker::default();
    assert!(!drag.press(2, 10.0, 10.0));
    assert!(!drag.is_dragging());
    assert_eq!(drag.moved(20.0, 20.0), None);

    assert!(drag.press(0, 10.0, 10.0));
    assert!(drag.is_dragging());
}

#[test]
fn drag_reports_deltas_between_events() {
    let mut drag = DragTracker::default();
    drag.press(0, 100.0, 50.0);
    assert_eq!(drag.moved(110.0, 45.0), Some((10.0, -5.0)));
    assert_eq!(drag.moved(110.0, 45.0), Some((0.0, 0.0)));
    assert_eq!(drag.moved(90.0, 60.0), Some((-20.0, 15.0)));
}

#[test]
fn release_ends_drag_once() {
    let mut drag = DragTracker::default();
    drag.press(0, 0.0, 0.0);
    assert!(drag.release());
    assert!(!drag.release());
    assert_eq!(drag.moved(5.0, 5.0), None);
}

#[test]
fn wheel_notch_is_a_sign() {
    assert_eq!(wheel_notch(120.0), 1.0);
    assert_eq!(wheel_notch(0.5), 1.0);
    assert_eq!(wheel_notch(-3.0), -1.0);
    assert_eq!(wheel_notch(0.0), 0.0);
}

#[test]
fn backing_size_scales_by_dpr() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(333.0, 100.0, 1.5), (499, 150));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(640.0, 0.0, 1.0), (640, 1));
}
