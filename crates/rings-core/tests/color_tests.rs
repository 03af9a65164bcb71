// Hex colour parsing and assignment.

use rings_core::*;

#[test]
fn hex_parses_to_normalized_rgb() {
    let c = hex_to_rgb("#6900ff").unwrap();
    assert_eq!(c, Rgb::new(0x69 as f32 / 255.0, 0.0, 1.0));
    assert_eq!(hex_to_rgb("6900FF"), Some(c));
    assert_eq!(Rgb::from_hex("#ABCDEF").unwrap().to_hex(), "#abcdef");
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["notacolor", "#12345", "#1234567", "#gg0000", "", "#", "##00ff00", "#00ff0é"] {
        assert_eq!(hex_to_rgb(bad), None, "{bad:?}");
    }
}

#[test]
fn assign_hex_leaves_target_on_bad_input() {
    let mut target = Rgb::new(0.2, 0.4, 0.6);
    assert!(!assign_hex(&mut target, "notacolor"));
    assert_eq!(target, Rgb::new(0.2, 0.4, 0.6));
    assert!(assign_hex(&mut target, "#000000"));
    assert_eq!(target, Rgb::BLACK);
}
