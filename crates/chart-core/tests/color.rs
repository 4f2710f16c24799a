// File: crates/chart-core/tests/color.rs
// Purpose: CSS-like color strings accepted by the option layer.

use bizchart_core::color::to_hex;
use bizchart_core::{parse_color, ChartError, Color};

#[test]
fn hex_forms() {
    assert_eq!(parse_color("#4b5563").unwrap(), Color::from_rgb(0x4b, 0x55, 0x63));
    assert_eq!(parse_color(" #FFF ").unwrap(), Color::from_rgb(255, 255, 255));
    assert_eq!(parse_color("#37415180").unwrap(), Color::from_argb(0x80, 0x37, 0x41, 0x51));
}

#[test]
fn functional_forms() {
    assert_eq!(parse_color("rgb(55, 65, 81)").unwrap(), Color::from_rgb(55, 65, 81));
    let c = parse_color("rgba(55,65,81,0.35)").unwrap();
    assert_eq!((c.a(), c.r(), c.g(), c.b()), (89, 55, 65, 81));
}

#[test]
fn rejects_garbage() {
    for bad in ["", "#12", "#gggggg", "rgb(1,2)", "rgba(1,2,3,2)", "rgb(300,0,0)", "teal"] {
        assert!(matches!(parse_color(bad), Err(ChartError::InvalidColor(_))), "{bad:?} should fail");
    }
}

#[test]
fn hex_output() {
    assert_eq!(to_hex(Color::from_rgb(0x37, 0x41, 0x51)), "#374151");
    assert_eq!(to_hex(Color::from_argb(0x0a, 1, 2, 3)), "#0102030a");
}
