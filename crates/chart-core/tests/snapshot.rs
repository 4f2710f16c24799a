// File: crates/chart-core/tests/snapshot.rs
// Purpose: Encoded output is a pure function of the inputs, one check per chart type.
// Behavior:
// - Renders each chart on two fresh surfaces (labels off) and encodes both to PNG.
// - Decodes the PNGs and compares pixels, then checks the decode against raw readback.

use bizchart_core::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
    AreaOptions, BarOptions, DonutOptions, HeatmapOptions, LineOptions, RadarOptions, Surface,
};

const LABELS: [&str; 5] = ["Ene", "Feb", "Mar", "Abr", "May"];
const VALUES: [f64; 5] = [0.0, 1.0, 0.0, 1.5, 1.0];

fn render<F: Fn(&mut Surface)>(draw: &F) -> (Vec<u8>, Vec<u8>) {
    let mut surface = Surface::new(360, 200).expect("surface").with_text(false); // deterministic
    draw(&mut surface);
    (surface.to_png_bytes().expect("png bytes"), surface.to_rgba8().expect("rgba"))
}

fn assert_stable<F: Fn(&mut Surface)>(name: &str, draw: F) {
    let (png_a, raw_a) = render(&draw);
    let (png_b, _) = render(&draw);
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let a = image::load_from_memory(&png_a).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&png_b).expect("decode b").to_rgba8();
    assert_eq!((a.width(), a.height()), (360, 200), "{name}");
    assert_eq!(a.as_raw(), b.as_raw(), "{name}: pixels differ between renders");
    assert_eq!(a.as_raw(), &raw_a, "{name}: PNG decode differs from readback");
}

#[test]
fn bar_is_stable() {
    assert_stable("bar", |s| draw_bar_chart(s, &LABELS, &VALUES, &BarOptions::default()));
}

#[test]
fn line_is_stable() {
    assert_stable("line", |s| draw_line_chart(s, &LABELS, &VALUES, &LineOptions::default()));
}

#[test]
fn area_is_stable() {
    assert_stable("area", |s| draw_area_chart(s, &LABELS, &VALUES, &AreaOptions::default()));
}

#[test]
fn donut_is_stable() {
    assert_stable("donut", |s| draw_donut_chart(s, &LABELS, &[4.0, 3.0, 2.0, 1.0, 5.0], &DonutOptions::default()));
}

#[test]
fn radar_is_stable() {
    assert_stable("radar", |s| draw_radar_chart(s, &LABELS, &[3.0, 5.0, 2.0, 4.0, 1.0], &RadarOptions::default()));
}

#[test]
fn heatmap_is_stable() {
    let matrix = vec![VALUES.to_vec(), VALUES.iter().rev().copied().collect()];
    assert_stable("heatmap", |s| draw_heatmap(s, &["Norte", "Sur"], &LABELS, &matrix, &HeatmapOptions::default()));
}

#[test]
fn repeated_renders_are_identical() {
    let mut surface = Surface::new(360, 200).unwrap().with_text(false);
    draw_bar_chart(&mut surface, &LABELS, &VALUES, &BarOptions::default());
    let first = surface.to_rgba8().unwrap();
    // paint something else in between; the next call must fully repaint
    draw_donut_chart(&mut surface, &LABELS, &[1.0, 2.0], &DonutOptions::default());
    draw_bar_chart(&mut surface, &LABELS, &VALUES, &BarOptions::default());
    assert_eq!(first, surface.to_rgba8().unwrap());
}
