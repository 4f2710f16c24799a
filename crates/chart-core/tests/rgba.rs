// File: crates/chart-core/tests/rgba.rs
// Purpose: Check rendered pixels at known layout positions (labels off for font independence).

use bizchart_core::theme::{self, INK, MUTED};
use bizchart_core::{draw, LabelStyle};
use bizchart_core::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
    AreaOptions, BarOptions, Color, DonutOptions, HeatmapOptions, LineOptions, RadarOptions, Surface,
};

fn surface(w: i32, h: i32) -> Surface {
    Surface::new(w, h).expect("surface").with_text(false)
}

fn rgb(c: Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), 255]
}

fn assert_near(got: [u8; 4], want: [u8; 4], tol: u8) {
    for (g, w) in got.iter().zip(want.iter()) {
        assert!(g.abs_diff(*w) <= tol, "pixel {got:?} not within {tol} of {want:?}");
    }
}

#[test]
fn render_rgba8_buffer() {
    let mut s = surface(200, 100);
    draw_bar_chart(&mut s, &["A"], &[10.0], &BarOptions::default());
    let px = s.to_rgba8().expect("rgba render");
    assert_eq!(200 * 100 * 4, px.len());
    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn clear_uses_configured_background() {
    let mut s = surface(200, 100);
    let bg = Color::from_rgb(10, 20, 30);
    draw_bar_chart(&mut s, &["A"], &[10.0], &BarOptions { background: bg, ..BarOptions::default() });
    assert_eq!(s.pixel(2, 2).unwrap(), [10, 20, 30, 255]);
}

#[test]
fn bar_fills_its_slot_up_from_the_axis() {
    // plot x=38 y=18 w=124 h=48; bar 72px wide centered, 40px tall from y=26 to y=66
    let mut s = surface(200, 100);
    draw_bar_chart(&mut s, &["A"], &[10.0], &BarOptions::default());
    assert_eq!(s.pixel(100, 50).unwrap(), rgb(theme::BAR));
    assert_eq!(s.pixel(100, 22).unwrap(), [255, 255, 255, 255], "above the bar");
    assert_eq!(s.pixel(50, 50).unwrap(), [255, 255, 255, 255], "left of the bar");
}

#[test]
fn zero_bar_leaves_plot_empty() {
    let mut s = surface(200, 100);
    draw_bar_chart(&mut s, &["A", "B"], &[0.0, 10.0], &BarOptions::default());
    // first slot center is x=69; row 60 sits between gridlines
    assert_eq!(s.pixel(69, 60).unwrap(), [255, 255, 255, 255]);
    assert_eq!(s.pixel(131, 60).unwrap(), rgb(theme::BAR));
}

#[test]
fn single_point_line_sits_on_the_left_axis() {
    let mut s = surface(200, 100);
    let opts = LineOptions::default();
    draw_line_chart(&mut s, &["Ene"], &[5.0], &opts);
    // value == max, so the point is HEADROOM below the plot top: (38, 26)
    assert_near(s.pixel(38, 26).unwrap(), rgb(opts.point_color), 2);
}

#[test]
fn area_gradient_darkens_toward_the_top() {
    let mut s = surface(200, 100);
    draw_area_chart(&mut s, &["a", "b"], &[10.0, 10.0], &AreaOptions::default());
    let above = s.pixel(100, 22).unwrap();
    let upper = s.pixel(100, 30).unwrap();
    let lower = s.pixel(100, 60).unwrap();
    assert_eq!(above, [255, 255, 255, 255], "outside the filled region");
    assert!(upper[0] < lower[0], "top stop is more opaque: {upper:?} vs {lower:?}");
    assert!(lower[0] < 255);
}

#[test]
fn donut_single_slice_is_a_full_ring() {
    let mut s = surface(200, 200);
    draw_donut_chart(&mut s, &["A"], &[5.0], &DonutOptions::default());
    // r = 66, hole = 36.96
    assert_eq!(s.pixel(100, 45).unwrap(), rgb(INK), "ring");
    assert_eq!(s.pixel(100, 155).unwrap(), rgb(INK), "ring, opposite side");
    assert_eq!(s.pixel(100, 100).unwrap(), [255, 255, 255, 255], "hole");
    assert_eq!(s.pixel(16, 16).unwrap(), rgb(INK), "legend swatch");
}

#[test]
fn donut_dominant_slice_keeps_its_ring() {
    let mut s = surface(200, 200);
    // share of the first slice rounds to a 360 degree sweep in f32
    draw_donut_chart(&mut s, &["A", "B"], &[1e8, 1.0], &DonutOptions::default());
    assert_eq!(s.pixel(50, 100).unwrap(), rgb(INK), "left side of the ring");
    assert_eq!(s.pixel(150, 100).unwrap(), rgb(INK), "right side of the ring");
    assert_eq!(s.pixel(100, 155).unwrap(), rgb(INK), "bottom of the ring");
}

#[test]
fn donut_slices_run_clockwise_from_twelve() {
    let mut s = surface(200, 200);
    draw_donut_chart(&mut s, &["A", "B"], &[1.0, 1.0], &DonutOptions::default());
    assert_eq!(s.pixel(150, 100).unwrap(), rgb(INK), "first half on the right");
    assert_eq!(s.pixel(50, 100).unwrap(), rgb(MUTED), "second half on the left");
}

#[test]
fn donut_palette_cycles() {
    let red = Color::from_rgb(200, 0, 0);
    let mut s = surface(200, 200);
    let opts = DonutOptions { colors: vec![red], ..DonutOptions::default() };
    draw_donut_chart(&mut s, &["A", "B"], &[1.0, 1.0], &opts);
    assert_eq!(s.pixel(150, 100).unwrap(), rgb(red));
    assert_eq!(s.pixel(50, 100).unwrap(), rgb(red));
}

#[test]
fn radar_polygon_is_translucent() {
    let mut s = surface(200, 200);
    let labels = ["a", "b", "c", "d"];
    draw_radar_chart(&mut s, &labels, &[10.0, 10.0, 10.0, 10.0], &RadarOptions::default());
    // center (100, 106), radius 68: a diamond; (110, 116) lies inside, off spokes and rings
    let inside = s.pixel(110, 116).unwrap();
    assert_near(inside, [215, 218, 222, 255], 4);
    assert_eq!(s.pixel(5, 5).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn heatmap_shades_by_value() {
    let mut s = surface(200, 100);
    draw_heatmap(&mut s, &["a"], &["x", "y"], &[vec![0.0, 10.0]], &HeatmapOptions::default());
    // grid x=70 y=24 w=112 h=38; cells 56x38 drawn 54x36
    let faint = s.pixel(97, 42).unwrap();
    let dark = s.pixel(153, 42).unwrap();
    assert!(faint[0] > 230, "floor alpha only: {faint:?}");
    assert!(dark[0] < 90, "near full alpha: {dark:?}");
    assert_eq!(s.pixel(125, 42).unwrap(), [255, 255, 255, 255], "gap between cells");
}

#[test]
fn text_primitive_is_silent_when_text_is_off() {
    let mut s = surface(120, 60);
    {
        let p = s.painter();
        draw::clear(&p, theme::WHITE);
        draw::text(&p, "Ventas 1234", 10.0, 30.0, &LabelStyle::default());
    }
    let px = s.to_rgba8().unwrap();
    assert!(px.chunks(4).all(|c| c == [255, 255, 255, 255]));
}

#[test]
fn chart_labels_follow_the_text_switch() {
    let mut labeled = surface(200, 100);
    draw_bar_chart(&mut labeled, &["Ene", "Feb"], &[3.0, 5.0], &BarOptions::default());
    let mut bare = surface(200, 100);
    draw_bar_chart(&mut bare, &["", ""], &[3.0, 5.0], &BarOptions::default());
    assert_eq!(labeled.to_rgba8().unwrap(), bare.to_rgba8().unwrap());
}
