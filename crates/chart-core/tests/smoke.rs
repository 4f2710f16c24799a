// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render of every chart type with labels on, written as PNG.

use bizchart_core::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
    AreaOptions, BarOptions, DonutOptions, HeatmapOptions, LineOptions, RadarOptions, Surface,
};

const MONTHS: [&str; 6] = ["Ene", "Feb", "Mar", "Abr", "May", "Jun"];
const SALES: [f64; 6] = [120.0, 95.0, 180.0, 140.0, 60.0, 210.0];

fn assert_png(surface: &mut Surface, name: &str) {
    let out = std::path::PathBuf::from("target/test_out").join(format!("smoke_{name}.png"));
    surface.write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_every_chart_to_png() {
    let mut s = Surface::with_default_size().unwrap();

    draw_bar_chart(&mut s, &MONTHS, &SALES, &BarOptions::default());
    assert_png(&mut s, "bar");

    draw_line_chart(&mut s, &MONTHS, &SALES, &LineOptions::default());
    assert_png(&mut s, "line");

    draw_area_chart(&mut s, &MONTHS, &SALES, &AreaOptions::default());
    assert_png(&mut s, "area");

    let regions = ["Norte", "Sur", "Este", "Oeste"];
    let donut = DonutOptions { center_text: "ventas".into(), ..DonutOptions::default() };
    draw_donut_chart(&mut s, &regions, &[420.0, 310.0, 275.0, 198.0], &donut);
    assert_png(&mut s, "donut");

    let metrics = ["Ventas", "Costes", "Tickets", "Satisfacción"];
    draw_radar_chart(&mut s, &metrics, &[601.0, 340.0, 290.0, 331.0], &RadarOptions::default());
    assert_png(&mut s, "radar");

    let matrix = vec![
        vec![120.0, 80.0, 95.0, 0.0, 60.0, 210.0],
        vec![40.0, 15.0, 180.0, 140.0, 0.0, 30.0],
    ];
    draw_heatmap(&mut s, &["Norte", "Sur"], &MONTHS, &matrix, &HeatmapOptions::default());
    assert_png(&mut s, "heatmap");
}

#[test]
fn surface_reports_its_size() {
    let s = Surface::new(320, 200).unwrap();
    assert_eq!((s.width(), s.height()), (320, 200));
}
