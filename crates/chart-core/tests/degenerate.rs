// File: crates/chart-core/tests/degenerate.rs
// Purpose: Empty, single-point, all-zero and malformed inputs render without panicking.

use std::f64::consts::TAU;

use bizchart_core::charts::{cell_alpha, cell_text_is_light, line_points, slice_sweeps};
use bizchart_core::types::Insets;
use bizchart_core::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
    AreaOptions, BarOptions, DonutOptions, HeatmapOptions, LineOptions, RadarOptions, Surface,
};

const NO_LABELS: [&str; 0] = [];

fn render_all(labels: &[&str], values: &[f64]) {
    let mut s = Surface::new(240, 160).unwrap();
    draw_bar_chart(&mut s, labels, values, &BarOptions::default());
    draw_line_chart(&mut s, labels, values, &LineOptions::default());
    draw_area_chart(&mut s, labels, values, &AreaOptions::default());
    draw_donut_chart(&mut s, labels, values, &DonutOptions::default());
    draw_radar_chart(&mut s, labels, values, &RadarOptions::default());
    let matrix = vec![values.to_vec()];
    draw_heatmap(&mut s, &["row"], labels, &matrix, &HeatmapOptions::default());
}

#[test]
fn empty_series() {
    render_all(&NO_LABELS, &[]);
}

#[test]
fn single_value_series() {
    render_all(&["Ene"], &[42.0]);
}

#[test]
fn all_zero_series() {
    render_all(&["a", "b", "c"], &[0.0, 0.0, 0.0]);
}

#[test]
fn mismatched_lengths() {
    render_all(&["a", "b", "c"], &[1.0]);
    render_all(&["a"], &[1.0, 2.0, 3.0]);
}

#[test]
fn non_finite_and_negative_values() {
    render_all(&["a", "b", "c"], &[f64::NAN, -5.0, f64::INFINITY]);
}

#[test]
fn tiny_surface() {
    let mut s = Surface::new(8, 8).unwrap();
    draw_bar_chart(&mut s, &["a", "b"], &[1.0, 2.0], &BarOptions::default());
    draw_heatmap(&mut s, &["a"], &["b"], &[vec![1.0]], &HeatmapOptions::default());
}

#[test]
fn empty_heatmap_matrix() {
    let mut s = Surface::new(240, 160).unwrap();
    draw_heatmap(&mut s, &NO_LABELS, &NO_LABELS, &[], &HeatmapOptions::default());
    draw_heatmap(&mut s, &["a", "b"], &["x"], &[], &HeatmapOptions::default());
}

#[test]
fn zero_radar_levels() {
    let mut s = Surface::new(240, 160).unwrap();
    let opts = RadarOptions { levels: 0, ..RadarOptions::default() };
    draw_radar_chart(&mut s, &["a", "b", "c"], &[1.0, 2.0, 3.0], &opts);
}

#[test]
fn donut_sweeps_cover_the_full_circle() {
    let sweeps = slice_sweeps(&[3.0, 1.0, 4.0, 1.0, 5.0]);
    let total: f64 = sweeps.iter().map(|&(_, s)| s).sum();
    assert!((total - TAU).abs() < 1e-9);

    // contiguous, starting at 12 o'clock
    assert!((sweeps[0].0 + TAU / 4.0).abs() < 1e-12);
    for pair in sweeps.windows(2) {
        assert!((pair[0].0 + pair[0].1 - pair[1].0).abs() < 1e-12);
    }
}

#[test]
fn donut_zero_sum_gives_empty_slices() {
    let sweeps = slice_sweeps(&[0.0, 0.0]);
    assert_eq!(sweeps.len(), 2);
    assert!(sweeps.iter().all(|&(_, s)| s == 0.0));
    assert!(slice_sweeps(&[]).is_empty());
}

#[test]
fn single_line_point_uses_full_width_step() {
    let plot = Insets::default().plot_rect(200, 100);
    let pts = line_points(&plot, &[7.0]);
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].0, plot.x);
    assert!(pts[0].1.is_finite());

    let pts = line_points(&plot, &[1.0, 2.0, 3.0]);
    assert_eq!(pts[0].0, plot.x);
    assert!((pts[2].0 - plot.right()).abs() < 1e-4);
}

#[test]
fn heatmap_intensity_mapping() {
    assert!((cell_alpha(0.0) - 0.08).abs() < 1e-6);
    assert!((cell_alpha(1.0) - 0.90).abs() < 1e-6);
    assert!((cell_alpha(0.5) - 0.49).abs() < 1e-6);
    assert!(!cell_text_is_light(0.55));
    assert!(cell_text_is_light(0.56));
}
