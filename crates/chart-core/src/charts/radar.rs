// File: crates/chart-core/src/charts/radar.rs
// Summary: Radar chart: level rings, one spoke per label, translucent value polygon.

use skia_safe as skia;

use super::CATEGORY_LABEL;
use crate::draw::{clear, fill_paint, stroke_paint, text};
use crate::geometry::{polar, spoke_angle};
use crate::options::RadarOptions;
use crate::scale::get_range;
use crate::surface::Surface;
use crate::theme;

const RADIUS_RATIO: f32 = 0.34;
/// Distance of the spoke labels beyond the outer ring.
const LABEL_GAP: f32 = 16.0;

/// Closed polygon through `radii[i]` along spoke `i` of `n`.
fn spoke_polygon(cx: f32, cy: f32, n: usize, radii: impl Iterator<Item = f32>) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    for (i, rr) in radii.enumerate() {
        let pt = polar(cx, cy, rr, spoke_angle(i, n));
        if i == 0 { path.move_to(pt); } else { path.line_to(pt); }
    }
    path.close();
    path.snapshot()
}

/// One spoke per label, `levels` grid rings, and the values joined into a
/// translucent polygon scaled against the series maximum.
pub fn draw_radar_chart<L: AsRef<str>>(surface: &mut Surface, labels: &[L], values: &[f64], opts: &RadarOptions) {
    let p = surface.painter();
    clear(&p, opts.background);

    let n = labels.len();
    if n == 0 {
        return;
    }
    let (cx, cy) = (p.width() / 2.0, p.height() / 2.0 + 6.0);
    let radius = p.width().min(p.height()) * RADIUS_RATIO;
    let max = get_range(values).max;

    let ring = stroke_paint(theme::RING, 1.0);
    for level in 1..=opts.levels {
        let rr = radius / opts.levels as f32 * level as f32;
        p.canvas.draw_path(&spoke_polygon(cx, cy, n, std::iter::repeat(rr).take(n)), &ring);
    }

    let spoke = stroke_paint(theme::GRID, 1.0);
    for (i, label) in labels.iter().enumerate() {
        let angle = spoke_angle(i, n);
        p.canvas.draw_line((cx, cy), polar(cx, cy, radius, angle), &spoke);
        let (lx, ly) = polar(cx, cy, radius + LABEL_GAP, angle);
        text(&p, label.as_ref(), lx, ly, &CATEGORY_LABEL);
    }

    if values.is_empty() {
        return;
    }
    let shape = spoke_polygon(cx, cy, n, values.iter().map(|&v| (v / max) as f32 * radius));
    p.canvas.draw_path(&shape, &fill_paint(opts.fill));
    p.canvas.draw_path(&shape, &stroke_paint(opts.stroke, 2.0));
}
