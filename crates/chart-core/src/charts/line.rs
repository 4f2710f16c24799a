// File: crates/chart-core/src/charts/line.rs
// Summary: Line chart: value polyline with round markers over the cartesian frame.

use skia_safe as skia;

use super::{cartesian_frame, label_at, CATEGORY_LABEL, LABEL_DROP};
use crate::draw::{fill_paint, stroke_paint, text};
use crate::geometry::Rect;
use crate::options::LineOptions;
use crate::scale::{get_range, point_step, ValueScale};
use crate::surface::Surface;

const MARKER_RADIUS: f32 = 3.5;
pub(crate) const LINE_WIDTH: f32 = 2.0;

/// Pixel positions of a value polyline inside `plot`: evenly spaced from the
/// left axis to the right edge, a single value sitting on the left axis.
pub fn line_points(plot: &Rect, values: &[f64]) -> Vec<(f32, f32)> {
    let scale = ValueScale::for_plot(plot, get_range(values).max);
    let step = point_step(plot.w, values.len());
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (plot.x + i as f32 * step, scale.to_px(v)))
        .collect()
}

/// Open polyline through `points`; `None` when there is nothing to connect.
pub(crate) fn polyline(points: &[(f32, f32)]) -> Option<skia::PathBuilder> {
    let (&first, rest) = points.split_first()?;
    let mut path = skia::PathBuilder::new();
    path.move_to(first);
    for &pt in rest {
        path.line_to(pt);
    }
    Some(path)
}

/// Connected polyline with a round marker on every point; labels under the axis.
pub fn draw_line_chart<L: AsRef<str>>(surface: &mut Surface, labels: &[L], values: &[f64], opts: &LineOptions) {
    let p = surface.painter();
    let plot = cartesian_frame(&p, opts.background);
    let points = line_points(&plot, values);

    if let Some(path) = polyline(&points) {
        p.canvas.draw_path(&path.snapshot(), &stroke_paint(opts.color, LINE_WIDTH));
    }

    let marker = fill_paint(opts.point_color);
    for (i, &(px, py)) in points.iter().enumerate() {
        p.canvas.draw_circle((px, py), MARKER_RADIUS, &marker);
        text(&p, label_at(labels, i), px, plot.bottom() + LABEL_DROP, &CATEGORY_LABEL);
    }
}
