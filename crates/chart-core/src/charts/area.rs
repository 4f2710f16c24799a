// File: crates/chart-core/src/charts/area.rs
// Summary: Area chart: line chart with a vertical-gradient fill down to the axis.

use skia_safe as skia;
use skia::gradient_shader::GradientShaderColors;

use super::line::{line_points, polyline, LINE_WIDTH};
use super::{cartesian_frame, CATEGORY_LABEL, LABEL_DROP};
use crate::draw::{fill_paint, stroke_paint, text};
use crate::options::AreaOptions;
use crate::scale::point_step;
use crate::surface::Surface;

/// Line chart whose underside is filled down to the axis with a vertical gradient.
/// Labels are laid out on the same step as the points, independently of the values.
pub fn draw_area_chart<L: AsRef<str>>(surface: &mut Surface, labels: &[L], values: &[f64], opts: &AreaOptions) {
    let p = surface.painter();
    let plot = cartesian_frame(&p, opts.background);
    let points = line_points(&plot, values);

    if let Some(mut region) = polyline(&points) {
        region.line_to((plot.right(), plot.bottom()));
        region.line_to((plot.x, plot.bottom()));
        region.close();

        let mut fill = fill_paint(opts.fill_top);
        let shader = skia::Shader::linear_gradient(
            ((0.0, plot.y), (0.0, plot.bottom())),
            GradientShaderColors::Colors(&[opts.fill_top, opts.fill_bottom]),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        fill.set_shader(shader);
        p.canvas.draw_path(&region.snapshot(), &fill);
    }

    if let Some(path) = polyline(&points) {
        p.canvas.draw_path(&path.snapshot(), &stroke_paint(opts.stroke, LINE_WIDTH));
    }

    let step = point_step(plot.w, values.len());
    for (i, label) in labels.iter().enumerate() {
        text(&p, label.as_ref(), plot.x + i as f32 * step, plot.bottom() + LABEL_DROP, &CATEGORY_LABEL);
    }
}
