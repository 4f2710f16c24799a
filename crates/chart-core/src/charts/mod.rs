// File: crates/chart-core/src/charts/mod.rs
// Summary: The six renderers and the cartesian frame shared by bar, line and area.
//
// Every renderer clears the surface first and is a pure function of its
// arguments: no state survives between calls and call order does not matter.

mod area;
mod bar;
mod donut;
mod heatmap;
mod line;
mod radar;

pub use area::draw_area_chart;
pub use bar::draw_bar_chart;
pub use donut::{draw_donut_chart, slice_sweeps};
pub use heatmap::{cell_alpha, cell_text_is_light, draw_heatmap};
pub use line::{draw_line_chart, line_points};
pub use radar::draw_radar_chart;

use skia_safe as skia;

use crate::draw::{clear, draw_axes, draw_grid, GRID_STEPS};
use crate::geometry::Rect;
use crate::surface::Painter;
use crate::text::{Align, LabelStyle};
use crate::theme;
use crate::types::Insets;

/// Category labels under the x axis, radar spokes and heatmap gutters.
const CATEGORY_LABEL: LabelStyle = LabelStyle::new(theme::MUTED, Align::Center, 10.0, 400);
/// Baseline offset of category labels below the bottom axis.
const LABEL_DROP: f32 = 16.0;

/// Clear to `background`, then draw gridlines and the axis "L" on the default
/// plot rectangle, which is returned.
fn cartesian_frame(p: &Painter<'_>, background: skia::Color) -> Rect {
    clear(p, background);
    let plot = Insets::default().plot_rect(p.width() as i32, p.height() as i32);
    draw_grid(p, &plot, GRID_STEPS, theme::GRID);
    draw_axes(p, &plot, theme::AXIS);
    plot
}

fn label_at<L: AsRef<str>>(labels: &[L], i: usize) -> &str {
    labels.get(i).map_or("", AsRef::as_ref)
}
