// File: crates/chart-core/src/charts/bar.rs
// Summary: Bar chart: one bar per value in equal slots, labels below, values above.

use super::{cartesian_frame, label_at, CATEGORY_LABEL, LABEL_DROP};
use crate::draw::{fill_paint, text};
use crate::geometry::Rect;
use crate::scale::{band_width, get_range, ValueScale};
use crate::surface::Surface;
use crate::text::{format_value, Align, LabelStyle};
use crate::options::BarOptions;
use crate::theme;

/// Share of each slot covered by its bar.
const BAR_FILL: f32 = 0.58;
const VALUE_LABEL: LabelStyle = LabelStyle::new(theme::INK, Align::Center, 10.0, 600);

/// Vertical bars growing up from the bottom axis, one per value, each
/// centered in an equal slot with its label below and its value above.
pub fn draw_bar_chart<L: AsRef<str>>(surface: &mut Surface, labels: &[L], values: &[f64], opts: &BarOptions) {
    let p = surface.painter();
    let plot = cartesian_frame(&p, opts.background);

    let range = get_range(values);
    let scale = ValueScale::for_plot(&plot, range.max);
    let gap = band_width(plot.w, values.len());
    let bar_w = gap * BAR_FILL;
    log::trace!("bar chart: {} values, max {}, slot {:.1}px", values.len(), range.max, gap);

    let paint = fill_paint(opts.color);
    for (i, &v) in values.iter().enumerate() {
        let bar_h = scale.extent(v);
        let bx = plot.x + i as f32 * gap + (gap - bar_w) / 2.0;
        let by = plot.bottom() - bar_h;
        p.canvas.draw_rect(Rect::new(bx, by, bar_w, bar_h).to_skia(), &paint);

        let cx = bx + bar_w / 2.0;
        text(&p, label_at(labels, i), cx, plot.bottom() + LABEL_DROP, &CATEGORY_LABEL);
        text(&p, &format_value(v), cx, by - 6.0, &VALUE_LABEL);
    }
}
