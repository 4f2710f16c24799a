// File: crates/chart-core/src/charts/heatmap.rs
// Summary: Heatmap: rows x cols cells shaded by value against the global maximum.

use super::{label_at, CATEGORY_LABEL};
use crate::draw::{clear, fill_paint, text};
use crate::geometry::{clamp, Rect};
use crate::options::HeatmapOptions;
use crate::scale::{band_width, matrix_max};
use crate::surface::Surface;
use crate::text::{format_value, Align, LabelStyle};
use crate::theme::{self, with_alpha};
use crate::types::HEATMAP_INSETS;

const ALPHA_FLOOR: f64 = 0.08;
const ALPHA_SPAN: f64 = 0.82;
/// Normalized intensity above which cell text switches to the light color.
const LIGHT_TEXT_ABOVE: f64 = 0.55;
const CELL_GAP: f32 = 2.0;

/// Fill opacity of a cell at normalized intensity `t`.
pub fn cell_alpha(t: f64) -> f32 {
    clamp(ALPHA_FLOOR + t * ALPHA_SPAN, 0.0, 1.0) as f32
}

pub fn cell_text_is_light(t: f64) -> bool {
    t > LIGHT_TEXT_ABOVE
}

/// Grid of `rows x cols` cells shaded by value relative to the global maximum,
/// each showing its value; row labels in the left gutter, column labels below.
pub fn draw_heatmap<R: AsRef<str>, C: AsRef<str>>(
    surface: &mut Surface,
    rows: &[R],
    cols: &[C],
    matrix: &[Vec<f64>],
    opts: &HeatmapOptions,
) {
    let p = surface.painter();
    clear(&p, opts.background);

    let grid = HEATMAP_INSETS.plot_rect(p.width() as i32, p.height() as i32);
    let cw = band_width(grid.w, cols.len());
    let ch = band_width(grid.h, rows.len());
    let max = matrix_max(matrix);

    for (r, line) in matrix.iter().enumerate() {
        for (c, &value) in line.iter().enumerate() {
            let t = value / max;
            let (x, y) = (grid.x + c as f32 * cw, grid.y + r as f32 * ch);
            let cell = Rect::new(x, y, (cw - CELL_GAP).max(0.0), (ch - CELL_GAP).max(0.0)).to_skia();
            p.canvas.draw_rect(cell, &fill_paint(with_alpha(opts.base, cell_alpha(t))));

            let ink = if cell_text_is_light(t) { theme::CELL_TEXT_LIGHT } else { theme::CELL_TEXT_DARK };
            let style = LabelStyle::new(ink, Align::Center, 10.0, 600);
            text(&p, &format_value(value), x + cw / 2.0, y + ch / 2.0 + 4.0, &style);
        }
    }

    let row_label = LabelStyle { align: Align::Right, ..CATEGORY_LABEL };
    for i in 0..rows.len() {
        text(&p, label_at(rows, i), grid.x - 8.0, grid.y + i as f32 * ch + ch / 2.0 + 3.0, &row_label);
    }
    for i in 0..cols.len() {
        text(&p, label_at(cols, i), grid.x + i as f32 * cw + cw / 2.0, grid.bottom() + 16.0, &CATEGORY_LABEL);
    }
}
