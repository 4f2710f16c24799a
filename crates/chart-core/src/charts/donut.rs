// File: crates/chart-core/src/charts/donut.rs
// Summary: Donut chart: proportional ring slices, caption and total in the hole, swatch legend.

use std::f64::consts::{FRAC_PI_2, TAU};

use skia_safe as skia;

use crate::draw::{clear, fill_paint, text};
use crate::options::DonutOptions;
use crate::surface::Surface;
use crate::text::{format_value, Align, LabelStyle};
use crate::theme;

const OUTER_RATIO: f32 = 0.33;
const INNER_RATIO: f32 = 0.56;
const CAPTION: LabelStyle = LabelStyle::new(theme::MUTED, Align::Center, 11.0, 600);
const TOTAL: LabelStyle = LabelStyle::new(theme::STRONG, Align::Center, 15.0, 700);
const LEGEND: LabelStyle = LabelStyle::new(theme::INK, Align::Left, 10.0, 400);

/// `(start, sweep)` in radians for each value, starting at 12 o'clock and
/// running clockwise in input order. Sweeps are shares of the sum; a zero sum
/// divides by 1 instead, leaving every slice empty.
pub fn slice_sweeps(values: &[f64]) -> Vec<(f64, f64)> {
    let sum: f64 = values.iter().sum();
    let divisor = if sum == 0.0 || sum.is_nan() { 1.0 } else { sum };
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|&v| {
            let sweep = v / divisor * TAU;
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Ring of proportional slices around a caption and the total, with a
/// swatch legend down the left edge.
pub fn draw_donut_chart<L: AsRef<str>>(surface: &mut Surface, labels: &[L], values: &[f64], opts: &DonutOptions) {
    let p = surface.painter();
    clear(&p, opts.background);

    let (cx, cy) = (p.width() / 2.0, p.height() / 2.0);
    let r = p.width().min(p.height()) * OUTER_RATIO;
    let oval = skia::Rect::from_xywh(cx - r, cy - r, r * 2.0, r * 2.0);

    for (i, (start, sweep)) in slice_sweeps(values).into_iter().enumerate() {
        if !(sweep > 0.0) {
            continue;
        }
        let paint = fill_paint(opts.slice_color(i));
        // full-circle test in the f32 degrees arc_to receives
        let sweep_deg = sweep.to_degrees() as f32;
        if sweep_deg >= 360.0 {
            p.canvas.draw_circle((cx, cy), r, &paint);
            continue;
        }
        let mut wedge = skia::PathBuilder::new();
        wedge.move_to((cx, cy));
        wedge.arc_to(oval, start.to_degrees() as f32, sweep_deg, false);
        wedge.close();
        p.canvas.draw_path(&wedge.snapshot(), &paint);
    }

    p.canvas.draw_circle((cx, cy), r * INNER_RATIO, &fill_paint(opts.background));

    let total: f64 = values.iter().sum();
    text(&p, &opts.center_text, cx, cy - 4.0, &CAPTION);
    text(&p, &format_value(total), cx, cy + 14.0, &TOTAL);

    for (i, label) in labels.iter().enumerate() {
        let y = 20.0 + i as f32 * 16.0;
        p.canvas.draw_rect(skia::Rect::from_xywh(12.0, y - 8.0, 10.0, 10.0), &fill_paint(opts.slice_color(i)));
        let entry = match values.get(i) {
            Some(&v) => format!("{} ({})", label.as_ref(), format_value(v)),
            None => label.as_ref().to_string(),
        };
        text(&p, &entry, 28.0, y, &LEGEND);
    }
}
