// File: crates/chart-core/src/draw.rs
// Summary: Canvas primitives shared by every chart: clear, axes, gridlines, text.

use skia_safe as skia;

use crate::geometry::Rect;
use crate::grid::band_lines;
use crate::surface::Painter;
use crate::text::LabelStyle;

/// Default gridline count for cartesian plots.
pub const GRID_STEPS: usize = 5;

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Overwrite every pixel with `bg`.
pub fn clear(p: &Painter<'_>, bg: skia::Color) {
    p.canvas.clear(bg);
}

/// Left and bottom borders of `rect` as one "L" stroke.
pub fn draw_axes(p: &Painter<'_>, rect: &Rect, color: skia::Color) {
    let mut path = skia::PathBuilder::new();
    path.move_to((rect.x, rect.y));
    path.line_to((rect.x, rect.bottom()));
    path.line_to((rect.right(), rect.bottom()));
    p.canvas.draw_path(&path.snapshot(), &stroke_paint(color, 1.0));
}

/// `steps` horizontal lines across `rect`, the last one on its bottom edge.
pub fn draw_grid(p: &Painter<'_>, rect: &Rect, steps: usize, color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    for y in band_lines(rect.y as f64, rect.h as f64, steps) {
        let y = y as f32;
        p.canvas.draw_line((rect.x, y), (rect.right(), y), &paint);
    }
}

/// Draw `s` with its baseline at `y`, anchored at `x` per `style.align`.
/// No-op when the surface has text disabled or `s` is empty.
pub fn text(p: &Painter<'_>, s: &str, x: f32, y: f32, style: &LabelStyle) {
    if p.draw_text && !s.is_empty() {
        p.shaper.draw(p.canvas, s, x, y, style);
    }
}
