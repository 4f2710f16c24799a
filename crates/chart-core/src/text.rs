// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment, size and weight.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::theme;

/// Horizontal anchoring of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a label is painted: color, anchoring, pixel size and font weight (400 normal, 600/700 bold).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub color: skia::Color,
    pub align: Align,
    pub size: f32,
    pub weight: u16,
}

impl LabelStyle {
    pub const fn new(color: skia::Color, align: Align, size: f32, weight: u16) -> Self {
        Self { color, align, size, weight }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(theme::INK, Align::Left, 11.0, 400)
    }
}

/// Display form of a numeric value: rounded to an integer, non-finite values spelled out.
pub fn format_value(v: f64) -> String {
    if v.is_finite() {
        (v.round() as i64).to_string()
    } else {
        v.to_string()
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &LabelStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_style(skia::FontStyle::new(
            Weight::from(style.weight as i32),
            Width::NORMAL,
            Slant::Upright,
        ));
        ts.set_font_families(&["Inter", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its alphabetic baseline at `y`, anchored at `x` per `style.align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let p = self.layout(text, style);
        let w = p.longest_line();
        let left = match style.align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        // Paragraph paints from its top-left corner
        p.paint(canvas, (left, y - p.alphabetic_baseline()));
    }
}
