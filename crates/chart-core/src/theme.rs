// File: crates/chart-core/src/theme.rs
// Summary: The fixed slate palette every chart draws with.

use skia_safe as skia;

pub const WHITE: skia::Color = skia::Color::from_rgb(0xff, 0xff, 0xff);

/// Axis "L" (#d9dde2).
pub const AXIS: skia::Color = skia::Color::from_rgb(0xd9, 0xdd, 0xe2);
/// Horizontal gridlines and radar spokes (#eef0f3).
pub const GRID: skia::Color = skia::Color::from_rgb(0xee, 0xf0, 0xf3);
/// Radar level rings (#eceff3).
pub const RING: skia::Color = skia::Color::from_rgb(0xec, 0xef, 0xf3);

/// Body text and default strokes (#374151).
pub const INK: skia::Color = skia::Color::from_rgb(0x37, 0x41, 0x51);
/// Category labels under axes (#6b7280).
pub const MUTED: skia::Color = skia::Color::from_rgb(0x6b, 0x72, 0x80);
/// Emphasis: line markers, donut total (#111827).
pub const STRONG: skia::Color = skia::Color::from_rgb(0x11, 0x18, 0x27);
/// Default bar fill (#4b5563).
pub const BAR: skia::Color = skia::Color::from_rgb(0x4b, 0x55, 0x63);

/// Heatmap value text on dark and light cells.
pub const CELL_TEXT_LIGHT: skia::Color = skia::Color::from_rgb(0xf9, 0xfa, 0xfb);
pub const CELL_TEXT_DARK: skia::Color = skia::Color::from_rgb(0x1f, 0x29, 0x37);

/// Donut slice colors, cycled by index.
pub const DONUT_PALETTE: [skia::Color; 5] = [
    skia::Color::from_rgb(0x37, 0x41, 0x51),
    skia::Color::from_rgb(0x6b, 0x72, 0x80),
    skia::Color::from_rgb(0x9c, 0xa3, 0xaf),
    skia::Color::from_rgb(0xd1, 0xd5, 0xdb),
    skia::Color::from_rgb(0x4b, 0x55, 0x63),
];

/// `color` with its alpha channel replaced by `alpha` in `[0, 1]`.
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}
