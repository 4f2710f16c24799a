// File: crates/chart-core/src/options.rs
// Summary: One explicit option struct per chart type, each field with its default.

use skia_safe as skia;

use crate::theme::{self, with_alpha};

#[derive(Clone, Debug)]
pub struct BarOptions {
    pub color: skia::Color,
    pub background: skia::Color,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { color: theme::BAR, background: theme::WHITE }
    }
}

#[derive(Clone, Debug)]
pub struct LineOptions {
    /// Polyline stroke.
    pub color: skia::Color,
    /// Marker fill.
    pub point_color: skia::Color,
    pub background: skia::Color,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { color: theme::INK, point_color: theme::STRONG, background: theme::WHITE }
    }
}

#[derive(Clone, Debug)]
pub struct AreaOptions {
    pub stroke: skia::Color,
    /// Gradient stop at the top of the plot.
    pub fill_top: skia::Color,
    /// Gradient stop on the bottom axis.
    pub fill_bottom: skia::Color,
    pub background: skia::Color,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            stroke: theme::INK,
            fill_top: with_alpha(theme::INK, 0.35),
            fill_bottom: with_alpha(theme::INK, 0.04),
            background: theme::WHITE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DonutOptions {
    /// Slice colors, cycled by slice index. An empty palette falls back to the default one.
    pub colors: Vec<skia::Color>,
    /// Caption above the total in the hole.
    pub center_text: String,
    /// Also fills the hole.
    pub background: skia::Color,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self {
            colors: theme::DONUT_PALETTE.to_vec(),
            center_text: "Total".to_string(),
            background: theme::WHITE,
        }
    }
}

impl DonutOptions {
    pub fn slice_color(&self, i: usize) -> skia::Color {
        if self.colors.is_empty() {
            theme::DONUT_PALETTE[i % theme::DONUT_PALETTE.len()]
        } else {
            self.colors[i % self.colors.len()]
        }
    }
}

#[derive(Clone, Debug)]
pub struct RadarOptions {
    /// Number of concentric grid rings.
    pub levels: usize,
    pub fill: skia::Color,
    pub stroke: skia::Color,
    pub background: skia::Color,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            levels: 5,
            fill: with_alpha(theme::INK, 0.20),
            stroke: theme::INK,
            background: theme::WHITE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeatmapOptions {
    /// Cell color; its alpha is replaced by the cell intensity.
    pub base: skia::Color,
    pub background: skia::Color,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self { base: theme::INK, background: theme::WHITE }
    }
}
