// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; canvas primitives, scales and the six business chart renderers.

pub mod charts;
pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use charts::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
};
pub use color::parse_color;
pub use error::{ChartError, Result};
pub use options::{AreaOptions, BarOptions, DonutOptions, HeatmapOptions, LineOptions, RadarOptions};
pub use scale::{get_range, Range};
pub use series::{MatrixSeries, Series};
pub use surface::{Painter, Surface};
pub use text::{Align, LabelStyle, TextShaper};

/// Re-export so callers can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
