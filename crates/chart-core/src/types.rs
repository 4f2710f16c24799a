// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, plot layouts).

use crate::geometry::Rect;

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;

/// Vertical headroom kept between the tallest mark and the top of the plot.
pub const HEADROOM: f32 = 8.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot rectangle left over inside a `width` x `height` surface.
    /// Width and height may go negative on tiny surfaces; callers draw nothing visible then.
    pub fn plot_rect(&self, width: i32, height: i32) -> Rect {
        Rect::new(
            self.left as f32,
            self.top as f32,
            (width - self.hsum() as i32) as f32,
            (height - self.vsum() as i32) as f32,
        )
    }
}

impl Default for Insets {
    /// Cartesian charts (bar/line/area): 38px sides, 18px top, 34px under the axis for labels.
    fn default() -> Self {
        Self::new(38, 38, 18, 34)
    }
}

/// Heatmap layout: wide left gutter for row labels, room below for column labels.
pub const HEATMAP_INSETS: Insets = Insets::new(70, 18, 24, 38);
