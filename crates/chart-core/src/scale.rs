// File: crates/chart-core/src/scale.rs
// Summary: Value range with zero/one floors and the linear value-to-pixel scale of cartesian plots.

use crate::geometry::Rect;
use crate::types::HEADROOM;

/// Value coordinate (e.g., monthly sales).
pub type Value = f64;

/// Span of a series for normalization. `min <= 0` and `max >= 1` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: Value,
    pub max: Value,
}

/// `max` floored at 1 (no division by zero on all-zero data),
/// `min` floored at 0 (no negative baselines for non-negative metrics).
/// NaN entries are ignored.
pub fn get_range(values: &[Value]) -> Range {
    let max = values.iter().copied().fold(1.0, f64::max);
    let min = values.iter().copied().fold(0.0, f64::min);
    Range { min, max }
}

/// Global maximum of a matrix, floored at 1.
pub fn matrix_max(matrix: &[Vec<Value>]) -> Value {
    matrix.iter().flatten().copied().fold(1.0, f64::max)
}

/// Vertical value scale mapping `[0, vmax]` onto `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmax: Value,
}

impl ValueScale {
    /// Scale for a cartesian plot: zero sits on the bottom axis and `vmax`
    /// reaches `HEADROOM` pixels below the top edge.
    pub fn for_plot(rect: &Rect, vmax: Value) -> Self {
        Self { top_px: rect.y + HEADROOM, bottom_px: rect.bottom(), vmax }
    }
    /// Pixel length of a mark of value `v`.
    #[inline]
    pub fn extent(&self, v: Value) -> f32 {
        (v / self.vmax) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.bottom_px - self.extent(v)
    }
}

/// Horizontal distance between consecutive points of a `count`-point polyline
/// spanning `width`. One or zero points get the full width, never a division by zero.
#[inline]
pub fn point_step(width: f32, count: usize) -> f32 {
    width / count.saturating_sub(1).max(1) as f32
}

/// Width of one evenly spaced slot when `count` bands share `width`.
#[inline]
pub fn band_width(width: f32, count: usize) -> f32 {
    width / count.max(1) as f32
}
