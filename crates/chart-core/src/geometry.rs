// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Float rectangle in surface pixels, origin at top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f32 { self.x + self.w }
    pub fn bottom(&self) -> f32 { self.y + self.h }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_xywh(self.x, self.y, self.w, self.h)
    }
}

/// Point on a circle of `radius` around `(cx, cy)` at `angle` radians (0 = 3 o'clock, clockwise on screen).
#[inline]
pub fn polar(cx: f32, cy: f32, radius: f32, angle: f64) -> (f32, f32) {
    (cx + angle.cos() as f32 * radius, cy + angle.sin() as f32 * radius)
}

/// Angle of spoke `i` out of `n`, starting at 12 o'clock and going clockwise.
#[inline]
pub fn spoke_angle(i: usize, n: usize) -> f64 {
    -FRAC_PI_2 + TAU * i as f64 / n.max(1) as f64
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
