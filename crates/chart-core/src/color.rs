// File: crates/chart-core/src/color.rs
// Summary: CSS-style color strings (#rgb, #rrggbb, #rrggbbaa, rgb(), rgba()) to Skia colors.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Parse a CSS-like color string.
///
/// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` with `a` in `[0, 1]`. Surrounding whitespace is ignored.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let t = s.trim();
    let parsed = if let Some(hex) = t.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(body) = strip_fn(t, "rgba") {
        parse_components(body, true)
    } else if let Some(body) = strip_fn(t, "rgb") {
        parse_components(body, false)
    } else {
        None
    };
    parsed.ok_or_else(|| ChartError::InvalidColor(s.to_string()))
}

/// Inverse of the `#rrggbb` form; alpha is appended only when not opaque.
pub fn to_hex(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r(), c.g(), c.b(), c.a())
    }
}

fn strip_fn<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.get(..name.len())?.eq_ignore_ascii_case(name).then(|| &s[name.len()..])?;
    rest.trim_start().strip_prefix('(')?.strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
            Some(skia::Color::from_rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_components(body: &str, with_alpha: bool) -> Option<skia::Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |s: &str| s.parse::<u8>().ok();
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = if with_alpha {
        let a = parts[3].parse::<f32>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Some(skia::Color::from_argb(a, r, g, b))
}
