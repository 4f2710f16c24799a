// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Y positions of `steps` horizontal gridlines splitting `[top, top + height]`
/// into equal bands. The top edge is skipped, the bottom edge is included.
pub fn band_lines(top: f64, height: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return Vec::new(); }
    linspace(top, top + height, steps + 1).into_iter().skip(1).collect()
}
