// File: crates/demo/src/config.rs
// Summary: Optional TOML configuration for output size, default filters and chart colors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bizchart_core::{parse_color, Color};
use bizchart_data::{DashboardOptions, Filters, Metric};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub filters: FilterConfig,
    pub colors: ColorConfig,
    pub radar: RadarConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub width: i32,
    pub height: i32,
    /// Draw labels and values; off gives font-independent pixels.
    pub text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("target/out"),
            width: bizchart_core::types::WIDTH,
            height: bizchart_core::types::HEIGHT,
            text: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(flatten)]
    pub filters: Filters,
    pub metric: Metric,
}

/// Color overrides as CSS-like strings; unset keys keep the built-in style.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Background of every chart.
    pub background: Option<String>,
    pub bar: Option<String>,
    pub line: Option<String>,
    pub point: Option<String>,
    pub area_stroke: Option<String>,
    pub area_top: Option<String>,
    pub area_bottom: Option<String>,
    pub donut: Option<Vec<String>>,
    pub radar_fill: Option<String>,
    pub radar_stroke: Option<String>,
    pub heatmap: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub levels: usize,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self { levels: 5 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    /// Built-in options with every configured override applied.
    pub fn dashboard_options(&self) -> Result<DashboardOptions> {
        let mut opts = DashboardOptions::default();
        let c = &self.colors;

        if let Some(bg) = color(&c.background, "background")? {
            opts.bar.background = bg;
            opts.line.background = bg;
            opts.area.background = bg;
            opts.donut.background = bg;
            opts.radar.background = bg;
            opts.heatmap.background = bg;
        }
        set(&mut opts.bar.color, &c.bar, "bar")?;
        set(&mut opts.line.color, &c.line, "line")?;
        set(&mut opts.line.point_color, &c.point, "point")?;
        set(&mut opts.area.stroke, &c.area_stroke, "area_stroke")?;
        set(&mut opts.area.fill_top, &c.area_top, "area_top")?;
        set(&mut opts.area.fill_bottom, &c.area_bottom, "area_bottom")?;
        set(&mut opts.radar.fill, &c.radar_fill, "radar_fill")?;
        set(&mut opts.radar.stroke, &c.radar_stroke, "radar_stroke")?;
        set(&mut opts.heatmap.base, &c.heatmap, "heatmap")?;
        if let Some(palette) = &c.donut {
            opts.donut.colors = palette
                .iter()
                .map(|s| parse_color(s).with_context(|| "colors.donut"))
                .collect::<Result<Vec<_>>>()?;
        }
        opts.radar.levels = self.radar.levels;
        Ok(opts)
    }
}

fn color(value: &Option<String>, key: &str) -> Result<Option<Color>> {
    value
        .as_deref()
        .map(|s| parse_color(s).with_context(|| format!("colors.{key}")))
        .transpose()
}

fn set(slot: &mut Color, value: &Option<String>, key: &str) -> Result<()> {
    if let Some(c) = color(value, key)? {
        *slot = c;
    }
    Ok(())
}
