// File: crates/chart-data/src/dashboard.rs
// Summary: Renders one refresh of chart data onto six surfaces and writes them as PNGs.

use std::path::{Path, PathBuf};

use bizchart_core::{
    draw_area_chart, draw_bar_chart, draw_donut_chart, draw_heatmap, draw_line_chart, draw_radar_chart,
    AreaOptions, BarOptions, DonutOptions, HeatmapOptions, LineOptions, RadarOptions, Surface,
};

use crate::context::ChartData;
use crate::error::Result;

/// Per-chart options for a whole dashboard. The donut caption is taken from
/// the chart data, not from `donut.center_text`.
#[derive(Clone, Debug, Default)]
pub struct DashboardOptions {
    pub bar: BarOptions,
    pub line: LineOptions,
    pub area: AreaOptions,
    pub donut: DonutOptions,
    pub radar: RadarOptions,
    pub heatmap: HeatmapOptions,
}

pub struct Dashboard {
    pub bar: Surface,
    pub line: Surface,
    pub area: Surface,
    pub donut: Surface,
    pub radar: Surface,
    pub heatmap: Surface,
}

impl Dashboard {
    /// Six surfaces of the same size.
    pub fn new(width: i32, height: i32, draw_text: bool) -> Result<Self> {
        let make = || Surface::new(width, height).map(|s| s.with_text(draw_text));
        Ok(Self {
            bar: make()?,
            line: make()?,
            area: make()?,
            donut: make()?,
            radar: make()?,
            heatmap: make()?,
        })
    }

    /// Repaint every chart from `data` in one pass.
    pub fn render(&mut self, data: &ChartData, opts: &DashboardOptions) {
        draw_bar_chart(&mut self.bar, &data.monthly.labels, &data.monthly.values, &opts.bar);
        draw_line_chart(&mut self.line, &data.monthly.labels, &data.monthly.values, &opts.line);
        draw_area_chart(&mut self.area, &data.monthly_ventas.labels, &data.monthly_ventas.values, &opts.area);
        let donut = DonutOptions { center_text: data.center_text.clone(), ..opts.donut.clone() };
        draw_donut_chart(&mut self.donut, &data.by_region.labels, &data.by_region.values, &donut);
        draw_radar_chart(&mut self.radar, &data.radar.labels, &data.radar.values, &opts.radar);
        draw_heatmap(&mut self.heatmap, &data.heatmap.rows, &data.heatmap.cols, &data.heatmap.matrix, &opts.heatmap);
    }

    pub fn surfaces_mut(&mut self) -> [(&'static str, &mut Surface); 6] {
        [
            ("bar", &mut self.bar),
            ("line", &mut self.line),
            ("area", &mut self.area),
            ("donut", &mut self.donut),
            ("radar", &mut self.radar),
            ("heatmap", &mut self.heatmap),
        ]
    }

    /// Write `<name>.png` for every chart into `dir`; returns the written paths.
    pub fn write_pngs(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(6);
        for (name, surface) in self.surfaces_mut() {
            let path = dir.join(format!("{name}.png"));
            surface.write_png(&path)?;
            written.push(path);
        }
        Ok(written)
    }
}
