// File: crates/chart-data/src/context.rs
// Summary: Dashboard state passed explicitly: loaded records, active filters, selected metric.

use bizchart_core::{MatrixSeries, Series};

use crate::aggregate::{group_by_month, group_by_region, radar_snapshot, region_month_matrix};
use crate::error::Result;
use crate::filter::{FilterChoices, Filters};
use crate::record::{Metric, Record};
use crate::store::RecordStore;
use crate::summary::Summary;

#[derive(Clone, Debug, Default)]
pub struct DashboardContext {
    /// Every loaded record, oldest first.
    pub records: Vec<Record>,
    pub filters: Filters,
    /// Metric shown by the bar, line and donut charts.
    pub metric: Metric,
}

/// Inputs for the six charts of one refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    /// Selected metric per month (bar, line).
    pub monthly: Series,
    /// Sales per month (area).
    pub monthly_ventas: Series,
    /// Selected metric per region (donut).
    pub by_region: Series,
    pub radar: Series,
    pub heatmap: MatrixSeries,
    /// Donut caption: the selected metric's key.
    pub center_text: String,
}

impl DashboardContext {
    pub fn new(filters: Filters, metric: Metric) -> Self {
        Self { records: Vec::new(), filters, metric }
    }

    /// Reload from `store`, then drop filter selections the new data no longer offers.
    pub fn refresh(&mut self, store: &dyn RecordStore) -> Result<()> {
        let records = store.list()?;
        self.set_records(records);
        log::info!("loaded {} records ({} after filters)", self.records.len(), self.filtered().len());
        Ok(())
    }

    pub fn set_records(&mut self, mut records: Vec<Record>) {
        // stable: same-instant records keep store order
        records.sort_by_key(|r| r.created_at);
        self.records = records;
        let choices = self.choices();
        self.filters.reconcile(&choices);
    }

    pub fn choices(&self) -> FilterChoices {
        FilterChoices::from_records(&self.records)
    }

    pub fn filtered(&self) -> Vec<Record> {
        self.filters.apply(&self.records)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.filtered())
    }

    /// Filter once, then run every aggregation over the same record set.
    pub fn chart_data(&self) -> ChartData {
        let rows = self.filtered();
        ChartData {
            monthly: group_by_month(&rows, self.metric),
            monthly_ventas: group_by_month(&rows, Metric::Ventas),
            by_region: group_by_region(&rows, self.metric),
            radar: radar_snapshot(&rows),
            heatmap: region_month_matrix(&rows),
            center_text: self.metric.key().to_string(),
        }
    }
}
