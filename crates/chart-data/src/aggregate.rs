// File: crates/chart-data/src/aggregate.rs
// Summary: Group-by reducers turning filtered records into chart series.
//
// Output shape never depends on the data: 12 months, 4 regions, 4 metrics.
// Missing buckets are zero and an empty input yields all zeros.

use bizchart_core::{MatrixSeries, Series};

use crate::record::{Metric, Month, Record, Region};

/// Raw (unrounded) per-month sums of `metric`, indexed by `Month::index`.
pub fn monthly_sums(records: &[Record], metric: Metric) -> [f64; 12] {
    let mut sums = [0.0; 12];
    for r in records {
        sums[r.month.index()] += r.metric(metric);
    }
    sums
}

/// Sum of `metric` per month, in calendar order, rounded to integers.
pub fn group_by_month(records: &[Record], metric: Metric) -> Series {
    let sums = monthly_sums(records, metric);
    Series::from_pairs(Month::ALL.iter().map(|m| (m.label(), sums[m.index()].round())))
}

/// Sum of `metric` per region, in canonical region order, rounded to integers.
pub fn group_by_region(records: &[Record], metric: Metric) -> Series {
    let mut sums = [0.0; 4];
    for r in records {
        sums[r.region.index()] += r.metric(metric);
    }
    Series::from_pairs(Region::ALL.iter().map(|g| (g.label(), sums[g.index()].round())))
}

/// Four-point profile: for each metric, the mean of its twelve rounded
/// monthly sums, rounded.
pub fn radar_snapshot(records: &[Record]) -> Series {
    Series::from_pairs(Metric::ALL.iter().map(|&m| {
        let monthly = group_by_month(records, m).values;
        let avg = if monthly.is_empty() { 0.0 } else { monthly.iter().sum::<f64>() / monthly.len() as f64 };
        (m.label(), avg.round())
    }))
}

/// Sales summed per (region, month): rows are regions, columns are months.
pub fn region_month_matrix(records: &[Record]) -> MatrixSeries {
    let mut heat = MatrixSeries::zeros(Region::labels(), Month::labels());
    for r in records {
        heat.matrix[r.region.index()][r.month.index()] += r.ventas;
    }
    heat
}
