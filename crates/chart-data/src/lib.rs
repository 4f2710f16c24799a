// File: crates/chart-data/src/lib.rs
// Summary: Record store, filters and aggregations feeding the bizchart renderers.

pub mod aggregate;
pub mod context;
pub mod csv_io;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod record;
pub mod seed;
pub mod store;
pub mod summary;

pub use aggregate::{group_by_month, group_by_region, monthly_sums, radar_snapshot, region_month_matrix};
pub use context::{ChartData, DashboardContext};
pub use dashboard::{Dashboard, DashboardOptions};
pub use error::{DataError, Result};
pub use filter::{FilterChoices, Filters};
pub use record::{Metric, Month, NewRecord, Record, Region};
pub use seed::seed_records;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use summary::Summary;
