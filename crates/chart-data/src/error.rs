// File: crates/chart-data/src/error.rs
// Summary: Error type for store I/O, CSV/JSON decoding and label parsing.

use bizchart_core::ChartError;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown {kind} {value:?}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("render: {0}")]
    Chart(#[from] ChartError),
}

pub type Result<T> = std::result::Result<T, DataError>;
