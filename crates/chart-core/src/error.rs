// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible edges of the core (surfaces, encoding, color strings).

/// Errors raised outside the renderers themselves; drawing never fails.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading pixels back from the surface failed")]
    ReadPixels,

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
