//! Spatial-subsystem error type.
//!
//! Searches never fail with an error (an impossible request is `None`); only
//! loading a grid from an external source can.

use thiserror::Error;

/// Errors produced by `tw-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid parse error at row {row}: {msg}")]
    Parse { row: usize, msg: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
