use thiserror::Error;

/// Failures while writing a walk trace.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("trace row: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
