//! Configuration errors.
//!
//! `tw-motion` and `tw-sim` wrap `TwError` in their own enums with `#[from]`.

use thiserror::Error;

/// A config file that cannot be read, parsed or accepted.
#[derive(Debug, Error)]
pub enum TwError {
    #[error("invalid navigation config: {0}")]
    Config(String),

    #[error("malformed config file: {0}")]
    Parse(String),

    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
}

pub type TwResult<T> = Result<T, TwError>;
