use thiserror::Error;
use tw_core::TwError;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no tile on the grid can hold the agent")]
    NoStandingTile,

    #[error("invalid configuration: {0}")]
    Config(#[from] TwError),
}

pub type MotionResult<T> = Result<T, MotionError>;
