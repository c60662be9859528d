use thiserror::Error;
use tw_core::TwError;
use tw_motion::MotionError;
use tw_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("session configuration error: {0}")]
    Config(#[from] TwError),

    #[error("grid error: {0}")]
    Grid(#[from] SpatialError),

    #[error("movement error: {0}")]
    Motion(#[from] MotionError),

    #[error("agent still walking after {ticks} ticks")]
    Timeout { ticks: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
