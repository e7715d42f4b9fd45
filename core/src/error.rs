use crate::types::Year;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Advancing past the final year. Non-fatal; the run is over and the
    /// caller should stop offering the advance action.
    #[error("simulation already complete at year {year}")]
    AlreadyComplete { year: Year },

    /// Risk tier changes are only accepted at the scheduled change years.
    #[error("risk tier is locked at year {year}")]
    RiskChangeLocked { year: Year },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
