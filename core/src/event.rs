//! Run events and the in-memory event log.
//!
//! Every state change the engine makes is recorded as a SimEvent.
//! Log entries carry the JSON payload so two runs can be compared
//! byte for byte in the determinism tests and by tooling.

use crate::{
    risk::RiskTier,
    types::{Money, RunId, Year},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during a run.
/// Variants are appended over time, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    RunStarted {
        run_id: RunId,
        seed: u64,
        monthly_contribution: Money,
        risk_tier: RiskTier,
        total_years: Year,
    },
    YearCompleted {
        year: Year,
        start_asset: Money,
        end_asset: Money,
        change_percent: f64,
    },
    SimulationFinished {
        year: Year,
        final_asset: Money,
    },
    RiskTierChanged {
        year: Year,
        previous: RiskTier,
        selected: RiskTier,
    },
}

impl SimEvent {
    /// Stable string name for the event_type column of the log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "run_started",
            Self::YearCompleted { .. } => "year_completed",
            Self::SimulationFinished { .. } => "simulation_finished",
            Self::RiskTierChanged { .. } => "risk_tier_changed",
        }
    }
}

/// One recorded event with its serialized payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub run_id: RunId,
    pub year: Year,
    pub event_type: String,
    pub payload: String,
}
