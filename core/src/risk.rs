//! Risk tiers and the tier-change schedule.

use crate::error::SimError;
use crate::types::Year;
use serde::{Deserialize, Serialize};

/// Years at which the player may switch risk tier.
/// The run starts at year 0; the other two slots open after the
/// fifth and tenth completed year.
pub const RISK_CHANGE_YEARS: [Year; 3] = [0, 5, 10];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Monthly return band in percent, bounds inclusive.
    /// Asymmetric on purpose: the long-run expectation is positive.
    pub fn monthly_band(&self) -> (f64, f64) {
        match self {
            Self::Low => (-1.0, 2.0),
            Self::Medium => (-3.0, 4.0),
            Self::High => (-6.0, 8.0),
        }
    }

    /// Fixed annual rate behind the settings-screen estimate.
    /// Display only; the engine never credits with this.
    pub fn preview_annual_rate(&self) -> f64 {
        match self {
            Self::Low => 0.02,
            Self::Medium => 0.04,
            Self::High => 0.06,
        }
    }

    /// Tier from a selector index (0 low, 1 medium, 2 high).
    /// Anything else falls back to Medium.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "0" => Ok(Self::Low),
            "medium" | "1" => Ok(Self::Medium),
            "high" | "2" => Ok(Self::High),
            other => Err(SimError::InvalidConfig {
                reason: format!("unknown risk tier '{other}'"),
            }),
        }
    }
}

/// Whether the tier may change while the run stands at `year`.
pub fn risk_change_allowed(year: Year) -> bool {
    RISK_CHANGE_YEARS.contains(&year)
}
