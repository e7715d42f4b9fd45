//! Run configuration and the player-facing settings value.
//!
//! `GameSettings` is what the settings screen edits: it clamps and
//! snaps raw input so the engine never sees out-of-range values.
//! `SimConfig` is the frozen copy one run is built from. Settings are
//! explicit values handed to the engine; there is no global holder.

use crate::{
    error::{SimError, SimResult},
    risk::RiskTier,
    types::{Money, Year},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_AMOUNT: u32 = 10_000;
pub const DEFAULT_TOTAL_YEARS: Year = 15;
pub const DEFAULT_RISK_TIER: RiskTier = RiskTier::Medium;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Slider policy for the monthly amount.
pub const MIN_MONTHLY_AMOUNT: u32 = 1_000;
pub const MAX_MONTHLY_AMOUNT: u32 = 100_000;
pub const MONTHLY_AMOUNT_STEP: u32 = 1_000;

/// How each month's percent return is produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReturnModel {
    /// Uniform draw inside the risk tier's monthly band.
    MonthlyUniform,
    /// The same percent every month. Deterministic runs and tests.
    FixedMonthly { percent: f64 },
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub monthly_contribution: Money,
    pub risk_tier: RiskTier,
    pub total_years: Year,
    pub months_per_year: u32,
    pub return_model: ReturnModel,
}

impl Default for SimConfig {
    fn default() -> Self {
        GameSettings::default().to_config()
    }
}

/// The settings the player edits before a run starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    monthly_amount: u32,
    risk_tier: RiskTier,
    total_years: Year,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            monthly_amount: DEFAULT_MONTHLY_AMOUNT,
            risk_tier: DEFAULT_RISK_TIER,
            total_years: DEFAULT_TOTAL_YEARS,
        }
    }
}

/// On-disk settings file. Optional fields fall back to the defaults.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    monthly_amount: i64,
    #[serde(default)]
    risk_tier: Option<RiskTier>,
    #[serde(default)]
    total_years: Option<i64>,
}

impl GameSettings {
    pub fn monthly_amount(&self) -> u32 {
        self.monthly_amount
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    pub fn total_years(&self) -> Year {
        self.total_years
    }

    /// Set the monthly amount. Negative input clamps to zero.
    pub fn set_monthly_amount(&mut self, amount: i64) {
        self.monthly_amount = amount.clamp(0, i64::from(u32::MAX)) as u32;
    }

    pub fn set_risk_tier(&mut self, tier: RiskTier) {
        self.risk_tier = tier;
    }

    /// Selector-index variant, for toggle/dropdown style callers.
    pub fn set_risk_tier_by_index(&mut self, index: u8) {
        self.risk_tier = RiskTier::from_index(index);
    }

    /// Set the run length. A run needs at least one year.
    pub fn set_total_years(&mut self, years: Year) {
        self.total_years = years.max(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read settings from a JSON file.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {path}: {e}"))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let file: SettingsFile = serde_json::from_str(json)?;

        if let Some(years) = file.total_years {
            if years <= 0 {
                return Err(SimError::InvalidConfig {
                    reason: format!("total_years must be positive, got {years}"),
                });
            }
        }

        let mut settings = Self::default();
        settings.set_monthly_amount(file.monthly_amount);
        settings.risk_tier = file.risk_tier.unwrap_or(DEFAULT_RISK_TIER);
        if let Some(years) = file.total_years {
            settings.total_years = years as Year;
        }
        Ok(settings)
    }

    /// Freeze these settings into the configuration for one run.
    pub fn to_config(&self) -> SimConfig {
        SimConfig {
            monthly_contribution: Money::from(self.monthly_amount),
            risk_tier: self.risk_tier,
            total_years: self.total_years,
            months_per_year: MONTHS_PER_YEAR,
            return_model: ReturnModel::MonthlyUniform,
        }
    }
}

/// Snap a raw slider value to the step grid, then clamp to the range.
pub fn snap_monthly_amount(raw: f64) -> u32 {
    let step = f64::from(MONTHLY_AMOUNT_STEP);
    let snapped = (raw / step).round() * step;
    snapped.clamp(
        f64::from(MIN_MONTHLY_AMOUNT),
        f64::from(MAX_MONTHLY_AMOUNT),
    ) as u32
}

/// Settings-screen estimate of this year's end asset: the year's
/// contributions added up front, then one fixed annual rate applied.
/// A what-if display figure only; the engine never credits with it.
pub fn preview_year_end(start_asset: Money, settings: &GameSettings) -> Money {
    let yearly_contribution =
        Money::from(settings.monthly_amount()) * Money::from(MONTHS_PER_YEAR);
    (start_asset + yearly_contribution) * (1.0 + settings.risk_tier().preview_annual_rate())
}
