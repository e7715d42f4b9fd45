//! The read-only results holder filled at the end of a run.
//!
//! Values are copied out of the engine so the result can never change
//! after the fact, whatever happens to the engine next.

use crate::{
    engine::SimEngine,
    risk::RiskTier,
    types::{Money, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub final_asset: Money,
    /// Total contributed over the whole run, independent of returns.
    pub principal: Money,
    pub monthly_contribution: Money,
    pub risk_tier: RiskTier,
    pub total_years: Year,
    /// Year-end history copy; index 0 is the starting 0.
    pub yearly_assets: Vec<Money>,
}

impl RunResult {
    /// Value-copy the engine's outcome.
    pub fn capture(engine: &SimEngine) -> Self {
        let monthly = engine.monthly_contribution();
        Self {
            final_asset: engine.current_asset(),
            principal: monthly
                * Money::from(engine.months_per_year())
                * Money::from(engine.total_years()),
            monthly_contribution: monthly,
            risk_tier: engine.risk_tier(),
            total_years: engine.total_years(),
            yearly_assets: engine.yearly_assets().to_vec(),
        }
    }

    /// Gain (or loss) against the contributed principal.
    pub fn gain(&self) -> Money {
        self.final_asset - self.principal
    }
}
