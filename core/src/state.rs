//! Per-run simulation state.
//!
//! RULE: the engine owns the state. Everything here is read-only to
//! the outside; mutation happens only through the engine's advance
//! operation (and the reset at run start).

use crate::types::{Money, Year};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    current_year: Year,
    current_asset: Money,
    year_start_asset: Money,
    year_end_asset: Money,
    year_change_percent: f64,
    /// Year-end asset per completed year; index 0 is the starting 0.
    /// Invariant: len == current_year + 1. Append-only.
    yearly_assets: Vec<Money>,
}

impl SimState {
    pub(crate) fn fresh() -> Self {
        Self {
            current_year: 0,
            current_asset: 0.0,
            year_start_asset: 0.0,
            year_end_asset: 0.0,
            year_change_percent: 0.0,
            yearly_assets: vec![0.0],
        }
    }

    /// Fold one completed year into the state. The single place the
    /// year counter, the asset and the history move together.
    pub(crate) fn complete_year(
        &mut self,
        start_asset: Money,
        end_asset: Money,
        change_percent: f64,
    ) {
        self.year_start_asset = start_asset;
        self.year_end_asset = end_asset;
        self.year_change_percent = change_percent;
        self.current_asset = end_asset;
        self.current_year += 1;
        self.yearly_assets.push(end_asset);
    }

    /// Years computed so far, 0..=total_years.
    pub fn current_year(&self) -> Year {
        self.current_year
    }

    /// Latest year-end asset value.
    pub fn current_asset(&self) -> Money {
        self.current_asset
    }

    /// Asset at the start of the most recently completed year.
    pub fn year_start_asset(&self) -> Money {
        self.year_start_asset
    }

    /// Asset at the end of the most recently completed year.
    pub fn year_end_asset(&self) -> Money {
        self.year_end_asset
    }

    /// Percent change over the most recently completed year.
    /// 0 when the year started from an empty balance.
    pub fn year_change_percent(&self) -> f64 {
        self.year_change_percent
    }

    /// Immutable view of the year-end history.
    pub fn yearly_assets(&self) -> &[Money] {
        &self.yearly_assets
    }
}
