//! The simulation engine: one run of the savings game.
//!
//! RULES:
//!   - One advance call computes exactly one year (every month inside).
//!   - All randomness flows through the engine's MarketRng.
//!   - Every state change is recorded in the event log.
//!   - Queries never mutate. The caller drives the run; the engine
//!     never acts on its own.

use crate::{
    config::{ReturnModel, SimConfig},
    error::{SimError, SimResult},
    event::{EventLogEntry, SimEvent},
    risk::{risk_change_allowed, RiskTier},
    rng::MarketRng,
    state::SimState,
    types::{Money, RunId, Year},
};
use serde::Serialize;

/// Direction of a completed year, for display layers.
/// Changes inside about a hundredth of a percent count as flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Returned by `advance_year`: everything a caller needs to react to
/// the year that just completed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearSummary {
    pub year: Year,
    pub start_asset: Money,
    pub end_asset: Money,
    pub change_percent: f64,
    pub finished: bool,
}

impl YearSummary {
    pub fn trend(&self) -> Trend {
        if self.change_percent > 0.01 {
            Trend::Up
        } else if self.change_percent < -0.01 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

pub struct SimEngine {
    run_id: RunId,
    seed: u64,
    config: SimConfig,
    state: SimState,
    rng: MarketRng,
    events: Vec<EventLogEntry>,
}

impl SimEngine {
    /// Build an engine and start its first run.
    pub fn new(run_id: RunId, seed: u64, config: SimConfig) -> SimResult<Self> {
        let mut engine = Self {
            run_id,
            seed,
            config: config.clone(),
            state: SimState::fresh(),
            rng: MarketRng::new(seed),
            events: Vec::new(),
        };
        engine.start(config)?;
        Ok(engine)
    }

    /// Begin a new run on this engine: fresh state, fresh event log,
    /// the RNG re-derived from the master seed. The previous run's
    /// state is discarded; capture a RunResult first if it matters.
    pub fn start(&mut self, config: SimConfig) -> SimResult<()> {
        self.config = config;
        self.state = SimState::fresh();
        self.rng = MarketRng::new(self.seed);
        self.events.clear();
        self.record(SimEvent::RunStarted {
            run_id: self.run_id.clone(),
            seed: self.seed,
            monthly_contribution: self.config.monthly_contribution,
            risk_tier: self.config.risk_tier,
            total_years: self.config.total_years,
        })
    }

    /// Advance exactly one year. Each month adds the contribution and
    /// then applies that month's return.
    pub fn advance_year(&mut self) -> SimResult<YearSummary> {
        if self.state.current_year() >= self.config.total_years {
            log::warn!(
                "run {}: advance_year called after completion",
                self.run_id
            );
            return Err(SimError::AlreadyComplete {
                year: self.state.current_year(),
            });
        }

        let start_asset = self.state.current_asset();
        let mut asset = start_asset;
        for _ in 0..self.config.months_per_year {
            asset += self.config.monthly_contribution;
            let rate_percent = self.monthly_rate_percent();
            asset *= 1.0 + rate_percent / 100.0;
        }

        // The first year starts from an empty balance; its percent
        // change is defined as 0.
        let change_percent = if start_asset > 0.0 {
            (asset - start_asset) / start_asset * 100.0
        } else {
            0.0
        };

        self.state.complete_year(start_asset, asset, change_percent);

        let year = self.state.current_year();
        let finished = year == self.config.total_years;

        log::debug!(
            "run {}: year {year} asset={asset:.0} change={change_percent:+.1}%",
            self.run_id
        );

        self.record(SimEvent::YearCompleted {
            year,
            start_asset,
            end_asset: asset,
            change_percent,
        })?;
        if finished {
            self.record(SimEvent::SimulationFinished {
                year,
                final_asset: asset,
            })?;
        }

        Ok(YearSummary {
            year,
            start_asset,
            end_asset: asset,
            change_percent,
            finished,
        })
    }

    /// Drive the run to its final year. Used by the headless runner
    /// and tests; interactive callers advance year by year.
    pub fn run_to_completion(&mut self) -> SimResult<()> {
        while !self.is_finished() {
            self.advance_year()?;
        }
        Ok(())
    }

    /// Switch risk tier for the years ahead. Only accepted while the
    /// run stands at one of the scheduled change years; picking the
    /// already-active tier is a quiet no-op.
    pub fn set_risk_tier(&mut self, tier: RiskTier) -> SimResult<()> {
        let year = self.state.current_year();
        if !risk_change_allowed(year) {
            log::warn!(
                "run {}: risk change to {} rejected at year {year}",
                self.run_id,
                tier.label()
            );
            return Err(SimError::RiskChangeLocked { year });
        }
        let previous = self.config.risk_tier;
        if previous == tier {
            return Ok(());
        }
        self.config.risk_tier = tier;
        log::info!(
            "run {}: risk tier {} -> {} at year {year}",
            self.run_id,
            previous.label(),
            tier.label()
        );
        self.record(SimEvent::RiskTierChanged {
            year,
            previous,
            selected: tier,
        })
    }

    fn monthly_rate_percent(&mut self) -> f64 {
        match self.config.return_model {
            ReturnModel::MonthlyUniform => {
                let (lo, hi) = self.config.risk_tier.monthly_band();
                self.rng.percent_between(lo, hi)
            }
            ReturnModel::FixedMonthly { percent } => percent,
        }
    }

    fn record(&mut self, event: SimEvent) -> SimResult<()> {
        let entry = EventLogEntry {
            run_id: self.run_id.clone(),
            year: self.state.current_year(),
            event_type: event.type_name().to_string(),
            payload: serde_json::to_string(&event)?,
        };
        self.events.push(entry);
        Ok(())
    }

    // ── Read-only queries ──────────────────────────────────────────

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_year(&self) -> Year {
        self.state.current_year()
    }

    pub fn total_years(&self) -> Year {
        self.config.total_years
    }

    pub fn months_per_year(&self) -> u32 {
        self.config.months_per_year
    }

    pub fn current_asset(&self) -> Money {
        self.state.current_asset()
    }

    pub fn year_start_asset(&self) -> Money {
        self.state.year_start_asset()
    }

    pub fn year_end_asset(&self) -> Money {
        self.state.year_end_asset()
    }

    pub fn year_change_percent(&self) -> f64 {
        self.state.year_change_percent()
    }

    pub fn monthly_contribution(&self) -> Money {
        self.config.monthly_contribution
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.config.risk_tier
    }

    /// Immutable view of the year-end history; index 0 is the
    /// starting 0.
    pub fn yearly_assets(&self) -> &[Money] {
        self.state.yearly_assets()
    }

    pub fn is_finished(&self) -> bool {
        self.state.current_year() == self.config.total_years
    }

    /// The full event log of the current run, in emission order.
    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }
}
