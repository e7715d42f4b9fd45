//! Year-advance mechanics: counters, history, completion.

use tsumitate_core::{
    config::{GameSettings, ReturnModel, SimConfig},
    engine::SimEngine,
    error::SimError,
    risk::RiskTier,
};

fn build(run_id: &str, seed: u64) -> SimEngine {
    SimEngine::new(run_id.to_string(), seed, GameSettings::default().to_config())
        .expect("build engine")
}

#[test]
fn fresh_engine_starts_at_year_zero() {
    let engine = build("proj-fresh", 42);

    assert_eq!(engine.current_year(), 0);
    assert_eq!(engine.current_asset(), 0.0);
    assert_eq!(engine.yearly_assets(), &[0.0]);
    assert!(!engine.is_finished());
}

#[test]
fn full_run_reaches_total_years() {
    let mut engine = build("proj-full", 7);

    for expected_year in 1..=engine.total_years() {
        let summary = engine.advance_year().unwrap();
        assert_eq!(summary.year, expected_year);
        assert_eq!(engine.current_year(), expected_year);
        assert_eq!(
            engine.yearly_assets().len(),
            expected_year as usize + 1,
            "history length must track the year counter"
        );
    }

    assert!(engine.is_finished());
    assert_eq!(engine.yearly_assets().len(), 16);
    assert_eq!(engine.yearly_assets()[0], 0.0);
}

#[test]
fn advance_after_completion_is_rejected_and_state_unchanged() {
    let mut engine = build("proj-complete", 99);
    engine.run_to_completion().unwrap();

    let year_before = engine.current_year();
    let asset_before = engine.current_asset().to_bits();
    let change_before = engine.year_change_percent().to_bits();
    let history_before = engine.yearly_assets().to_vec();
    let events_before = engine.events().len();

    let err = engine.advance_year().unwrap_err();
    assert!(
        matches!(err, SimError::AlreadyComplete { year: 15 }),
        "expected AlreadyComplete at year 15, got {err:?}"
    );

    assert_eq!(engine.current_year(), year_before);
    assert_eq!(engine.current_asset().to_bits(), asset_before);
    assert_eq!(engine.year_change_percent().to_bits(), change_before);
    assert_eq!(engine.yearly_assets(), history_before.as_slice());
    assert_eq!(
        engine.events().len(),
        events_before,
        "a rejected advance must not log anything"
    );
}

#[test]
fn first_year_change_percent_is_zero() {
    let mut engine = build("proj-first-year", 3);

    let summary = engine.advance_year().unwrap();

    // The year started from an empty balance, so the percent change
    // is defined as 0 no matter how the year went.
    assert_eq!(summary.change_percent, 0.0);
    assert_eq!(engine.year_change_percent(), 0.0);
    assert!(
        engine.year_end_asset() > 0.0,
        "contributions alone must leave a positive balance"
    );
}

#[test]
fn summary_flags_the_final_year() {
    let config = SimConfig {
        monthly_contribution: 10_000.0,
        risk_tier: RiskTier::Medium,
        total_years: 1,
        months_per_year: 12,
        return_model: ReturnModel::MonthlyUniform,
    };
    let mut engine = SimEngine::new("proj-one-year".to_string(), 5, config).unwrap();

    let summary = engine.advance_year().unwrap();

    assert!(summary.finished);
    assert_eq!(summary.year, 1);
    assert!(engine.is_finished());
}

#[test]
fn start_resets_state_and_event_log() {
    let mut engine = build("proj-restart", 11);
    engine.advance_year().unwrap();
    engine.advance_year().unwrap();

    engine.start(GameSettings::default().to_config()).unwrap();

    assert_eq!(engine.current_year(), 0);
    assert_eq!(engine.current_asset(), 0.0);
    assert_eq!(engine.yearly_assets(), &[0.0]);
    // Only the fresh run_started entry remains.
    assert_eq!(engine.events().len(), 1);
    assert_eq!(engine.events()[0].event_type, "run_started");
}
