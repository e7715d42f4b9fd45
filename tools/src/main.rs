//! sim-runner: headless runner for the tsumitate savings simulation.
//!
//! Usage:
//!   sim-runner --seed 42 --monthly 10000 --risk medium --years 15
//!   sim-runner --config settings.json --risk-plan low,medium,high
//!   sim-runner --seed 7 --json
//!
//! --risk-plan entries are applied at the scheduled change years
//! (0, 5, 10), in order. --json replaces the human-readable summary
//! with a machine-readable report on stdout.

use anyhow::Result;
use std::env;
use tsumitate_core::{
    config::GameSettings,
    engine::{SimEngine, Trend},
    result::RunResult,
    risk::{RiskTier, RISK_CHANGE_YEARS},
};

#[derive(serde::Serialize)]
struct RunReport<'a> {
    run_id: &'a str,
    seed: u64,
    monthly_contribution: f64,
    risk_tier: &'a str,
    total_years: u32,
    final_asset: f64,
    principal: f64,
    gain: f64,
    yearly_assets: &'a [f64],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_output = args.iter().any(|a| a == "--json");

    let mut settings = match find_arg(&args, "--config") {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };

    if let Some(raw) = find_arg(&args, "--monthly") {
        settings.set_monthly_amount(raw.parse()?);
    }
    if let Some(raw) = find_arg(&args, "--risk") {
        settings.set_risk_tier(raw.parse::<RiskTier>()?);
    }
    if let Some(raw) = find_arg(&args, "--years") {
        settings.set_total_years(raw.parse()?);
    }

    let risk_plan = parse_risk_plan(&args)?;

    if !json_output {
        println!("tsumitate sim-runner");
        println!("  seed:    {seed}");
        println!("  monthly: {}", settings.monthly_amount());
        println!("  risk:    {}", settings.risk_tier().label());
        println!("  years:   {}", settings.total_years());
        println!();
    }

    let run_id = format!("run-{seed}");
    let mut engine = SimEngine::new(run_id.clone(), seed, settings.to_config())?;

    // The year-0 plan entry applies before the first advance.
    apply_risk_plan(&mut engine, &risk_plan);

    while !engine.is_finished() {
        let summary = engine.advance_year()?;
        if !json_output {
            let arrow = match summary.trend() {
                Trend::Up => "up",
                Trend::Down => "down",
                Trend::Flat => "flat",
            };
            println!(
                "  year {:>2}/{}  asset {:>12.0}  change {:>+6.1}%  {}",
                summary.year,
                engine.total_years(),
                summary.end_asset,
                summary.change_percent,
                arrow
            );
        }
        apply_risk_plan(&mut engine, &risk_plan);
    }

    let result = RunResult::capture(&engine);

    if json_output {
        let report = RunReport {
            run_id: &run_id,
            seed,
            monthly_contribution: result.monthly_contribution,
            risk_tier: result.risk_tier.label(),
            total_years: result.total_years,
            final_asset: result.final_asset,
            principal: result.principal,
            gain: result.gain(),
            yearly_assets: &result.yearly_assets,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("=== RUN SUMMARY ===");
        println!("  final asset: {:>12.0}", result.final_asset);
        println!("  principal:   {:>12.0}", result.principal);
        println!("  gain:        {:>+12.0}", result.gain());
        println!("  risk tier:   {}", result.risk_tier.label());
        println!("  years:       {}", result.total_years);
    }

    Ok(())
}

/// Apply the plan entry for the current year, if this is a change
/// year and the plan has one. A rejected entry is only a warning.
fn apply_risk_plan(engine: &mut SimEngine, plan: &[RiskTier]) {
    let year = engine.current_year();
    let Some(slot) = RISK_CHANGE_YEARS.iter().position(|&y| y == year) else {
        return;
    };
    if let Some(&tier) = plan.get(slot) {
        if let Err(e) = engine.set_risk_tier(tier) {
            log::warn!("risk plan entry for year {year} ignored: {e}");
        }
    }
}

fn parse_risk_plan(args: &[String]) -> Result<Vec<RiskTier>> {
    let Some(raw) = find_arg(args, "--risk-plan") else {
        return Ok(Vec::new());
    };
    let plan = raw
        .split(',')
        .map(|entry| entry.parse::<RiskTier>())
        .collect::<Result<Vec<_>, _>>()?;
    anyhow::ensure!(
        plan.len() <= RISK_CHANGE_YEARS.len(),
        "--risk-plan supports at most {} entries (years 0, 5, 10)",
        RISK_CHANGE_YEARS.len()
    );
    Ok(plan)
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
