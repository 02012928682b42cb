//! Shared helpers for CLI commands.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use qfolio_core::{PortfolioData, Qubo};

/// On-disk portfolio description.
///
/// Mirrors the engine's input record but tolerates missing weights, the
/// way demo files are usually written by hand.
#[derive(Debug, Deserialize)]
pub struct PortfolioFile {
    returns: Vec<f64>,
    risk: Vec<Vec<f64>>,
    names: Vec<String>,
    #[serde(default = "default_budget")]
    budget: f64,
    #[serde(default = "default_risk_tolerance")]
    risk_tolerance: f64,
}

fn default_budget() -> f64 {
    10_000.0
}

fn default_risk_tolerance() -> f64 {
    0.5
}

/// Load and shape-check a portfolio from a JSON file.
pub fn load_portfolio(path: &str) -> anyhow::Result<PortfolioData> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let file: PortfolioFile =
        serde_json::from_str(&raw).with_context(|| format!("cannot parse {path}"))?;
    let portfolio = PortfolioData::new(
        file.returns,
        file.risk,
        file.names,
        file.budget,
        file.risk_tolerance,
    )
    .with_context(|| format!("invalid portfolio in {path}"))?;
    Ok(portfolio)
}

/// Build an RNG, seeded when requested for reproducible runs.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Print the exhaustive reference minimum next to a sampled cost, for
/// problem sizes where brute force is tractable.
pub fn print_reference_minimum(portfolio: &PortfolioData, sampled_cost: f64) {
    use console::style;

    if portfolio.n_assets() > 16 {
        return;
    }
    let (selection, cost) = Qubo::from_portfolio(portfolio).brute_force_minimum();
    let names = portfolio.selected_assets(&selection);
    let gap = sampled_cost - cost;
    println!(
        "  {} {:.6} ({}) — sampled gap {:+.6}",
        style("exhaustive minimum:").dim(),
        cost,
        if names.is_empty() {
            "no assets".to_string()
        } else {
            names.join(", ")
        },
        gap
    );
}
