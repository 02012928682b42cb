//! Sample command implementation: demo portfolio generation.

use anyhow::Context;
use console::style;
use rand::Rng;
use serde_json::json;

use super::common::make_rng;

/// Familiar tickers for small demo portfolios; synthetic names beyond.
const TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META", "JPM", "V", "JNJ", "WMT", "PG",
];

/// Execute the sample command.
pub fn execute(assets: usize, output: Option<&str>, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);

    let names: Vec<String> = (0..assets)
        .map(|i| {
            TICKERS
                .get(i)
                .map(|t| (*t).to_string())
                .unwrap_or_else(|| format!("ASSET{:02}", i + 1))
        })
        .collect();

    let returns: Vec<f64> = (0..assets).map(|_| rng.gen_range(0.02..0.15)).collect();

    // Covariance from per-asset volatilities and pairwise correlations,
    // symmetric by construction.
    let volatility: Vec<f64> = (0..assets).map(|_| rng.gen_range(0.10..0.40)).collect();
    let mut risk = vec![vec![0.0; assets]; assets];
    for i in 0..assets {
        risk[i][i] = volatility[i] * volatility[i];
        for j in (i + 1)..assets {
            let correlation = rng.gen_range(-0.2..0.6);
            let covariance = correlation * volatility[i] * volatility[j];
            risk[i][j] = covariance;
            risk[j][i] = covariance;
        }
    }

    let portfolio = json!({
        "returns": returns,
        "risk": risk,
        "names": names,
        "budget": 100_000.0,
        "risk_tolerance": 0.5,
    });
    let rendered = serde_json::to_string_pretty(&portfolio)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("cannot write {path}"))?;
            println!(
                "{} Wrote {}-asset demo portfolio to {}",
                style("✓").green().bold(),
                assets,
                style(path).green()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
