//! Optimize command implementation.

use anyhow::Context;
use console::style;
use rand::Rng;
use std::f64::consts::PI;

use qfolio_core::QaoaParameters;
use qfolio_engine::optimize_with_rng;

use super::common::{load_portfolio, make_rng, print_reference_minimum};

/// Execute the optimize command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: &str,
    layers: usize,
    samples: usize,
    betas: Option<Vec<f64>>,
    gammas: Option<Vec<f64>>,
    seed: Option<u64>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let portfolio = load_portfolio(input)?;
    let mut rng = make_rng(seed);

    // Missing angle schedules are drawn uniformly: β ∈ [0, π], γ ∈ [0, 2π].
    // A schedule given explicitly fixes the layer count.
    let layer_count = betas
        .as_ref()
        .map(Vec::len)
        .or_else(|| gammas.as_ref().map(Vec::len))
        .unwrap_or(layers);
    let betas =
        betas.unwrap_or_else(|| (0..layer_count).map(|_| rng.gen_range(0.0..=PI)).collect());
    let gammas = gammas
        .unwrap_or_else(|| (0..layer_count).map(|_| rng.gen_range(0.0..=2.0 * PI)).collect());
    let params = QaoaParameters::new(betas, gammas, samples)?;

    println!(
        "{} Optimizing {} ({} assets, {} layers, {} shots)",
        style("→").cyan().bold(),
        style(input).green(),
        portfolio.n_assets(),
        params.layers(),
        params.samples()
    );

    let result = optimize_with_rng(&portfolio, &params, &mut rng);

    println!("{result}");
    print_reference_minimum(&portfolio, result.cost);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(path, json).with_context(|| format!("cannot write {path}"))?;
        println!(
            "{} Result written to {}",
            style("✓").green().bold(),
            style(path).green()
        );
    }

    Ok(())
}
