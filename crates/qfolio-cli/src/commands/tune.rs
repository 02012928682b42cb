//! Tune command implementation.

use console::style;
use indicatif::ProgressBar;
use std::time::Duration;

use qfolio_engine::{optimize_with_rng, tune_parameters_with_rng};

use super::common::{load_portfolio, make_rng, print_reference_minimum};

/// Execute the tune command.
pub fn execute(
    input: &str,
    layers: usize,
    grid_size: usize,
    samples: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let portfolio = load_portfolio(input)?;
    let mut rng = make_rng(seed);

    println!(
        "{} Tuning angles for {} ({} assets, {} layers, {}×{} grid, {} shots/cell)",
        style("→").cyan().bold(),
        style(input).green(),
        portfolio.n_assets(),
        layers,
        grid_size,
        grid_size,
        samples
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("scanning {} angle cells", grid_size * grid_size));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let params = tune_parameters_with_rng(&portfolio, layers, grid_size, samples, &mut rng)?;

    spinner.finish_and_clear();

    let beta = params.betas().first().copied().unwrap_or(0.0);
    let gamma = params.gammas().first().copied().unwrap_or(0.0);
    println!(
        "{} Best angles: β = {:.4}, γ = {:.4} (identical across layers)",
        style("✓").green().bold(),
        beta,
        gamma
    );

    // Re-run at the winning angles for the final report.
    let result = optimize_with_rng(&portfolio, &params, &mut rng);
    println!("{result}");
    print_reference_minimum(&portfolio, result.cost);

    Ok(())
}
