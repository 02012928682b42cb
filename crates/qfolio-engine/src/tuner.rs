//! Grid-search angle tuner.
//!
//! Scans a uniform grid over (β, γ) ∈ [0, π)², with the same angle repeated
//! across every layer, and keeps the angle pair whose sampling run reaches
//! the lowest QUBO cost. The identical-angle simplification and the γ range
//! stopping short of 2π are inherited behaviour and kept as-is; per-layer
//! schedules are out of scope.
//!
//! Cost: grid_size² full sampling runs, each `samples · layers · 2^n` gate
//! sweeps. Callers are expected to keep grid_size and samples small.

use rand::Rng;
use std::f64::consts::PI;
use tracing::{debug, instrument};

use qfolio_core::{PortfolioData, QaoaParameters};

use crate::error::{EngineError, EngineResult};
use crate::optimizer::optimize_with_rng;

/// Scan the angle grid with the given random number generator and return
/// the best-performing parameter set.
///
/// Grid cells are visited in row-major (β, then γ) order; strict
/// improvement keeps the earliest winner on ties.
#[instrument(skip(portfolio, rng))]
pub fn tune_parameters_with_rng<R: Rng>(
    portfolio: &PortfolioData,
    layers: usize,
    grid_size: usize,
    samples: usize,
    rng: &mut R,
) -> EngineResult<QaoaParameters> {
    if grid_size == 0 {
        return Err(EngineError::InvalidGridSize(0));
    }

    let step = PI / grid_size as f64;
    let mut best: Option<(QaoaParameters, f64)> = None;

    for b in 0..grid_size {
        for g in 0..grid_size {
            let beta = b as f64 * step;
            let gamma = g as f64 * step;
            let candidate =
                QaoaParameters::new(vec![beta; layers], vec![gamma; layers], samples)?;
            let result = optimize_with_rng(portfolio, &candidate, rng);

            let improved = match &best {
                None => true,
                Some((_, best_cost)) => result.cost < *best_cost,
            };
            if improved {
                debug!(beta, gamma, cost = result.cost, "new best angles");
                best = Some((candidate, result.cost));
            }
        }
    }

    // grid_size ≥ 1 guarantees at least one candidate.
    let (params, _) = best.expect("angle grid is non-empty");
    Ok(params)
}

/// Scan the angle grid with the thread-local RNG.
pub fn tune_parameters(
    portfolio: &PortfolioData,
    layers: usize,
    grid_size: usize,
    samples: usize,
) -> EngineResult<QaoaParameters> {
    tune_parameters_with_rng(portfolio, layers, grid_size, samples, &mut rand::thread_rng())
}
