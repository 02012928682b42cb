//! QAOA sampling driver.
//!
//! Each shot prepares the uniform superposition, applies p cost/mixer
//! layers, measures once, and scores the measured selection on the original
//! QUBO. The lowest-cost selection across all shots wins; ties keep the
//! first observation. Shots are independent, so the driver is stateless
//! between calls and safe to run concurrently from disjoint threads.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qfolio_core::{PortfolioData, QaoaParameters, Qubo};
use qfolio_sim::{ansatz, Statevector};

/// Outcome of a QAOA optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResult {
    /// Best selection mask found; entry i ⇔ asset i selected.
    pub best_bitstring: Vec<bool>,
    /// Names of the selected assets, ascending index order.
    pub selected_assets: Vec<String>,
    /// Unweighted mean return of the selection.
    pub expected_return: f64,
    /// Average pairwise risk of the selection.
    pub risk: f64,
    /// QUBO energy of `best_bitstring`. `+∞` sentinel when `samples == 0`.
    pub cost: f64,
    /// Number of measurement shots performed.
    pub samples: usize,
}

impl std::fmt::Display for OptimizeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Selected {} of {} assets (cost {:.6}, {} shots):",
            self.selected_assets.len(),
            self.best_bitstring.len(),
            self.cost,
            self.samples
        )?;
        if self.selected_assets.is_empty() {
            writeln!(f, "  (none)")?;
        } else {
            writeln!(f, "  {}", self.selected_assets.join(", "))?;
        }
        writeln!(f, "  expected return: {:.4}", self.expected_return)?;
        write!(f, "  portfolio risk:  {:.4}", self.risk)
    }
}

/// Run the QAOA sampling loop with the given random number generator.
///
/// Seeding `rng` makes the run reproducible:
/// ```rust,ignore
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let result = optimize_with_rng(&portfolio, &params, &mut rng);
/// ```
///
/// With `layers == 0` the circuit is the bare uniform superposition, so the
/// loop degenerates to uniform random search over {0,1}^n. With
/// `samples == 0` no shot runs and the all-false selection is returned with
/// an infinite cost sentinel.
#[instrument(skip_all, fields(
    n_assets = portfolio.n_assets(),
    layers = params.layers(),
    samples = params.samples(),
))]
pub fn optimize_with_rng<R: Rng>(
    portfolio: &PortfolioData,
    params: &QaoaParameters,
    rng: &mut R,
) -> OptimizeResult {
    let qubo = Qubo::from_portfolio(portfolio);
    let ising = qubo.to_ising();
    let n = portfolio.n_assets();

    let mut best_cost = f64::INFINITY;
    let mut best_selection = vec![false; n];

    for shot in 0..params.samples() {
        let mut state = Statevector::uniform(n);
        for layer in 0..params.layers() {
            ansatz::qaoa_layer(
                &mut state,
                &ising,
                params.gammas()[layer],
                params.betas()[layer],
            );
        }

        let outcome = state.sample_with_rng(rng);
        let selection = state.outcome_to_bits(outcome);
        let cost = qubo.cost(&selection);
        if cost < best_cost {
            debug!(shot, cost, "new best sample");
            best_cost = cost;
            best_selection = selection;
        }
    }

    OptimizeResult {
        selected_assets: portfolio.selected_assets(&best_selection),
        expected_return: portfolio.expected_return(&best_selection),
        risk: portfolio.portfolio_risk(&best_selection),
        cost: best_cost,
        samples: params.samples(),
        best_bitstring: best_selection,
    }
}

/// Run the QAOA sampling loop with the thread-local RNG.
pub fn optimize(portfolio: &PortfolioData, params: &QaoaParameters) -> OptimizeResult {
    optimize_with_rng(portfolio, params, &mut rand::thread_rng())
}
