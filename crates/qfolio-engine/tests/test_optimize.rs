//! Tests for the QAOA sampling driver.

use rand::rngs::StdRng;
use rand::SeedableRng;

use qfolio_core::{PortfolioData, QaoaParameters, Qubo};
use qfolio_engine::optimize_with_rng;
use qfolio_sim::Statevector;

fn two_asset() -> PortfolioData {
    PortfolioData::new(
        vec![0.10, 0.08],
        vec![vec![0.04, 0.01], vec![0.01, 0.02]],
        vec!["AAPL".into(), "MSFT".into()],
        10_000.0,
        1.0,
    )
    .unwrap()
}

fn three_asset() -> PortfolioData {
    PortfolioData::new(
        vec![0.12, 0.07, 0.15],
        vec![
            vec![0.05, 0.01, 0.02],
            vec![0.01, 0.03, 0.01],
            vec![0.02, 0.01, 0.06],
        ],
        vec!["AAPL".into(), "MSFT".into(), "GOOGL".into()],
        50_000.0,
        0.8,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Result invariants
// ---------------------------------------------------------------------------

#[test]
fn two_asset_run_produces_well_formed_result() {
    let portfolio = two_asset();
    let params = QaoaParameters::new(vec![0.5], vec![1.0], 5).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);

    assert_eq!(result.best_bitstring.len(), 2);
    assert_eq!(result.samples, 5);
    assert!(result.cost.is_finite());
}

#[test]
fn result_fields_are_consistent() {
    let portfolio = three_asset();
    let params = QaoaParameters::new(vec![0.4, 0.2], vec![0.9, 1.1], 40).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);

    assert_eq!(result.best_bitstring.len(), 3);
    let popcount = result.best_bitstring.iter().filter(|&&b| b).count();
    assert_eq!(result.selected_assets.len(), popcount);
    assert!(result.cost.is_finite());
    assert!(result.expected_return.is_finite());
    assert!(result.risk.is_finite());

    // Derived fields agree with re-evaluating the winning selection.
    assert_eq!(
        result.selected_assets,
        portfolio.selected_assets(&result.best_bitstring)
    );
    let qubo = Qubo::from_portfolio(&portfolio);
    assert!((result.cost - qubo.cost(&result.best_bitstring)).abs() < 1e-12);
}

#[test]
fn seeded_runs_are_reproducible() {
    let portfolio = three_asset();
    let params = QaoaParameters::new(vec![0.3], vec![0.7], 30).unwrap();

    let mut rng1 = StdRng::seed_from_u64(99);
    let mut rng2 = StdRng::seed_from_u64(99);
    let r1 = optimize_with_rng(&portfolio, &params, &mut rng1);
    let r2 = optimize_with_rng(&portfolio, &params, &mut rng2);

    assert_eq!(r1, r2);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn zero_samples_returns_sentinel() {
    let portfolio = two_asset();
    let params = QaoaParameters::new(vec![0.5], vec![1.0], 0).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);

    assert_eq!(result.best_bitstring, vec![false, false]);
    assert!(result.cost.is_infinite());
    assert_eq!(result.expected_return, 0.0);
    assert_eq!(result.risk, 0.0);
    assert_eq!(result.samples, 0);
    assert!(result.selected_assets.is_empty());
}

#[test]
fn all_zero_risk_stays_finite() {
    let portfolio = PortfolioData::new(
        vec![0.1, 0.2, 0.3],
        vec![vec![0.0; 3]; 3],
        vec!["A".into(), "B".into(), "C".into()],
        1.0,
        1.0,
    )
    .unwrap();
    let params = QaoaParameters::new(vec![0.5], vec![1.0], 20).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);
    assert!(result.cost.is_finite());
    assert!(result.expected_return.is_finite());
    assert!(result.risk.is_finite());
}

#[test]
fn extreme_risk_tolerance_stays_finite() {
    let portfolio = PortfolioData::new(
        vec![0.1, 0.2],
        vec![vec![0.5, 0.2], vec![0.2, 0.4]],
        vec!["A".into(), "B".into()],
        1.0,
        1e9,
    )
    .unwrap();
    let params = QaoaParameters::new(vec![0.5], vec![1.0], 20).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);
    assert!(result.cost.is_finite());
    assert!(result.expected_return.is_finite());
    assert!(result.risk.is_finite());
}

// ---------------------------------------------------------------------------
// Zero-layer degeneration to uniform sampling
// ---------------------------------------------------------------------------

#[test]
fn zero_layers_samples_uniformly() {
    // With p = 0 each shot measures the bare uniform superposition; check
    // the outcome distribution directly with a chi-squared statistic.
    let state = Statevector::uniform(3);
    let mut rng = StdRng::seed_from_u64(6);

    let shots = 400usize;
    let mut counts = [0usize; 8];
    for _ in 0..shots {
        counts[state.sample_with_rng(&mut rng)] += 1;
    }

    let expected = shots as f64 / 8.0;
    let chi_squared: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();

    // 7 degrees of freedom; 35 is far beyond the 99.99% quantile.
    assert!(chi_squared < 35.0, "chi-squared {chi_squared} too large");
}

#[test]
fn zero_layers_run_finds_global_minimum() {
    // 100 uniform shots over 8 outcomes visit every bitstring with
    // overwhelming probability, so the best sample is the true minimum.
    let portfolio = three_asset();
    let params = QaoaParameters::new(vec![], vec![], 100).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let result = optimize_with_rng(&portfolio, &params, &mut rng);
    assert_eq!(result.best_bitstring.len(), 3);

    let (_, best) = Qubo::from_portfolio(&portfolio).brute_force_minimum();
    assert!((result.cost - best).abs() < 1e-12);
}
