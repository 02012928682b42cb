//! Portfolio problem inputs.
//!
//! A selection problem is described by per-asset expected returns, an n×n
//! covariance (risk) matrix and a scalar risk-aversion weight. A candidate
//! solution is a subset of the assets, represented as a `&[bool]` selection
//! mask where entry i means "asset i is in the portfolio".
//!
//! Both input records validate their shape at construction and are immutable
//! afterwards; every accessor borrows.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Candidate assets with expected returns and pairwise risk.
///
/// The risk matrix is assumed symmetric; only its diagonal and upper
/// triangle are consumed downstream, so an asymmetric lower triangle is
/// silently ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    /// Expected return of asset i.
    returns: Vec<f64>,
    /// Covariance between assets i and j.
    risk: Vec<Vec<f64>>,
    /// Display name of asset i.
    names: Vec<String>,
    /// Total capital available. Carried for callers; unused by the engine.
    budget: f64,
    /// Scalar penalty weight on risk, λ ≥ 0.
    risk_tolerance: f64,
}

impl PortfolioData {
    /// Build a portfolio, checking that `returns`, `names` and `risk` agree
    /// on the number of assets and that the risk matrix is square.
    pub fn new(
        returns: Vec<f64>,
        risk: Vec<Vec<f64>>,
        names: Vec<String>,
        budget: f64,
        risk_tolerance: f64,
    ) -> CoreResult<Self> {
        let n = returns.len();
        if names.len() != n {
            return Err(CoreError::NameCountMismatch {
                returns: n,
                names: names.len(),
            });
        }
        if risk.len() != n {
            return Err(CoreError::RiskRowCountMismatch {
                rows: risk.len(),
                assets: n,
            });
        }
        for (row, entries) in risk.iter().enumerate() {
            if entries.len() != n {
                return Err(CoreError::RiskRowLengthMismatch {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
        }
        Ok(Self {
            returns,
            risk,
            names,
            budget,
            risk_tolerance,
        })
    }

    /// Number of candidate assets n.
    pub fn n_assets(&self) -> usize {
        self.returns.len()
    }

    /// Expected returns, one per asset.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// The n×n risk matrix.
    pub fn risk(&self) -> &[Vec<f64>] {
        &self.risk
    }

    /// Asset names, index-aligned with `returns`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Total capital available.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Risk-aversion weight λ.
    pub fn risk_tolerance(&self) -> f64 {
        self.risk_tolerance
    }

    /// Unweighted mean return over the selected assets.
    ///
    /// Each selected asset counts equally; this is the per-asset average,
    /// not a budget-weighted portfolio return. Empty selections yield 0.
    pub fn expected_return(&self, selection: &[bool]) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        for (r, &picked) in self.returns.iter().zip(selection) {
            if picked {
                total += r;
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    /// Average pairwise risk over the selected assets.
    ///
    /// Sums `risk[i][j]` over all ordered selected pairs (i, j), including
    /// i == j, and divides by k² where k is the selection size. Empty
    /// selections yield 0.
    pub fn portfolio_risk(&self, selection: &[bool]) -> f64 {
        let picked: Vec<usize> = (0..self.n_assets()).filter(|&i| selection[i]).collect();
        if picked.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        for &i in &picked {
            for &j in &picked {
                total += self.risk[i][j];
            }
        }
        let k = picked.len() as f64;
        total / (k * k)
    }

    /// Names of the selected assets, in ascending index order.
    pub fn selected_assets(&self, selection: &[bool]) -> Vec<String> {
        self.names
            .iter()
            .zip(selection)
            .filter(|(_, &picked)| picked)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Angle schedule and shot budget for a QAOA run.
///
/// One (β, γ) pair per circuit layer; `samples` is the number of
/// prepare-and-measure shots the sampling loop performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaoaParameters {
    /// Circuit depth p.
    layers: usize,
    /// Mixer angles, one per layer.
    betas: Vec<f64>,
    /// Cost angles, one per layer.
    gammas: Vec<f64>,
    /// Number of measurement shots.
    samples: usize,
}

impl QaoaParameters {
    /// Build a parameter set; the layer count is the common length of the
    /// two angle schedules.
    pub fn new(betas: Vec<f64>, gammas: Vec<f64>, samples: usize) -> CoreResult<Self> {
        if betas.len() != gammas.len() {
            return Err(CoreError::AngleCountMismatch {
                betas: betas.len(),
                gammas: gammas.len(),
            });
        }
        Ok(Self {
            layers: betas.len(),
            betas,
            gammas,
            samples,
        })
    }

    /// Circuit depth p.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Mixer angles β.
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// Cost angles γ.
    pub fn gammas(&self) -> &[f64] {
        &self.gammas
    }

    /// Number of measurement shots.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn construction_checks_name_count() {
        let err = PortfolioData::new(
            vec![0.1, 0.2],
            vec![vec![0.0; 2]; 2],
            vec!["A".into()],
            1.0,
            0.5,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NameCountMismatch {
                returns: 2,
                names: 1
            }
        ));
    }

    #[test]
    fn construction_checks_risk_rows() {
        let err = PortfolioData::new(
            vec![0.1, 0.2],
            vec![vec![0.0; 2]],
            vec!["A".into(), "B".into()],
            1.0,
            0.5,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::RiskRowCountMismatch { rows: 1, .. }));
    }

    #[test]
    fn construction_checks_risk_row_length() {
        let err = PortfolioData::new(
            vec![0.1, 0.2],
            vec![vec![0.0; 2], vec![0.0; 3]],
            vec!["A".into(), "B".into()],
            1.0,
            0.5,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::RiskRowLengthMismatch {
                row: 1,
                len: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn empty_selection_is_neutral() {
        let p = two_asset();
        assert_eq!(p.expected_return(&[false, false]), 0.0);
        assert_eq!(p.portfolio_risk(&[false, false]), 0.0);
        assert!(p.selected_assets(&[false, false]).is_empty());
    }

    #[test]
    fn single_asset_identities() {
        let p = two_asset();
        assert_eq!(p.expected_return(&[true, false]), 0.10);
        assert_eq!(p.portfolio_risk(&[true, false]), 0.04);
        assert_eq!(p.expected_return(&[false, true]), 0.08);
        assert_eq!(p.portfolio_risk(&[false, true]), 0.02);
    }

    #[test]
    fn pair_selection_averages() {
        let p = two_asset();
        // Mean of the two returns.
        assert!((p.expected_return(&[true, true]) - 0.09).abs() < 1e-12);
        // (0.04 + 0.01 + 0.01 + 0.02) / 4
        assert!((p.portfolio_risk(&[true, true]) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn selection_extraction_preserves_order() {
        let p = PortfolioData::new(
            vec![0.1, 0.2, 0.3, 0.4],
            vec![vec![0.0; 4]; 4],
            vec![
                "AAPL".into(),
                "MSFT".into(),
                "GOOGL".into(),
                "TSLA".into(),
            ],
            1.0,
            0.5,
        )
        .unwrap();
        assert_eq!(
            p.selected_assets(&[true, false, true, false]),
            vec!["AAPL".to_string(), "GOOGL".to_string()]
        );
    }

    #[test]
    fn parameters_check_angle_counts() {
        let err = QaoaParameters::new(vec![0.1, 0.2], vec![0.3], 10).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AngleCountMismatch { betas: 2, gammas: 1 }
        ));
    }

    #[test]
    fn parameters_infer_layers() {
        let params = QaoaParameters::new(vec![0.1, 0.2], vec![0.3, 0.4], 50).unwrap();
        assert_eq!(params.layers(), 2);
        assert_eq!(params.samples(), 50);
    }

    #[test]
    fn zero_layers_is_valid() {
        let params = QaoaParameters::new(vec![], vec![], 10).unwrap();
        assert_eq!(params.layers(), 0);
    }
}
