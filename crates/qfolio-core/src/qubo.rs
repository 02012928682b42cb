//! QUBO compilation and the Ising transformation.
//!
//! The selection problem is compiled to a Quadratic Unconstrained Binary
//! Optimization matrix over x ∈ {0,1}^n:
//!
//!   cost(x) = Σᵢ Qᵢᵢ xᵢ + Σ_{i<j} Qᵢⱼ xᵢ xⱼ
//!
//! with the diagonal carrying `-return + λ·risk` and the off-diagonal the
//! doubled cross-risk penalty. Mapping xᵢ = (1 - sᵢ)/2 onto spins
//! s ∈ {-1,+1}^n yields the Ising form the QAOA cost unitary consumes:
//!
//!   cost(x) = offset - Σᵢ hᵢ sᵢ + Σ_{i<j} Jᵢⱼ sᵢ sⱼ
//!
//! Only the diagonal and upper triangle of Q are ever read, so an
//! asymmetric matrix behaves as if its lower triangle mirrored the upper.

use serde::{Deserialize, Serialize};

use crate::portfolio::PortfolioData;

/// QUBO coefficient matrix for a compiled selection problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qubo {
    matrix: Vec<Vec<f64>>,
}

impl Qubo {
    /// Compile a portfolio into its QUBO matrix.
    ///
    /// Diagonal: `Q[i][i] = -returns[i] + λ·risk[i][i]` — reward enters as
    /// negative cost, self-risk once. Off-diagonal: `Q[i][j] = 2λ·risk[i][j]`,
    /// because the quadratic λ·xᵀRx contributes each symmetric cross term
    /// twice.
    pub fn from_portfolio(portfolio: &PortfolioData) -> Self {
        let n = portfolio.n_assets();
        let lambda = portfolio.risk_tolerance();
        let returns = portfolio.returns();
        let risk = portfolio.risk();

        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            matrix[i][i] = -returns[i] + lambda * risk[i][i];
            for j in 0..n {
                if j != i {
                    matrix[i][j] = 2.0 * lambda * risk[i][j];
                }
            }
        }
        Self { matrix }
    }

    /// Build a QUBO directly from a coefficient matrix.
    ///
    /// The matrix must be square. Consumers read only the diagonal and
    /// upper triangle, so the lower triangle may be left zeroed.
    pub fn from_matrix(matrix: Vec<Vec<f64>>) -> Self {
        Self { matrix }
    }

    /// Problem size n.
    pub fn n(&self) -> usize {
        self.matrix.len()
    }

    /// Coefficient of the `x_i · x_j` term.
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.matrix[i][j]
    }

    /// QUBO energy of a selection mask.
    ///
    /// `Σᵢ xᵢ Qᵢᵢ + Σ_{i<j} xᵢ xⱼ Qᵢⱼ`; the empty selection costs 0.
    pub fn cost(&self, selection: &[bool]) -> f64 {
        let n = self.n();
        let mut total = 0.0;
        for i in 0..n {
            if !selection[i] {
                continue;
            }
            total += self.matrix[i][i];
            for j in (i + 1)..n {
                if selection[j] {
                    total += self.matrix[i][j];
                }
            }
        }
        total
    }

    /// Transform to Ising local fields and couplings.
    ///
    /// Division constants are fixed by the energy-equivalence contract:
    /// each diagonal entry contributes `Q[i][i]/2` to `h[i]`, each upper
    /// off-diagonal entry `Q[i][j]` contributes `Q[i][j]/4` to both `h[i]`
    /// and `h[j]` and sets `J[i][j] = J[j][i] = Q[i][j]/4`. The same halves
    /// and quarters accumulate into the constant offset, which does not
    /// affect the argmin.
    pub fn to_ising(&self) -> IsingModel {
        let n = self.n();
        let mut fields = vec![0.0; n];
        let mut couplings = vec![vec![0.0; n]; n];
        let mut offset = 0.0;

        for i in 0..n {
            fields[i] += self.matrix[i][i] / 2.0;
            offset += self.matrix[i][i] / 2.0;
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let quarter = self.matrix[i][j] / 4.0;
                fields[i] += quarter;
                fields[j] += quarter;
                couplings[i][j] = quarter;
                couplings[j][i] = quarter;
                offset += quarter;
            }
        }

        IsingModel {
            fields,
            couplings,
            offset,
        }
    }

    /// Find the minimum-cost selection by exhaustive search.
    ///
    /// Ties keep the lowest basis-state index. Intended for tests and
    /// demo output on small instances.
    pub fn brute_force_minimum(&self) -> (Vec<bool>, f64) {
        let n = self.n();
        assert!(n <= 20, "Brute force limited to 20 assets");

        let mut best_bits = 0usize;
        let mut best_cost = f64::INFINITY;
        for bits in 0..(1usize << n) {
            let selection: Vec<bool> = (0..n).map(|i| (bits >> i) & 1 == 1).collect();
            let cost = self.cost(&selection);
            if cost < best_cost {
                best_cost = cost;
                best_bits = bits;
            }
        }

        let selection = (0..n).map(|i| (best_bits >> i) & 1 == 1).collect();
        (selection, best_cost)
    }
}

/// Ising formulation of a compiled QUBO: local fields h, symmetric
/// zero-diagonal couplings J, and the spin-independent offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    fields: Vec<f64>,
    couplings: Vec<Vec<f64>>,
    offset: f64,
}

impl IsingModel {
    /// Problem size n.
    pub fn n(&self) -> usize {
        self.fields.len()
    }

    /// Local fields h.
    pub fn fields(&self) -> &[f64] {
        &self.fields
    }

    /// Local field on spin i.
    pub fn field(&self, i: usize) -> f64 {
        self.fields[i]
    }

    /// Coupling between spins i and j (symmetric; zero on the diagonal).
    pub fn coupling(&self, i: usize, j: usize) -> f64 {
        self.couplings[i][j]
    }

    /// The constant discarded by the argmin.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Energy of a spin configuration s ∈ {-1,+1}^n:
    /// `offset - Σᵢ hᵢ sᵢ + Σ_{i<j} Jᵢⱼ sᵢ sⱼ`.
    ///
    /// Equals `Qubo::cost` of the matching bitstring under sᵢ = 1 - 2xᵢ.
    pub fn spin_energy(&self, spins: &[f64]) -> f64 {
        let n = self.n();
        let mut energy = self.offset;
        for i in 0..n {
            energy -= self.fields[i] * spins[i];
            for j in (i + 1)..n {
                energy += self.couplings[i][j] * spins[i] * spins[j];
            }
        }
        energy
    }
}

/// Spin configuration corresponding to a selection mask (sᵢ = 1 - 2xᵢ).
pub fn selection_to_spins(selection: &[bool]) -> Vec<f64> {
    selection
        .iter()
        .map(|&picked| if picked { -1.0 } else { 1.0 })
        .collect()
}
