//! QAOA ansatz execution over a statevector.
//!
//! One layer applies the cost unitary exp(-i γ H_C) followed by the mixer
//! exp(-i β B), B = Σ Xⱼ:
//!
//! - cost: Rz(2γ·hᵢ) on every qubit, then for each coupled pair i < j the
//!   RZZ(2γ·Jᵢⱼ) decomposition CNOT(i,j) · Rz(2γ·Jᵢⱼ)[j] · CNOT(i,j)
//! - mixer: Rx(2β) on every qubit
//!
//! Couplings at or below the skip threshold are elided as numerically
//! irrelevant; callers may rely on |J| ≤ 1e-10 being a no-op.

use qfolio_core::IsingModel;
use tracing::trace;

use crate::statevector::Statevector;

/// Couplings with |J| at or below this are skipped by the cost unitary.
const COUPLING_THRESHOLD: f64 = 1e-10;

/// Apply the cost unitary exp(-i γ H_C) for the given Ising problem.
pub fn apply_cost_hamiltonian(state: &mut Statevector, ising: &IsingModel, gamma: f64) {
    let n = ising.n();
    assert_eq!(
        state.num_qubits(),
        n,
        "state and Ising problem must agree on qubit count"
    );

    for i in 0..n {
        state.rz(i, 2.0 * gamma * ising.field(i));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let coupling = ising.coupling(i, j);
            if coupling.abs() > COUPLING_THRESHOLD {
                state.cx(i, j);
                state.rz(j, 2.0 * gamma * coupling);
                state.cx(i, j);
            } else {
                trace!(i, j, coupling, "skipping negligible coupling");
            }
        }
    }
}

/// Apply the mixer unitary: Rx(2β) on every qubit.
pub fn apply_mixer(state: &mut Statevector, beta: f64) {
    let angle = 2.0 * beta;
    for q in 0..state.num_qubits() {
        state.rx(q, angle);
    }
}

/// Apply one QAOA layer: cost unitary, then mixer, in that order.
pub fn qaoa_layer(state: &mut Statevector, ising: &IsingModel, gamma: f64, beta: f64) {
    apply_cost_hamiltonian(state, ising, gamma);
    apply_mixer(state, beta);
}
