//! `qfolio-sim` — statevector simulation of the QAOA portfolio ansatz.
//!
//! Provides the dense 2^n-amplitude [`Statevector`] with the H / Rx / Rz /
//! CNOT gate kernel, projective measurement sampling, and the
//! [`ansatz`] executor that alternates cost and mixer unitaries over an
//! Ising problem.
//!
//! Qubit 0 is the least-significant bit of every basis-state index; the
//! convention is shared by gate application and measurement decoding.
//!
//! # Quick start
//!
//! ```rust
//! use qfolio_core::Qubo;
//! use qfolio_sim::{ansatz, Statevector};
//!
//! let ising = Qubo::from_matrix(vec![
//!     vec![-0.06, 0.02],
//!     vec![0.02, -0.06],
//! ])
//! .to_ising();
//!
//! let mut state = Statevector::uniform(2);
//! ansatz::qaoa_layer(&mut state, &ising, 1.0, 0.5);
//!
//! let outcome = state.sample();
//! assert!(outcome < 4);
//! ```

pub mod ansatz;
pub mod statevector;

pub use statevector::Statevector;
