//! `qfolio-core` — portfolio selection problem model and QUBO compilation.
//!
//! Compiles a portfolio (returns, risk matrix, risk-aversion weight) into
//! the coupled forms the QAOA engine consumes:
//!
//! - [`Qubo`] — cost over binary selection masks x ∈ {0,1}^n
//! - [`IsingModel`] — the equivalent spin form (h, J, offset) driving the
//!   cost unitary
//!
//! plus the cost-evaluator operations on candidate selections (QUBO energy,
//! mean return, average pairwise risk, name extraction).
//!
//! # Quick start
//!
//! ```rust
//! use qfolio_core::{PortfolioData, Qubo};
//!
//! let portfolio = PortfolioData::new(
//!     vec![0.10, 0.08],
//!     vec![vec![0.04, 0.01], vec![0.01, 0.02]],
//!     vec!["AAPL".into(), "MSFT".into()],
//!     10_000.0,
//!     1.0,
//! )?;
//!
//! let qubo = Qubo::from_portfolio(&portfolio);
//! assert_eq!(qubo.n(), 2);
//! assert_eq!(qubo.cost(&[false, false]), 0.0);
//! # Ok::<(), qfolio_core::CoreError>(())
//! ```

pub mod error;
pub mod portfolio;
pub mod qubo;

pub use error::{CoreError, CoreResult};
pub use portfolio::{PortfolioData, QaoaParameters};
pub use qubo::{selection_to_spins, IsingModel, Qubo};
