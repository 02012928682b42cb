//! `qfolio-engine` — QAOA sampling driver and angle tuner.
//!
//! Ties the problem compiler ([`qfolio_core`]) to the statevector ansatz
//! executor ([`qfolio_sim`]): [`optimize`] runs the shot loop and returns
//! the best selection observed; [`tune_parameters`] grid-searches the
//! (β, γ) angles feeding it.
//!
//! Every entry point comes in an explicit-RNG variant (`*_with_rng`) for
//! reproducible runs and a thread-RNG convenience wrapper.
//!
//! # Quick start
//!
//! ```rust
//! use qfolio_core::{PortfolioData, QaoaParameters};
//! use qfolio_engine::optimize_with_rng;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let portfolio = PortfolioData::new(
//!     vec![0.10, 0.08],
//!     vec![vec![0.04, 0.01], vec![0.01, 0.02]],
//!     vec!["AAPL".into(), "MSFT".into()],
//!     10_000.0,
//!     1.0,
//! )?;
//! let params = QaoaParameters::new(vec![0.5], vec![1.0], 25)?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = optimize_with_rng(&portfolio, &params, &mut rng);
//! assert_eq!(result.best_bitstring.len(), 2);
//! assert_eq!(result.samples, 25);
//! assert!(result.cost.is_finite());
//! # Ok::<(), qfolio_core::CoreError>(())
//! ```

pub mod error;
pub mod optimizer;
pub mod tuner;

pub use error::{EngineError, EngineResult};
pub use optimizer::{optimize, optimize_with_rng, OptimizeResult};
pub use tuner::{tune_parameters, tune_parameters_with_rng};
