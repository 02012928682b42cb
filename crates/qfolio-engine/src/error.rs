//! Error types for the engine crate.

use thiserror::Error;

/// Errors produced by the optimization driver and tuner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// grid_size must be ≥ 1.
    #[error("grid_size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    /// Problem construction failed.
    #[error("problem construction error: {0}")]
    Core(#[from] qfolio_core::CoreError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
