//! Error types for the core crate.

use thiserror::Error;

/// Shape errors raised when constructing problem inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// `returns` and `names` disagree on the number of assets.
    #[error("returns lists {returns} assets but names lists {names}")]
    NameCountMismatch {
        /// Number of entries in `returns`.
        returns: usize,
        /// Number of entries in `names`.
        names: usize,
    },

    /// The risk matrix has the wrong number of rows.
    #[error("risk matrix has {rows} rows but the portfolio has {assets} assets")]
    RiskRowCountMismatch {
        /// Number of rows in the risk matrix.
        rows: usize,
        /// Number of assets in the portfolio.
        assets: usize,
    },

    /// A risk matrix row has the wrong length.
    #[error("risk matrix row {row} has {len} entries, expected {expected}")]
    RiskRowLengthMismatch {
        /// Index of the offending row.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Expected row length (the number of assets).
        expected: usize,
    },

    /// The beta and gamma angle schedules disagree on the number of layers.
    #[error("betas lists {betas} angles but gammas lists {gammas}")]
    AngleCountMismatch {
        /// Number of beta angles.
        betas: usize,
        /// Number of gamma angles.
        gammas: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
