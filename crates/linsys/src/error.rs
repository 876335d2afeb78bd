//! Error types for equations and linear systems.

use linsys_linalg::VectorError;
use thiserror::Error;

/// Result type for equation and linear system operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or transforming equations and linear systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vector operation failed.
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// An equation does not live in the expected dimension.
    #[error("all equations in the system should live in the same dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Every coefficient of a normal vector is within tolerance of zero.
    #[error("no nonzero elements found")]
    NoNonzeroElements,

    /// A row operation referenced a row that does not exist.
    #[error("row index {index} is out of range for a system of {len} equations")]
    RowOutOfRange { index: usize, len: usize },

    /// A linear system needs at least one equation to determine its dimension.
    #[error("a linear system needs at least one equation")]
    EmptySystem,
}
