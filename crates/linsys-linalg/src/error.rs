//! Error types for vector operations and precision configuration.

use thiserror::Error;

/// Errors raised by [`Vector`][crate::Vector] construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A vector was constructed from zero coordinates.
    #[error("the coordinates must be nonempty")]
    Empty,

    /// Two operands (or an operand and an operation) disagree on the dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The zero vector has no direction.
    #[error("cannot normalize the zero vector")]
    UndefinedDirection,

    /// Projection onto the zero vector.
    #[error("no unique parallel component")]
    NoUniqueParallelComponent,

    /// Decomposition relative to the zero vector.
    #[error("no unique orthogonal component")]
    NoUniqueOrthogonalComponent,
}

/// Errors raised when reading a [`Precision`][crate::Precision] from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value set for `{name}` variable: '{value}'")]
    InvalidVariable { name: &'static str, value: String },
}
