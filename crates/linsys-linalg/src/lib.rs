//! Real vectors of small dimension for the `linsys` crate.
//!
//! # Rounding policy
//!
//! Coordinates produced by the arithmetic in this crate are rounded to a fixed number of decimal
//! places (3 by default), so that results print and compare the same way on every platform. The
//! policy is an explicit [`Precision`] value carried by every [`Vector`] rather than global state,
//! which keeps it testable per call.
//!
//! # Environment Variables
//!
//! [`Precision::from_env`] reads the following variables. Neither is consulted unless that
//! function is called.
//!
//! * `LINSYS_DECIMALS`: number of decimal places to round to, at most [`MAX_DECIMALS`].
//! * `LINSYS_EPSILON`: tolerance below which a value counts as zero.
//!
//! # Goals & Non-Goals
//!
//! - Vectors have a runtime dimension checked on every binary operation, returning
//!   [`VectorError::DimensionMismatch`] instead of panicking.
//! - Only [`f64`] elements. Mixing numeric types was a source of inconsistent rounding.
//! - Dimensions up to 4 are stored inline; there is no support for sparse or large vectors.

pub mod approx;
mod error;
mod precision;
mod vector;

pub use error::*;
pub use precision::*;
pub use vector::*;
