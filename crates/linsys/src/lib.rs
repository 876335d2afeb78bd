//! Linear equations, lines, planes, and Gaussian elimination over small real vector spaces.
//!
//! The building blocks are:
//!
//! * [`Vector`] (re-exported from `linsys-linalg`): vector arithmetic and geometric relations.
//! * [`Equation`]: a linear equation `a_1 x_1 + ... + a_n x_n = k`, with the [`Line`] (2D) and
//!   [`Plane`] (3D) wrappers.
//! * [`LinearSystem`]: a list of equations supporting elementary row operations and reduction
//!   to triangular (row-echelon) form.
//!
//! Systems are only reduced, never solved: there is no back-substitution.
//!
//! # Numeric Policy
//!
//! Every value carries a [`Precision`] controlling how results are rounded and which values
//! count as zero. The default rounds to 3 decimal places and treats magnitudes below `1e-10` as
//! zero. See the `linsys-linalg` crate for details and for the environment variables read by
//! [`Precision::from_env`].
//!
//! # Logging
//!
//! This crate logs through the [`log`] facade. Row reductions log at *debug* level, and every
//! pivot decision at *trace* level. Applications can use [`init_logger!`] to set up a logger.
//!
//! [`log`]: https://docs.rs/log

use log::LevelFilter;

mod equation;
mod error;
mod line;
mod plane;
mod system;

pub use equation::*;
pub use error::*;
pub use line::*;
pub use linsys_linalg::{
    approx, assert_approx_eq, assert_approx_ne, vec2, vec3, AngleUnit, ConfigError, Precision,
    Vector, VectorError, DECIMALS_VAR, EPSILON_VAR, MAX_DECIMALS,
};
pub use plane::*;
pub use system::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("linsys_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *trace*
/// level. Otherwise, they will log at *debug* level. The `RUST_LOG` environment variable takes
/// precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
