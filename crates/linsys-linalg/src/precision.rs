//! Rounding and near-zero tolerance settings.

use std::env::{self, VarError};

use crate::ConfigError;

/// Environment variable overriding [`Precision::decimals`].
pub const DECIMALS_VAR: &str = "LINSYS_DECIMALS";
/// Environment variable overriding [`Precision::epsilon`].
pub const EPSILON_VAR: &str = "LINSYS_EPSILON";

/// Largest supported [`Precision::decimals`]. `f64` carries about 15 significant decimal digits,
/// rounding to more places than that does not change any value.
pub const MAX_DECIMALS: u32 = 15;

/// Numeric policy shared by vectors, equations and linear systems.
///
/// Two independent knobs are bundled here:
///
/// - [`Precision::decimals`] is the number of decimal places that rounded arithmetic
///   ([`Vector::plus`], [`Vector::minus`], [`Vector::multiply`], [`Vector::cross_product`]) and
///   textual output round to.
/// - [`Precision::epsilon`] is the tolerance below which a coefficient is treated as zero. It is
///   used for pivot selection, for detecting degenerate (all-zero) normal vectors, and for the
///   orthogonality test.
///
/// Every [`Vector`] carries the precision it was created with, and vectors derived from it
/// inherit that precision.
///
/// [`Vector`]: crate::Vector
/// [`Vector::plus`]: crate::Vector::plus
/// [`Vector::minus`]: crate::Vector::minus
/// [`Vector::multiply`]: crate::Vector::multiply
/// [`Vector::cross_product`]: crate::Vector::cross_product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    decimals: u32,
    epsilon: f64,
}

impl Precision {
    /// 3 decimal places, near-zero tolerance of `1e-10`.
    pub const DEFAULT: Self = Self {
        decimals: 3,
        epsilon: 1e-10,
    };

    /// Creates a precision policy.
    ///
    /// # Panics
    ///
    /// Panics if `decimals` exceeds [`MAX_DECIMALS`], or if `epsilon` is negative or not finite.
    pub fn new(decimals: u32, epsilon: f64) -> Self {
        assert!(
            decimals <= MAX_DECIMALS,
            "cannot round to {decimals} decimal places, the maximum is {MAX_DECIMALS}"
        );
        assert!(
            epsilon.is_finite() && epsilon >= 0.0,
            "near-zero tolerance must be a non-negative finite number, got {epsilon}"
        );
        Self { decimals, epsilon }
    }

    /// Reads the precision from the `LINSYS_DECIMALS` and `LINSYS_EPSILON` environment variables.
    ///
    /// Variables that are not set keep their [`Precision::DEFAULT`] value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut precision = Self::DEFAULT;

        if let Some(value) = read_var(DECIMALS_VAR)? {
            precision.decimals = match value.trim().parse::<u32>() {
                Ok(decimals) if decimals <= MAX_DECIMALS => decimals,
                _ => return Err(invalid(DECIMALS_VAR, value)),
            };
        }
        if let Some(value) = read_var(EPSILON_VAR)? {
            precision.epsilon = match value.trim().parse::<f64>() {
                Ok(eps) if eps.is_finite() && eps >= 0.0 => eps,
                _ => return Err(invalid(EPSILON_VAR, value)),
            };
        }

        log::debug!("using precision {:?}", precision);
        Ok(precision)
    }

    /// Returns the number of decimal places used for rounding.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the near-zero tolerance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns a copy with a different number of decimal places.
    ///
    /// # Panics
    ///
    /// Panics if `decimals` exceeds [`MAX_DECIMALS`].
    pub fn with_decimals(self, decimals: u32) -> Self {
        Self::new(decimals, self.epsilon)
    }

    /// Returns a copy with a different near-zero tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self::new(self.decimals, epsilon)
    }

    /// Rounds `value` to [`Precision::decimals`] decimal places.
    ///
    /// Negative zero is normalized to `0.0`, so rounded values print without a stray sign.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let p = Precision::DEFAULT;
    /// assert_eq!(p.round(7.0891), 7.089);
    /// assert_eq!(p.round(-0.0001), 0.0);
    /// ```
    pub fn round(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scale = 10f64.powi(self.decimals as i32);
        let scaled = value * scale;
        if !scaled.is_finite() {
            // too large to carry any fractional digits
            return value;
        }
        let rounded = scaled.round() / scale;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Returns whether `value` is within [`Precision::epsilon`] of zero.
    #[inline]
    pub fn is_near_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => Err(invalid(name, s.to_string_lossy().into_owned())),
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidVariable { name, value }
}
