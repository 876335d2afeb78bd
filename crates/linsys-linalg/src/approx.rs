//! Approximate equality for test assertions.
//!
//! Everything in this crate rounds to a fixed number of decimal places, so exact floating-point
//! comparisons in tests are brittle. [`assert_approx_eq!`][crate::assert_approx_eq] compares
//! values within the rounding tolerance of the default [`Precision`][crate::Precision] instead.

mod impls;

use std::{fmt, panic::Location};

/// Default tolerance for *absolute comparisons*: half a unit in the third decimal place would
/// be enough after rounding, a full unit also absorbs rounding that happened on both sides.
pub const DEFAULT_ABS_TOLERANCE: f64 = 1e-3;

/// Default tolerance for *relative comparisons*.
pub const DEFAULT_REL_TOLERANCE: f64 = f64::EPSILON;

/// Types that can be compared for *approximate equality*.
///
/// Compound types are considered *equal* if they have the same shape and all of their elements
/// are. A shape mismatch (eg. vectors of different dimension) is never equal.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to `tolerance`,
    /// the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two magnitudes times `tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. [`Asserter::abs`] and [`Asserter::rel`]
/// select the comparisons to perform; if both are requested, the values are equal if either
/// comparison says so. Without configuration, an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`] and a relative comparison with [`DEFAULT_REL_TOLERANCE`] are
/// performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f64>,
    rel: Option<f64>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    pub fn abs(&mut self, abs: f64) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against their largest magnitude scaled by
    /// `rel`.
    pub fn rel(&mut self, rel: f64) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |tol| self.left.abs_diff_eq(self.right, tol));
        let rel = self
            .rel
            .map_or(false, |tol| self.left.rel_diff_eq(self.right, tol));
        abs || rel
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, the location is recorded in `new` instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(DEFAULT_ABS_TOLERANCE);
            self.rel = Some(DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the
/// comparison and tolerance.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_eq!(vec2(7.0891, -7.2302), vec2(7.089, -7.23));
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_ne!(1.0, 1.01);
/// assert_approx_ne!(vec2(1.0, 2.0), vec3(1.0, 2.0, 0.0));
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
