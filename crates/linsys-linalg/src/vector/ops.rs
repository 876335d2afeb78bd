//! Implementations of `std::ops` and comparison traits.
//!
//! None of these round their results.

use std::ops::{Index, Mul, Neg};

use crate::approx::ApproxEq;

use super::Vector;

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

// Precision is a property of how a vector is computed with, not of its value.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates() == other.coordinates()
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.coordinates() == other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.coordinates() == other.as_slice()
    }
}

impl ApproxEq for Vector {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.coordinates().abs_diff_eq(other.coordinates(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.coordinates().rel_diff_eq(other.coordinates(), tolerance)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Vector-scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

/// Vector-scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates().iter()
    }
}
