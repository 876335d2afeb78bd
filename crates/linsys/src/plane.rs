//! Planes in 3D space.

use std::{fmt, ops::Deref};

use linsys_linalg::{vec3, Precision};

use crate::{Equation, Error, Result};

/// A plane in 3D, described by the equation `a x_1 + b x_2 + c x_3 = k`.
///
/// Like [`Line`][crate::Line], this is a thin wrapper that fixes the dimension of an
/// [`Equation`] and dereferences to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane(Equation);

impl Plane {
    /// Creates the plane `normal_vector . (x_1, x_2, x_3) = constant_term`.
    pub fn new(normal_vector: [f64; 3], constant_term: f64) -> Self {
        let [a, b, c] = normal_vector;
        Self(Equation::new(vec3(a, b, c), constant_term))
    }

    pub fn with_precision(self, precision: Precision) -> Self {
        Self(self.0.with_precision(precision))
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new([0.0, 0.0, 0.0], 0.0)
    }
}

impl Deref for Plane {
    type Target = Equation;

    fn deref(&self) -> &Equation {
        &self.0
    }
}

impl From<Plane> for Equation {
    fn from(plane: Plane) -> Self {
        plane.0
    }
}

impl TryFrom<Equation> for Plane {
    type Error = Error;

    fn try_from(equation: Equation) -> Result<Self> {
        match equation.dimension() {
            3 => Ok(Self(equation)),
            actual => Err(Error::DimensionMismatch {
                expected: 3,
                actual,
            }),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_and_equal() {
        let a = Plane::new([-0.412, 3.806, 0.728], -3.46);
        let b = Plane::new([1.03, -9.515, -1.82], 8.65);
        assert!(a.is_parallel(&b).unwrap());
        assert!(a.are_equal(&b).unwrap());
    }

    #[test]
    fn crossing() {
        let a = Plane::new([2.611, 5.528, 0.283], 4.6);
        let b = Plane::new([7.715, 8.306, 5.342], 3.76);
        assert!(!a.is_parallel(&b).unwrap());
        assert!(!a.are_equal(&b).unwrap());
    }

    #[test]
    fn parallel_distinct() {
        let a = Plane::new([-7.926, 8.625, -7.212], -7.952);
        let b = Plane::new([-2.642, 2.875, -2.404], -2.443);
        assert!(a.is_parallel(&b).unwrap());
        assert!(!a.are_equal(&b).unwrap());
    }

    #[test]
    fn default() {
        let plane = Plane::default();
        assert_eq!(plane.dimension(), 3);
        assert_eq!(plane.basepoint(), None);
        assert_eq!(plane.to_string(), "0 = 0");
    }

    #[test]
    fn conversions() {
        let plane = Plane::new([1.0, 0.0, -1.0], 2.0);
        assert_eq!(plane.to_string(), "x_1 - x_3 = 2");
        let equation: Equation = plane.clone().into();
        assert_eq!(Plane::try_from(equation).unwrap(), plane);
        assert_eq!(
            Plane::try_from(Equation::zero(2).unwrap()).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
