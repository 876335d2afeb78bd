//! Lines in the plane.

use std::{fmt, ops::Deref};

use linsys_linalg::{vec2, Precision, Vector};

use crate::{Equation, Error, Result};

/// A line in 2D, described by the equation `a x_1 + b x_2 = k`.
///
/// [`Line`] dereferences to [`Equation`], so every equation method (parallelism, equality,
/// basepoint, formatting) is available on lines as well.
///
/// # Examples
///
/// ```
/// # use linsys::*;
/// let a = Line::new([4.046, 2.836], 1.21);
/// let b = Line::new([10.115, 7.09], 3.025);
/// assert!(a.is_parallel(&b)?);
/// assert!(a.are_equal(&b)?);
/// assert_eq!(a.find_intersection(&b)?, Intersection::Infinite);
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line(Equation);

/// Outcome of intersecting two lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The lines coincide.
    Infinite,
    /// The lines are parallel and distinct.
    Empty,
    /// The lines cross at a single point.
    Point(Vector),
}

impl Line {
    /// Creates the line `normal_vector[0] x_1 + normal_vector[1] x_2 = constant_term`.
    pub fn new(normal_vector: [f64; 2], constant_term: f64) -> Self {
        let [a, b] = normal_vector;
        Self(Equation::new(vec2(a, b), constant_term))
    }

    pub fn with_precision(self, precision: Precision) -> Self {
        Self(self.0.with_precision(precision))
    }

    /// Intersects `self` with `other`.
    ///
    /// The intersection point of two crossing lines is found with Cramer's rule and rounded to
    /// the line's precision.
    pub fn find_intersection(&self, other: &Line) -> Result<Intersection> {
        if self.are_equal(other)? {
            return Ok(Intersection::Infinite);
        }
        if self.is_parallel(other)? {
            return Ok(Intersection::Empty);
        }

        let (a, b) = (self.normal_vector()[0], self.normal_vector()[1]);
        let (c, d) = (other.normal_vector()[0], other.normal_vector()[1]);
        let (k1, k2) = (self.constant_term(), other.constant_term());

        let precision = self.precision();
        let det = a * d - b * c;
        if precision.is_near_zero(det) {
            // Directions differ only beyond the rounding used by the parallelism test.
            log::debug!(
                "lines `{}` and `{}` are numerically parallel (det = {})",
                self,
                other,
                det
            );
            return Ok(Intersection::Empty);
        }

        let x = (d * k1 - b * k2) / det;
        let y = (a * k2 - c * k1) / det;
        Ok(Intersection::Point(
            vec2(precision.round(x), precision.round(y)).with_precision(precision),
        ))
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new([0.0, 0.0], 0.0)
    }
}

impl Deref for Line {
    type Target = Equation;

    fn deref(&self) -> &Equation {
        &self.0
    }
}

impl From<Line> for Equation {
    fn from(line: Line) -> Self {
        line.0
    }
}

impl TryFrom<Equation> for Line {
    type Error = Error;

    fn try_from(equation: Equation) -> Result<Self> {
        match equation.dimension() {
            2 => Ok(Self(equation)),
            actual => Err(Error::DimensionMismatch {
                expected: 2,
                actual,
            }),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Infinite => f.write_str("infinite intersections"),
            Intersection::Empty => f.write_str("no intersection"),
            Intersection::Point(point) => fmt::Display::fmt(point, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coinciding() {
        let a = Line::new([4.046, 2.836], 1.21);
        let b = Line::new([10.115, 7.09], 3.025);
        assert!(a.is_parallel(&b).unwrap());
        assert!(a.are_equal(&b).unwrap());
        assert_eq!(a.find_intersection(&b).unwrap(), Intersection::Infinite);
    }

    #[test]
    fn crossing() {
        let a = Line::new([7.204, 3.182], 8.68);
        let b = Line::new([8.172, 4.114], 9.883);
        assert!(!a.is_parallel(&b).unwrap());
        assert!(!a.are_equal(&b).unwrap());
        assert_eq!(
            a.find_intersection(&b).unwrap(),
            Intersection::Point(vec2(1.173, 0.073))
        );
    }

    #[test]
    fn parallel() {
        let a = Line::new([1.182, 5.562], 6.744);
        let b = Line::new([1.773, 8.343], 9.525);
        assert!(a.is_parallel(&b).unwrap());
        assert!(!a.are_equal(&b).unwrap());
        assert_eq!(a.find_intersection(&b).unwrap(), Intersection::Empty);
    }

    #[test]
    fn axis_aligned() {
        let vertical = Line::new([1.0, 0.0], 2.0);
        let horizontal = Line::new([0.0, 1.0], -3.0);
        assert_eq!(
            vertical.find_intersection(&horizontal).unwrap(),
            Intersection::Point(vec2(2.0, -3.0))
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(Line::new([4.046, 2.836], 1.21).to_string(), "4.046x_1 + 2.836x_2 = 1.210");
        assert_eq!(Line::default().to_string(), "0 = 0");
        assert_eq!(Intersection::Infinite.to_string(), "infinite intersections");
        assert_eq!(Intersection::Empty.to_string(), "no intersection");
        assert_eq!(
            Intersection::Point(vec2(1.173, 0.073)).to_string(),
            "(1.173, 0.073)"
        );
    }

    #[test]
    fn conversions() {
        let line = Line::new([1.0, 2.0], 3.0);
        let equation = Equation::from(line.clone());
        assert_eq!(Line::try_from(equation).unwrap(), line);
        assert_eq!(
            Line::try_from(Equation::zero(3).unwrap()).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
