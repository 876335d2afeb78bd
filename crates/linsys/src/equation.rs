//! Linear equations in `n` variables.

use std::fmt;

use linsys_linalg::{Precision, Vector};

use crate::{Error, Result};

/// A linear equation `a_1 x_1 + ... + a_n x_n = k`.
///
/// The coefficients `a_i` form the *normal vector* of the hyperplane described by the equation
/// (a line in 2D, a plane in 3D), `k` is the *constant term*. Each equation also keeps a
/// *basepoint*, one point known to satisfy it, which is recomputed whenever a new equation is
/// built. The basepoint is absent exactly when every coefficient is near zero.
///
/// Equations are values: operations like [`Equation::scaled`] return a new equation instead of
/// modifying `self`.
///
/// # Formatting
///
/// The [`Display`] impl prints the equation the way it would be written by hand, rounding every
/// number to the precision of the normal vector:
///
/// ```
/// # use linsys::*;
/// let eq = Equation::from_coefficients([1.0, -1.0, 2.5], 1.21).unwrap();
/// assert_eq!(eq.to_string(), "x_1 - x_2 + 2.5x_3 = 1.210");
///
/// let eq = Equation::from_coefficients([0.0, 0.0, -2.0], 2.0).unwrap();
/// assert_eq!(eq.to_string(), "-2x_3 = 2");
///
/// assert_eq!(Equation::zero(3).unwrap().to_string(), "0 = 0");
/// ```
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    normal_vector: Vector,
    constant_term: f64,
    basepoint: Option<Vector>,
}

impl Equation {
    /// Creates an equation from its normal vector and constant term.
    ///
    /// The equation uses the [`Precision`] of `normal_vector`.
    pub fn new(normal_vector: Vector, constant_term: f64) -> Self {
        let basepoint = basepoint(&normal_vector, constant_term);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Creates an equation from a list of coefficients and a constant term.
    ///
    /// # Errors
    ///
    /// Fails if `coefficients` is empty.
    pub fn from_coefficients<I>(coefficients: I, constant_term: f64) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Ok(Self::new(Vector::new(coefficients)?, constant_term))
    }

    /// Creates the equation `0 = 0` in `dimension` variables.
    pub fn zero(dimension: usize) -> Result<Self> {
        Ok(Self::new(Vector::zero(dimension)?, 0.0))
    }

    /// Returns `self` using `precision` for rounding and near-zero decisions.
    ///
    /// Since the near-zero tolerance decides which coefficient is the leading one, the basepoint
    /// is recomputed.
    pub fn with_precision(self, precision: Precision) -> Self {
        Self::new(
            self.normal_vector.with_precision(precision),
            self.constant_term,
        )
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> f64 {
        self.constant_term
    }

    /// Returns a point satisfying this equation, or [`None`] if every coefficient is near zero.
    ///
    /// The basepoint is zero everywhere except at the index of the leading coefficient.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns the number of variables.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.normal_vector.precision()
    }

    /// Returns the index of the first coefficient that is not near zero.
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal_vector.first_nonzero_index()
    }

    /// Returns the index and value of the first coefficient that is not near zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNonzeroElements`] if every coefficient is near zero.
    pub fn leading_term(&self) -> Result<(usize, f64)> {
        leading_term(&self.normal_vector)
    }

    /// Returns whether the hyperplanes described by `self` and `other` are parallel, ie. whether
    /// their normal vectors are.
    pub fn is_parallel(&self, other: &Self) -> Result<bool> {
        self.check_dimension(other)?;
        Ok(self.normal_vector.is_parallel(&other.normal_vector)?)
    }

    /// Returns whether `self` and `other` describe the same set of points.
    ///
    /// Two parallel equations are equal if the vector connecting their basepoints is orthogonal
    /// to the normal vector. Equations whose coefficients are all zero only equal each other, and
    /// only if their constant terms match (`0 = 0` is satisfied everywhere, `0 = 1` nowhere).
    pub fn are_equal(&self, other: &Self) -> Result<bool> {
        if !self.is_parallel(other)? {
            return Ok(false);
        }

        match (&self.basepoint, &other.basepoint) {
            (Some(a), Some(b)) => {
                let connecting = a.add_scaled(-1.0, b)?;
                Ok(connecting.is_orthogonal(&self.normal_vector)?)
            }
            (None, None) => Ok(self
                .precision()
                .is_near_zero(self.constant_term - other.constant_term)),
            _ => Ok(false),
        }
    }

    /// Multiplies both sides of the equation by `coefficient`.
    ///
    /// Scaling by zero yields the equation `0 = 0`, which loses all information.
    pub fn scaled(&self, coefficient: f64) -> Self {
        Self::new(
            self.normal_vector.scaled(coefficient),
            self.constant_term * coefficient,
        )
    }

    /// Returns `self + coefficient * other`, adding both sides of the equations.
    pub fn add_multiple(&self, coefficient: f64, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(Self::new(
            self.normal_vector
                .add_scaled(coefficient, &other.normal_vector)?,
            self.constant_term + coefficient * other.constant_term,
        ))
    }

    pub(crate) fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            })
        }
    }
}

fn leading_term(normal_vector: &Vector) -> Result<(usize, f64)> {
    let index = normal_vector
        .first_nonzero_index()
        .ok_or(Error::NoNonzeroElements)?;
    Ok((index, normal_vector[index]))
}

fn basepoint(normal_vector: &Vector, constant_term: f64) -> Option<Vector> {
    // No leading term means no basepoint.
    let Ok((index, coefficient)) = leading_term(normal_vector) else {
        return None;
    };

    let value = constant_term / coefficient;
    let coords = (0..normal_vector.dimension()).map(|i| if i == index { value } else { 0.0 });
    Vector::new(coords)
        .ok()
        .map(|v| v.with_precision(normal_vector.precision()))
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.precision();

        match self.first_nonzero_index() {
            Some(initial) => {
                let mut terms = self
                    .normal_vector
                    .iter()
                    .map(|c| precision.round(c))
                    .enumerate()
                    .filter(|&(_, c)| c != 0.0)
                    .peekable();
                while let Some((i, c)) = terms.next() {
                    write_coefficient(f, c, i == initial)?;
                    write!(f, "x_{}", i + 1)?;
                    if terms.peek().is_some() {
                        f.write_str(" ")?;
                    }
                }
            }
            None => f.write_str("0")?,
        }

        let constant = precision.round(self.constant_term);
        if constant.fract() == 0.0 {
            write!(f, " = {}", constant)
        } else {
            write!(f, " = {:.*}", precision.decimals() as usize, constant)
        }
    }
}

/// Writes an already rounded coefficient: a sign (a leading `+` is dropped for the initial term),
/// and the magnitude unless it is 1.
fn write_coefficient(f: &mut fmt::Formatter<'_>, coefficient: f64, is_initial: bool) -> fmt::Result {
    if coefficient < 0.0 {
        f.write_str("-")?;
    } else if !is_initial {
        f.write_str("+")?;
    }
    if !is_initial {
        f.write_str(" ")?;
    }
    if coefficient.abs() != 1.0 {
        write!(f, "{}", coefficient.abs())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, vec3, VectorError};

    use super::*;

    fn eq(coefficients: &[f64], constant: f64) -> Equation {
        Equation::from_coefficients(coefficients.iter().copied(), constant).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(
            Equation::from_coefficients([0.0; 0], 1.0).unwrap_err(),
            Error::Vector(VectorError::Empty)
        );

        let zero = Equation::zero(3).unwrap();
        assert_eq!(zero.dimension(), 3);
        assert_eq!(zero.constant_term(), 0.0);
        assert!(zero.basepoint().is_none());
    }

    #[test]
    fn basepoint() {
        let e = eq(&[0.0, 2.0, 4.0], 3.0);
        assert_eq!(e.basepoint().unwrap(), &vec3(0.0, 1.5, 0.0));
        assert_eq!(e.leading_term().unwrap(), (1, 2.0));

        let degenerate = eq(&[1e-11, 0.0], 5.0);
        assert_eq!(degenerate.basepoint(), None);
        assert_eq!(degenerate.leading_term().unwrap_err(), Error::NoNonzeroElements);
    }

    #[test]
    fn basepoint_follows_precision() {
        let e = eq(&[1e-6, 1.0], 2.0);
        assert_eq!(e.first_nonzero_index(), Some(0));

        let coarse = e.with_precision(Precision::DEFAULT.with_epsilon(1e-3));
        assert_eq!(coarse.first_nonzero_index(), Some(1));
        assert_eq!(coarse.basepoint().unwrap(), &[0.0, 2.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(eq(&[1.0, 1.0, 1.0], 1.0).to_string(), "x_1 + x_2 + x_3 = 1");
        assert_eq!(eq(&[-1.0, -1.0, 1.0], -3.0).to_string(), "-x_1 - x_2 + x_3 = -3");
        assert_eq!(eq(&[10.0, 11.0, 10.0], 12.0).to_string(), "10x_1 + 11x_2 + 10x_3 = 12");
        assert_eq!(eq(&[4.046, 2.836], 1.21).to_string(), "4.046x_1 + 2.836x_2 = 1.210");
        assert_eq!(eq(&[0.0, -2.0, 0.5], 2.5).to_string(), "-2x_2 + 0.5x_3 = 2.500");
        assert_eq!(eq(&[1.00049, 0.0], -0.0001).to_string(), "x_1 = 0");
        assert_eq!(eq(&[0.0, 0.0], 7.0).to_string(), "0 = 7");
        // leading coefficient is nonzero but rounds away
        assert_eq!(eq(&[0.0001, 3.0], 1.0).to_string(), "+ 3x_2 = 1");
    }

    #[test]
    fn scaled_and_added() {
        let a = eq(&[1.0, 2.0, 3.0], 4.0);
        let b = eq(&[0.0, 1.0, -1.0], 2.0);

        assert_eq!(a.scaled(-1.0), eq(&[-1.0, -2.0, -3.0], -4.0));
        assert_eq!(a.scaled(0.0).to_string(), "0 = 0");
        assert_eq!(a.add_multiple(2.0, &b).unwrap(), eq(&[1.0, 4.0, 1.0], 8.0));

        let third = a.scaled(1.0 / 3.0);
        assert_approx_eq!(third.normal_vector()[0], 1.0 / 3.0).abs(1e-15);

        assert_eq!(
            a.add_multiple(1.0, &eq(&[1.0, 1.0], 1.0)).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn parallel_and_equal() {
        let a = eq(&[1.0, 2.0], 3.0);
        let b = eq(&[2.0, 4.0], 6.0);
        let c = eq(&[2.0, 4.0], 5.0);
        let d = eq(&[2.0, -1.0], 0.0);

        assert!(a.is_parallel(&b).unwrap());
        assert!(a.are_equal(&b).unwrap());
        assert!(a.is_parallel(&c).unwrap());
        assert!(!a.are_equal(&c).unwrap());
        assert!(!a.is_parallel(&d).unwrap());
        assert!(!a.are_equal(&d).unwrap());
        assert!(a.is_parallel(&eq(&[1.0, 2.0, 3.0], 1.0)).is_err());
    }

    #[test]
    fn degenerate_equality() {
        let whole_space = Equation::zero(2).unwrap();
        let nowhere = eq(&[0.0, 0.0], 1.0);
        let line = eq(&[1.0, 1.0], 1.0);

        assert!(whole_space.are_equal(&Equation::zero(2).unwrap()).unwrap());
        assert!(!whole_space.are_equal(&nowhere).unwrap());
        assert!(nowhere.are_equal(&eq(&[0.0, 0.0], 1.0)).unwrap());
        // the zero normal vector is parallel to everything, but the point sets differ
        assert!(line.is_parallel(&whole_space).unwrap());
        assert!(!line.are_equal(&whole_space).unwrap());
    }
}
