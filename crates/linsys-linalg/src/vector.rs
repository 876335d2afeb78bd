use std::{f64::consts::PI, fmt};

use tinyvec::TinyVec;

use crate::{Precision, VectorError};

mod ops;

/// Inline storage for the common 2D to 4D case; larger vectors spill onto the heap.
type Coordinates = TinyVec<[f64; 4]>;

/// Unit of the value returned by [`Vector::angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// A real-valued vector whose dimension is fixed at construction.
///
/// # Construction
///
/// - [`Vector::new`] collects coordinates from an iterator and fails if there are none.
/// - [`Vector::zero`] creates the zero vector of a given dimension.
/// - The freestanding [`vec2`] and [`vec3`] functions create 2D and 3D vectors directly.
///
/// # Rounding
///
/// [`Vector::plus`], [`Vector::minus`], [`Vector::multiply`] and [`Vector::cross_product`] round
/// every resulting coordinate according to the vector's [`Precision`] (3 decimal places unless
/// configured otherwise). Dot products, magnitudes and angles are computed at full precision.
/// The operator impls ([`Neg`], `Vector * f64`) and [`Vector::add_scaled`] do not round either;
/// they exist for callers that accumulate many operations, like row reduction.
///
/// # Dimensions
///
/// Binary operations require both vectors to have the same dimension and return
/// [`VectorError::DimensionMismatch`] otherwise.
///
/// [`Neg`]: std::ops::Neg
#[derive(Clone)]
pub struct Vector {
    coords: Coordinates,
    precision: Precision,
}

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] if `coords` yields no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::new([8.218, -9.341]).unwrap();
    /// assert_eq!(v.dimension(), 2);
    /// assert_eq!(Vector::new([0.0; 0]), Err(VectorError::Empty));
    /// ```
    pub fn new<I>(coords: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = f64>,
    {
        let coords: Coordinates = coords.into_iter().collect();
        if coords.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(Self {
            coords,
            precision: Precision::DEFAULT,
        })
    }

    /// Creates the zero vector with `dimension` coordinates.
    pub fn zero(dimension: usize) -> Result<Self, VectorError> {
        Self::new(std::iter::repeat(0.0).take(dimension))
    }

    /// Returns `self` with its [`Precision`] replaced by `precision`.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }

    /// Returns whether every coordinate is within the near-zero tolerance.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|c| self.precision.is_near_zero(c))
    }

    /// Returns the index of the first coordinate that is not near zero, or [`None`] if there is
    /// no such coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// assert_eq!(vec3(0.0, 1e-12, -2.0).first_nonzero_index(), Some(2));
    /// assert_eq!(vec2(0.0, 0.0).first_nonzero_index(), None);
    /// ```
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.iter().position(|c| !self.precision.is_near_zero(c))
    }

    fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self {
            coords: self.iter().map(f).collect(),
            precision: self.precision,
        }
    }

    fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self, VectorError> {
        self.check_dimension(other)?;
        Ok(Self {
            coords: self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
            precision: self.precision,
        })
    }

    fn check_dimension(&self, other: &Self) -> Result<(), VectorError> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            })
        }
    }

    /// Element-wise sum, rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = vec2(8.218, -9.341).plus(&vec2(-1.129, 2.111)).unwrap();
    /// assert_eq!(v, vec2(7.089, -7.23));
    /// ```
    pub fn plus(&self, other: &Self) -> Result<Self, VectorError> {
        let p = self.precision;
        self.zip_with(other, |a, b| p.round(a + b))
    }

    /// Element-wise difference, rounded.
    pub fn minus(&self, other: &Self) -> Result<Self, VectorError> {
        let p = self.precision;
        self.zip_with(other, |a, b| p.round(a - b))
    }

    /// Scales every coordinate by `scalar`, rounded.
    pub fn multiply(&self, scalar: f64) -> Self {
        let p = self.precision;
        self.map(|c| p.round(c * scalar))
    }

    /// Scales every coordinate by `factor` without rounding.
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|c| c * factor)
    }

    /// Computes `self + factor * other` without rounding.
    pub fn add_scaled(&self, factor: f64, other: &Self) -> Result<Self, VectorError> {
        self.zip_with(other, |a, b| a + factor * b)
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let m = vec2(-0.221, 7.437).magnitude();
    /// assert_eq!(Precision::DEFAULT.round(m), 7.44);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Returns the unit vector pointing in the same direction as `self`, rounded.
    ///
    /// # Errors
    ///
    /// The zero vector has no direction, [`VectorError::UndefinedDirection`] is returned for it.
    pub fn direction(&self) -> Result<Self, VectorError> {
        let magnitude = self.magnitude();
        if self.precision.is_near_zero(magnitude) {
            return Err(VectorError::UndefinedDirection);
        }
        Ok(self.multiply(1.0 / magnitude))
    }

    /// Computes the dot product of `self` and `other` at full precision.
    pub fn dot_product(&self, other: &Self) -> Result<f64, VectorError> {
        self.check_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Computes the angle between `self` and `other`.
    ///
    /// The cosine is clamped to `[-1, 1]` before taking its arc cosine, so (anti)parallel vectors
    /// whose cosine drifts slightly out of range due to floating-point error still yield `0` or
    /// `π`.
    ///
    /// # Errors
    ///
    /// The angle to or from the zero vector is undefined; [`VectorError::UndefinedDirection`] is
    /// returned in that case.
    pub fn angle(&self, other: &Self, unit: AngleUnit) -> Result<f64, VectorError> {
        let dot = self.dot_product(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(VectorError::UndefinedDirection);
        }
        let magnitudes = self.magnitude() * other.magnitude();

        let radians = (dot / magnitudes).clamp(-1.0, 1.0).acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * (180.0 / PI),
        })
    }

    /// Returns whether `self` and `other` are parallel.
    ///
    /// The zero vector is parallel to every vector. Otherwise, the vectors are parallel if their
    /// rounded unit vectors are equal or opposite. Because the comparison happens after rounding,
    /// vectors that differ in direction by less than the rounding step are considered parallel,
    /// and anything beyond that is not.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, VectorError> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        let a = self.direction()?;
        let b = other.direction()?;
        Ok(a == b || a == -b)
    }

    /// Returns whether `self` and `other` are orthogonal, ie. whether their dot product is within
    /// the near-zero tolerance of zero.
    ///
    /// The zero vector is orthogonal to every vector.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool, VectorError> {
        let dot = self.dot_product(other)?;
        Ok(self.precision.is_near_zero(dot))
    }

    /// Returns the component of `self` parallel to `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NoUniqueParallelComponent`] if `basis` is the zero vector.
    pub fn projection(&self, basis: &Self) -> Result<Self, VectorError> {
        self.check_dimension(basis)?;
        let unit = basis.direction().map_err(|e| match e {
            VectorError::UndefinedDirection => VectorError::NoUniqueParallelComponent,
            e => e,
        })?;
        let length = self.dot_product(&unit)?;
        Ok(unit.multiply(length))
    }

    /// Returns the component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NoUniqueOrthogonalComponent`] if `basis` is the zero vector.
    pub fn orthogonal(&self, basis: &Self) -> Result<Self, VectorError> {
        let parallel = self.projection(basis).map_err(|e| match e {
            VectorError::NoUniqueParallelComponent => VectorError::NoUniqueOrthogonalComponent,
            e => e,
        })?;
        self.minus(&parallel)
    }

    /// Computes the cross product of two 3-dimensional vectors, rounded.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if either vector is not 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross_product(&y).unwrap(), vec3(0.0, 0.0, 1.0));
    /// assert!(vec2(1.0, 0.0).cross_product(&vec2(0.0, 1.0)).is_err());
    /// ```
    pub fn cross_product(&self, other: &Self) -> Result<Self, VectorError> {
        let (&[a1, a2, a3], &[b1, b2, b3]) = (self.as_3d()?, other.as_3d()?);
        let p = self.precision;

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        Ok(vec3(p.round(cross[0]), p.round(cross[1]), p.round(cross[2])).with_precision(p))
    }

    fn as_3d(&self) -> Result<&[f64; 3], VectorError> {
        self.coordinates()
            .try_into()
            .map_err(|_| VectorError::DimensionMismatch {
                expected: 3,
                actual: self.dimension(),
            })
    }

    /// Returns the area of the parallelogram spanned by two 3-dimensional vectors.
    pub fn parallelogram_area(&self, other: &Self) -> Result<f64, VectorError> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Returns the area of the triangle spanned by two 3-dimensional vectors.
    pub fn triangle_area(&self, other: &Self) -> Result<f64, VectorError> {
        Ok(self.parallelogram_area(other)? / 2.0)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        Self::new(coords.iter().copied())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.coordinates() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.coordinates().iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a 2-dimensional [`Vector`] from its two coordinates.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector {
    Vector {
        coords: [x, y].into_iter().collect(),
        precision: Precision::DEFAULT,
    }
}

/// Constructs a 3-dimensional [`Vector`] from its three coordinates.
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector {
        coords: [x, y, z].into_iter().collect(),
        precision: Precision::DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::try_from(coords).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(Vector::new([0.0; 0]).unwrap_err(), VectorError::Empty);
        assert_eq!(Vector::zero(0).unwrap_err(), VectorError::Empty);
        assert_eq!(Vector::zero(3).unwrap(), vec3(0.0, 0.0, 0.0));
        assert_eq!(v(&[1.0, 2.0, 3.0, 4.0, 5.0]).dimension(), 5);
        assert_eq!(vec2(1.0, 2.0).coordinates(), &[1.0, 2.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(vec2(7.089, -7.23).to_string(), "(7.089, -7.23)");
        assert_eq!(format!("{:?}", vec3(1.0, 0.0, 2.5)), "(1.0, 0.0, 2.5)");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(
            vec2(8.218, -9.341).plus(&vec2(-1.129, 2.111)).unwrap(),
            vec2(7.089, -7.23)
        );
        assert_eq!(
            vec2(7.119, 8.215).minus(&vec2(-8.223, 0.878)).unwrap(),
            vec2(15.342, 7.337)
        );
        assert_eq!(
            vec3(1.671, -1.012, -0.318).multiply(7.41),
            vec3(12.382, -7.499, -2.356)
        );
        assert_eq!(
            vec2(1.0, 2.0).plus(&vec3(1.0, 2.0, 3.0)).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn unrounded_arithmetic() {
        let a = vec2(1.0, 1.0);
        let b = vec2(1.0 / 3.0, 0.0);
        assert_eq!(a.add_scaled(3.0, &b).unwrap()[0], 1.0 + 3.0 * (1.0 / 3.0));
        assert_eq!(b.scaled(3.0)[0], (1.0 / 3.0) * 3.0);
        assert_eq!(b.multiply(1.0)[0], 0.333);
    }

    #[test]
    fn magnitude_and_direction() {
        assert_approx_eq!(vec2(-0.221, 7.437).magnitude(), 7.44);
        assert_approx_eq!(vec3(8.813, -1.331, -6.247).magnitude(), 10.884);
        assert_eq!(vec2(5.581, -2.136).direction().unwrap(), vec2(0.934, -0.357));
        assert_eq!(
            vec3(1.996, 3.108, -4.554).direction().unwrap(),
            vec3(0.34, 0.53, -0.777)
        );
        assert_eq!(
            vec2(0.0, 0.0).direction().unwrap_err(),
            VectorError::UndefinedDirection
        );
    }

    #[test]
    fn dot_and_angle() {
        assert_approx_eq!(
            vec2(7.887, 4.138).dot_product(&vec2(-8.802, 6.776)).unwrap(),
            -41.382
        );
        assert_approx_eq!(
            vec3(-5.955, -4.904, -1.874)
                .dot_product(&vec3(-4.496, -8.755, 7.103))
                .unwrap(),
            56.397
        );
        assert_approx_eq!(
            vec2(3.183, -7.627)
                .angle(&vec2(-2.668, 5.319), AngleUnit::Radians)
                .unwrap(),
            3.072
        );
        assert_approx_eq!(
            vec3(7.35, 0.221, 5.188)
                .angle(&vec3(2.751, 8.259, 3.985), AngleUnit::Degrees)
                .unwrap(),
            60.276
        );
        assert_eq!(
            vec2(1.0, 0.0)
                .angle(&vec2(0.0, 0.0), AngleUnit::Radians)
                .unwrap_err(),
            VectorError::UndefinedDirection
        );
    }

    #[test]
    fn angle_of_short_vectors() {
        let angle = vec2(1e-6, 0.0)
            .angle(&vec2(0.0, 1e-6), AngleUnit::Degrees)
            .unwrap();
        assert_approx_eq!(angle, 90.0);
        assert_eq!(
            vec2(1e-11, 0.0)
                .angle(&vec2(1.0, 0.0), AngleUnit::Radians)
                .unwrap_err(),
            VectorError::UndefinedDirection
        );
    }

    #[test]
    fn angle_of_parallel_vectors_is_clamped() {
        let a = vec3(0.1, 0.2, 0.3);
        let b = a.scaled(3.0);
        let angle = a.angle(&b, AngleUnit::Radians).unwrap();
        assert!(!angle.is_nan());
        assert_approx_eq!(angle, 0.0).abs(1e-6);

        let opposite = a.angle(&-b, AngleUnit::Degrees).unwrap();
        assert_approx_eq!(opposite, 180.0).abs(1e-4);
    }

    #[test]
    fn parallel_and_orthogonal() {
        let a = vec2(-7.579, -7.88);
        let b = vec2(22.737, 23.64);
        assert!(a.is_parallel(&b).unwrap());
        assert!(!a.is_orthogonal(&b).unwrap());

        let a = vec3(-2.029, 9.97, 4.172);
        let b = vec3(-9.231, -6.639, -7.245);
        assert!(!a.is_parallel(&b).unwrap());
        assert!(!a.is_orthogonal(&b).unwrap());

        let a = vec3(-2.328, -7.284, -1.214);
        let b = vec3(-1.821, 1.072, -2.94);
        assert!(!a.is_parallel(&b).unwrap());
        assert!(a.is_orthogonal(&b).unwrap());

        let a = vec2(2.118, 4.827);
        let zero = vec2(0.0, 0.0);
        assert!(a.is_parallel(&zero).unwrap());
        assert!(a.is_orthogonal(&zero).unwrap());
        assert!(zero.is_parallel(&zero).unwrap());

        assert!(a.is_parallel(&vec3(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn projections() {
        let a = vec2(3.039, 1.879);
        let b = vec2(0.825, 2.036);
        assert_approx_eq!(a.projection(&b).unwrap(), vec2(1.083, 2.672)).abs(0.005);

        let a = vec3(-9.88, -3.264, -8.159);
        let b = vec3(-2.155, -9.353, -9.473);
        assert_approx_eq!(a.orthogonal(&b).unwrap(), vec3(-8.35, 3.376, -1.434)).abs(0.005);

        let a = vec3(3.009, -6.172, 3.692);
        let b = vec3(6.404, -9.144, 2.759);
        let parallel = a.projection(&b).unwrap();
        let orthogonal = a.orthogonal(&b).unwrap();
        assert_approx_eq!(parallel.plus(&orthogonal).unwrap(), a);

        let zero = vec2(0.0, 0.0);
        assert_eq!(
            vec2(1.0, 2.0).projection(&zero).unwrap_err(),
            VectorError::NoUniqueParallelComponent
        );
        assert_eq!(
            vec2(1.0, 2.0).orthogonal(&zero).unwrap_err(),
            VectorError::NoUniqueOrthogonalComponent
        );
    }

    #[test]
    fn cross_and_areas() {
        let a = vec3(8.462, 7.893, -8.187);
        let b = vec3(6.984, -5.975, 4.778);
        assert_eq!(
            a.cross_product(&b).unwrap(),
            vec3(-11.205, -97.609, -105.685)
        );

        let a = vec3(-8.987, -9.838, 5.031);
        let b = vec3(-4.268, -1.861, -8.866);
        assert_approx_eq!(a.parallelogram_area(&b).unwrap(), 142.122).abs(0.01);

        let a = vec3(1.5, 9.547, 3.691);
        let b = vec3(-6.007, 0.124, 5.772);
        assert_approx_eq!(a.triangle_area(&b).unwrap(), 42.565).abs(0.01);

        assert_eq!(
            vec2(1.0, 2.0).cross_product(&vec3(1.0, 2.0, 3.0)).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn precision_is_inherited() {
        let p = Precision::DEFAULT.with_decimals(1);
        let a = vec2(1.26, 0.0).with_precision(p);
        let sum = a.plus(&vec2(0.0, 0.04)).unwrap();
        assert_eq!(sum, vec2(1.3, 0.0));
        assert_eq!(sum.precision(), p);
        assert_eq!(sum.multiply(2.0).precision(), p);
    }

    #[test]
    fn first_nonzero() {
        assert_eq!(vec3(0.0, 0.0, 0.0).first_nonzero_index(), None);
        assert_eq!(vec3(1e-11, -1e-11, 0.5).first_nonzero_index(), Some(2));
        assert!(vec3(1e-11, -1e-11, 0.0).is_zero());
        assert!(!vec3(1e-9, 0.0, 0.0).is_zero());
    }

    #[test]
    fn properties() {
        let mut rng = fastrand::Rng::with_seed(0x5eed_1234);
        let mut gen = || rng.f64() * 20.0 - 10.0;

        for _ in 0..200 {
            let p = Precision::DEFAULT;
            let a = vec3(p.round(gen()), p.round(gen()), p.round(gen()));
            let b = vec3(p.round(gen()), p.round(gen()), p.round(gen()));

            let round_trip = a.plus(&b).unwrap().minus(&b).unwrap();
            assert_approx_eq!(round_trip, a);

            assert_eq!(a.dot_product(&b).unwrap(), b.dot_product(&a).unwrap());

            let cross = a.cross_product(&b).unwrap();
            // The cross product is rounded, so allow for the rounding error scaled by the inputs.
            assert_approx_eq!(a.dot_product(&cross).unwrap(), 0.0).abs(0.1);
            assert_approx_eq!(b.dot_product(&cross).unwrap(), 0.0).abs(0.1);

            if !a.is_zero() {
                assert_approx_eq!(a.direction().unwrap().magnitude(), 1.0).abs(0.002);
            }
        }
    }
}
