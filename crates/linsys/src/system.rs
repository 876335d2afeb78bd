//! Systems of linear equations and row reduction.

use std::{fmt, ops::Index};

use itertools::Itertools;
use linsys_linalg::Precision;

use crate::{Equation, Error, Result};

/// An ordered list of [`Equation`]s ("rows") that all have the same number of variables.
///
/// The elementary row operations ([`LinearSystem::swap_rows`],
/// [`LinearSystem::multiply_coefficient_and_row`] and
/// [`LinearSystem::add_multiple_times_row_to_row`]) modify the system in place, addressing rows
/// by index. [`LinearSystem::compute_triangular_form`] instead works on a copy and leaves `self`
/// alone.
///
/// The system adopts the [`Precision`] of its first equation and applies it to every row, so
/// pivot selection and each row's leading term agree on which coefficients are zero.
/// [`LinearSystem::with_precision`] switches every row to another precision.
///
/// # Examples
///
/// ```
/// # use linsys::*;
/// let system = LinearSystem::new([
///     Plane::new([1.0, 1.0, 1.0], 1.0),
///     Plane::new([0.0, 1.0, 0.0], 2.0),
///     Plane::new([1.0, 1.0, -1.0], 3.0),
///     Plane::new([1.0, 0.0, -2.0], 2.0),
/// ])?;
///
/// let triangular = system.compute_triangular_form()?;
/// assert_eq!(triangular[2].to_string(), "-2x_3 = 2");
/// assert_eq!(triangular[3].to_string(), "0 = 0");
/// assert_eq!(
///     triangular.indices_of_first_nonzero_terms_in_each_row(),
///     [Some(0), Some(1), Some(2), None],
/// );
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    rows: Vec<Equation>,
    dimension: usize,
    precision: Precision,
}

impl LinearSystem {
    /// Creates a linear system from a list of equations (or [`Line`]s, or [`Plane`]s).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptySystem`] if `equations` is empty, and with
    /// [`Error::DimensionMismatch`] if an equation does not have the same dimension as the first
    /// one.
    ///
    /// Every equation is converted to the precision of the first one.
    ///
    /// [`Line`]: crate::Line
    /// [`Plane`]: crate::Plane
    pub fn new<I>(equations: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Equation>,
    {
        let rows: Vec<Equation> = equations.into_iter().map(Into::into).collect();
        let first = rows.first().ok_or(Error::EmptySystem)?;
        let (dimension, precision) = (first.dimension(), first.precision());
        for row in &rows {
            if row.dimension() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    actual: row.dimension(),
                });
            }
        }

        Ok(Self {
            rows: rows
                .into_iter()
                .map(|row| row.with_precision(precision))
                .collect(),
            dimension,
            precision,
        })
    }

    /// Returns `self` with every row using `precision`.
    pub fn with_precision(self, precision: Precision) -> Self {
        Self {
            rows: self
                .rows
                .into_iter()
                .map(|row| row.with_precision(precision))
                .collect(),
            dimension: self.dimension,
            precision,
        }
    }

    /// Returns the number of equations in the system.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`, since a system cannot be constructed without equations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of variables of every equation.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equation> + '_ {
        self.rows.iter()
    }

    /// Replaces row `index` with `equation`, converted to the system's precision.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or `equation` has the wrong dimension. The system is left
    /// unchanged in that case.
    pub fn set(&mut self, index: usize, equation: impl Into<Equation>) -> Result<()> {
        let equation = equation.into();
        self.check_row(index)?;
        if equation.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: equation.dimension(),
            });
        }
        self.rows[index] = equation.with_precision(self.precision);
        Ok(())
    }

    /// Exchanges rows `row1` and `row2`.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.rows.swap(row1, row2);
        Ok(())
    }

    /// Multiplies both sides of equation `row` by `coefficient`.
    ///
    /// A `coefficient` of zero is accepted, but turns the row into the equation `0 = 0`.
    pub fn multiply_coefficient_and_row(&mut self, coefficient: f64, row: usize) -> Result<()> {
        self.check_row(row)?;
        if coefficient == 0.0 {
            log::warn!(
                "scaling row {} (`{}`) by zero discards the equation",
                row,
                self.rows[row]
            );
        }
        self.rows[row] = self.rows[row].scaled(coefficient);
        Ok(())
    }

    /// Adds `coefficient` times row `row_to_add` to row `row_to_be_added_to`.
    ///
    /// Row `row_to_add` is left unmodified.
    pub fn add_multiple_times_row_to_row(
        &mut self,
        coefficient: f64,
        row_to_add: usize,
        row_to_be_added_to: usize,
    ) -> Result<()> {
        self.check_row(row_to_add)?;
        self.check_row(row_to_be_added_to)?;
        self.rows[row_to_be_added_to] =
            self.rows[row_to_be_added_to].add_multiple(coefficient, &self.rows[row_to_add])?;
        Ok(())
    }

    /// For every row, returns the column of its first coefficient that is not near zero, or
    /// [`None`] if there is no such coefficient.
    pub fn indices_of_first_nonzero_terms_in_each_row(&self) -> Vec<Option<usize>> {
        self.rows.iter().map(Equation::first_nonzero_index).collect()
    }

    /// Computes a row-echelon ("triangular") form of this system using Gaussian elimination.
    ///
    /// The reduction works on a copy; `self` is not modified. In the result, the leading
    /// coefficient of every row is strictly to the right of the leading coefficient of the row
    /// above it, and rows without any nonzero coefficient are moved to the bottom.
    ///
    /// This does not perform back-substitution and does not classify the solution set.
    pub fn compute_triangular_form(&self) -> Result<LinearSystem> {
        let mut system = self.clone();
        system.reduce_to_triangular_form()?;
        Ok(system)
    }

    fn reduce_to_triangular_form(&mut self) -> Result<()> {
        log::debug!(
            "reducing {}x{} system to triangular form",
            self.len(),
            self.dimension
        );

        let mut column = 0;
        for row in 0..self.len() {
            while column < self.dimension {
                if self.is_near_zero_at(row, column) {
                    match self.find_pivot_row_below(row, column) {
                        Some(pivot_row) => {
                            log::trace!(
                                "column {}: swapping row {} with row {}",
                                column,
                                row,
                                pivot_row
                            );
                            self.swap_rows(row, pivot_row)?;
                        }
                        None => {
                            log::trace!("column {}: no pivot for row {}", column, row);
                            column += 1;
                            continue;
                        }
                    }
                }

                self.clear_coefficients_below(row, column)?;
                column += 1;
                break;
            }
        }

        log::debug!(
            "triangular form has leading terms at {:?}",
            self.indices_of_first_nonzero_terms_in_each_row()
        );
        Ok(())
    }

    fn is_near_zero_at(&self, row: usize, column: usize) -> bool {
        self.precision
            .is_near_zero(self.rows[row].normal_vector()[column])
    }

    fn find_pivot_row_below(&self, row: usize, column: usize) -> Option<usize> {
        (row + 1..self.len()).find(|&below| !self.is_near_zero_at(below, column))
    }

    fn clear_coefficients_below(&mut self, row: usize, column: usize) -> Result<()> {
        let pivot = self.rows[row].normal_vector()[column];
        log::trace!("column {}: pivot {} in row {}", column, pivot, row);

        for below in row + 1..self.len() {
            // Already zero as far as every other comparison is concerned.
            if self.is_near_zero_at(below, column) {
                continue;
            }
            let coefficient = -self.rows[below].normal_vector()[column] / pivot;
            log::trace!(
                "column {}: adding {} times row {} to row {}",
                column,
                coefficient,
                row,
                below
            );
            self.add_multiple_times_row_to_row(coefficient, row, below)?;
        }
        Ok(())
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::RowOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

impl Index<usize> for LinearSystem {
    type Output = Equation;

    fn index(&self, index: usize) -> &Equation {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .format_with("\n", |(i, row), f| {
                f(&format_args!("Equation {}: {}", i + 1, row))
            });
        write!(f, "Linear System:\n{}", rows)
    }
}
