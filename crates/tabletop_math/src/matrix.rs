//! Matrices of arbitrary size.

use crate::{
    error::{MathError, MathResult},
    vector::dot_components,
};
use approx::{AbsDiffEq, RelativeEq};
use std::{fmt, ops::Index};

/// A rectangular `height`×`width` matrix of `f64` elements, stored row by
/// row.
///
/// Every operation returns a new matrix and leaves its operands untouched.
/// Row and column arguments of [`submatrix`](Self::submatrix),
/// [`minor`](Self::minor) and [`cofactor`](Self::cofactor) are 1-indexed,
/// while [`element`](Self::element), [`row`](Self::row) and indexing use
/// zero-based indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix with `height` rows and `width` columns where every
    /// element is `fill`.
    pub fn filled(width: usize, height: usize, fill: f64) -> Self {
        Self {
            width,
            height,
            elements: vec![fill; width * height],
        }
    }

    /// Creates a matrix with `height` rows and `width` columns of zeros.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Creates the `size`×`size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut identity = Self::zeros(size, size);
        for i in 0..size {
            identity.set(i, i, 1.0);
        }
        identity
    }

    /// Creates a matrix taking ownership of the given grid, with rows as the
    /// outer and columns as the inner level.
    ///
    /// # Errors
    /// Returns [`MathError::RaggedGrid`] if the rows are not all of the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MathResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut elements = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MathError::RaggedGrid {
                    row: row_idx,
                    length: row.len(),
                    expected: width,
                });
            }
            elements.extend(row);
        }

        Ok(Self {
            width,
            height,
            elements,
        })
    }

    /// Creates a matrix from a fixed-size array of rows.
    pub fn from_array<const W: usize, const H: usize>(rows: [[f64; W]; H]) -> Self {
        Self {
            width: W,
            height: H,
            elements: rows.into_iter().flatten().collect(),
        }
    }

    /// Creates an independent copy of the given matrix.
    pub fn copy_of(other: &Self) -> Self {
        other.clone()
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The `(height, width)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// The element at the given zero-based row and column, or [`None`] if
    /// either is out of bounds.
    pub fn element(&self, row: usize, column: usize) -> Option<f64> {
        (row < self.height && column < self.width).then(|| self[(row, column)])
    }

    /// The row with the given zero-based index.
    ///
    /// # Panics
    /// If the index is out of bounds.
    pub fn row(&self, index: usize) -> &[f64] {
        assert!(index < self.height, "row {index} out of bounds");
        &self.elements[index * self.width..(index + 1) * self.width]
    }

    /// Iterates over the rows of the matrix from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        (0..self.height).map(move |index| self.row(index))
    }

    /// Returns a copy of the grid of elements, rows outermost.
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Computes the transpose, which has `width` rows and `height` columns.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.height, self.width);
        for m in 0..self.height {
            for n in 0..self.width {
                transposed.set(n, m, self[(m, n)]);
            }
        }
        transposed
    }

    /// Multiplies every element by the given scalar.
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        self.map(|value| value * scalar)
    }

    /// Divides every element by the given scalar.
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.multiply_scalar(1.0 / scalar)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// The product is only accepted when the height of `self` equals the
    /// width of `other`, in addition to each row of `self` having as many
    /// elements as each column of `other`. The result has the height of
    /// `self` and the width of `other`.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if either condition fails.
    pub fn multiply(&self, other: &Self) -> MathResult<Self> {
        if self.height != other.width || self.width != other.height {
            return Err(MathError::shape_mismatch(
                "matrix multiplication",
                self.shape(),
                other.shape(),
            ));
        }
        Ok(self.product(other))
    }

    /// Computes `self * other.inverse()`.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if either matrix is not square and
    /// [`MathError::DivisionUndefined`] if either determinant is zero.
    pub fn divide(&self, other: &Self) -> MathResult<Self> {
        if self.determinant()? == 0.0 || other.determinant()? == 0.0 {
            return Err(MathError::DivisionUndefined);
        }
        self.multiply(&other.inverse()?)
    }

    /// Computes the elementwise sum.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] unless both matrices have the
    /// same shape.
    pub fn add(&self, other: &Self) -> MathResult<Self> {
        if self.shape() != other.shape() {
            return Err(MathError::shape_mismatch(
                "matrix addition",
                self.shape(),
                other.shape(),
            ));
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Computes the elementwise difference.
    ///
    /// # Errors
    /// See [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> MathResult<Self> {
        self.add(&other.multiply_scalar(-1.0))
    }

    /// Returns the matrix with row `i` and column `j` (both 1-indexed)
    /// removed. A matrix smaller than 2×2 in both dimensions is returned
    /// unchanged.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if `i` or `j` is zero or
    /// exceeds the height or width respectively.
    pub fn submatrix(&self, i: usize, j: usize) -> MathResult<Self> {
        if i == 0 || j == 0 || i > self.height || j > self.width {
            return Err(MathError::IndexOutOfBounds {
                row: i,
                column: j,
                height: self.height,
                width: self.width,
            });
        }
        if self.width < 2 && self.height < 2 {
            return Ok(self.clone());
        }
        Ok(self.submatrix_unchecked(i, j))
    }

    /// Computes the determinant by Laplace expansion along the first row.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if the matrix is not square.
    pub fn determinant(&self) -> MathResult<f64> {
        self.require_square("determinant")?;
        Ok(self.determinant_unchecked())
    }

    /// Computes the determinant of [`submatrix(i, j)`](Self::submatrix).
    ///
    /// # Errors
    /// See [`submatrix`](Self::submatrix) and
    /// [`determinant`](Self::determinant).
    pub fn minor(&self, i: usize, j: usize) -> MathResult<f64> {
        self.submatrix(i, j)?.determinant()
    }

    /// Computes the minor at `(i, j)` with the checkerboard sign of `i + j`.
    ///
    /// # Errors
    /// See [`minor`](Self::minor).
    pub fn cofactor(&self, i: usize, j: usize) -> MathResult<f64> {
        Ok(sign(i + j) * self.minor(i, j)?)
    }

    /// Computes the matrix of all cofactors.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] unless the matrix is square.
    pub fn cofactor_matrix(&self) -> MathResult<Self> {
        let mut cofactors = Self::zeros(self.width, self.height);
        for i in 1..=self.height {
            for j in 1..=self.width {
                cofactors.set(i - 1, j - 1, self.cofactor(i, j)?);
            }
        }
        Ok(cofactors)
    }

    /// Computes the adjoint (adjugate), the transpose of the cofactor
    /// matrix.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if the matrix is not square.
    pub fn adjoint(&self) -> MathResult<Self> {
        self.require_square("adjoint")?;
        // The only minor of a 1x1 matrix is the empty determinant
        if self.height == 1 {
            return Ok(Self::identity(1));
        }
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Computes the inverse as the adjoint divided by the determinant.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if the matrix is not square and
    /// [`MathError::SingularMatrix`] if the determinant is zero.
    pub fn inverse(&self) -> MathResult<Self> {
        self.require_square("inverse")?;

        let determinant = self.determinant_unchecked();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix);
        }

        Ok(self.adjoint()?.divide_scalar(determinant))
    }

    /// Raises the matrix to the given integer power. A power of zero gives
    /// the identity and negative powers are powers of the inverse.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if the matrix is not square and
    /// [`MathError::SingularMatrix`] for a negative power of a singular
    /// matrix.
    pub fn pow(&self, power: i32) -> MathResult<Self> {
        self.require_square("power")?;

        if power == 0 {
            return Ok(Self::identity(self.height));
        }

        let base = if power < 0 {
            self.inverse()?
        } else {
            self.clone()
        };

        let mut result = base.clone();
        for _ in 1..power.unsigned_abs() {
            result = result.product(&base);
        }
        Ok(result)
    }

    /// Computes the sum of the diagonal elements.
    ///
    /// # Errors
    /// Returns [`MathError::NonSquare`] if the matrix is not square.
    pub fn trace(&self) -> MathResult<f64> {
        self.require_square("trace")?;
        Ok((0..self.height).map(|i| self[(i, i)]).sum())
    }

    /// Multiplies two matrices already known to be compatible.
    pub(crate) fn product(&self, other: &Self) -> Self {
        debug_assert_eq!(self.width, other.height);

        let other_transposed = other.transpose();
        let mut product = Self::zeros(other.width, self.height);
        for m in 0..self.height {
            for n in 0..other.width {
                product.set(m, n, dot_components(self.row(m), other_transposed.row(n)));
            }
        }
        product
    }

    /// The cofactor at `(i, j)` of a matrix known to be square and at least
    /// 2x2.
    pub(crate) fn cofactor_unchecked(&self, i: usize, j: usize) -> f64 {
        sign(i + j) * self.submatrix_unchecked(i, j).determinant_unchecked()
    }

    fn submatrix_unchecked(&self, i: usize, j: usize) -> Self {
        let elements = self
            .rows()
            .enumerate()
            .filter(|&(m, _)| m != i - 1)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(n, _)| n != j - 1)
                    .map(|(_, &value)| value)
            })
            .collect();

        Self {
            width: self.width - 1,
            height: self.height - 1,
            elements,
        }
    }

    fn determinant_unchecked(&self) -> f64 {
        match self.height {
            0 => 1.0,
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)],
            _ => (0..self.width)
                .map(|n| {
                    sign(n)
                        * self[(0, n)]
                        * self.submatrix_unchecked(1, n + 1).determinant_unchecked()
                })
                .sum(),
        }
    }

    fn require_square(&self, operation: &'static str) -> MathResult<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MathError::NonSquare {
                operation,
                height: self.height,
                width: self.width,
            })
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            width: self.width,
            height: self.height,
            elements: self.elements.iter().copied().map(f).collect(),
        }
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        self.elements[row * self.width + column] = value;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.height && column < self.width,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.height,
            self.width
        );
        &self.elements[row * self.width + column]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl_binop!(Mul, mul, Matrix, f64, Matrix, |a, b| {
    a.multiply_scalar(*b)
});

impl_binop!(Div, div, Matrix, f64, Matrix, |a, b| { a.divide_scalar(*b) });

impl_unary_op!(Neg, neg, Matrix, Matrix, |a| { a.multiply_scalar(-1.0) });

impl_abs_diff_eq!(Matrix, |a, b, epsilon| {
    a.shape() == b.shape()
        && a.elements
            .iter()
            .zip(&b.elements)
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!(Matrix, |a, b, epsilon, max_relative| {
    a.shape() == b.shape()
        && a.elements
            .iter()
            .zip(&b.elements)
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

/// `+1` for even and `-1` for odd numbers.
fn sign(number: usize) -> f64 {
    if number % 2 == 0 { 1.0 } else { -1.0 }
}
