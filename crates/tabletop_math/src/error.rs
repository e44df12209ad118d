//! Errors raised by matrix and vector operations.

use thiserror::Error;

pub type MathResult<T> = std::result::Result<T, MathError>;

/// A failed precondition of a matrix or vector operation.
///
/// Operations either succeed completely or fail before producing any result.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum MathError {
    #[error("Dimension mismatch: {lhs} is incompatible with {rhs} for {operation}")]
    DimensionMismatch {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },

    #[error("Operation {operation} requires a square matrix, got {height}x{width}")]
    NonSquare {
        operation: &'static str,
        height: usize,
        width: usize,
    },

    #[error("Matrix is singular and has no inverse")]
    SingularMatrix,

    #[error("Division by a matrix is undefined when either determinant is zero")]
    DivisionUndefined,

    #[error("Index ({row}, {column}) is out of bounds for a {height}x{width} matrix")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },

    #[error("Row {row} has length {length}, expected {expected}")]
    RaggedGrid {
        row: usize,
        length: usize,
        expected: usize,
    },
}

impl MathError {
    pub(crate) fn shape_mismatch(
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            lhs: format!("{}x{}", lhs.0, lhs.1),
            rhs: format!("{}x{}", rhs.0, rhs.1),
        }
    }

    pub(crate) fn dimension_mismatch(operation: &'static str, lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch {
            operation,
            lhs: format!("{lhs}D"),
            rhs: format!("{rhs}D"),
        }
    }
}
