//! Vectors.

use crate::{
    error::{MathError, MathResult},
    matrix::Matrix,
};
use approx::{AbsDiffEq, RelativeEq};
use std::ops::Index;

/// A vector of arbitrary dimension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

/// A vector with exactly three components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D {
    components: [f64; 3],
}

impl Vector {
    /// Creates a vector taking ownership of the given components.
    #[inline]
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Creates a vector of zeros with the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![0.0; dimension])
    }

    /// The number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// The components of the vector.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Consumes the vector and returns its components.
    pub fn into_components(self) -> Vec<f64> {
        self.components
    }

    /// Multiplies every component by the given scalar.
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        self.components.iter().map(|value| value * scalar).collect()
    }

    /// Divides every component by the given scalar.
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.multiply_scalar(1.0 / scalar)
    }

    /// Computes the componentwise sum. Vectors of different dimension are
    /// accepted, with the missing trailing components of the shorter one
    /// treated as zero.
    pub fn add(&self, other: &Self) -> Self {
        let dimension = self.dimension().max(other.dimension());
        (0..dimension)
            .map(|idx| {
                self.components.get(idx).copied().unwrap_or(0.0)
                    + other.components.get(idx).copied().unwrap_or(0.0)
            })
            .collect()
    }

    /// Computes the componentwise difference, zero-padding like
    /// [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.multiply_scalar(-1.0))
    }

    /// Computes the dot product of this vector with another.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> MathResult<f64> {
        if self.dimension() != other.dimension() {
            return Err(MathError::dimension_mismatch(
                "dot product",
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(dot_components(&self.components, &other.components))
    }

    /// Computes the Euclidean length of the vector.
    pub fn length(&self) -> f64 {
        dot_components(&self.components, &self.components).sqrt()
    }

    /// Divides the vector by its length. A zero vector gives NaN components.
    pub fn normalized(&self) -> Self {
        self.divide_scalar(self.length())
    }

    /// Computes the distance between the points `a` and `b`.
    pub fn distance(a: &Self, b: &Self) -> f64 {
        b.subtract(a).length()
    }

    /// Computes the angle in radians between `a` and `b`.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the dimensions differ.
    pub fn angle(a: &Self, b: &Self) -> MathResult<f64> {
        Ok((a.dot(b)? / (a.length() * b.length())).acos())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<Vector3D> for Vector {
    fn from(vector: Vector3D) -> Self {
        Self::new(vector.components.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl_binop!(Add, add, Vector, Vector, Vector, |a, b| {
    Vector::add(a, b)
});

impl_binop!(Sub, sub, Vector, Vector, Vector, |a, b| {
    Vector::subtract(a, b)
});

impl_binop!(Mul, mul, Vector, f64, Vector, |a, b| {
    a.multiply_scalar(*b)
});

impl_binop!(Div, div, Vector, f64, Vector, |a, b| {
    a.divide_scalar(*b)
});

impl_unary_op!(Neg, neg, Vector, Vector, |a| { a.multiply_scalar(-1.0) });

impl_abs_diff_eq!(Vector, |a, b, epsilon| {
    a.dimension() == b.dimension()
        && a.components
            .iter()
            .zip(&b.components)
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!(Vector, |a, b, epsilon, max_relative| {
    a.dimension() == b.dimension()
        && a.components
            .iter()
            .zip(&b.components)
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

impl Vector3D {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector from the first three values of the given slice,
    /// padding with zeros if it is shorter.
    pub fn from_slice(values: &[f64]) -> Self {
        let component = |idx: usize| values.get(idx).copied().unwrap_or(0.0);
        Self::new(component(0), component(1), component(2))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.components[2]
    }

    /// The components of the vector.
    #[inline]
    pub const fn components(&self) -> &[f64; 3] {
        &self.components
    }

    /// Always 3.
    #[inline]
    pub const fn dimension(&self) -> usize {
        3
    }

    /// Multiplies every component by the given scalar.
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Divides every component by the given scalar.
    pub fn divide_scalar(&self, scalar: f64) -> Self {
        self.multiply_scalar(1.0 / scalar)
    }

    /// Computes the componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Computes the componentwise difference.
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.multiply_scalar(-1.0))
    }

    /// Computes the dot product of this vector with another.
    pub fn dot(&self, other: &Self) -> f64 {
        dot_components(&self.components, &other.components)
    }

    /// Computes the Euclidean length of the vector.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides the vector by its length. A zero vector gives NaN components.
    pub fn normalized(&self) -> Self {
        self.divide_scalar(self.length())
    }

    /// Computes the distance between the points `a` and `b`.
    pub fn distance(a: &Self, b: &Self) -> f64 {
        b.subtract(a).length()
    }

    /// Computes the angle in radians between `a` and `b`.
    pub fn angle(a: &Self, b: &Self) -> f64 {
        (a.dot(b) / (a.length() * b.length())).acos()
    }

    /// Computes the cross product `a × b` by cofactor expansion along the
    /// first row of the matrix with rows `[1, 1, 1]`, `a` and `b`.
    pub fn cross(a: &Self, b: &Self) -> Self {
        let matrix = Matrix::from_array([[1.0; 3], a.components, b.components]);
        Self::new(
            matrix.cofactor_unchecked(1, 1),
            matrix.cofactor_unchecked(1, 2),
            matrix.cofactor_unchecked(1, 3),
        )
    }

    /// Computes `a · (b × c)`, the signed volume of the parallelepiped
    /// spanned by the three vectors.
    pub fn triple_product(a: &Self, b: &Self, c: &Self) -> f64 {
        a.dot(&Self::cross(b, c))
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(components: [f64; 3]) -> Self {
        Self { components }
    }
}

impl From<&Vector> for Vector3D {
    fn from(vector: &Vector) -> Self {
        Self::from_slice(vector.components())
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl_binop!(Add, add, Vector3D, Vector3D, Vector3D, |a, b| {
    Vector3D::add(a, b)
});

impl_binop!(Sub, sub, Vector3D, Vector3D, Vector3D, |a, b| {
    Vector3D::subtract(a, b)
});

impl_binop!(Mul, mul, Vector3D, f64, Vector3D, |a, b| {
    a.multiply_scalar(*b)
});

impl_binop!(Div, div, Vector3D, f64, Vector3D, |a, b| {
    a.divide_scalar(*b)
});

impl_unary_op!(Neg, neg, Vector3D, Vector3D, |a| {
    a.multiply_scalar(-1.0)
});

impl_abs_diff_eq!(Vector3D, |a, b, epsilon| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!(Vector3D, |a, b, epsilon, max_relative| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

/// Sums the products of corresponding elements of two equally long slices.
pub(crate) fn dot_components(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
