//! Affine transforms serialized as CSS 3D matrices.

use crate::{
    angle::Angle,
    matrix::Matrix,
    vector::Vector3D,
};

/// An affine 3D transform accumulated from separate translation, rotation
/// and scaling parts.
///
/// Each part is a 4x4 matrix acting on column vectors, starting out as the
/// identity. Repeated calls to [`translate`](Self::translate),
/// [`rotate`](Self::rotate) and [`scale`](Self::scale) compose with what is
/// already in the corresponding part, and the full transform is
/// `translation * rotation * scaling`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    translation: Matrix,
    rotation: Matrix,
    scaling: Matrix,
}

impl Transform {
    /// Creates the identity transform.
    pub fn new() -> Self {
        Self {
            translation: Matrix::identity(4),
            rotation: Matrix::identity(4),
            scaling: Matrix::identity(4),
        }
    }

    /// Rotates by the given angles in radians about the x-, y- and z-axes.
    ///
    /// The per-axis rotations are combined as `x * y * z` and the result is
    /// applied after any earlier rotation, in the rotated frame.
    pub fn rotate(&mut self, x: f64, y: f64, z: f64) {
        let (sin_x, cos_x) = x.sin_cos();
        let (sin_y, cos_y) = y.sin_cos();
        let (sin_z, cos_z) = z.sin_cos();

        let rotation_x = Matrix::from_array([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos_x, -sin_x, 0.0],
            [0.0, sin_x, cos_x, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rotation_y = Matrix::from_array([
            [cos_y, 0.0, sin_y, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin_y, 0.0, cos_y, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rotation_z = Matrix::from_array([
            [cos_z, -sin_z, 0.0, 0.0],
            [sin_z, cos_z, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let rotation = rotation_x.product(&rotation_y).product(&rotation_z);
        self.rotation = self.rotation.product(&rotation);
    }

    /// Like [`rotate`](Self::rotate), but with angles in any unit.
    pub fn rotate_by(&mut self, x: impl Angle, y: impl Angle, z: impl Angle) {
        self.rotate(x.radians(), y.radians(), z.radians());
    }

    /// Translates by the given offset.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        let translation = Matrix::from_array([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        self.translation = self.translation.product(&translation);
    }

    /// Scales by the given factor along each axis. Scaling is applied
    /// before rotation and translation.
    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        let scaling = Matrix::from_array([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        self.scaling = self.scaling.product(&scaling);
    }

    /// The full 4x4 transform matrix `translation * rotation * scaling`.
    pub fn matrix(&self) -> Matrix {
        self.translation
            .product(&self.rotation)
            .product(&self.scaling)
    }

    /// The image of the x-axis under the linear part of the transform.
    pub fn right(&self) -> Vector3D {
        self.column(0)
    }

    /// The image of the y-axis under the linear part of the transform.
    pub fn up(&self) -> Vector3D {
        self.column(1)
    }

    /// The image of the z-axis under the linear part of the transform.
    pub fn forward(&self) -> Vector3D {
        self.column(2)
    }

    /// The image of the origin under the transform.
    pub fn position(&self) -> Vector3D {
        self.column(3)
    }

    /// Formats the transform as a CSS `matrix3d()` function, listing the
    /// elements in column-major order.
    pub fn matrix3d(&self) -> String {
        let matrix = self.matrix();

        let elements: Vec<String> = (0..4)
            .flat_map(|column| (0..4).map(move |row| (row, column)))
            // Avoid printing "-0"
            .map(|index| (matrix[index] + 0.0).to_string())
            .collect();

        format!("matrix3d({})", elements.join(", "))
    }

    /// Formats the transform as a CSS `transform` declaration.
    pub fn css(&self) -> String {
        format!("transform: {};", self.matrix3d())
    }

    fn column(&self, index: usize) -> Vector3D {
        let matrix = self.matrix();
        Vector3D::new(
            matrix[(0, index)],
            matrix[(1, index)],
            matrix[(2, index)],
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
