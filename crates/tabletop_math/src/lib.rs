//! Matrices, vectors and transforms for placing cards in 3D.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use error::{MathError, MathResult};
pub use matrix::Matrix;
pub use transform::Transform;
pub use vector::{Vector, Vector3D};
