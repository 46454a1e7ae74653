//! Common types and type aliases used throughout the viewer core
//!
//! This module re-exports glam types for mathematical operations and provides
//! the single ingestion point where importer matrices are brought into glam's
//! convention.
//!
//! # Convention
//!
//! glam matrices are column-major and multiply column vectors, so a node's
//! world matrix is `parent_world * local`. Importers that hand out row-major
//! matrices are transposed once, on the way in, with [`matrix_from_row_major`].
//!
//! ```rust
//! use foxotron::types::*;
//!
//! let row_major = [
//!     [1.0, 0.0, 0.0, 10.0],
//!     [0.0, 1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! ];
//! let m = matrix_from_row_major(row_major);
//! assert_eq!(m, Matrix4x4::from_translation(Vector3D::new(10.0, 0.0, 0.0)));
//! ```

// Re-export glam types as our primary math types
pub use glam::{Mat4 as Matrix4x4, Quat as Quaternion, Vec3 as Vector3D, Vec4 as Vector4D};

/// RGBA color type (alias for Vector4D)
pub type Color4D = Vector4D;

/// Convert a row-major 4x4 matrix (rows of `[x, y, z, w]`) into a glam matrix.
///
/// Translation sits in the last element of the first three rows.
#[inline]
pub fn matrix_from_row_major(rows: [[f32; 4]; 4]) -> Matrix4x4 {
    Matrix4x4::from_cols_array_2d(&rows).transpose()
}

/// Convert a glam matrix back into row-major rows.
#[inline]
pub fn matrix_to_row_major(m: Matrix4x4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}
