//! Axis-Aligned Bounding Box (AABB) support
//!
//! Meshes carry a local-space AABB computed from their raw vertex positions.
//! Placing a mesh in the scene means pushing that box through the owning
//! node's world matrix and re-aligning the result to the axes, which is what
//! [`AABB::transformed`] does.

use crate::types::{Matrix4x4, Vector3D};

/// An axis-aligned bounding box in 3D space
///
/// An AABB is defined by its minimum and maximum corner points.
/// A box with `min > max` on any axis is empty and encloses nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3D,
    /// Maximum corner of the bounding box
    pub max: Vector3D,
}

impl AABB {
    /// Create a new AABB with the given minimum and maximum points
    pub fn new(min: Vector3D, max: Vector3D) -> Self {
        Self { min, max }
    }

    /// Create an empty AABB (min > max, indicating no volume)
    pub fn empty() -> Self {
        Self {
            min: Vector3D::splat(f32::INFINITY),
            max: Vector3D::splat(f32::NEG_INFINITY),
        }
    }

    /// Create an AABB from a single point
    pub fn from_point(point: Vector3D) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create an AABB from a collection of points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector3D>,
    {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include_point(point);
        }
        aabb
    }

    /// Check if this AABB is empty (has no volume)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the center point of the AABB
    pub fn center(&self) -> Vector3D {
        (self.min + self.max) * 0.5
    }

    /// Get the size (extent) of the AABB along each axis
    pub fn size(&self) -> Vector3D {
        if self.is_empty() {
            Vector3D::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Get the half-size (half-extent) of the AABB
    pub fn half_size(&self) -> Vector3D {
        self.size() * 0.5
    }

    /// Get the diagonal length of the AABB
    pub fn diagonal_length(&self) -> f32 {
        self.size().length()
    }

    /// Expand the AABB to include a point
    pub fn expand_to_include_point(&mut self, point: Vector3D) {
        if self.is_empty() {
            self.min = point;
            self.max = point;
        } else {
            self.min = self.min.min(point);
            self.max = self.max.max(point);
        }
    }

    /// Expand the AABB to include another AABB
    pub fn expand_to_include_aabb(&mut self, other: &AABB) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
        } else {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
    }

    /// Create a new AABB that includes both this AABB and another AABB
    pub fn expanded_to_include_aabb(&self, other: &AABB) -> Self {
        let mut result = *self;
        result.expand_to_include_aabb(other);
        result
    }

    /// Check if a point is inside this AABB
    pub fn contains_point(&self, point: Vector3D) -> bool {
        !self.is_empty()
            && point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Transform this AABB by an affine matrix and re-align the result to the axes
    ///
    /// Each basis column of the matrix is scaled by the box's min and max
    /// coordinate on that axis; the smaller of the two products feeds the
    /// output min and the larger feeds the output max. Summing the three
    /// per-axis contributions and adding the translation yields exactly the
    /// bounds of the 8 transformed corners, with 6 vector evaluations instead
    /// of 8 point transforms.
    pub fn transformed(&self, matrix: &Matrix4x4) -> Self {
        if self.is_empty() {
            return *self;
        }

        let translation = matrix.w_axis.truncate();
        let mut min = translation;
        let mut max = translation;

        let axes = [
            (matrix.x_axis.truncate(), self.min.x, self.max.x),
            (matrix.y_axis.truncate(), self.min.y, self.max.y),
            (matrix.z_axis.truncate(), self.min.z, self.max.z),
        ];
        for (basis, lo, hi) in axes {
            let a = basis * lo;
            let b = basis * hi;
            min += a.min(b);
            max += a.max(b);
        }

        AABB { min, max }
    }

    /// Transform this AABB by pushing all 8 corners through the matrix
    ///
    /// Same result as [`AABB::transformed`] up to rounding; kept for callers
    /// that want the straightforward form and for cross-checking.
    pub fn transformed_corners(&self, matrix: &Matrix4x4) -> Self {
        if self.is_empty() {
            return *self;
        }

        let mut min = Vector3D::splat(f32::INFINITY);
        let mut max = Vector3D::splat(f32::NEG_INFINITY);

        for corner in self.corners() {
            let transformed = matrix.transform_point3(corner);

            min = min.min(transformed);
            max = max.max(transformed);
        }

        AABB { min, max }
    }

    /// Get the 8 corner points of the AABB
    pub fn corners(&self) -> [Vector3D; 8] {
        [
            Vector3D::new(self.min.x, self.min.y, self.min.z), // min corner
            Vector3D::new(self.max.x, self.min.y, self.min.z),
            Vector3D::new(self.min.x, self.max.y, self.min.z),
            Vector3D::new(self.max.x, self.max.y, self.min.z),
            Vector3D::new(self.min.x, self.min.y, self.max.z),
            Vector3D::new(self.max.x, self.min.y, self.max.z),
            Vector3D::new(self.min.x, self.max.y, self.max.z),
            Vector3D::new(self.max.x, self.max.y, self.max.z), // max corner
        ]
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::empty()
    }
}
