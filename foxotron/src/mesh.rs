//! Mesh representation and utilities

use crate::{aabb::AABB, types::Vector3D};

/// A mesh as the viewer core sees it: counts, material slot and local bounds
///
/// Vertex and index data live on the GPU side; the core only keeps what it
/// needs to place the mesh in the scene and to issue draw calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertex_count: usize,
    triangle_count: usize,
    material_index: usize,
    local_aabb: AABB,
}

impl Mesh {
    /// Create a mesh with a precomputed local-space bounding box
    pub fn new<S: Into<String>>(
        name: S,
        vertex_count: usize,
        triangle_count: usize,
        material_index: usize,
        local_aabb: AABB,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            triangle_count,
            material_index,
            local_aabb,
        }
    }

    /// Create a mesh from its raw, untransformed vertex positions
    ///
    /// The positions are scanned once for the component-wise min and max.
    pub fn from_positions<S: Into<String>>(
        name: S,
        positions: &[Vector3D],
        triangle_count: usize,
        material_index: usize,
    ) -> Self {
        Self::new(
            name,
            positions.len(),
            triangle_count,
            material_index,
            AABB::from_points(positions.iter().copied()),
        )
    }

    /// Get the name of the mesh
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Get the number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Get the material index for this mesh
    pub fn material_index(&self) -> usize {
        self.material_index
    }

    /// Get the bounding box of the untransformed vertex positions
    pub fn local_aabb(&self) -> AABB {
        self.local_aabb
    }

    /// Whether the mesh has anything to draw
    ///
    /// Meshes without vertices or faces keep their slot in the mesh table so
    /// node mesh indices stay valid, but they produce no draw calls and no bounds.
    pub fn is_drawable(&self) -> bool {
        self.vertex_count > 0 && self.triangle_count > 0
    }
}
