//! The loaded model: flattened hierarchy, world matrices and bounds

use std::path::{Path, PathBuf};

use crate::{
    aabb::AABB,
    bounds::aggregate_scene,
    error::Result,
    mesh::Mesh,
    node::{NodeId, NodeTree},
    transform::{WorldMatrices, propagate},
    types::Matrix4x4,
};

/// Counts describing a loaded model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Number of nodes in the hierarchy
    pub nodes: usize,
    /// Number of meshes in the mesh table
    pub meshes: usize,
    /// Number of materials referenced by the meshes
    pub materials: usize,
    /// Sum of vertex counts over all meshes
    pub vertices: usize,
    /// Sum of triangle counts over all meshes
    pub triangles: usize,
    /// Number of draw calls a frame issues
    pub draw_calls: usize,
}

/// One mesh placement to render: a mesh drawn with its node's world matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Node that places the mesh
    pub node: NodeId,
    /// Index into the model's mesh table
    pub mesh_index: usize,
    /// Material slot of the mesh
    pub material_index: usize,
    /// World matrix of the node, used as the model matrix uniform
    pub model_matrix: Matrix4x4,
    /// Number of triangles to draw
    pub triangle_count: usize,
}

/// A fully loaded model
///
/// Built in one go by [`Model::build`]; there is no partially loaded state.
/// Replacing or unloading the model drops its nodes, matrices and bounds
/// together.
#[derive(Debug, Clone)]
pub struct Model {
    source: PathBuf,
    nodes: NodeTree,
    meshes: Vec<Mesh>,
    material_count: usize,
    world: Option<WorldMatrices>,
    bounds: Option<AABB>,
}

impl Model {
    /// Flatten a node tree and its meshes into a model
    ///
    /// Fails with [`Error::CorruptSceneGraph`](crate::Error::CorruptSceneGraph)
    /// when a node references a mesh outside `meshes`.
    pub fn build<P: Into<PathBuf>>(
        source: P,
        nodes: NodeTree,
        meshes: Vec<Mesh>,
        material_count: usize,
    ) -> Result<Self> {
        nodes.validate_mesh_indices(meshes.len())?;

        let world = propagate(&nodes);
        let bounds = match &world {
            Some(world) => aggregate_scene(&nodes, world, &meshes)?,
            None => None,
        };

        Ok(Self {
            source: source.into(),
            nodes,
            meshes,
            material_count,
            world,
            bounds,
        })
    }

    /// Get the path the model was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Get the node hierarchy
    pub fn nodes(&self) -> &NodeTree {
        &self.nodes
    }

    /// Get the mesh table
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Get a mesh by index
    pub fn mesh(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    /// Get the number of materials
    pub fn material_count(&self) -> usize {
        self.material_count
    }

    /// Get all world matrices, `None` for a model without nodes
    pub fn world_matrices(&self) -> Option<&WorldMatrices> {
        self.world.as_ref()
    }

    /// Get the world matrix of one node
    pub fn world_matrix(&self, id: NodeId) -> Option<Matrix4x4> {
        self.world.as_ref()?.get(id).copied()
    }

    /// Get the scene-wide bounding box, `None` when the model has no geometry
    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }

    /// Iterate the draw calls of one frame in node order
    pub fn draw_calls(&self) -> impl Iterator<Item = DrawCall> + '_ {
        self.nodes.iter().flat_map(move |node| {
            let model_matrix = self.world_matrix(node.id()).unwrap_or(Matrix4x4::IDENTITY);
            node.mesh_indices().iter().filter_map(move |&mesh_index| {
                let mesh = self.meshes.get(mesh_index)?;
                mesh.is_drawable().then(|| DrawCall {
                    node: node.id(),
                    mesh_index,
                    material_index: mesh.material_index(),
                    model_matrix,
                    triangle_count: mesh.triangle_count(),
                })
            })
        })
    }

    /// Get summary counts for the model
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            nodes: self.nodes.len(),
            meshes: self.meshes.len(),
            materials: self.material_count,
            vertices: self.meshes.iter().map(Mesh::vertex_count).sum(),
            triangles: self.meshes.iter().map(Mesh::triangle_count).sum(),
            draw_calls: self.draw_calls().count(),
        }
    }
}
