//! World transform propagation over a [`NodeTree`]

use crate::{
    node::{NodeId, NodeTree},
    types::Matrix4x4,
};

/// World matrices of every node, indexed by [`NodeId`]
///
/// Allocated once per load and dropped with the model that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMatrices {
    matrices: Vec<Matrix4x4>,
}

impl WorldMatrices {
    /// Get the world matrix of a node
    pub fn get(&self, id: NodeId) -> Option<&Matrix4x4> {
        self.matrices.get(id)
    }

    /// Get the number of matrices (equals the node count)
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Always false: an empty tree produces no `WorldMatrices` at all
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Iterate matrices in node id order
    pub fn iter(&self) -> std::slice::Iter<'_, Matrix4x4> {
        self.matrices.iter()
    }

    /// Get the matrices as a slice in node id order
    pub fn as_slice(&self) -> &[Matrix4x4] {
        &self.matrices
    }

    /// View the matrices as raw column-major `f32` bytes for buffer upload
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.matrices)
    }
}

impl std::ops::Index<NodeId> for WorldMatrices {
    type Output = Matrix4x4;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.matrices[id]
    }
}

/// Compute the world matrix of every node in a single pass
///
/// Nodes are visited in traversal order, so each parent's world matrix is
/// final before any child reads it. A root's world matrix is its local
/// transform; a child's is `world(parent) * local(child)`.
///
/// Returns `None` for an empty tree.
pub fn propagate(tree: &NodeTree) -> Option<WorldMatrices> {
    if tree.is_empty() {
        return None;
    }

    let mut matrices: Vec<Matrix4x4> = Vec::with_capacity(tree.len());
    for node in tree {
        let world = match node.parent() {
            Some(parent) => matrices[parent] * node.local_transform(),
            None => node.local_transform(),
        };
        matrices.push(world);
    }

    Some(WorldMatrices { matrices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3D;

    #[test]
    fn test_empty_tree_has_no_matrices() {
        assert!(propagate(&NodeTree::new()).is_none());
    }

    #[test]
    fn test_root_world_is_local() {
        let local = Matrix4x4::from_rotation_z(0.7) * Matrix4x4::from_scale(Vector3D::splat(3.0));
        let mut tree = NodeTree::new();
        tree.insert(None, "root", local, vec![]).unwrap();

        let world = propagate(&tree).unwrap();
        assert_eq!(world.len(), 1);
        assert_eq!(world[0], local);
    }

    #[test]
    fn test_child_composes_parent_first() {
        let parent_local = Matrix4x4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let child_local = Matrix4x4::from_translation(Vector3D::new(1.0, 0.0, 0.0));

        let mut tree = NodeTree::new();
        let root = tree.insert(None, "root", parent_local, vec![]).unwrap();
        let child = tree.insert(Some(root), "child", child_local, vec![]).unwrap();

        let world = propagate(&tree).unwrap();
        assert_eq!(world[child], parent_local * child_local);
        assert_ne!(world[child], child_local * parent_local);
    }

    #[test]
    fn test_multiple_roots() {
        let mut tree = NodeTree::new();
        let a = Matrix4x4::from_translation(Vector3D::X);
        let b = Matrix4x4::from_translation(Vector3D::Y);
        tree.insert(None, "a", a, vec![]).unwrap();
        tree.insert(None, "b", b, vec![]).unwrap();

        let world = propagate(&tree).unwrap();
        assert_eq!(world.as_slice(), &[a, b]);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_as_bytes_is_column_major() {
        let mut tree = NodeTree::new();
        tree.insert(
            None,
            "root",
            Matrix4x4::from_translation(Vector3D::new(1.0, 2.0, 3.0)),
            vec![],
        )
        .unwrap();
        let world = propagate(&tree).unwrap();
        let bytes = world.as_bytes();
        assert_eq!(bytes.len(), 64);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }
}
