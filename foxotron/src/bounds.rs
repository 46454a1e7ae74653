//! Scene-wide bounding box aggregation

use crate::{
    aabb::AABB,
    error::{Error, Result},
    mesh::Mesh,
    node::NodeTree,
    transform::WorldMatrices,
};

/// Running union of bounding boxes
///
/// Starts with nothing. Until the first non-empty box arrives, [`finish`]
/// reports `None` rather than a degenerate box at the origin.
///
/// [`finish`]: BoundingBoxAggregator::finish
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBoxAggregator {
    bounds: Option<AABB>,
}

impl BoundingBoxAggregator {
    /// Create an aggregator with no contributions
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Fold one box into the union; empty boxes are ignored
    pub fn add(&mut self, aabb: AABB) {
        if aabb.is_empty() {
            return;
        }
        self.bounds = Some(match self.bounds {
            Some(current) => AABB::new(current.min.min(aabb.min), current.max.max(aabb.max)),
            None => aabb,
        });
    }

    /// Whether at least one box has been folded in
    pub fn is_initialized(&self) -> bool {
        self.bounds.is_some()
    }

    /// Get the union so far
    pub fn finish(self) -> Option<AABB> {
        self.bounds
    }
}

impl Extend<AABB> for BoundingBoxAggregator {
    fn extend<I: IntoIterator<Item = AABB>>(&mut self, iter: I) {
        for aabb in iter {
            self.add(aabb);
        }
    }
}

impl FromIterator<AABB> for BoundingBoxAggregator {
    fn from_iter<I: IntoIterator<Item = AABB>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(iter);
        aggregator
    }
}

/// Compute the world-space bounds of every (node, mesh) pair and their union
///
/// Each mesh's local AABB is moved through its node's world matrix. Returns
/// `Ok(None)` when no node references a mesh with geometry.
pub fn aggregate_scene(
    tree: &NodeTree,
    world: &WorldMatrices,
    meshes: &[Mesh],
) -> Result<Option<AABB>> {
    let mut aggregator = BoundingBoxAggregator::new();
    for node in tree {
        let matrix = world.get(node.id()).ok_or_else(|| {
            Error::corrupt_scene_graph(format!("node {} has no world matrix", node.id()))
        })?;
        for &mesh_index in node.mesh_indices() {
            let mesh = meshes.get(mesh_index).ok_or_else(|| {
                Error::corrupt_scene_graph(format!(
                    "node {} references mesh {} but the scene has {} meshes",
                    node.id(),
                    mesh_index,
                    meshes.len()
                ))
            })?;
            aggregator.add(mesh.local_aabb().transformed(matrix));
        }
    }
    Ok(aggregator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        transform::propagate,
        types::{Matrix4x4, Vector3D},
    };

    fn cube(min: f32, max: f32) -> AABB {
        AABB::new(Vector3D::splat(min), Vector3D::splat(max))
    }

    #[test]
    fn test_uninitialized_aggregator_has_no_bounds() {
        let aggregator = BoundingBoxAggregator::new();
        assert!(!aggregator.is_initialized());
        assert_eq!(aggregator.finish(), None);
    }

    #[test]
    fn test_empty_boxes_do_not_initialize() {
        let aggregator: BoundingBoxAggregator = [AABB::empty(), AABB::empty()].into_iter().collect();
        assert_eq!(aggregator.finish(), None);
    }

    #[test]
    fn test_union_is_order_independent() {
        let boxes = [
            cube(-1.0, 0.0),
            AABB::new(Vector3D::new(2.0, -5.0, 0.0), Vector3D::new(3.0, -4.0, 1.0)),
            cube(0.5, 0.75),
        ];
        let forward: BoundingBoxAggregator = boxes.iter().copied().collect();
        let backward: BoundingBoxAggregator = boxes.iter().rev().copied().collect();
        let expected = AABB::new(Vector3D::new(-1.0, -5.0, -1.0), Vector3D::new(3.0, 0.75, 1.0));
        assert_eq!(forward.finish(), Some(expected));
        assert_eq!(backward.finish(), Some(expected));
    }

    #[test]
    fn test_aggregate_scene_rejects_missing_mesh() {
        let mut tree = NodeTree::new();
        tree.insert(None, "root", Matrix4x4::IDENTITY, vec![2]).unwrap();
        let world = propagate(&tree).unwrap();
        let meshes = vec![Mesh::new("only", 3, 1, 0, cube(0.0, 1.0))];

        let err = aggregate_scene(&tree, &world, &meshes).unwrap_err();
        assert!(err.is_corrupt_scene_graph());
    }

    #[test]
    fn test_nodes_without_meshes_yield_no_bounds() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, "root", Matrix4x4::IDENTITY, vec![]).unwrap();
        tree.insert(Some(root), "empty", Matrix4x4::IDENTITY, vec![]).unwrap();
        let world = propagate(&tree).unwrap();

        assert_eq!(aggregate_scene(&tree, &world, &[]).unwrap(), None);
    }

    #[test]
    fn test_instanced_mesh_counts_every_placement() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, "root", Matrix4x4::IDENTITY, vec![]).unwrap();
        tree.insert(
            Some(root),
            "left",
            Matrix4x4::from_translation(Vector3D::new(-5.0, 0.0, 0.0)),
            vec![0],
        )
        .unwrap();
        tree.insert(
            Some(root),
            "right",
            Matrix4x4::from_translation(Vector3D::new(5.0, 0.0, 0.0)),
            vec![0],
        )
        .unwrap();
        let world = propagate(&tree).unwrap();
        let meshes = vec![Mesh::new("crate", 8, 12, 0, cube(-1.0, 1.0))];

        let bounds = aggregate_scene(&tree, &world, &meshes).unwrap().unwrap();
        assert_eq!(bounds.min, Vector3D::new(-6.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vector3D::new(6.0, 1.0, 1.0));
    }
}
