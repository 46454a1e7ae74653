//! Scene node representation and hierarchy
//!
//! The hierarchy is stored as an arena: nodes live in a `Vec` in depth-first
//! traversal order, a node's id is its position, and each node points at its
//! parent by id. Because a parent is always visited before its children, the
//! arena order is also a valid topological order for transform propagation.

use crate::{
    error::{Error, Result},
    types::Matrix4x4,
};

/// Index of a node inside its [`NodeTree`]
pub type NodeId = usize;

/// A node in the scene hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    name: String,
    local_transform: Matrix4x4,
    mesh_indices: Vec<usize>,
}

impl Node {
    /// Create a node description
    ///
    /// `parent == None` marks a root.
    pub fn new<S: Into<String>>(
        id: NodeId,
        parent: Option<NodeId>,
        name: S,
        local_transform: Matrix4x4,
        mesh_indices: Vec<usize>,
    ) -> Self {
        Self {
            id,
            parent,
            name: name.into(),
            local_transform,
            mesh_indices,
        }
    }

    /// Get the id of the node (its traversal position)
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the parent id, `None` for a root node
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check whether the node is a root
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Get the name of the node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the transformation relative to the parent
    pub fn local_transform(&self) -> Matrix4x4 {
        self.local_transform
    }

    /// Get the indices of the meshes attached to this node
    pub fn mesh_indices(&self) -> &[usize] {
        &self.mesh_indices
    }

    /// Get the number of meshes attached to this node
    pub fn num_meshes(&self) -> usize {
        self.mesh_indices.len()
    }
}

/// Nodes of one imported scene in depth-first traversal order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append the next node in traversal order and return its id
    ///
    /// The parent, if any, must already be in the tree.
    pub fn insert<S: Into<String>>(
        &mut self,
        parent: Option<NodeId>,
        name: S,
        local_transform: Matrix4x4,
        mesh_indices: Vec<usize>,
    ) -> Result<NodeId> {
        let id = self.nodes.len();
        check_parent(id, parent)?;
        self.nodes
            .push(Node::new(id, parent, name, local_transform, mesh_indices));
        Ok(id)
    }

    /// Build a tree from nodes already laid out in traversal order
    ///
    /// Every node's id must equal its position and every parent must precede
    /// its children.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        for (position, node) in nodes.iter().enumerate() {
            if node.id != position {
                return Err(Error::corrupt_scene_graph(format!(
                    "node '{}' has id {} but sits at traversal position {}",
                    node.name, node.id, position
                )));
            }
            check_parent(node.id, node.parent)?;
        }
        Ok(Self { nodes })
    }

    /// Check that every referenced mesh exists in a table of `mesh_count` meshes
    pub fn validate_mesh_indices(&self, mesh_count: usize) -> Result<()> {
        for node in &self.nodes {
            if let Some(&bad) = node.mesh_indices.iter().find(|&&i| i >= mesh_count) {
                return Err(Error::corrupt_scene_graph(format!(
                    "node {} ('{}') references mesh {} but the scene has {} meshes",
                    node.id, node.name, bad, mesh_count
                )));
            }
        }
        Ok(())
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate nodes in traversal order
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Get the nodes as a slice in traversal order
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate root nodes
    pub fn roots(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_root())
    }

    /// Iterate the direct children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        // Children always come after their parent.
        self.nodes
            .iter()
            .skip(id + 1)
            .filter(move |node| node.parent == Some(id))
    }

    /// Find the first node with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Number of ancestors between a node and its root, `None` for unknown ids
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.nodes.get(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = &self.nodes[parent];
            depth += 1;
        }
        Some(depth)
    }

    /// Total number of (node, mesh) references
    pub fn mesh_reference_count(&self) -> usize {
        self.nodes.iter().map(Node::num_meshes).sum()
    }
}

impl<'a> IntoIterator for &'a NodeTree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_parent(id: NodeId, parent: Option<NodeId>) -> Result<()> {
    match parent {
        Some(parent) if parent >= id => Err(Error::corrupt_scene_graph(format!(
            "node {} references parent {} which has not been visited yet",
            id, parent
        ))),
        _ => Ok(()),
    }
}
