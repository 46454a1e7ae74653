//! # Foxotron
//!
//! Scene core of the Foxotron 3D model viewer.
//!
//! A model arrives from an importer as a node hierarchy (each node with a
//! local transform and a list of mesh references) and a mesh table (each mesh
//! with a local-space bounding box). Loading flattens the hierarchy into one
//! world matrix per node and folds every placed mesh into a scene-wide
//! bounding box, which the orbit camera then frames.
//!
//! ## Quick Start
//!
//! ```rust
//! use foxotron::{
//!     AABB, LoadOptions, Mesh, SceneBuilder, Viewer, ViewerSettings,
//!     types::{Matrix4x4, Vector3D},
//! };
//!
//! # fn main() -> foxotron::Result<()> {
//! let mut scene = SceneBuilder::new("crate.obj");
//! let mesh = scene.mesh(Mesh::new(
//!     "crate",
//!     8,
//!     12,
//!     0,
//!     AABB::new(Vector3D::splat(-1.0), Vector3D::splat(1.0)),
//! ));
//! let root = scene.node(None, "root", Matrix4x4::IDENTITY, &[])?;
//! scene.node(
//!     Some(root),
//!     "crate",
//!     Matrix4x4::from_translation(Vector3D::new(10.0, 0.0, 0.0)),
//!     &[mesh],
//! )?;
//!
//! let mut viewer = Viewer::new(ViewerSettings::default(), LoadOptions::default())?;
//! let model = viewer.load_model(&scene)?;
//! let bounds = model.bounds().expect("model has geometry");
//! assert_eq!(bounds.min, Vector3D::new(9.0, -1.0, -1.0));
//! assert_eq!(bounds.max, Vector3D::new(11.0, 1.0, 1.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `assimp`: load model files through Assimp ([`assimp::AssimpSource`])
//! - `bytemuck`: raw byte views of the world matrices for GPU upload

#![warn(missing_docs)]

// Re-export common types for convenience
pub use crate::{
    aabb::AABB,
    bounds::{BoundingBoxAggregator, aggregate_scene},
    camera::{OrbitCamera, OrbitLight},
    error::{Error, Result},
    importer::{ImportedScene, LoadOptions, ModelLoader, SceneBuilder, SceneSource},
    mesh::Mesh,
    node::{Node, NodeId, NodeTree},
    postprocess::LoadFlags,
    scene::{DrawCall, Model, SceneStats},
    settings::ViewerSettings,
    transform::{WorldMatrices, propagate},
    viewer::{FrameUniforms, Viewer},
};

// Re-export logging functionality
pub use crate::logging::{LogLevel, LogStream, Logger};

// Core modules
pub mod error;
pub mod importer;
pub mod scene;
pub mod types;

// Scene graph
pub mod bounds;
pub mod mesh;
pub mod node;
pub mod transform;

// Data structure modules
pub mod aabb;

// Viewer state
pub mod camera;
pub mod settings;
pub mod viewer;

// Import backends
#[cfg(feature = "assimp")]
pub mod assimp;

// Utility modules
pub mod logging;
pub mod postprocess;

/// Version information
pub mod version {
    /// Version of this crate
    pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!version::CRATE_VERSION.is_empty());
    }
}
