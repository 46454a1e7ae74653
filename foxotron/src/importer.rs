//! Model import: the importer seam, load options and the loader
//!
//! A [`SceneSource`] hands over a node hierarchy in depth-first order plus a
//! mesh table; [`ModelLoader`] turns that into a [`Model`]. The Assimp-backed
//! source lives in [`crate::assimp`] behind the `assimp` feature; the
//! [`SceneBuilder`] source builds scenes in memory.

use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    logging,
    mesh::Mesh,
    node::{NodeId, NodeTree},
    postprocess::LoadFlags,
    scene::Model,
    types::Matrix4x4,
};

/// Bone limit used when splitting meshes by bone count
pub const DEFAULT_MAX_BONES: u32 = 24;

/// Default camera distance, in half-diagonals of the scene bounds
pub const DEFAULT_FRAMING_FACTOR: f32 = 4.0;

/// Raw importer output, before flattening
#[derive(Debug, Clone, Default)]
pub struct ImportedScene {
    /// Path the scene came from
    pub source: PathBuf,
    /// Nodes in depth-first traversal order
    pub nodes: NodeTree,
    /// Mesh table referenced by node mesh indices
    pub meshes: Vec<Mesh>,
    /// Number of materials in the scene
    pub material_count: usize,
}

/// Something that can produce an [`ImportedScene`]
pub trait SceneSource {
    /// Path (or display name) of the scene
    fn path(&self) -> &Path;

    /// Read the scene, applying `options`
    fn read(&self, options: &LoadOptions) -> Result<ImportedScene>;
}

/// Options for loading a model
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    flags: LoadFlags,
    max_bones: u32,
    framing_factor: f32,
}

impl LoadOptions {
    /// Create options with the viewer defaults
    pub fn new() -> Self {
        Self {
            flags: LoadFlags::VIEWER_DEFAULT,
            max_bones: DEFAULT_MAX_BONES,
            framing_factor: DEFAULT_FRAMING_FACTOR,
        }
    }

    /// Replace the processing flags
    pub fn with_flags(mut self, flags: LoadFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Add processing flags to the current set
    pub fn add_flags(mut self, flags: LoadFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Set the bone limit for [`LoadFlags::SPLIT_BY_BONE_COUNT`]
    pub fn with_max_bones(mut self, max_bones: u32) -> Self {
        self.max_bones = max_bones;
        self
    }

    /// Set how many half-diagonals away the camera frames a new model
    pub fn with_framing_factor(mut self, factor: f32) -> Self {
        self.framing_factor = factor;
        self
    }

    /// Get the processing flags
    pub fn flags(&self) -> LoadFlags {
        self.flags
    }

    /// Get the bone limit
    pub fn max_bones(&self) -> u32 {
        self.max_bones
    }

    /// Get the framing factor
    pub fn framing_factor(&self) -> f32 {
        self.framing_factor
    }

    /// Reject options that cannot produce a usable load
    pub fn validate(&self) -> Result<()> {
        if self.max_bones == 0 {
            return Err(Error::invalid_parameter("max_bones must be at least 1"));
        }
        if !(self.framing_factor.is_finite() && self.framing_factor > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "framing factor {} must be a positive finite number",
                self.framing_factor
            )));
        }
        Ok(())
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a scene in memory, node by node in depth-first order
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    scene: ImportedScene,
}

impl SceneBuilder {
    /// Start an empty scene with a display path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            scene: ImportedScene {
                source: path.into(),
                ..ImportedScene::default()
            },
        }
    }

    /// Append the next node in traversal order
    pub fn node<S: Into<String>>(
        &mut self,
        parent: Option<NodeId>,
        name: S,
        local_transform: Matrix4x4,
        mesh_indices: &[usize],
    ) -> Result<NodeId> {
        self.scene
            .nodes
            .insert(parent, name, local_transform, mesh_indices.to_vec())
    }

    /// Append a mesh and return its index
    pub fn mesh(&mut self, mesh: Mesh) -> usize {
        self.scene.meshes.push(mesh);
        self.scene.meshes.len() - 1
    }

    /// Set the number of materials
    pub fn materials(&mut self, count: usize) -> &mut Self {
        self.scene.material_count = count;
        self
    }

    /// Finish building
    pub fn build(self) -> ImportedScene {
        self.scene
    }
}

impl SceneSource for SceneBuilder {
    fn path(&self) -> &Path {
        &self.scene.source
    }

    fn read(&self, _options: &LoadOptions) -> Result<ImportedScene> {
        Ok(self.scene.clone())
    }
}

impl SceneSource for ImportedScene {
    fn path(&self) -> &Path {
        &self.source
    }

    fn read(&self, _options: &LoadOptions) -> Result<ImportedScene> {
        Ok(self.clone())
    }
}

/// Loads models from scene sources
#[derive(Debug, Clone, Default)]
pub struct ModelLoader {
    options: LoadOptions,
}

impl ModelLoader {
    /// Create a loader with the given options
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Get the load options
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Read, flatten and bound a scene
    pub fn load(&self, source: &dyn SceneSource) -> Result<Model> {
        self.options.validate()?;

        let path = source.path().display().to_string();
        logging::info(&format!("Loading model '{}'", path));

        let imported = source.read(&self.options).inspect_err(|err| {
            logging::error(&format!("Import of '{}' failed: {}", path, err));
        })?;

        let model = Model::build(
            imported.source,
            imported.nodes,
            imported.meshes,
            imported.material_count,
        )
        .inspect_err(|err| {
            logging::error(&format!("Rejected '{}': {}", path, err));
        })?;

        let stats = model.stats();
        logging::info(&format!(
            "Loaded '{}': {} nodes, {} meshes, {} triangles, {} draw calls",
            path, stats.nodes, stats.meshes, stats.triangles, stats.draw_calls
        ));
        match model.bounds() {
            Some(bounds) => logging::debug(&format!(
                "Scene bounds of '{}': min {:?} max {:?}",
                path, bounds.min, bounds.max
            )),
            None => logging::warn(&format!("'{}' has no geometry to frame", path)),
        }

        Ok(model)
    }
}
