//! Assimp-backed scene source
//!
//! Walks the imported node hierarchy depth-first from the root, so every
//! parent is emitted before its children and node ids follow traversal order.
//! Node transforms arrive already converted to glam's column-major convention.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use asset_importer::{Importer, postprocess::PostProcessSteps};

use crate::{
    error::{Error, Result},
    importer::{ImportedScene, LoadOptions, SceneSource},
    logging,
    mesh::Mesh,
    node::{NodeId, NodeTree},
};

/// Importer property controlling the bone limit of `SPLIT_BY_BONE_COUNT`
const SBBC_MAX_BONES: &str = "PP_SBBC_MAX_BONES";

/// Formats offered by the viewer's open dialog
pub const VIEWER_EXTENSIONS: &[&str] = &["fbx", "dae", "blend", "gltf", "glb", "3ds", "obj"];

/// Reads a model file through Assimp
#[derive(Debug, Clone)]
pub struct AssimpSource {
    path: PathBuf,
}

impl AssimpSource {
    /// Create a source for a model file
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SceneSource for AssimpSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self, options: &LoadOptions) -> Result<ImportedScene> {
        if !self.path.is_file() {
            return Err(Error::file_error(format!(
                "'{}' does not exist or is not a file",
                self.path.display()
            )));
        }
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if !is_supported_extension(extension) {
            return Err(Error::unsupported_format(extension));
        }

        let steps: PostProcessSteps = options.flags().into();
        let scene = Importer::new()
            .read_file(&self.path)
            .with_post_process(steps)
            .with_property_int(SBBC_MAX_BONES, options.max_bones() as i32)
            .import_file(&self.path)?;

        let meshes: Vec<Mesh> = (0..scene.num_meshes())
            .map(|index| match scene.mesh(index) {
                Some(mesh) => Mesh::from_positions(
                    mesh.name(),
                    &mesh.vertices(),
                    mesh.num_faces(),
                    mesh.material_index(),
                ),
                // Keep the slot so node mesh indices stay valid.
                None => Mesh::from_positions(format!("mesh_{}", index), &[], 0, 0),
            })
            .collect();

        let mut nodes = NodeTree::new();
        if let Some(root) = scene.root_node() {
            let mut stack: Vec<(asset_importer::node::Node, Option<NodeId>)> =
                vec![(root, None)];
            while let Some((node, parent)) = stack.pop() {
                let id = nodes.insert(
                    parent,
                    node.name(),
                    node.transformation(),
                    node.mesh_indices().collect(),
                )?;
                let children: Vec<_> = node.children().collect();
                // Reversed so the first child is popped first.
                stack.extend(children.into_iter().rev().map(|child| (child, Some(id))));
            }
        }

        Ok(ImportedScene {
            source: self.path.clone(),
            nodes,
            meshes,
            material_count: scene.num_materials(),
        })
    }
}

/// Check whether Assimp can import files with this extension (without the dot)
pub fn is_supported_extension(extension: &str) -> bool {
    let extension = extension.to_ascii_lowercase();
    VIEWER_EXTENSIONS.contains(&extension.as_str())
        || asset_importer::is_extension_supported(&extension)
}

/// Extensions for the open dialog: the viewer's list plus anything else Assimp reports
pub fn supported_extensions() -> Vec<String> {
    let mut seen = HashSet::new();
    VIEWER_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .chain(
            asset_importer::get_import_extensions()
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase()),
        )
        .filter(|ext| seen.insert(ext.clone()))
        .collect()
}

struct ForwardToLogger;

impl asset_importer::logging::LogStream for ForwardToLogger {
    fn write(&mut self, message: &str) {
        logging::debug(message.trim_end());
    }
}

/// Route Assimp's own log output into the viewer's logger at debug level
pub fn forward_importer_logs() -> Result<()> {
    let stream: Arc<Mutex<dyn asset_importer::logging::LogStream>> =
        Arc::new(Mutex::new(ForwardToLogger));
    asset_importer::logging::global_logger()
        .lock()
        .map_err(|_| Error::other("importer logger is poisoned"))?
        .attach_stream(stream)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_extensions_are_supported() {
        for ext in VIEWER_EXTENSIONS {
            assert!(is_supported_extension(ext), "{} should be supported", ext);
        }
        assert!(is_supported_extension("FBX"));
        assert!(!is_supported_extension("xyz"));
    }

    #[test]
    fn test_supported_extensions_are_unique() {
        let extensions = supported_extensions();
        let unique: HashSet<_> = extensions.iter().collect();
        assert_eq!(unique.len(), extensions.len());
        assert!(extensions.iter().any(|ext| ext == "obj"));
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let source = AssimpSource::new("definitely/not/here.obj");
        assert!(matches!(
            source.read(&LoadOptions::default()),
            Err(Error::FileError { .. })
        ));
    }
}
