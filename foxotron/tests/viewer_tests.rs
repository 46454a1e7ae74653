//! Viewer lifecycle tests: loading, replacing and framing models

use std::path::Path;
use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use foxotron::{
    AABB, Error, ImportedScene, LoadOptions, LogLevel, LogStream, Mesh, NodeTree, SceneBuilder,
    SceneSource, Viewer, ViewerSettings,
    logging::{self, MemoryLogStream},
    types::{Matrix4x4, Vector3D},
};

/// A source whose import always fails, like a truncated file
struct BrokenSource;

impl SceneSource for BrokenSource {
    fn path(&self) -> &Path {
        Path::new("broken_download.fbx")
    }

    fn read(&self, _options: &LoadOptions) -> foxotron::Result<ImportedScene> {
        Err(Error::import_failed("unexpected end of file"))
    }
}

fn cube_scene(path: &str, offset: Vector3D, half_extent: f32) -> SceneBuilder {
    let mut scene = SceneBuilder::new(path);
    let mesh = scene.mesh(Mesh::new(
        "cube",
        24,
        12,
        0,
        AABB::new(Vector3D::splat(-half_extent), Vector3D::splat(half_extent)),
    ));
    let root = scene
        .node(None, "root", Matrix4x4::IDENTITY, &[])
        .unwrap();
    scene
        .node(Some(root), "cube", Matrix4x4::from_translation(offset), &[mesh])
        .unwrap();
    scene.materials(1);
    scene
}

fn viewer() -> Viewer {
    Viewer::new(ViewerSettings::default(), LoadOptions::default()).unwrap()
}

#[test]
fn test_load_frames_camera_on_bounds() {
    let mut viewer = viewer();
    let model = viewer
        .load_model(&cube_scene("framed.obj", Vector3D::new(10.0, 0.0, 0.0), 1.0))
        .unwrap();
    let bounds = model.bounds().unwrap();
    assert_eq!(bounds.center(), Vector3D::new(10.0, 0.0, 0.0));

    let camera = viewer.camera();
    assert_eq!(camera.target, Vector3D::new(10.0, 0.0, 0.0));
    let expected = bounds.diagonal_length() * 0.5 * viewer.load_options().framing_factor();
    assert_abs_diff_eq!(camera.distance, expected, epsilon = 1e-4);
    assert_abs_diff_eq!(
        camera.position().distance(camera.target),
        expected,
        epsilon = 1e-3
    );
}

#[test]
fn test_loading_replaces_previous_model() {
    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("first.dae", Vector3D::ZERO, 1.0))
        .unwrap();
    viewer
        .load_model(&cube_scene("second.gltf", Vector3D::new(0.0, 5.0, 0.0), 2.0))
        .unwrap();

    let model = viewer.model().unwrap();
    assert_eq!(model.source(), Path::new("second.gltf"));
    assert_eq!(
        model.bounds(),
        Some(AABB::new(
            Vector3D::new(-2.0, 3.0, -2.0),
            Vector3D::new(2.0, 7.0, 2.0)
        ))
    );
    assert_eq!(viewer.camera().target, Vector3D::new(0.0, 5.0, 0.0));
}

#[test]
fn test_failed_load_leaves_no_model() {
    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("good.obj", Vector3D::ZERO, 1.0))
        .unwrap();

    let result = viewer.load_model(&BrokenSource);
    assert!(matches!(result, Err(Error::ImportFailed { .. })));
    assert!(viewer.model().is_none());
}

#[test]
fn test_corrupt_scene_is_rejected() {
    // A node references a mesh that the table does not have.
    let mut nodes = NodeTree::new();
    nodes
        .insert(None, "root", Matrix4x4::IDENTITY, vec![3])
        .unwrap();
    let scene = ImportedScene {
        source: "dangling.blend".into(),
        nodes,
        meshes: vec![Mesh::from_positions("only", &[Vector3D::ZERO], 0, 0)],
        material_count: 0,
    };

    let mut viewer = viewer();
    let err = viewer.load_model(&scene).unwrap_err();
    assert!(err.is_corrupt_scene_graph());
    assert!(viewer.model().is_none());
}

#[test]
fn test_unload_returns_model() {
    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("gone.3ds", Vector3D::ZERO, 1.0))
        .unwrap();

    let model = viewer.unload_model().unwrap();
    assert_eq!(model.source(), Path::new("gone.3ds"));
    assert!(viewer.model().is_none());
    assert!(viewer.unload_model().is_none());
}

#[test]
fn test_frame_model_restores_view_after_zoom() {
    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("zoomed.glb", Vector3D::ZERO, 3.0))
        .unwrap();
    let framed = *viewer.camera();

    viewer.camera_mut().zoom(-1.0);
    viewer.camera_mut().zoom(-1.0);
    viewer.camera_mut().target = Vector3D::new(100.0, 0.0, 0.0);
    assert_ne!(viewer.camera().distance, framed.distance);

    viewer.frame_model();
    assert_eq!(viewer.camera().target, framed.target);
    assert_eq!(viewer.camera().distance, framed.distance);
}

#[test]
fn test_frame_uniforms_follow_camera_and_light() {
    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("uniforms.obj", Vector3D::ZERO, 1.0))
        .unwrap();
    let speed = viewer.camera().rotation_speed;
    viewer.light_mut().drag(40.0, 10.0, speed);

    let uniforms = viewer.frame_uniforms();
    assert_eq!(uniforms.view, viewer.camera().view_matrix());
    assert_eq!(uniforms.camera_position, viewer.camera().position());
    assert_abs_diff_eq!(uniforms.light_direction.length(), 1.0, epsilon = 1e-5);

    // The eye sits at the origin of view space.
    let eye = uniforms.view.transform_point3(uniforms.camera_position);
    assert_abs_diff_eq!(eye, Vector3D::ZERO, epsilon = 1e-4);
}

#[test]
fn test_load_is_logged() {
    let memory = Arc::new(Mutex::new(MemoryLogStream::new()));
    let stream: Arc<Mutex<dyn LogStream>> = memory.clone();
    logging::attach_stream(stream.clone());

    let mut viewer = viewer();
    viewer
        .load_model(&cube_scene("logged_model.obj", Vector3D::ZERO, 1.0))
        .unwrap();
    let _ = viewer.load_model(&BrokenSource);
    logging::detach_stream(&stream);

    let memory = memory.lock().unwrap();
    assert!(memory.contains("Loading model 'logged_model.obj'"));
    assert!(memory.contains("Loaded 'logged_model.obj'"));
    assert!(
        memory
            .messages()
            .iter()
            .any(|(level, message)| *level == LogLevel::Error
                && message.contains("broken_download.fbx"))
    );
}
