//! Viewer state: the loaded model plus camera, light and settings

use crate::{
    camera::{OrbitCamera, OrbitLight},
    error::Result,
    importer::{LoadOptions, ModelLoader, SceneSource},
    logging,
    scene::Model,
    settings::ViewerSettings,
    types::{Matrix4x4, Vector3D},
};

/// Per-frame shader constants derived from the camera and light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Projection matrix
    pub projection: Matrix4x4,
    /// View matrix
    pub view: Matrix4x4,
    /// World-space eye position
    pub camera_position: Vector3D,
    /// Unit light direction
    pub light_direction: Vector3D,
}

/// Owns at most one loaded model and the controls used to look at it
#[derive(Debug, Clone)]
pub struct Viewer {
    settings: ViewerSettings,
    loader: ModelLoader,
    camera: OrbitCamera,
    light: OrbitLight,
    model: Option<Model>,
}

impl Viewer {
    /// Create a viewer with no model loaded
    pub fn new(settings: ViewerSettings, options: LoadOptions) -> Result<Self> {
        settings.validate()?;
        options.validate()?;

        let mut camera = OrbitCamera::new();
        camera.idle = settings.idle_camera;

        Ok(Self {
            settings,
            loader: ModelLoader::new(options),
            camera,
            light: OrbitLight::default(),
            model: None,
        })
    }

    /// Replace the current model with one read from `source`
    ///
    /// The previous model is dropped before loading starts, so after a
    /// failed load no model is loaded at all.
    pub fn load_model(&mut self, source: &dyn SceneSource) -> Result<&Model> {
        self.unload_model();

        let model = self.loader.load(source)?;
        let model = self.model.insert(model);
        if let Some(bounds) = model.bounds() {
            self.camera
                .frame(&bounds, self.loader.options().framing_factor());
        }
        Ok(model)
    }

    /// Drop the current model, returning it if there was one
    pub fn unload_model(&mut self) -> Option<Model> {
        let model = self.model.take();
        if let Some(model) = &model {
            logging::debug(&format!("Unloading '{}'", model.source().display()));
        }
        model
    }

    /// Get the loaded model
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Re-aim the camera at the loaded model's bounds
    pub fn frame_model(&mut self) {
        if let Some(bounds) = self.model.as_ref().and_then(Model::bounds) {
            self.camera
                .frame(&bounds, self.loader.options().framing_factor());
        }
    }

    /// Get the settings
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// Get the load options used for new models
    pub fn load_options(&self) -> &LoadOptions {
        self.loader.options()
    }

    /// Get the camera
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Get the camera for mutation
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Get the light
    pub fn light(&self) -> &OrbitLight {
        &self.light
    }

    /// Get the light for mutation
    pub fn light_mut(&mut self) -> &mut OrbitLight {
        &mut self.light
    }

    /// Compute this frame's camera and light constants
    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            projection: self
                .camera
                .projection_matrix(self.settings.aspect_ratio(), self.settings.vertical_fov),
            view: self.camera.view_matrix(),
            camera_position: self.camera.position(),
            light_direction: self.light.direction(),
        }
    }
}
