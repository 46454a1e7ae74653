//! Viewer window and presentation settings

use crate::{
    error::{Error, Result},
    types::Color4D,
};

/// Settings for the viewer window and the frame it presents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    /// Open fullscreen instead of windowed
    pub fullscreen: bool,
    /// Background color
    pub clear_color: Color4D,
    /// Vertical field of view in radians
    pub vertical_fov: f32,
    /// Start with the idle camera spinning
    pub idle_camera: bool,
}

impl ViewerSettings {
    /// Create the default settings: 1280x720 windowed, no vsync
    pub fn new() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: false,
            fullscreen: false,
            clear_color: Color4D::new(0.08, 0.18, 0.18, 1.0),
            vertical_fov: 0.5,
            idle_camera: false,
        }
    }

    /// Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Enable or disable fullscreen
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Set the background color
    pub fn with_clear_color(mut self, color: Color4D) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the vertical field of view in radians
    pub fn with_vertical_fov(mut self, fov: f32) -> Self {
        self.vertical_fov = fov;
        self
    }

    /// Start with the idle camera enabled
    pub fn with_idle_camera(mut self, idle: bool) -> Self {
        self.idle_camera = idle;
        self
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Reject settings the renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_parameter(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if !(self.vertical_fov > 0.0 && self.vertical_fov < std::f32::consts::PI) {
            return Err(Error::invalid_parameter(format!(
                "vertical field of view {} must be in (0, pi)",
                self.vertical_fov
            )));
        }
        Ok(())
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::new()
    }
}
