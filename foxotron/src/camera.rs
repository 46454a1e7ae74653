//! Orbit camera and directional light
//!
//! Both are driven by mouse drags in screen pixels: the camera orbits a target
//! point at some distance, the light is a direction that moves the opposite
//! way so it appears to follow the cursor over the model.

use crate::{
    aabb::AABB,
    types::{Matrix4x4, Quaternion, Vector3D},
};

/// Pixels of mouse travel per radian of rotation
pub const DEFAULT_ROTATION_SPEED: f32 = 130.0;

/// Pitch limit in radians, keeps the view away from the poles
pub const PITCH_LIMIT: f32 = 1.5;

/// Distance multiplier applied per scroll step
pub const ZOOM_STEP: f32 = 1.1;

/// Distance used before any model has been framed
pub const DEFAULT_DISTANCE: f32 = 500.0;

/// Near clip plane distance
pub const NEAR_PLANE: f32 = 0.01;

/// Smallest distance framing will produce, so point-like models stay visible
pub const MIN_FRAMING_DISTANCE: f32 = 0.1;

/// Yaw rate of the idle camera in radians per second
pub const IDLE_YAW_SPEED: f32 = 0.25;

/// Direction (yaw, pitch) rotated from the -Z axis
fn orbit_direction(yaw: f32, pitch: f32) -> Vector3D {
    Quaternion::from_rotation_y(yaw) * (Quaternion::from_rotation_x(pitch) * Vector3D::NEG_Z)
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// A camera orbiting a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub target: Vector3D,
    /// Distance from the target
    pub distance: f32,
    /// Rotation around the Y axis in radians
    pub yaw: f32,
    /// Rotation around the X axis in radians, within [-PITCH_LIMIT, PITCH_LIMIT]
    pub pitch: f32,
    /// Pixels of drag per radian
    pub rotation_speed: f32,
    /// Slowly spin around the target when no one is interacting
    pub idle: bool,
}

impl OrbitCamera {
    /// Create a camera at the default distance looking at the origin
    pub fn new() -> Self {
        Self {
            target: Vector3D::ZERO,
            distance: DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            idle: false,
        }
    }

    /// Rotate by a mouse drag of `(dx, dy)` pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx / self.rotation_speed;
        self.pitch = clamp_pitch(self.pitch + dy / self.rotation_speed);
    }

    /// Zoom by one scroll event; negative values move away, positive move closer
    pub fn zoom(&mut self, scroll: f32) {
        if scroll < 0.0 {
            self.distance *= ZOOM_STEP;
        } else if scroll > 0.0 {
            self.distance /= ZOOM_STEP;
        }
    }

    /// Advance the idle spin by `delta_seconds`
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.idle {
            self.yaw += IDLE_YAW_SPEED * delta_seconds;
        }
    }

    /// Aim at the center of `bounds` from `factor` half-diagonals away
    pub fn frame(&mut self, bounds: &AABB, factor: f32) {
        if bounds.is_empty() {
            return;
        }
        self.target = bounds.center();
        self.distance = (bounds.diagonal_length() * 0.5 * factor).max(MIN_FRAMING_DISTANCE);
    }

    /// World-space eye position
    pub fn position(&self) -> Vector3D {
        self.target + orbit_direction(self.yaw, self.pitch) * self.distance
    }

    /// Right-handed view matrix with +Y up
    pub fn view_matrix(&self) -> Matrix4x4 {
        Matrix4x4::look_at_rh(self.position(), self.target, Vector3D::Y)
    }

    /// OpenGL-style perspective projection reaching twice the orbit distance
    pub fn projection_matrix(&self, aspect_ratio: f32, vertical_fov: f32) -> Matrix4x4 {
        Matrix4x4::perspective_rh_gl(vertical_fov, aspect_ratio, NEAR_PLANE, self.far_plane())
    }

    /// Far clip plane distance
    pub fn far_plane(&self) -> f32 {
        self.distance * 2.0
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// A directional light steered like the camera
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitLight {
    /// Rotation around the Y axis in radians
    pub yaw: f32,
    /// Rotation around the X axis in radians, within [-PITCH_LIMIT, PITCH_LIMIT]
    pub pitch: f32,
}

impl OrbitLight {
    /// Rotate by a mouse drag of `(dx, dy)` pixels at `rotation_speed` pixels per radian
    pub fn drag(&mut self, dx: f32, dy: f32, rotation_speed: f32) {
        // A direction, so it moves "backwards" relative to the camera.
        self.yaw += dx / rotation_speed;
        self.pitch = clamp_pitch(self.pitch - dy / rotation_speed);
    }

    /// Unit direction the light travels in
    pub fn direction(&self) -> Vector3D {
        orbit_direction(self.yaw, self.pitch)
    }
}
