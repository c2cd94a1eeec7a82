//=========================================================================
// Camera
//=========================================================================
//
// Free-look perspective camera shared by every state.
//
// Orientation is stored as yaw/pitch in degrees. Yaw 0 / pitch 0 looks
// down -Z; positive yaw turns toward +X, positive pitch looks up.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Vec3};

/// Pitch limit in degrees, keeps the view from flipping over the poles.
const MAX_PITCH: f32 = 89.0;

//=== CameraSettings ======================================================

/// Construction parameters for a [`Camera`].
///
/// The aspect ratio is not part of the settings; it is derived from the
/// viewport by whoever builds the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 95.0),
            world_up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
            fovy: 45.0,
            near: 0.1,
            far: 130.0,
            movement_speed: 20.0,
            mouse_sensitivity: 0.1,
        }
    }
}

//=== CameraMovement ======================================================

/// Directions accepted by [`Camera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

//=== Camera ==============================================================

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fovy: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,

    //--- Derived from yaw/pitch ------------------------------------------
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    //--- Construction -----------------------------------------------------

    /// Creates a camera from `settings` with the given aspect ratio.
    ///
    /// # Panics
    ///
    /// Panics if `aspect_ratio` is not positive or the clip planes do not
    /// satisfy `0 < near < far`.
    pub fn new(settings: CameraSettings, aspect_ratio: f32) -> Self {
        assert!(aspect_ratio > 0.0, "Aspect ratio must be positive, got {}", aspect_ratio);
        assert!(
            settings.near > 0.0 && settings.near < settings.far,
            "Clip planes must satisfy 0 < near < far, got near {} far {}",
            settings.near,
            settings.far
        );

        let mut camera = Self {
            position: settings.position,
            world_up: settings.world_up.try_normalize().unwrap_or(Vec3::Y),
            yaw: settings.yaw,
            pitch: settings.pitch.clamp(-MAX_PITCH, MAX_PITCH),
            fovy: settings.fovy,
            aspect_ratio,
            near: settings.near,
            far: settings.far,
            movement_speed: settings.movement_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_basis();
        camera
    }

    //--- Matrices ---------------------------------------------------------

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy.to_radians(), self.aspect_ratio, self.near, self.far)
    }

    //--- Movement ---------------------------------------------------------

    /// Moves along the view basis by `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
        };
        self.position += offset * velocity;
    }

    /// Turns the camera by a mouse offset in pixels.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
        self.update_basis();
    }

    /// Updates the aspect ratio after a viewport change.
    ///
    /// Non-positive ratios are ignored.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio > 0.0 {
            self.aspect_ratio = aspect_ratio;
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    //--- Internal Helpers -------------------------------------------------

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), -yaw.cos() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
