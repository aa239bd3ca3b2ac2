use glam::{Mat4, Vec3};
use serde::Serialize;

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 35.0;

/// Perspective camera looking down -Z at the scene origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    #[serde(skip)]
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Hero camera: 75° fov, pulled back to z = 35
    pub fn hero(aspect: f32) -> Self {
        Self::new(DEFAULT_FOV_DEGREES, aspect, NEAR_PLANE, FAR_PLANE)
            .at(Vec3::new(0.0, 0.0, CAMERA_DISTANCE))
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Change the aspect ratio; returns false when it was already set
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if self.aspect == aspect {
            return false;
        }
        self.aspect = aspect;
        self.update_projection();
        true
    }

    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
