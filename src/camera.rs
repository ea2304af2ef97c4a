use glam::{Mat4, Vec3};

use crate::types::CameraUniform;
use crate::viewport::Viewport;

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 10.0;
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Fixed perspective camera looking down -Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Aspect ratio is taken from the viewport once; the camera never changes afterwards
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: DEFAULT_POSITION,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect: viewport.aspect_ratio(),
            near: NEAR,
            far: FAR,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}
