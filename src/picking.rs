use glam::Vec3;

use crate::camera::Camera;
use crate::geometry::cube_triangles;
use crate::math::{nearest_triangle_hit, Ray, AABB};
use crate::viewport::Viewport;

/// Nearest intersected volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the slice of volumes that was tested
    pub index: usize,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Nearest-hit test against a set of bounded volumes
pub trait RayIntersector {
    fn nearest_hit(&self, ray: &Ray, volumes: &[AABB]) -> Option<Hit>;

    fn name(&self) -> &str {
        "intersector"
    }
}

/// Keep the closer hit; ties go to the earlier index
fn closer(best: Option<Hit>, candidate: Hit) -> Option<Hit> {
    match best {
        Some(b) if b.distance <= candidate.distance => Some(b),
        _ => Some(candidate),
    }
}

/// Ray against each box with the slab method
#[derive(Debug, Clone, Copy, Default)]
pub struct SlabIntersector;

impl RayIntersector for SlabIntersector {
    fn nearest_hit(&self, ray: &Ray, volumes: &[AABB]) -> Option<Hit> {
        volumes
            .iter()
            .enumerate()
            .filter_map(|(index, aabb)| {
                ray.intersect_aabb(aabb).map(|distance| Hit { index, distance })
            })
            .fold(None, closer)
    }

    fn name(&self) -> &str {
        "slab"
    }
}

/// Ray against the 12 face triangles of each box
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceIntersector;

impl RayIntersector for FaceIntersector {
    fn nearest_hit(&self, ray: &Ray, volumes: &[AABB]) -> Option<Hit> {
        volumes
            .iter()
            .enumerate()
            .filter_map(|(index, aabb)| {
                let size = aabb.size();
                let faces = cube_triangles(aabb.center(), 1.0).map(|tri| {
                    tri.map(|v| aabb.center() + (v - aabb.center()) * size)
                });
                nearest_triangle_hit(ray.origin, ray.direction, &faces)
                    .map(|distance| Hit { index, distance })
            })
            .fold(None, closer)
    }

    fn name(&self) -> &str {
        "faces"
    }
}

/// Ray from the camera through the pointer. The direction is the pointer's
/// NDC extended to depth -1, not an unprojection through the camera matrices.
pub fn pointer_ray(x: f32, y: f32, viewport: Viewport, camera: &Camera) -> Ray {
    let (ndc_x, ndc_y) = viewport.to_ndc(x, y);
    Ray::new(camera.position(), Vec3::new(ndc_x, ndc_y, -1.0))
}
