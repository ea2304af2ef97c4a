use crate::camera::Camera;
use crate::hover::{HoverAnimator, HoverEvent};
use crate::picking::{pointer_ray, RayIntersector, SlabIntersector};
use crate::scene::{create_default_scene, Scene};
use crate::viewport::Viewport;

/// Everything the pointer handler and the frame callback share. Owned by the
/// application and handed to both entry points by `&mut`.
pub struct SceneContext {
    scene: Scene,
    camera: Camera,
    viewport: Viewport,
    hover: HoverAnimator,
    intersector: Box<dyn RayIntersector>,
}

impl SceneContext {
    pub fn new(scene: Scene, viewport: Viewport, intersector: Box<dyn RayIntersector>) -> Self {
        let hover = HoverAnimator::new(scene.cubes().len());
        Self {
            scene,
            camera: Camera::new(viewport),
            viewport,
            hover,
            intersector,
        }
    }

    /// Default layout with slab picking
    pub fn with_default_scene(viewport: Viewport) -> Self {
        Self::new(create_default_scene(), viewport, Box::new(SlabIntersector))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn hover(&self) -> &HoverAnimator {
        &self.hover
    }

    pub fn intersector_name(&self) -> &str {
        self.intersector.name()
    }

    /// Index of the cube under the pointer, if any
    pub fn pick(&self, x: f32, y: f32) -> Option<usize> {
        let ray = pointer_ray(x, y, self.viewport, &self.camera);
        self.intersector
            .nearest_hit(&ray, &self.scene.cube_bounds())
            .map(|hit| hit.index)
    }

    /// Pointer moved to pixel `(x, y)`. Returns the hover transitions it caused.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Vec<HoverEvent> {
        let nearest = self.pick(x, y);
        self.hover.apply_hit(nearest, self.scene.cubes())
    }

    /// One displayed frame
    pub fn on_tick(&mut self) {
        self.hover.tick(self.scene.cubes_mut());
    }

    /// Acquire the next frame target, ticking only when one was obtained.
    /// A frame that is never shown does not advance the animation.
    pub fn advance_frame<T, E>(&mut self, acquire: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let target = acquire()?;
        self.on_tick();
        Ok(target)
    }
}
