pub mod camera;
pub mod cli;
pub mod context;
pub mod frame;
pub mod geometry;
pub mod hover;
pub mod math;
pub mod picking;
pub mod render;
pub mod scene;
pub mod types;
pub mod viewport;

pub use context::SceneContext;
pub use scene::create_default_scene;
