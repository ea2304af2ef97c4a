// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

use crate::picking::{FaceIntersector, RayIntersector, SlabIntersector};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// How pointer rays are tested against the cubes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingMode {
    /// Ray against each cube's bounding box
    #[default]
    Slab,
    /// Ray against each cube's face triangles
    Faces,
}

impl PickingMode {
    pub fn intersector(self) -> Box<dyn RayIntersector> {
        match self {
            PickingMode::Slab => Box::new(SlabIntersector),
            PickingMode::Faces => Box::new(FaceIntersector),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hover-scene")]
#[command(about = "Cubes that rise while the pointer hovers them", long_about = None)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Pointer hit-test method
    #[arg(long, value_enum, default_value_t = PickingMode::Slab)]
    pub picking: PickingMode,

    /// Window title
    #[arg(long, default_value = "Hover Scene")]
    pub title: String,
}
