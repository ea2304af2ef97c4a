mod batch;
mod gpu;

pub use batch::{cube_vertices, DrawBatches, LineDraw};
pub use gpu::Renderer;
