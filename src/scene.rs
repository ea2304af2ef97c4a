use crate::geometry::{create_cube, create_line, create_triangle, LineSegment, Mesh};
use crate::math::AABB;

/// X offsets shared by the cube row and the triangle row
pub const COLUMN_X: [f32; 4] = [-1.5, 0.0, 1.5, 3.0];
pub const CUBE_ROW_Y: f32 = 0.0;
pub const TRIANGLE_ROW_Y: f32 = 3.0;
pub const LINE_ROW_Y: f32 = 2.5;
/// (x1, x2) pairs bridged by the line row
pub const LINE_SPANS: [(f32, f32); 3] = [(-1.5, 1.5), (-0.5, 0.5), (1.5, 3.0)];

/// Everything that gets drawn. Cubes are the only hit-testable objects and
/// are addressed by their index in `cubes`.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    cubes: Vec<Mesh>,
    triangles: Vec<Mesh>,
    lines: Vec<LineSegment>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cube(&mut self, cube: Mesh) -> usize {
        self.cubes.push(cube);
        self.cubes.len() - 1
    }

    pub fn add_triangle(&mut self, triangle: Mesh) {
        self.triangles.push(triangle);
    }

    pub fn add_line(&mut self, line: LineSegment) {
        self.lines.push(line);
    }

    pub fn cubes(&self) -> &[Mesh] {
        &self.cubes
    }

    pub fn cubes_mut(&mut self) -> &mut [Mesh] {
        &mut self.cubes
    }

    pub fn triangles(&self) -> &[Mesh] {
        &self.triangles
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Current world bounds of every cube, in cube order
    pub fn cube_bounds(&self) -> Vec<AABB> {
        self.cubes.iter().map(Mesh::bounds).collect()
    }
}

/// Startup layout: a row of cubes, a row of triangles above it and three
/// connecting lines between them.
pub fn create_default_scene() -> Scene {
    let mut scene = Scene::new();

    for (i, &x) in COLUMN_X.iter().enumerate() {
        scene.add_cube(create_cube(x, CUBE_ROW_Y).with_name(format!("cube-{i}")));
    }

    for (i, &x) in COLUMN_X.iter().enumerate() {
        scene.add_triangle(create_triangle(x, TRIANGLE_ROW_Y).with_name(format!("triangle-{i}")));
    }

    for (x1, x2) in LINE_SPANS {
        scene.add_line(create_line(x1, LINE_ROW_Y, x2, LINE_ROW_Y));
    }

    log::debug!(
        "Scene created: {} cubes, {} triangles, {} lines",
        scene.cubes.len(),
        scene.triangles.len(),
        scene.lines.len()
    );

    scene
}
