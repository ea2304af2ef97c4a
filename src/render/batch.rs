use std::ops::Range;

use glam::{Mat4, Quat, Vec3};

use crate::geometry::{cube_triangles, Geometry, Mesh};
use crate::scene::Scene;
use crate::types::{InstanceData, Vertex};

/// Unit cube centered on the origin as a non-indexed triangle list
pub fn cube_vertices() -> Vec<Vertex> {
    cube_triangles(Vec3::ZERO, 1.0)
        .iter()
        .flatten()
        .map(|&v| Vertex::from(v))
        .collect()
}

/// One line-list draw: a vertex range drawn with a single instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraw {
    pub vertices: Range<u32>,
    pub instance: u32,
}

/// Per-frame GPU inputs derived from the scene.
///
/// Cubes share the static unit-cube vertex buffer and differ only by
/// instance transform. Wireframe meshes and line segments are flattened to
/// world-space line vertices, each object drawn with its own identity
/// instance so it keeps its color. Solid fills exist only for cubes.
#[derive(Debug, Clone, Default)]
pub struct DrawBatches {
    pub instances: Vec<InstanceData>,
    pub cubes: Range<u32>,
    pub line_vertices: Vec<Vertex>,
    pub line_draws: Vec<LineDraw>,
}

impl DrawBatches {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut batches = DrawBatches::default();

        let solid_cubes = scene
            .cubes()
            .iter()
            .filter(|m| !m.material.wireframe)
            .filter_map(cube_instance);
        batches.instances.extend(solid_cubes);
        batches.cubes = 0..batches.instances.len() as u32;

        let wireframes = scene
            .cubes()
            .iter()
            .chain(scene.triangles())
            .filter(|m| m.material.wireframe);
        for mesh in wireframes {
            let points: Vec<Vec3> = mesh.world_edges().into_iter().flatten().collect();
            batches.push_lines(&points, mesh.material.color);
        }

        for line in scene.lines() {
            batches.push_lines(&[line.start, line.end], line.color);
        }

        batches
    }

    fn push_lines(&mut self, points: &[Vec3], color: [f32; 3]) {
        let start = self.line_vertices.len() as u32;
        self.line_vertices.extend(points.iter().map(|&p| Vertex::from(p)));
        let end = self.line_vertices.len() as u32;

        let instance = self.instances.len() as u32;
        self.instances.push(InstanceData::new(Mat4::IDENTITY, color));
        self.line_draws.push(LineDraw {
            vertices: start..end,
            instance,
        });
    }
}

fn cube_instance(mesh: &Mesh) -> Option<InstanceData> {
    match mesh.geometry {
        Geometry::Cube { size } => Some(InstanceData::new(
            Mat4::from_scale_rotation_translation(Vec3::splat(size), Quat::IDENTITY, mesh.position),
            mesh.material.color,
        )),
        Geometry::Triangle { .. } => None,
    }
}
