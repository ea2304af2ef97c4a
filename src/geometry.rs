use glam::Vec3;

use crate::math::{hex_to_rgb, AABB};

pub const CUBE_COLOR: u32 = 0x00ff00;
pub const TRIANGLE_COLOR: u32 = 0xff0000;
pub const LINE_COLOR: u32 = 0x0000ff;

/// Mesh-local shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box centered on the mesh origin
    Cube { size: f32 },
    /// Flat triangle in the mesh's XY plane
    Triangle { vertices: [Vec3; 3] },
}

/// Unlit surface description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub wireframe: bool,
}

impl Material {
    pub fn solid(hex: u32) -> Self {
        Self {
            color: hex_to_rgb(hex),
            wireframe: false,
        }
    }

    pub fn wireframe(hex: u32) -> Self {
        Self {
            color: hex_to_rgb(hex),
            wireframe: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material, position: Vec3) -> Self {
        Self {
            name: String::new(),
            geometry,
            material,
            position,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// World-space bounds at the current position
    pub fn bounds(&self) -> AABB {
        match self.geometry {
            Geometry::Cube { size } => AABB::from_center_size(self.position, Vec3::splat(size)),
            Geometry::Triangle { vertices } => {
                let [a, b, c] = vertices.map(|v| v + self.position);
                AABB::new(a.min(b).min(c), a.max(b).max(c))
            }
        }
    }

    /// World-space triangles covering the surface
    pub fn world_triangles(&self) -> Vec<[Vec3; 3]> {
        match self.geometry {
            Geometry::Cube { size } => cube_triangles(self.position, size).to_vec(),
            Geometry::Triangle { vertices } => vec![vertices.map(|v| v + self.position)],
        }
    }

    /// World-space edges, as drawn in wireframe mode
    pub fn world_edges(&self) -> Vec<[Vec3; 2]> {
        self.world_triangles()
            .iter()
            .flat_map(|[a, b, c]| [[*a, *b], [*b, *c], [*c, *a]])
            .collect()
    }
}

/// Straight segment in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 3],
}

/// Unit cube with a flat green fill at `(x, y, 0)`
pub fn create_cube(x: f32, y: f32) -> Mesh {
    create_cube_at(x, y, 0.0)
}

pub fn create_cube_at(x: f32, y: f32, z: f32) -> Mesh {
    Mesh::new(
        Geometry::Cube { size: 1.0 },
        Material::solid(CUBE_COLOR),
        Vec3::new(x, y, z),
    )
}

/// Red wireframe triangle at `(x, y, 0)`, apex pointing down
pub fn create_triangle(x: f32, y: f32) -> Mesh {
    Mesh::new(
        Geometry::Triangle {
            vertices: [
                Vec3::new(0.0, -0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
            ],
        },
        Material::wireframe(TRIANGLE_COLOR),
        Vec3::new(x, y, 0.0),
    )
}

/// Blue segment from `(x1, y1, 0)` to `(x2, y2, 0)`
pub fn create_line(x1: f32, y1: f32, x2: f32, y2: f32) -> LineSegment {
    LineSegment {
        start: Vec3::new(x1, y1, 0.0),
        end: Vec3::new(x2, y2, 0.0),
        color: hex_to_rgb(LINE_COLOR),
    }
}

/// The 12 triangles of an axis-aligned cube, counter-clockwise seen from outside
pub fn cube_triangles(center: Vec3, size: f32) -> [[Vec3; 3]; 12] {
    let p = size * 0.5;
    let corner = |x: f32, y: f32, z: f32| center + Vec3::new(x * p, y * p, z * p);

    #[rustfmt::skip]
    let faces = [
        // +Z
        [corner(-1.0, -1.0,  1.0), corner( 1.0, -1.0,  1.0), corner( 1.0,  1.0,  1.0), corner(-1.0,  1.0,  1.0)],
        // -Z
        [corner( 1.0, -1.0, -1.0), corner(-1.0, -1.0, -1.0), corner(-1.0,  1.0, -1.0), corner( 1.0,  1.0, -1.0)],
        // +X
        [corner( 1.0, -1.0,  1.0), corner( 1.0, -1.0, -1.0), corner( 1.0,  1.0, -1.0), corner( 1.0,  1.0,  1.0)],
        // -X
        [corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0,  1.0), corner(-1.0,  1.0,  1.0), corner(-1.0,  1.0, -1.0)],
        // +Y
        [corner(-1.0,  1.0,  1.0), corner( 1.0,  1.0,  1.0), corner( 1.0,  1.0, -1.0), corner(-1.0,  1.0, -1.0)],
        // -Y
        [corner(-1.0, -1.0, -1.0), corner( 1.0, -1.0, -1.0), corner( 1.0, -1.0,  1.0), corner(-1.0, -1.0,  1.0)],
    ];

    let mut triangles = [[Vec3::ZERO; 3]; 12];
    for (i, [a, b, c, d]) in faces.into_iter().enumerate() {
        triangles[i * 2] = [a, b, c];
        triangles[i * 2 + 1] = [c, d, a];
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cube_defaults_to_z_zero() {
        let cube = create_cube(-1.5, 0.0);
        assert_eq!(cube.position, Vec3::new(-1.5, 0.0, 0.0));
        assert_eq!(cube.geometry, Geometry::Cube { size: 1.0 });
        assert_eq!(cube.material, Material::solid(CUBE_COLOR));
        assert!(!cube.material.wireframe);
    }

    #[test]
    fn test_create_cube_at_uses_z() {
        let cube = create_cube_at(1.0, 2.0, 3.0);
        assert_eq!(cube.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_cube_bounds_follow_position() {
        let mut cube = create_cube(3.0, 0.0);
        cube.position.y = 1.0;
        let bounds = cube.bounds();
        assert_eq!(bounds.min, Vec3::new(2.5, 0.5, -0.5));
        assert_eq!(bounds.max, Vec3::new(3.5, 1.5, 0.5));
    }

    #[test]
    fn test_create_triangle_is_isosceles_wireframe() {
        let tri = create_triangle(0.0, 3.0);
        assert_eq!(tri.position, Vec3::new(0.0, 3.0, 0.0));
        assert!(tri.material.wireframe);

        let Geometry::Triangle { vertices: [apex, left, right] } = tri.geometry else {
            panic!("expected triangle geometry");
        };
        assert!((apex.distance(left) - apex.distance(right)).abs() < 1e-6);
        assert_eq!(tri.world_edges().len(), 3);
    }

    #[test]
    fn test_create_line_lies_in_z_zero() {
        let line = create_line(-1.5, 2.5, 1.5, 2.5);
        assert_eq!(line.start, Vec3::new(-1.5, 2.5, 0.0));
        assert_eq!(line.end, Vec3::new(1.5, 2.5, 0.0));
        assert_eq!(line.color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cube_triangles_face_outward() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        for [a, b, c] in cube_triangles(center, 1.0) {
            let normal = (b - a).cross(c - a).normalize();
            let face_center = (a + b + c) / 3.0;
            assert!(normal.dot(face_center - center) > 0.0);
        }
    }

    #[test]
    fn test_cube_triangles_stay_inside_bounds() {
        let cube = create_cube(0.0, 0.0);
        let bounds = cube.bounds();
        for tri in cube.world_triangles() {
            for v in tri {
                assert!(v.cmpge(bounds.min).all() && v.cmple(bounds.max).all());
            }
        }
    }
}
