use glam::Vec3;

/// Möller-Trumbore ray-triangle intersection. Double-sided.
/// Returns the distance along the ray.
pub fn moller_trumbore(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t >= EPSILON).then_some(t)
}

/// Distance to the nearest hit over a triangle soup
pub fn nearest_triangle_hit(ray_origin: Vec3, ray_dir: Vec3, triangles: &[[Vec3; 3]]) -> Option<f32> {
    triangles
        .iter()
        .filter_map(|[v0, v1, v2]| moller_trumbore(ray_origin, ray_dir, *v0, *v1, *v2))
        .min_by(f32::total_cmp)
}
