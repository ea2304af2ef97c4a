use glam::Vec3;
use hover_scene::math::{intersect_aabb, Ray, AABB};

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_outside() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit AABB");

        assert!((t - 5.0).abs() < 0.001, "Hit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(10.0, 10.0, 10.0),
        );

        assert_eq!(t, None, "Ray should miss AABB");
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let ray_origin = Vec3::new(5.0, 0.0, 0.0);
        let box_min = Vec3::new(0.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, Vec3::X, box_min, box_max)
            .expect("Should return exit distance when ray starts inside");

        assert!((t - 5.0).abs() < 0.001, "Exit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_pointing_away_from_aabb() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::NEG_X,
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );

        assert_eq!(t, None, "Ray pointing away should not hit AABB");
    }

    #[test]
    fn test_ray_parallel_to_aabb_face() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, 1.0, -1.0),
            Vec3::new(10.0, 2.0, 1.0),
        );

        assert_eq!(t, None, "Ray parallel to and outside AABB should miss");
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, None);
    }

    // Corner tests - rays aimed exactly at a corner of a unit cube
    #[test]
    fn test_ray_hits_corner_min_min_min() {
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let ray_origin = Vec3::new(-5.0, -5.0, -5.0);
        let ray_dir = (box_min - ray_origin).normalize();

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max)
            .expect("Ray should hit corner (0,0,0)");
        let hit_point = ray_origin + ray_dir * t;
        assert!(
            hit_point.length() < 0.001,
            "Hit point should be at corner (0,0,0), got {:?}", hit_point
        );
    }

    #[test]
    fn test_ray_hits_corner_max_min_max() {
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);
        let corner = Vec3::new(1.0, 0.0, 1.0);

        let ray_origin = Vec3::new(5.0, -5.0, 5.0);
        let ray_dir = (corner - ray_origin).normalize();

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max)
            .expect("Ray should hit corner (1,0,1)");
        let hit_point = ray_origin + ray_dir * t;
        assert!(
            (hit_point - corner).length() < 0.001,
            "Hit point should be at corner (1,0,1), got {:?}", hit_point
        );
    }

    // Edge test - ray hitting where two faces meet
    #[test]
    fn test_ray_hits_edge_x_axis() {
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(2.0, 1.0, 1.0);
        let edge_point = Vec3::new(1.0, 0.0, 0.0);

        let ray_origin = Vec3::new(1.0, -5.0, -5.0);
        let ray_dir = (edge_point - ray_origin).normalize();

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max)
            .expect("Ray should hit edge along X axis");
        let hit_point = ray_origin + ray_dir * t;
        assert!(
            (hit_point - edge_point).length() < 0.001,
            "Hit point should be on edge at (1,0,0), got {:?}", hit_point
        );
    }
}

#[cfg(test)]
mod ray_struct_tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, -4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.direction - Vec3::new(0.6, 0.0, -0.8)).length() < 1e-6);
    }

    #[test]
    fn test_ray_at_cube_from_camera() {
        let cube = AABB::from_center_size(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        let t = ray.intersect_aabb(&cube).expect("Camera ray should hit the centered cube");
        assert!((t - 4.5).abs() < 1e-5, "Front face is 4.5 units away, got {}", t);
    }
}
