use glam::Vec3;

/// Axis-aligned bounding box in world space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given edge lengths centered on `center`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size_unit_cube() {
        let aabb = AABB::from_center_size(Vec3::new(-1.5, 0.0, 0.0), Vec3::ONE);
        assert_eq!(aabb.min, Vec3::new(-2.0, -0.5, -0.5));
        assert_eq!(aabb.max, Vec3::new(-1.0, 0.5, 0.5));
        assert_eq!(aabb.center(), Vec3::new(-1.5, 0.0, 0.0));
    }

    #[test]
    fn test_size() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(aabb.size(), Vec3::new(2.0, 3.0, 4.0));
    }
}
