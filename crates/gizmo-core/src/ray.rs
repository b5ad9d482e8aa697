//! World-space pointer rays.
//!
//! The host builds a ray from its camera and pointer coordinates on every
//! event; nothing here depends on how it was derived.

use glam::Vec3;

use crate::plane::Plane;

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3,
    /// Unit direction (zero if the ray was built from a zero vector).
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray parameter at which the ray meets `plane`.
    ///
    /// A ray running parallel to the plane (`|n · dir| < epsilon`) only meets
    /// it when its origin lies on the plane, in which case `0.0` is returned.
    /// Planes behind the origin are not hit, and neither is anything by a ray
    /// with a zero direction.
    pub fn distance_to_plane(&self, plane: &Plane, epsilon: f32) -> Option<f32> {
        if self.direction == Vec3::ZERO {
            return None;
        }

        let denom = plane.normal.dot(self.direction);

        if denom.abs() < epsilon {
            if plane.distance_to_point(self.origin) == 0.0 {
                return Some(0.0);
            }
            return None;
        }

        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        if t < 0.0 { None } else { Some(t) }
    }

    /// Point where the ray meets `plane`, see [`Ray::distance_to_plane`].
    pub fn intersect_plane(&self, plane: &Plane, epsilon: f32) -> Option<Vec3> {
        self.distance_to_plane(plane, epsilon).map(|t| self.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PARALLEL_EPSILON;

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_ray_hits_plane() {
        let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::NEG_Y);
        let plane = Plane::new(Vec3::Y, -1.0);
        let point = ray.intersect_plane(&plane, PARALLEL_EPSILON);
        assert_eq!(point, Some(Vec3::new(1.0, 1.0, 2.0)));
    }

    #[test]
    fn test_plane_behind_ray_is_missed() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        let plane = Plane::new(Vec3::Y, 0.0);
        assert!(ray.intersect_plane(&plane, PARALLEL_EPSILON).is_none());
    }

    #[test]
    fn test_parallel_ray_misses_plane() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let plane = Plane::new(Vec3::Y, 0.0);
        assert!(ray.intersect_plane(&plane, PARALLEL_EPSILON).is_none());
    }

    #[test]
    fn test_parallel_ray_on_plane_returns_origin() {
        let ray = Ray::new(Vec3::new(3.0, 0.0, 1.0), Vec3::X);
        let plane = Plane::new(Vec3::Y, 0.0);
        assert_eq!(
            ray.intersect_plane(&plane, PARALLEL_EPSILON),
            Some(Vec3::new(3.0, 0.0, 1.0))
        );
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let plane = Plane::new(Vec3::Y, 0.0);

        let above = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert!(above.intersect_plane(&plane, PARALLEL_EPSILON).is_none());

        // Even with the origin on the plane
        let on_plane = Ray::new(Vec3::new(2.0, 0.0, -1.0), Vec3::ZERO);
        assert!(on_plane.distance_to_plane(&plane, PARALLEL_EPSILON).is_none());
        assert!(on_plane.intersect_plane(&plane, PARALLEL_EPSILON).is_none());
    }
}
