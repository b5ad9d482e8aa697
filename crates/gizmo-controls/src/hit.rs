//! Hit tester
//!
//! Intersects a pointer ray with every registered handle and reports the
//! nearest one together with the grab offset.

use glam::Vec3;

use gizmo_core::Ray;

use crate::direction::ConstraintDirection;
use crate::handle::{HandleId, HandleRegistry};

/// Result of a successful pick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleHit {
    /// The handle that was hit
    pub handle: HandleId,
    /// Constraint of the hit handle
    pub direction: ConstraintDirection,
    /// Whether the hit handle is a scale handle
    pub is_scale: bool,
    /// World-space intersection point
    pub point: Vec3,
    /// Distance along the ray
    pub distance: f32,
    /// `point - target_position`
    pub drag_offset: Vec3,
}

/// Find the nearest handle hit by `ray`, with handles anchored at `target_position`.
///
/// Returns `None` when nothing is hit. Equal distances keep the handle that
/// comes first in registry order.
pub fn pick(registry: &HandleRegistry, ray: &Ray, target_position: Vec3) -> Option<HandleHit> {
    let mut closest: Option<(HandleId, f32)> = None;

    for handle in registry.iter() {
        if let Some(dist) = handle.intersect(ray, target_position)
            && closest.is_none_or(|(_, best)| dist < best)
        {
            closest = Some((handle.id, dist));
        }
    }

    let (id, distance) = closest?;
    let handle = registry.get(id)?;
    let point = ray.at(distance);

    Some(HandleHit {
        handle: id,
        direction: handle.direction,
        is_scale: handle.is_scale,
        point,
        distance,
        drag_offset: point - target_position,
    })
}

#[cfg(test)]
mod tests {
    use gizmo_core::HandleDimensions;

    use super::*;

    #[test]
    fn test_pick_axis_bar() {
        let registry = HandleRegistry::default();
        let target = Vec3::ZERO;
        let ray = Ray::new(Vec3::new(0.275, 5.0, 0.0), Vec3::NEG_Y);

        let hit = pick(&registry, &ray, target).unwrap();
        assert_eq!(registry.get(hit.handle).unwrap().name, "axis_x");
        assert_eq!(hit.direction, ConstraintDirection::AxisX);
        assert!(!hit.is_scale);
        assert_eq!(hit.drag_offset, hit.point - target);
        assert_eq!(hit.point.x, 0.275);
    }

    #[test]
    fn test_drag_offset_is_relative_to_target() {
        let registry = HandleRegistry::default();
        let target = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(Vec3::new(1.275, 7.0, 3.0), Vec3::NEG_Y);

        let hit = pick(&registry, &ray, target).unwrap();
        assert_eq!(hit.direction, ConstraintDirection::AxisX);
        assert_eq!(hit.drag_offset, hit.point - target);
        assert!((hit.drag_offset - Vec3::new(0.275, 0.025, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_pick_scale_sphere() {
        let registry = HandleRegistry::default();
        let ray = Ray::new(Vec3::new(0.0, 0.65, 5.0), Vec3::NEG_Z);

        let hit = pick(&registry, &ray, Vec3::ZERO).unwrap();
        assert_eq!(registry.get(hit.handle).unwrap().name, "scale_y");
        assert!(hit.is_scale);
        assert!((hit.distance - 4.95).abs() < 1e-5);
    }

    #[test]
    fn test_pick_plane_patch() {
        let registry = HandleRegistry::default();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::NEG_Z);

        let hit = pick(&registry, &ray, Vec3::ZERO).unwrap();
        assert_eq!(hit.direction, ConstraintDirection::PlaneXY);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let registry = HandleRegistry::default();
        // Runs along the X axis from the far side: the scale sphere is in
        // front of the axis bar
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);

        let hit = pick(&registry, &ray, Vec3::ZERO).unwrap();
        assert_eq!(registry.get(hit.handle).unwrap().name, "scale_x");

        // From the near side the bar comes first
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        let hit = pick(&registry, &ray, Vec3::ZERO).unwrap();
        assert_eq!(registry.get(hit.handle).unwrap().name, "axis_x");
        assert!((hit.drag_offset - Vec3::new(0.025, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_equal_distances_pick_the_earlier_handle() {
        // Collapsing the scale spheres onto the anchor gives three handles
        // with identical surfaces
        let dims = HandleDimensions {
            scale_offset: 0.0,
            ..HandleDimensions::default()
        };
        let registry = HandleRegistry::new(&dims);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        let distances: Vec<f32> = registry
            .iter()
            .filter(|handle| handle.is_scale)
            .map(|handle| handle.intersect(&ray, Vec3::ZERO).unwrap())
            .collect();
        assert_eq!(distances.len(), 3);
        assert!(distances.iter().all(|&d| d == distances[0]));

        let hit = pick(&registry, &ray, Vec3::ZERO).unwrap();
        assert_eq!(registry.get(hit.handle).unwrap().name, "scale_x");
        assert_eq!(hit.distance, distances[0]);
    }

    #[test]
    fn test_zero_direction_never_picks() {
        let registry = HandleRegistry::default();
        // Starts inside the X axis bar
        let ray = Ray::new(Vec3::new(0.275, 0.0, 0.0), Vec3::ZERO);
        assert!(pick(&registry, &ray, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_miss_returns_none() {
        let registry = HandleRegistry::default();
        let ray = Ray::new(Vec3::new(3.0, 3.0, 5.0), Vec3::NEG_Z);
        assert!(pick(&registry, &ray, Vec3::ZERO).is_none());
    }
}
