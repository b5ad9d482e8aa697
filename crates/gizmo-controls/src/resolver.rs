//! Plane resolver
//!
//! Derives the world-space constraint plane for one update tick. Planes are
//! rebuilt from the target's current position every tick and always pass
//! through it.

use glam::Vec3;

use gizmo_core::{Plane, Ray};

use crate::direction::ConstraintDirection;

/// Primary and, for single-axis directions, alternate constraint plane
/// through `c`.
///
/// Each plane contains the dragged axis; the two candidates for an axis are
/// the two axis-aligned planes that do. Plane directions have a single
/// candidate.
pub fn candidate_planes(direction: ConstraintDirection, c: Vec3) -> (Plane, Option<Plane>) {
    // Constants are the negated coordinate of `c` (`n · p + constant = 0`)
    match direction {
        ConstraintDirection::AxisX => (
            Plane::new(Vec3::Y, -c.y),
            Some(Plane::new(Vec3::Z, -c.z)),
        ),
        ConstraintDirection::AxisY => (
            Plane::new(Vec3::X, -c.x),
            Some(Plane::new(Vec3::Z, -c.z)),
        ),
        ConstraintDirection::AxisZ => (
            Plane::new(Vec3::X, -c.x),
            Some(Plane::new(Vec3::Y, -c.y)),
        ),
        ConstraintDirection::PlaneXY => (Plane::new(Vec3::Z, -c.z), None),
        ConstraintDirection::PlaneYZ => (Plane::new(Vec3::X, -c.x), None),
        ConstraintDirection::PlaneXZ => (Plane::new(Vec3::Y, -c.y), None),
    }
}

/// Pick whichever candidate lies farther from the ray origin.
///
/// A plane seen nearly edge-on from close by gives unstable intersections,
/// so the alternate replaces the primary only when it is strictly farther.
pub fn select_plane(primary: Plane, alternate: Option<Plane>, ray_origin: Vec3) -> Plane {
    match alternate {
        Some(alt)
            if alt.distance_to_point(ray_origin).abs()
                > primary.distance_to_point(ray_origin).abs() =>
        {
            alt
        }
        _ => primary,
    }
}

/// The constraint plane for `direction` with the target at `c`, as seen by `ray`.
pub fn resolve_plane(direction: ConstraintDirection, c: Vec3, ray: &Ray) -> Plane {
    let (primary, alternate) = candidate_planes(direction, c);
    let plane = select_plane(primary, alternate, ray.origin);
    tracing::trace!(?direction, normal = ?plane.normal, constant = plane.constant, "resolved constraint plane");
    plane
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions() -> Vec<Vec3> {
        let coords = [-3.5, -1.0, 0.0, 0.25, 2.0, 100.0];
        let mut positions = Vec::new();
        for &x in &coords {
            for &y in &coords {
                for &z in &coords {
                    positions.push(Vec3::new(x, y, z));
                }
            }
        }
        positions
    }

    #[test]
    fn test_candidate_planes_contain_target() {
        for direction in ConstraintDirection::ALL {
            for c in sample_positions() {
                let (primary, alternate) = candidate_planes(direction, c);
                assert_eq!(primary.distance_to_point(c), 0.0, "{direction:?} at {c}");
                if let Some(alt) = alternate {
                    assert_eq!(alt.distance_to_point(c), 0.0, "{direction:?} at {c}");
                }
            }
        }
    }

    #[test]
    fn test_alternates_only_for_axes() {
        for direction in ConstraintDirection::ALL {
            let (_, alternate) = candidate_planes(direction, Vec3::ZERO);
            assert_eq!(alternate.is_some(), direction.is_axis());
        }
    }

    #[test]
    fn test_axis_planes_contain_the_axis() {
        for direction in ConstraintDirection::ALL {
            let Some(axis) = direction.axis() else {
                continue;
            };
            let (primary, alternate) = candidate_planes(direction, Vec3::ZERO);
            assert_eq!(primary.normal.dot(axis.unit()), 0.0);
            assert_eq!(alternate.unwrap().normal.dot(axis.unit()), 0.0);
        }
    }

    #[test]
    fn test_plane_directions_keep_normal_axis_fixed() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(candidate_planes(ConstraintDirection::PlaneXY, c).0, Plane::new(Vec3::Z, -3.0));
        assert_eq!(candidate_planes(ConstraintDirection::PlaneYZ, c).0, Plane::new(Vec3::X, -1.0));
        assert_eq!(candidate_planes(ConstraintDirection::PlaneXZ, c).0, Plane::new(Vec3::Y, -2.0));
    }

    #[test]
    fn test_select_farther_plane_in_both_orders() {
        let near = Plane::new(Vec3::Y, 0.0);
        let far = Plane::new(Vec3::Z, 0.0);
        let origin = Vec3::new(0.0, 0.5, -4.0);

        assert_eq!(select_plane(near, Some(far), origin), far);
        assert_eq!(select_plane(far, Some(near), origin), far);
    }

    #[test]
    fn test_select_uses_absolute_distance() {
        let a = Plane::new(Vec3::X, 0.0);
        let b = Plane::new(Vec3::Y, 0.0);
        let origin = Vec3::new(1.0, -6.0, 0.0);

        assert_eq!(select_plane(a, Some(b), origin), b);
        assert_eq!(select_plane(b, Some(a), origin), b);
    }

    #[test]
    fn test_select_keeps_primary_on_tie() {
        let primary = Plane::new(Vec3::Y, 0.0);
        let alternate = Plane::new(Vec3::Z, 0.0);
        let origin = Vec3::new(0.0, 2.0, 2.0);
        assert_eq!(select_plane(primary, Some(alternate), origin), primary);
    }

    #[test]
    fn test_select_without_alternate() {
        let primary = Plane::new(Vec3::X, 1.0);
        assert_eq!(select_plane(primary, None, Vec3::new(9.0, 9.0, 9.0)), primary);
    }

    #[test]
    fn test_resolve_camera_above_x_axis() {
        // Looking down at an X-axis drag: the ground plane is the stable choice
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.5), Vec3::NEG_Y);
        let plane = resolve_plane(ConstraintDirection::AxisX, Vec3::ZERO, &ray);
        assert_eq!(plane.normal, Vec3::Y);
    }

    #[test]
    fn test_resolve_camera_in_front_of_x_axis() {
        let ray = Ray::new(Vec3::new(0.0, 0.5, 10.0), Vec3::NEG_Z);
        let plane = resolve_plane(ConstraintDirection::AxisX, Vec3::ZERO, &ray);
        assert_eq!(plane.normal, Vec3::Z);
    }
}
