//! Handle collision detection utilities
//!
//! This module implements ray-casting collision detection for handle picking.
//! All tests work in the shape's local frame: the caller moves the ray into
//! that frame first, which keeps every shape axis-aligned and centred at the
//! origin. Because that transform is rigid, the returned ray parameter is
//! also the world-space distance along a unit-length ray.

use glam::{Vec2, Vec3};

use crate::constants::PARALLEL_EPSILON;

/// Ray-box intersection test (slab method).
///
/// Tests a ray against an axis-aligned box centred at the origin.
///
/// # Algorithm
///
/// For each axis the ray is clipped against the pair of slab planes
/// `-half_extents[i]` and `half_extents[i]`. The entry parameter is the
/// largest of the per-axis entries and the exit parameter the smallest of the
/// exits. The box is hit when entry does not exceed exit and the exit lies in
/// front of the origin.
///
/// A ray starting inside the box reports its exit point, matching the
/// double-sided handle surfaces.
///
/// # Arguments
///
/// * `ray_origin` - The starting point of the ray, in box space.
/// * `ray_dir` - The direction of the ray (should be normalized).
/// * `half_extents` - Half size of the box along each axis.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter at the closest intersection point.
/// * `None` - If the ray does not intersect the box.
pub fn ray_box_intersection(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for i in 0..3 {
        let origin = ray_origin[i];
        let dir = ray_dir[i];
        let half = half_extents[i];

        if dir == 0.0 {
            // Parallel to this slab: must already be between its planes
            if origin < -half || origin > half {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (-half - origin) * inv;
        let t2 = (half - origin) * inv;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));

        if t_enter > t_exit {
            return None;
        }
    }

    // An unbounded exit means no slab constrained the ray: its direction is zero
    if !t_exit.is_finite() || t_exit < 0.0 {
        return None;
    }

    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// Ray-sphere intersection test.
///
/// Solves `|origin + t * dir - center|² = radius²` for `t`. The near root is
/// returned when it lies in front of the ray; a ray starting inside the
/// sphere reports the far root instead.
///
/// # Arguments
///
/// * `ray_origin` - The starting point of the ray.
/// * `ray_dir` - The direction of the ray.
/// * `sphere_center` - Centre of the sphere.
/// * `radius` - Radius of the sphere.
pub fn ray_sphere_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    sphere_center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - sphere_center;
    let a = ray_dir.dot(ray_dir);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-b - sqrt_d) / (2.0 * a);
    if near >= 0.0 {
        return Some(near);
    }

    let far = (-b + sqrt_d) / (2.0 * a);
    if far >= 0.0 { Some(far) } else { None }
}

/// Ray-quad intersection test.
///
/// Tests a ray against a double-sided rectangle lying in the local XY plane,
/// centred at the origin with the given half size.
///
/// # Algorithm
///
/// 1. Find the intersection of the ray with the `z = 0` plane
/// 2. Check that the intersection point lies within the rectangle
///
/// # Returns
///
/// * `Some(t)` - The ray parameter at the intersection point.
/// * `None` - If the ray misses, runs parallel to the quad or points away.
pub fn ray_quad_intersection(ray_origin: Vec3, ray_dir: Vec3, half_size: Vec2) -> Option<f32> {
    let denom = ray_dir.z;

    // Ray is nearly parallel to the quad
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = -ray_origin.z / denom;

    // Intersection is behind the ray origin
    if t < 0.0 {
        return None;
    }

    let hit_point = ray_origin + ray_dir * t;
    if hit_point.x.abs() <= half_size.x && hit_point.y.abs() <= half_size.y {
        Some(t)
    } else {
        None
    }
}
