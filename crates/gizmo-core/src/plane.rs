//! Infinite planes used as drag constraints.

use glam::Vec3;

/// Plane in Hessian normal form: all points `p` with `normal · p + constant = 0`.
///
/// A plane through `c` with normal `n` therefore has `constant = -(n · c)`.
/// For the axis-aligned constraint planes this is `-c.x`, `-c.y` or `-c.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset along the normal.
    pub constant: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and a constant.
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Creates the plane with the given normal passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            constant: -normal.dot(point),
        }
    }

    /// Signed distance from the plane to `point` (positive on the normal side).
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Returns true if `point` lies on the plane within `tolerance`.
    pub fn contains(&self, point: Vec3, tolerance: f32) -> bool {
        self.distance_to_point(point).abs() <= tolerance
    }
}
