//! Constraint directions and drag modes

use glam::Vec3;

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// Unit vector along the axis
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Component of `v` along this axis
    pub fn component(&self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with this axis' component replaced by `value`
    pub fn with_component(&self, mut v: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        v
    }
}

/// Which axis or plane a drag is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintDirection {
    /// Along X only
    AxisX,
    /// Along Y only
    AxisY,
    /// Along Z only
    AxisZ,
    /// Plane spanned by Y and Z (X stays fixed)
    PlaneYZ,
    /// Plane spanned by X and Z (Y stays fixed)
    PlaneXZ,
    /// Plane spanned by X and Y (Z stays fixed)
    PlaneXY,
}

impl ConstraintDirection {
    /// All directions, axes first
    pub const ALL: [ConstraintDirection; 6] = [
        ConstraintDirection::AxisX,
        ConstraintDirection::AxisY,
        ConstraintDirection::AxisZ,
        ConstraintDirection::PlaneYZ,
        ConstraintDirection::PlaneXZ,
        ConstraintDirection::PlaneXY,
    ];

    /// The single axis for axis directions, `None` for planes
    pub fn axis(&self) -> Option<Axis> {
        match self {
            ConstraintDirection::AxisX => Some(Axis::X),
            ConstraintDirection::AxisY => Some(Axis::Y),
            ConstraintDirection::AxisZ => Some(Axis::Z),
            _ => None,
        }
    }

    /// Returns true for single-axis directions
    pub fn is_axis(&self) -> bool {
        self.axis().is_some()
    }

    /// Returns true for two-axis plane directions
    pub fn is_plane(&self) -> bool {
        !self.is_axis()
    }
}

/// What a drag changes on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Move the target
    #[default]
    Translate,
    /// Resize the target along one axis
    Scale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::Y.component(v), 2.0);
        assert_eq!(Axis::Z.with_component(v, 9.0), Vec3::new(1.0, 2.0, 9.0));
        assert_eq!(Axis::X.unit(), Vec3::X);
    }

    #[test]
    fn test_direction_kinds() {
        let axes = ConstraintDirection::ALL.iter().filter(|d| d.is_axis()).count();
        let planes = ConstraintDirection::ALL.iter().filter(|d| d.is_plane()).count();
        assert_eq!(axes, 3);
        assert_eq!(planes, 3);
        assert_eq!(ConstraintDirection::AxisZ.axis(), Some(Axis::Z));
        assert_eq!(ConstraintDirection::PlaneXY.axis(), None);
    }
}
