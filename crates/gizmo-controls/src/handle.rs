//! Handle registry
//!
//! The fixed set of manipulable controls. Each handle is a plain record kept
//! in an arena and addressed by [`HandleId`]; renderers draw from the same
//! records but nothing here depends on how they are drawn.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

use gizmo_core::constants::colors;
use gizmo_core::{
    HandleDimensions, Ray, ray_box_intersection, ray_quad_intersection, ray_sphere_intersection,
};

use crate::direction::ConstraintDirection;

/// Stable identifier of a handle: its index in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(usize);

impl HandleId {
    /// Position of the handle in registry order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Local-space handle geometry, centred at the handle's offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleShape {
    /// Thin bar; the long side runs along local Z
    Cuboid {
        /// Half size along each local axis
        half_extents: Vec3,
    },
    /// Point marker
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Flat double-sided patch in the local XY plane
    Quad {
        /// Half size along local X and Y
        half_size: Vec2,
    },
}

/// A manipulable control
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    /// Registry identifier
    pub id: HandleId,
    /// Short name, e.g. `axis_x`
    pub name: &'static str,
    /// Geometry in handle space
    pub shape: HandleShape,
    /// Offset from the target position to the handle centre
    pub offset: Vec3,
    /// Orientation of the handle geometry
    pub rotation: Quat,
    /// Constraint applied while this handle is dragged
    pub direction: ConstraintDirection,
    /// Whether dragging this handle scales instead of translating
    pub is_scale: bool,
    /// Display color (RGBA)
    pub color: [f32; 4],
}

impl Handle {
    /// World-space centre when the handles are anchored at `anchor`
    pub fn center(&self, anchor: Vec3) -> Vec3 {
        anchor + self.offset
    }

    /// Ray parameter of the nearest hit with this handle, if any.
    ///
    /// Handles follow the anchor's position only, never its rotation or scale.
    pub fn intersect(&self, ray: &Ray, anchor: Vec3) -> Option<f32> {
        let inverse = self.rotation.inverse();
        let local_origin = inverse * (ray.origin - self.center(anchor));
        let local_dir = inverse * ray.direction;

        match self.shape {
            HandleShape::Cuboid { half_extents } => {
                ray_box_intersection(local_origin, local_dir, half_extents)
            }
            HandleShape::Sphere { radius } => {
                ray_sphere_intersection(local_origin, local_dir, Vec3::ZERO, radius)
            }
            HandleShape::Quad { half_size } => {
                ray_quad_intersection(local_origin, local_dir, half_size)
            }
        }
    }
}

/// Ordered arena of all handles
#[derive(Debug, Clone)]
pub struct HandleRegistry {
    handles: Vec<Handle>,
}

impl Default for HandleRegistry {
    fn default() -> Self {
        Self::new(&HandleDimensions::default())
    }
}

impl HandleRegistry {
    /// Build the registry: axis bars X, Y, Z, then scale spheres X, Y, Z,
    /// then plane patches YZ, XZ, XY.
    pub fn new(dims: &HandleDimensions) -> Self {
        let bar = HandleShape::Cuboid {
            half_extents: Vec3::new(
                dims.axis_thickness / 2.0,
                dims.axis_thickness / 2.0,
                dims.axis_length / 2.0,
            ),
        };
        let sphere = HandleShape::Sphere {
            radius: dims.scale_radius,
        };
        let patch = HandleShape::Quad {
            half_size: Vec2::splat(dims.plane_size / 2.0),
        };
        let (ao, so, po) = (dims.axis_offset, dims.scale_offset, dims.plane_offset);

        // (name, shape, offset, rotation, direction, is_scale, color)
        #[rustfmt::skip]
        let layout = [
            ("axis_x", bar, Vec3::new(ao, 0.0, 0.0), Quat::from_rotation_y(FRAC_PI_2), ConstraintDirection::AxisX, false, colors::X_AXIS),
            ("axis_y", bar, Vec3::new(0.0, ao, 0.0), Quat::from_rotation_x(FRAC_PI_2), ConstraintDirection::AxisY, false, colors::Y_AXIS),
            ("axis_z", bar, Vec3::new(0.0, 0.0, ao), Quat::IDENTITY, ConstraintDirection::AxisZ, false, colors::Z_AXIS),
            ("scale_x", sphere, Vec3::new(so, 0.0, 0.0), Quat::IDENTITY, ConstraintDirection::AxisX, true, colors::X_AXIS),
            ("scale_y", sphere, Vec3::new(0.0, so, 0.0), Quat::IDENTITY, ConstraintDirection::AxisY, true, colors::Y_AXIS),
            ("scale_z", sphere, Vec3::new(0.0, 0.0, so), Quat::IDENTITY, ConstraintDirection::AxisZ, true, colors::Z_AXIS),
            ("plane_yz", patch, Vec3::new(0.0, po, po), Quat::from_rotation_y(FRAC_PI_2), ConstraintDirection::PlaneYZ, false, colors::YZ_PLANE),
            ("plane_xz", patch, Vec3::new(po, 0.0, po), Quat::from_rotation_x(FRAC_PI_2), ConstraintDirection::PlaneXZ, false, colors::XZ_PLANE),
            ("plane_xy", patch, Vec3::new(po, po, 0.0), Quat::IDENTITY, ConstraintDirection::PlaneXY, false, colors::XY_PLANE),
        ];

        let handles = layout
            .into_iter()
            .enumerate()
            .map(|(i, (name, shape, offset, rotation, direction, is_scale, color))| Handle {
                id: HandleId(i),
                name,
                shape,
                offset,
                rotation,
                direction,
                is_scale,
                color,
            })
            .collect();

        Self { handles }
    }

    /// All handles in registry order
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Look up a handle by id
    pub fn get(&self, id: HandleId) -> Option<&Handle> {
        self.handles.get(id.0)
    }

    /// Iterate over handles in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    /// Number of handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if the registry holds no handles
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
