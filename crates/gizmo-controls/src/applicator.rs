//! Drag applicator
//!
//! Projects the current pointer ray onto the resolved constraint plane and
//! maps the intersection to a new position or scale.

use glam::Vec3;

use gizmo_core::{ControlsConfig, Ray};

use crate::direction::DragMode;
use crate::manipulator::ActiveDrag;
use crate::resolver::resolve_plane;

/// Transform result of one update tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManipulationUpdate {
    /// New full position of the target
    Translation(Vec3),
    /// New full scale of the target
    Scale(Vec3),
}

impl ManipulationUpdate {
    /// The carried vector
    pub fn value(&self) -> Vec3 {
        match self {
            ManipulationUpdate::Translation(v) | ManipulationUpdate::Scale(v) => *v,
        }
    }
}

/// Compute the target's new position or scale for `drag` under `ray`.
///
/// `position` and `scale` are the target's current values. Returns `None`
/// when the ray does not meet the constraint plane; the caller must then
/// leave the target untouched.
///
/// - Scale: the dragged axis becomes `(hit - position)[axis] * scale_factor`,
///   the other two axes keep their value.
/// - Translate on an axis: only that coordinate becomes `(hit - drag_offset)[axis]`.
/// - Translate on a plane: the whole position becomes `hit - drag_offset`.
pub fn apply_drag(
    drag: &ActiveDrag,
    position: Vec3,
    scale: Vec3,
    ray: &Ray,
    config: &ControlsConfig,
) -> Option<ManipulationUpdate> {
    let plane = resolve_plane(drag.direction, position, ray);
    let Some(point) = ray.intersect_plane(&plane, config.parallel_epsilon) else {
        tracing::trace!(direction = ?drag.direction, "ray misses constraint plane");
        return None;
    };

    match drag.mode {
        DragMode::Scale => {
            // Scale handles only exist on single axes
            let axis = drag.direction.axis()?;
            let local = point - position;
            let value = axis.component(local) * config.scale_factor;
            Some(ManipulationUpdate::Scale(axis.with_component(scale, value)))
        }
        DragMode::Translate => {
            let moved = point - drag.drag_offset;
            let new_position = match drag.direction.axis() {
                Some(axis) => axis.with_component(position, axis.component(moved)),
                None => moved,
            };
            Some(ManipulationUpdate::Translation(new_position))
        }
    }
}
