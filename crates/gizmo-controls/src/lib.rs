//! Object Manipulation Controls
//!
//! Pointer-driven translate and scale handles for a selected scene object.
//!
//! # Architecture
//!
//! The engine is a standalone [`Manipulator`] that the host feeds with
//! world-space rays and that reports results through callbacks:
//!
//! - [`handle::HandleRegistry`] - Fixed arena of axis, scale and plane handles
//! - [`hit::pick`] - Nearest-handle hit test and grab offset
//! - [`resolver`] - Constraint plane selection for each update tick
//! - [`applicator::apply_drag`] - Plane projection to new position or scale
//! - [`manipulator::Manipulator`] - Idle/Dragging state machine
//!
//! # Module Structure
//!
//! ```text
//! gizmo-controls/
//! ├── direction.rs     # ConstraintDirection, Axis, DragMode
//! ├── handle.rs        # Handle, HandleShape, HandleRegistry
//! ├── hit.rs           # Hit tester
//! ├── resolver.rs      # Plane resolver
//! ├── applicator.rs    # Drag applicator
//! ├── target.rs        # ManipulationTarget, shared target handles
//! └── manipulator.rs   # Drag lifecycle and callbacks
//! ```

pub mod applicator;
pub mod direction;
pub mod handle;
pub mod hit;
pub mod manipulator;
pub mod resolver;
pub mod target;

pub use applicator::{ManipulationUpdate, apply_drag};
pub use direction::{Axis, ConstraintDirection, DragMode};
pub use handle::{Handle, HandleId, HandleRegistry, HandleShape};
pub use hit::{HandleHit, pick};
pub use manipulator::{ActiveDrag, ManipulationState, Manipulator, ManipulatorCallbacks};
pub use resolver::{candidate_planes, resolve_plane, select_plane};
pub use target::{ManipulationTarget, SharedTarget, TargetTransform};

pub use gizmo_core::{ControlsConfig, Plane, Ray};

#[cfg(test)]
pub(crate) fn assert_vec3_near(actual: glam::Vec3, expected: glam::Vec3) {
    assert!(
        (actual - expected).length() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
