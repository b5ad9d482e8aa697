//! Manipulation state machine
//!
//! Drives the drag lifecycle for the active target:
//!
//! ```text
//! Idle --begin_drag(hit)--> Dragging --update_drag--> Dragging
//!   ^                          |
//!   +-------- end_drag --------+
//! ```
//!
//! Every entry point runs to completion inside one host input event.

use std::fmt;
use std::sync::{Arc, Weak};

use glam::Vec3;
use parking_lot::Mutex;

use gizmo_core::{ControlsConfig, Plane, Ray};

use crate::applicator::{ManipulationUpdate, apply_drag};
use crate::direction::{ConstraintDirection, DragMode};
use crate::handle::{HandleId, HandleRegistry};
use crate::hit::{self, HandleHit};
use crate::resolver::resolve_plane;
use crate::target::{ManipulationTarget, SharedTarget, TargetTransform};

type Callback = Box<dyn FnMut(Vec3) + Send>;

/// Result callbacks configured at construction
pub struct ManipulatorCallbacks {
    on_translate: Callback,
    on_scale: Callback,
}

impl ManipulatorCallbacks {
    /// `on_translate` receives the new position after each translate update,
    /// `on_scale` the new scale after each scale update.
    pub fn new(
        on_translate: impl FnMut(Vec3) + Send + 'static,
        on_scale: impl FnMut(Vec3) + Send + 'static,
    ) -> Self {
        Self {
            on_translate: Box::new(on_translate),
            on_scale: Box::new(on_scale),
        }
    }

    fn notify(&mut self, update: ManipulationUpdate) {
        match update {
            ManipulationUpdate::Translation(position) => (self.on_translate)(position),
            ManipulationUpdate::Scale(scale) => (self.on_scale)(scale),
        }
    }
}

impl Default for ManipulatorCallbacks {
    fn default() -> Self {
        Self::new(|_| {}, |_| {})
    }
}

impl fmt::Debug for ManipulatorCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManipulatorCallbacks").finish_non_exhaustive()
    }
}

/// An engaged drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Handle that was grabbed
    pub handle: HandleId,
    /// Constraint of the grabbed handle
    pub direction: ConstraintDirection,
    /// Translate or scale
    pub mode: DragMode,
    /// Grab point minus target position, fixed for the whole drag
    pub drag_offset: Vec3,
}

/// Drag lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ManipulationState {
    /// No drag engaged
    #[default]
    Idle,
    /// A handle is held
    Dragging(ActiveDrag),
}

/// Pointer-driven translate/scale controls for one target at a time
pub struct Manipulator<T: ManipulationTarget = TargetTransform> {
    registry: HandleRegistry,
    config: ControlsConfig,
    callbacks: ManipulatorCallbacks,
    target: Option<Weak<Mutex<T>>>,
    state: ManipulationState,
}

impl<T: ManipulationTarget> Manipulator<T> {
    /// Create a manipulator with the default handle layout
    pub fn new(callbacks: ManipulatorCallbacks) -> Self {
        Self::with_config(ControlsConfig::default(), callbacks)
    }

    /// Create a manipulator from a (validated) configuration
    pub fn with_config(config: ControlsConfig, callbacks: ManipulatorCallbacks) -> Self {
        Self {
            registry: HandleRegistry::new(&config.handles),
            config,
            callbacks,
            target: None,
            state: ManipulationState::Idle,
        }
    }

    /// Make `target` the manipulable object. Ends any active drag.
    pub fn set_target(&mut self, target: &SharedTarget<T>) {
        self.end_drag();
        self.target = Some(Arc::downgrade(target));
        tracing::debug!("Manipulation target set");
    }

    /// Remove the manipulable object. Ends any active drag.
    pub fn clear_target(&mut self) {
        self.end_drag();
        if self.target.take().is_some() {
            tracing::debug!("Manipulation target cleared");
        }
    }

    /// Whether a live target is assigned
    pub fn has_target(&self) -> bool {
        self.live_target().is_some()
    }

    /// The handle arena
    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    /// Active configuration
    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> &ManipulationState {
        &self.state
    }

    /// Whether a drag is engaged
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ManipulationState::Dragging(_))
    }

    /// Constraint direction of the engaged drag
    pub fn active_direction(&self) -> Option<ConstraintDirection> {
        self.active_drag().map(|drag| drag.direction)
    }

    /// Grab offset of the engaged drag
    pub fn drag_offset(&self) -> Option<Vec3> {
        self.active_drag().map(|drag| drag.drag_offset)
    }

    /// Hit-test `ray` against the handles around the target.
    ///
    /// Read-only: hovering never changes the drag state.
    pub fn pick(&self, ray: &Ray) -> Option<HandleHit> {
        let target = self.live_target()?;
        let position = target.lock().position();
        hit::pick(&self.registry, ray, position)
    }

    /// Try to grab a handle with `ray`. Returns true if a drag was engaged.
    ///
    /// On success the drag is applied once with the same ray so the target
    /// is already in place before the next pointer move. A drag left over
    /// from a lost release is discarded first.
    pub fn begin_drag(&mut self, ray: &Ray) -> bool {
        if let ManipulationState::Dragging(stale) = self.state {
            tracing::warn!(
                direction = ?stale.direction,
                "Discarding drag that was never released"
            );
            self.state = ManipulationState::Idle;
        }

        let Some(target) = self.upgrade_target() else {
            return false;
        };
        let position = target.lock().position();

        let Some(hit) = hit::pick(&self.registry, ray, position) else {
            tracing::trace!("Press missed all handles");
            return false;
        };

        let mode = if hit.is_scale {
            DragMode::Scale
        } else {
            DragMode::Translate
        };
        self.state = ManipulationState::Dragging(ActiveDrag {
            handle: hit.handle,
            direction: hit.direction,
            mode,
            drag_offset: hit.drag_offset,
        });
        tracing::debug!(
            handle = hit.handle.index(),
            direction = ?hit.direction,
            ?mode,
            offset = %hit.drag_offset,
            "Drag started"
        );

        self.update_drag(ray);
        true
    }

    /// Advance the engaged drag with a new pointer ray.
    ///
    /// Writes the result to the target, invokes the matching callback once
    /// and returns the applied update. Does nothing while idle, without a
    /// target, or when the ray misses the constraint plane.
    pub fn update_drag(&mut self, ray: &Ray) -> Option<ManipulationUpdate> {
        let drag = self.active_drag()?;
        let target = self.upgrade_target()?;

        let update = {
            let mut target = target.lock();
            let update = apply_drag(&drag, target.position(), target.scale(), ray, &self.config)?;
            match update {
                ManipulationUpdate::Translation(position) => target.set_position(position),
                ManipulationUpdate::Scale(scale) => target.set_scale(scale),
            }
            update
        };

        tracing::trace!(?update, "Drag applied");
        // Lock released: callbacks may read the target
        self.callbacks.notify(update);
        Some(update)
    }

    /// Release the engaged drag. Safe to call while idle.
    pub fn end_drag(&mut self) {
        if let ManipulationState::Dragging(drag) = self.state {
            tracing::debug!(direction = ?drag.direction, "Drag ended");
            self.state = ManipulationState::Idle;
        }
    }

    /// Constraint plane the engaged drag would use for `ray` this tick
    pub fn constraint_plane(&self, ray: &Ray) -> Option<Plane> {
        let drag = self.active_drag()?;
        let target = self.live_target()?;
        let position = target.lock().position();
        Some(resolve_plane(drag.direction, position, ray))
    }

    fn active_drag(&self) -> Option<ActiveDrag> {
        match self.state {
            ManipulationState::Dragging(drag) => Some(drag),
            ManipulationState::Idle => None,
        }
    }

    fn live_target(&self) -> Option<SharedTarget<T>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    /// Like `live_target`, but forgets a target the host has dropped and
    /// returns to idle.
    fn upgrade_target(&mut self) -> Option<SharedTarget<T>> {
        let target = self.live_target();
        if target.is_none() {
            if self.target.take().is_some() {
                tracing::debug!("Manipulation target dropped by host");
            }
            self.end_drag();
        }
        target
    }
}
