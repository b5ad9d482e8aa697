//! Manipulated objects
//!
//! The host owns the scene objects. The manipulator only holds a weak
//! reference to the active one and reads and writes its transform through
//! [`ManipulationTarget`].

use std::sync::Arc;

use glam::{Quat, Vec3};
use parking_lot::Mutex;

/// Transform access the manipulator needs from a scene object
pub trait ManipulationTarget {
    /// Current world position
    fn position(&self) -> Vec3;
    /// Replace the world position
    fn set_position(&mut self, position: Vec3);
    /// Current per-axis scale
    fn scale(&self) -> Vec3;
    /// Replace the per-axis scale
    fn set_scale(&mut self, scale: Vec3);
}

/// Shared handle to a host-owned target
pub type SharedTarget<T = TargetTransform> = Arc<Mutex<T>>;

/// Plain object transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTransform {
    /// World position
    pub position: Vec3,
    /// Carried for the host; handles never follow it
    pub rotation: Quat,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for TargetTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl TargetTransform {
    /// Unrotated, unit-scale transform at `position`
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> SharedTarget<Self> {
        Arc::new(Mutex::new(self))
    }
}

impl ManipulationTarget for TargetTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}
