//! Object Manipulation Core
//!
//! Math and configuration building blocks for the manipulation controls:
//! - Ray: pointer ray supplied by the host every event
//! - Plane: constraint plane in `normal · p + constant = 0` form
//! - Collision: local-space ray tests for handle shapes
//! - Config: serializable handle dimensions and tuning values

pub mod collision;
pub mod config;
pub mod constants;
pub mod plane;
pub mod ray;

pub use collision::*;
pub use config::*;
pub use plane::*;
pub use ray::*;
