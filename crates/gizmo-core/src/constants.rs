//! Global constants for gizmo-core
//!
//! Default handle layout, relative to the manipulated object's position.

/// Axis bar constants
pub mod axis {
    /// Bar cross-section (width and height)
    pub const THICKNESS: f32 = 0.05;
    /// Bar length along its axis
    pub const LENGTH: f32 = 0.5;
    /// Distance from the object to the bar centre
    pub const OFFSET: f32 = 0.275;
}

/// Scale sphere constants
pub mod scale {
    /// Sphere radius
    pub const RADIUS: f32 = 0.05;
    /// Distance from the object to the sphere centre
    pub const OFFSET: f32 = 0.65;
    /// Scale handles sit at half the scale they represent
    pub const FACTOR: f32 = 2.0;
}

/// Constraint plane patch constants
pub mod plane {
    /// Edge length of the square patch
    pub const SIZE: f32 = 0.25;
    /// Offset along both spanned axes
    pub const OFFSET: f32 = 0.25;
}

/// Below this `|normal · direction|` a ray counts as parallel to a plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Handle display colors (RGBA)
pub mod colors {
    /// Shared handle opacity
    pub const OPACITY: f32 = 0.75;
    /// X axis (red)
    pub const X_AXIS: [f32; 4] = [1.0, 0.0, 0.0, OPACITY];
    /// Y axis (green)
    pub const Y_AXIS: [f32; 4] = [0.0, 1.0, 0.0, OPACITY];
    /// Z axis (blue)
    pub const Z_AXIS: [f32; 4] = [0.0, 0.0, 1.0, OPACITY];
    /// YZ plane (cyan)
    pub const YZ_PLANE: [f32; 4] = [0.0, 1.0, 1.0, OPACITY];
    /// XZ plane (magenta)
    pub const XZ_PLANE: [f32; 4] = [1.0, 0.0, 1.0, OPACITY];
    /// XY plane (yellow)
    pub const XY_PLANE: [f32; 4] = [1.0, 1.0, 0.0, OPACITY];
}
