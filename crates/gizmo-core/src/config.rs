//! Manipulation controls configuration
//!
//! Handle dimensions and tuning values that can be serialized and loaded
//! from RON configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Handle geometry, in units relative to the manipulated object's position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandleDimensions {
    /// Axis bar cross-section
    pub axis_thickness: f32,
    /// Axis bar length
    pub axis_length: f32,
    /// Distance from the object to each axis bar centre
    pub axis_offset: f32,
    /// Scale sphere radius
    pub scale_radius: f32,
    /// Distance from the object to each scale sphere centre
    pub scale_offset: f32,
    /// Edge length of the plane patches
    pub plane_size: f32,
    /// Offset of the plane patches along both spanned axes
    pub plane_offset: f32,
}

impl Default for HandleDimensions {
    fn default() -> Self {
        Self {
            axis_thickness: constants::axis::THICKNESS,
            axis_length: constants::axis::LENGTH,
            axis_offset: constants::axis::OFFSET,
            scale_radius: constants::scale::RADIUS,
            scale_offset: constants::scale::OFFSET,
            plane_size: constants::plane::SIZE,
            plane_offset: constants::plane::OFFSET,
        }
    }
}

/// Manipulation controls configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Handle layout
    pub handles: HandleDimensions,
    /// Multiplier from scale handle distance to object scale
    pub scale_factor: f32,
    /// Tolerance below which a ray is treated as parallel to a plane
    pub parallel_epsilon: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            handles: HandleDimensions::default(),
            scale_factor: constants::scale::FACTOR,
            parallel_epsilon: constants::PARALLEL_EPSILON,
        }
    }
}

impl ControlsConfig {
    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.handles;
        let values = [
            ("handles.axis_thickness", h.axis_thickness),
            ("handles.axis_length", h.axis_length),
            ("handles.axis_offset", h.axis_offset),
            ("handles.scale_radius", h.scale_radius),
            ("handles.scale_offset", h.scale_offset),
            ("handles.plane_size", h.plane_size),
            ("handles.plane_offset", h.plane_offset),
            ("scale_factor", self.scale_factor),
            ("parallel_epsilon", self.parallel_epsilon),
        ];

        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if h.axis_offset + h.axis_length / 2.0 >= h.scale_offset - h.scale_radius {
            return Err(ConfigError::Invalid(
                "axis bars overlap the scale handles".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: ControlsConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ControlsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = ControlsConfig::from_ron_str("(scale_factor: 4.0)").unwrap();
        assert_eq!(config.scale_factor, 4.0);
        assert_eq!(config.handles, HandleDimensions::default());
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let result = ControlsConfig::from_ron_str("(parallel_epsilon: 0.0)");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let mut config = ControlsConfig::default();
        config.handles.scale_radius = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_overlapping_handles() {
        let mut config = ControlsConfig::default();
        config.handles.axis_length = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_ron() {
        let result = ControlsConfig::from_ron_str("(scale_factor: )");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("controls.ron");

        let mut config = ControlsConfig::default();
        config.handles.scale_offset = 0.8;
        config.save(&path).unwrap();

        let loaded = ControlsConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ControlsConfig::load(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
