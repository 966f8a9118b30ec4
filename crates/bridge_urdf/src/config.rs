//! Converter configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Default `normal · up` value at or above which a plane needs no extra rotation
pub const PLANE_ALIGNMENT_THRESHOLD: f64 = 0.99;

/// Visual converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Planes whose normal has at least this dot product with +Z keep
    /// their frame unchanged
    pub plane_alignment_threshold: f64,

    /// Fill the visual-shape record's dimensions from the three mesh-scale
    /// axes instead of repeating the X axis. Off by default, which matches
    /// what existing query clients receive.
    pub per_axis_dimensions: bool,

    /// Leave shapes with unsupported geometry out of scene nodes
    pub skip_empty_shapes: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            plane_alignment_threshold: PLANE_ALIGNMENT_THRESHOLD,
            per_axis_dimensions: false,
            skip_empty_shapes: false,
        }
    }
}

impl ConverterConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BridgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let t = self.plane_alignment_threshold;
        if !(-1.0..=1.0).contains(&t) {
            return Err(BridgeError::InvalidConfig(format!(
                "plane_alignment_threshold must be within [-1, 1], got {}",
                t
            )));
        }
        Ok(())
    }

    /// Set plane alignment threshold
    pub fn with_plane_alignment_threshold(mut self, threshold: f64) -> Self {
        self.plane_alignment_threshold = threshold;
        self
    }

    /// Set per-axis dimensions
    pub fn with_per_axis_dimensions(mut self, enabled: bool) -> Self {
        self.per_axis_dimensions = enabled;
        self
    }

    /// Set empty-shape skipping
    pub fn with_skip_empty_shapes(mut self, enabled: bool) -> Self {
        self.skip_empty_shapes = enabled;
        self
    }
}
