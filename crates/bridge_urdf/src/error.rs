//! Error types for the URDF bridge.
//!
//! Conversion itself cannot fail; these cover loading and checking the
//! converter configuration.

use std::path::PathBuf;

use thiserror::Error;

/// URDF bridge errors
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Failed to read a configuration file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration is not valid JSON for [`ConverterConfig`](crate::ConverterConfig)
    #[error("Malformed converter configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid converter configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for URDF bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
