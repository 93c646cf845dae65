//! Error types for tickdown-core.
//!
//! The engine itself has no failure path: all inputs are clamped and every
//! no-effect operation is a no-op. The only fallible surface is durable
//! settings storage, and the engine treats even that as best-effort.

use std::path::PathBuf;
use thiserror::Error;

/// Settings persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The config directory could not be determined or created.
    #[error("failed to locate config directory: {0}")]
    ConfigDir(#[source] std::io::Error),

    /// Writing the settings file failed.
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for StoreError.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
