mod settings_store;

pub use settings_store::{MemorySettingsStore, SettingsStore, TomlSettingsStore};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/tickdown[-dev]/` based on TICKDOWN_ENV.
///
/// Set TICKDOWN_ENV=dev to use a separate development data directory.
/// The directory is created if it does not exist.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TICKDOWN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tickdown-dev")
    } else {
        base_dir.join("tickdown")
    };

    std::fs::create_dir_all(&dir).map_err(StoreError::ConfigDir)?;
    Ok(dir)
}
