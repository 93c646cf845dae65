//! Durable settings storage.
//!
//! The engine only ever sees the [`SettingsStore`] trait, so the backing
//! store can be the TOML file under the config dir, an in-memory map in
//! tests, or any other key-value backend.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::StoreError;
use crate::timer::TimerSettings;

/// Capability the engine needs for durable settings.
pub trait SettingsStore {
    /// Current persisted settings, or the defaults when nothing usable is
    /// stored. Never fails.
    fn load(&self) -> TimerSettings;

    /// Persist the settings. Best-effort at the engine boundary: the engine
    /// swallows errors and keeps its in-memory copy.
    fn save(&mut self, settings: &TimerSettings) -> Result<(), StoreError>;
}

/// Settings persisted as TOML at `~/.config/tickdown/settings.toml`.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Store at the default location under the config dir.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: super::data_dir()?.join("settings.toml"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> TimerSettings {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str::<TimerSettings>(&content)
                .map(TimerSettings::clamped)
                .unwrap_or_default(),
            Err(_) => TimerSettings::default(),
        }
    }

    fn save(&mut self, settings: &TimerSettings) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store for tests and embedding. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    inner: Rc<RefCell<Option<TimerSettings>>>,
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> TimerSettings {
        self.inner.borrow().unwrap_or_default()
    }

    fn save(&mut self, settings: &TimerSettings) -> Result<(), StoreError> {
        *self.inner.borrow_mut() = Some(*settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TomlSettingsStore::at(dir.path().join("settings.toml"));

        let settings = TimerSettings {
            work_minutes: 50,
            work_seconds: 30,
            break_minutes: 10,
            break_seconds: 0,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::at(dir.path().join("nope.toml"));
        assert_eq!(store.load(), TimerSettings::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "work_minutes = \"not a number\" [[[").unwrap();
        let store = TomlSettingsStore::at(path);
        assert_eq!(store.load(), TimerSettings::default());
    }

    #[test]
    fn out_of_range_stored_values_are_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "work_minutes = 500\nwork_seconds = 90\nbreak_minutes = 5\nbreak_seconds = 0\n",
        )
        .unwrap();
        let store = TomlSettingsStore::at(path);
        let s = store.load();
        assert_eq!(s.work_minutes, 99);
        assert_eq!(s.work_seconds, 59);
    }

    #[test]
    fn save_to_unwritable_path_reports_the_path() {
        let mut store = TomlSettingsStore::at("/nonexistent-dir/settings.toml");
        let err = store.save(&TimerSettings::default()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/settings.toml"));
    }

    #[test]
    fn memory_store_clones_share_state() {
        let mut a = MemorySettingsStore::default();
        let b = a.clone();
        a.save(&TimerSettings {
            work_minutes: 1,
            work_seconds: 2,
            break_minutes: 3,
            break_seconds: 4,
        })
        .unwrap();
        assert_eq!(b.load().work_minutes, 1);
        assert_eq!(b.load().break_seconds, 4);
    }
}
