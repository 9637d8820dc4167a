// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module holds state that must survive restarts but is not a user
//! preference (unlike `settings.toml`). Today that is only the promo
//! dismissal record, stored as a flat string key/value map so the
//! notification controller sees a plain single-key get/set interface.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `SKYWAY_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

pub const STATE_PARSE_WARNING: &str = "Saved state could not be read and was reset.";
pub const STATE_READ_WARNING: &str = "Saved state file is not readable.";

/// Single-key get/set access to persisted values.
pub trait PersistedStore: fmt::Debug + Send {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`; the last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] when the value could not be made durable.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl AppState {
    /// Loads application state from a custom directory, or the default one.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning message explaining what went wrong.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (Self::default(), Some(STATE_PARSE_WARNING.to_string())),
            },
            Err(_) => (Self::default(), Some(STATE_READ_WARNING.to_string())),
        }
    }

    /// Saves application state to a custom directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the directory or file cannot be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::state_file_path_with_override(base_dir)
            .ok_or_else(|| Error::Store("no data directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Store(e.to_string()))?;
        }

        let file = fs::File::create(&path).map_err(|e| Error::Store(e.to_string()))?;
        ciborium::into_writer(self, BufWriter::new(file))
            .map_err(|e| Error::Store(e.to_string()))
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// [`PersistedStore`] backed by `state.cbor`.
#[derive(Debug, Clone)]
pub struct FileStore {
    state: AppState,
    base_dir: Option<PathBuf>,
}

impl FileStore {
    /// Opens the store, reading the state file once.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(base_dir.clone());
        (Self { state, base_dir }, warning)
    }
}

impl PersistedStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.state.entries.insert(key.to_string(), value);
        self.state.save_to(self.base_dir.clone())
    }
}

/// In-memory [`PersistedStore`]; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `key = value`.
    #[must_use]
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
        store
    }
}

impl PersistedStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries
            .lock()
            .map_err(|e| Error::Store(e.to_string()))?
            .insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_empty() {
        assert!(AppState::default().entries.is_empty());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut original = AppState::default();
        original
            .entries
            .insert("promo_notification_dismissed".into(), "5000".into());

        original
            .save_to(Some(base_dir.clone()))
            .expect("save should succeed");
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(STATE_PARSE_WARNING));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        AppState::default()
            .save_to(Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn file_store_survives_reopen() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = Some(temp_dir.path().to_path_buf());

        let (mut store, _) = FileStore::open(base_dir.clone());
        store.set("key", "first".into()).expect("set");
        store.set("key", "second".into()).expect("set");

        let (reopened, warning) = FileStore::open(base_dir);
        assert!(warning.is_none());
        assert_eq!(reopened.get("key").as_deref(), Some("second"));
        assert_eq!(reopened.get("other"), None);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("key", "value".into()).expect("set");
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }
}
