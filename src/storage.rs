//! Persisted key/value storage for the sticky theme override.
//!
//! Values are plain strings. [`JsonFileStore`] keeps them in one JSON object
//! under the user's config directory; [`MemoryStore`] keeps them in-process.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use crate::error::ThemeError;

const SETTINGS_FILE: &str = "settings.json";

/// A string key/value store.
pub trait PreferenceStore {
    /// Returns the value under `key`, `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Rc<RefCell<BTreeMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.data.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls made through any clone.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Reads a value without going through the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// File-backed store: one JSON object of string values.
///
/// Every `set` rewrites the whole file immediately.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Uses an explicit settings file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `<config_dir>/<app_name>/settings.json`.
    ///
    /// Fails when the platform reports no config directory.
    pub fn in_config_dir(app_name: &str) -> Result<Self, ThemeError> {
        let base = dirs::config_dir().ok_or_else(|| {
            ThemeError::StorageUnavailable("no config directory on this platform".to_string())
        })?;
        Ok(Self::at_path(base.join(app_name).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry. A missing or undecodable file reads as empty, so the
    /// next write replaces it.
    fn load_all(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        let json_str = match fs::read_to_string(&self.path) {
            Ok(json_str) => json_str,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&json_str) {
            Ok(all) => Ok(all),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "settings file unreadable; treating it as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.load_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut all = self.load_all()?;
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json_str = serde_json::to_string_pretty(&all)?;

        // Write beside the target, then swap it in so readers never see a partial file.
        let temp = self.temp_path();
        fs::write(&temp, json_str)?;
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }
        Ok(())
    }
}
