// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters.
//!
//! [`TomlPreferenceStore`] keeps a flat string table in `preferences.toml`
//! inside the config directory and rewrites the file on every change.

use crate::application::port::PreferenceStore;
use crate::error::Result;
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.toml";

/// Volatile store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Opens the store in the default config directory.
    ///
    /// Falls back to a store that lives in the working directory when no
    /// config directory can be resolved.
    pub fn open_default() -> Result<Self> {
        let path = paths::config_dir()
            .map(|dir| dir.join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE));
        Self::open(path)
    }

    /// Opens the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "corrupt preferences file, starting empty");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
