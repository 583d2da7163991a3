// WiFi Inventory - Adapter Settings Store
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Persistent per-adapter settings, keyed by adapter identity.
//!
//! Handles:
//! - Creating the settings directory on first use
//! - Loading settings for a known adapter
//! - Creating and persisting defaults for a new adapter
//! - Recovering from corrupt settings files
//!
//! A settings file that exists but cannot be parsed is treated like a new
//! adapter: defaults are returned and written over the bad file. The loss is
//! logged at warn level. This is applied on every load, there is no strict
//! mode.

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::RwLock;
use tracing::{debug, info, warn};

use crate::fs_utils;
use crate::models::{AdapterSettings, Error, IdentityKey, InventoryConfig, Result};

/// Key-value persistence for adapter settings.
pub trait SettingsBackend: Send + Sync {
    /// Make the backend usable. Must be idempotent.
    fn prepare(&self) -> Result<()>;

    /// Read stored settings. `Ok(None)` when nothing is stored for `key`;
    /// an unreadable document is reported as [`Error::SettingsCorrupt`].
    fn get(&self, key: &IdentityKey) -> Result<Option<AdapterSettings>>;

    /// Store settings, fully replacing anything stored for `key`.
    fn put(&self, key: &IdentityKey, settings: &AdapterSettings) -> Result<()>;
}

/// Settings store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one settings file per adapter.
    pub settings_dir: PathBuf,
    /// Transmit power given to adapters seen for the first time.
    pub default_txpower: String,
}

impl StoreConfig {
    pub fn new(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
            default_txpower: crate::models::DEFAULT_TX_POWER.to_string(),
        }
    }

    pub fn with_default_txpower(mut self, txpower: impl Into<String>) -> Self {
        self.default_txpower = txpower.into();
        self
    }
}

impl From<&InventoryConfig> for StoreConfig {
    fn from(config: &InventoryConfig) -> Self {
        Self::new(&config.settings_dir).with_default_txpower(&config.default_txpower)
    }
}

/// Adapter settings store.
pub struct SettingsStore {
    backend: Box<dyn SettingsBackend>,
    defaults: AdapterSettings,
}

impl SettingsStore {
    /// Open a file-backed store and make sure its directory exists.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = Self::with_backend(
            FileBackend::new(config.settings_dir),
            AdapterSettings::with_txpower(config.default_txpower),
        );
        store.ensure_storage_ready()?;
        Ok(store)
    }

    /// Create a store over any backend.
    pub fn with_backend(
        backend: impl SettingsBackend + 'static,
        defaults: AdapterSettings,
    ) -> Self {
        Self {
            backend: Box::new(backend),
            defaults,
        }
    }

    /// Settings given to adapters with nothing stored.
    pub fn defaults(&self) -> &AdapterSettings {
        &self.defaults
    }

    /// Verify the backing storage exists, creating it if needed.
    pub fn ensure_storage_ready(&self) -> Result<()> {
        self.backend.prepare()
    }

    /// Load the settings for `key`, or create, persist and return defaults.
    pub fn load_or_default(&self, key: &IdentityKey) -> Result<AdapterSettings> {
        match self.backend.get(key) {
            Ok(Some(settings)) => {
                debug!("Found settings for {}", key);
                Ok(settings)
            }
            Ok(None) => {
                info!("Creating default settings for {}", key);
                self.persist(key, &self.defaults)?;
                Ok(self.defaults.clone())
            }
            Err(e) if e.is_corruption() => {
                warn!("{}; resetting {} to defaults", e, key);
                self.persist(key, &self.defaults)?;
                Ok(self.defaults.clone())
            }
            Err(e) => Err(e),
        }
    }

    /// Store settings for `key`, replacing previous contents.
    pub fn persist(&self, key: &IdentityKey, settings: &AdapterSettings) -> Result<()> {
        self.backend.put(key, settings)
    }
}

/// Settings stored as one JSON file per adapter in a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the settings file for `key`.
    pub fn path_for(&self, key: &IdentityKey) -> Result<PathBuf> {
        Ok(self.dir.join(key.file_name()?))
    }
}

impl SettingsBackend for FileBackend {
    fn prepare(&self) -> Result<()> {
        // create_dir_all succeeds when the directory already exists, which also
        // covers another process creating it concurrently.
        fs::create_dir_all(&self.dir).map_err(|e| Error::settings_dir(&self.dir, e))?;
        if !self.dir.is_dir() {
            return Err(Error::settings_dir(&self.dir, "not a directory"));
        }
        Ok(())
    }

    fn get(&self, key: &IdentityKey) -> Result<Option<AdapterSettings>> {
        let path = self.path_for(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(Error::settings_corrupt(&path, e))
            }
            Err(e) => return Err(Error::settings_read(&path, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::settings_corrupt(&path, e))
    }

    fn put(&self, key: &IdentityKey, settings: &AdapterSettings) -> Result<()> {
        let path = self.path_for(key)?;
        let json = fs_utils::to_json_pretty(settings)?;
        fs_utils::write_atomic(&path, &json).map_err(|e| Error::settings_write(&path, e))?;
        debug!("Persisted settings to {:?}", path);
        Ok(())
    }
}

/// Settings held in memory only.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, AdapterSettings>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl SettingsBackend for MemoryBackend {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn get(&self, key: &IdentityKey) -> Result<Option<AdapterSettings>> {
        // Recover from poison: the map is never left half-updated.
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Settings map poisoned reading {}, recovering", key);
                poisoned.into_inner()
            }
        };
        Ok(entries.get(key.as_str()).cloned())
    }

    fn put(&self, key: &IdentityKey, settings: &AdapterSettings) -> Result<()> {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Settings map poisoned writing {}, recovering", key);
                poisoned.into_inner()
            }
        };
        entries.insert(key.as_str().to_string(), settings.clone());
        Ok(())
    }
}
