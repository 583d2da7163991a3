// WiFi Inventory - Error Types
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared error types for the WiFi inventory.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for inventory operations.
#[derive(Debug, Error)]
pub enum Error {
    // ========================================
    // Settings Storage Errors
    // ========================================
    #[error("Failed to create settings directory {path:?}: {reason}")]
    SettingsDirFailed { path: PathBuf, reason: String },

    #[error("Failed to read adapter settings {path:?}: {reason}")]
    SettingsReadFailed { path: PathBuf, reason: String },

    #[error("Adapter settings are corrupt in {path:?}: {reason}")]
    SettingsCorrupt { path: PathBuf, reason: String },

    #[error("Failed to write adapter settings {path:?}: {reason}")]
    SettingsWriteFailed { path: PathBuf, reason: String },

    #[error("Invalid identity key: {0}")]
    InvalidIdentityKey(String),

    // ========================================
    // Manifest Errors
    // ========================================
    #[error("Failed to write manifest {path:?}: {reason}")]
    ManifestWriteFailed { path: PathBuf, reason: String },

    // ========================================
    // Discovery Errors
    // ========================================
    #[error("Failed to read network interfaces from {path:?}: {reason}")]
    DiscoveryFailed { path: PathBuf, reason: String },

    // ========================================
    // Configuration Errors
    // ========================================
    #[error("Failed to read configuration: {0}")]
    ConfigReadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParseFailed(String),

    // ========================================
    // Validation Errors
    // ========================================
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    // ========================================
    // System Errors
    // ========================================
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a settings directory error.
    pub fn settings_dir(path: &Path, reason: impl ToString) -> Self {
        Self::SettingsDirFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a settings read error.
    pub fn settings_read(path: &Path, reason: impl ToString) -> Self {
        Self::SettingsReadFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a settings corruption error.
    pub fn settings_corrupt(path: &Path, reason: impl ToString) -> Self {
        Self::SettingsCorrupt {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a settings write error.
    pub fn settings_write(path: &Path, reason: impl ToString) -> Self {
        Self::SettingsWriteFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a manifest write error.
    pub fn manifest_write(path: &Path, reason: impl ToString) -> Self {
        Self::ManifestWriteFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a discovery error.
    pub fn discovery(path: &Path, reason: impl ToString) -> Self {
        Self::DiscoveryFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error means a stored settings document could not be parsed.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::SettingsCorrupt { .. })
    }
}

// Convert from toml parse errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParseFailed(err.to_string())
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corruption_is_detected() {
        let err = Error::settings_corrupt(Path::new("/tmp/x"), "bad json");
        assert!(err.is_corruption());

        let err = Error::settings_write(Path::new("/tmp/x"), "read-only");
        assert!(!err.is_corruption());
    }

    #[test]
    fn test_error_message_names_path() {
        let err = Error::manifest_write(Path::new("/tmp/wifi_manifest"), "disk full");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/wifi_manifest"));
        assert!(msg.contains("disk full"));
    }
}
