// WiFi Inventory - Configuration
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Inventory configuration model.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::adapter::DEFAULT_TX_POWER;

/// Base directory for persistent OpenHD state.
pub const BASE_PATH: &str = "/usr/local/share/openhd/";

/// Where the WiFi manifest is published for downstream setup.
pub const WIFI_MANIFEST_FILENAME: &str = "/tmp/wifi_manifest";

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/openhd/wifi-inventory.toml";

/// Inventory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryConfig {
    /// Directory holding per-adapter settings files.
    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,

    /// Path the adapter manifest is written to.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Transmit power for adapters without stored settings.
    #[serde(default = "default_txpower")]
    pub default_txpower: String,

    /// sysfs directory listing network interfaces.
    #[serde(default = "default_sysfs_net_root")]
    pub sysfs_net_root: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_settings_dir() -> PathBuf {
    Path::new(BASE_PATH).join("interface")
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(WIFI_MANIFEST_FILENAME)
}

fn default_txpower() -> String {
    DEFAULT_TX_POWER.to_string()
}

fn default_sysfs_net_root() -> PathBuf {
    PathBuf::from("/sys/class/net")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            manifest_path: default_manifest_path(),
            default_txpower: default_txpower(),
            sysfs_net_root: default_sysfs_net_root(),
            log_level: default_log_level(),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, super::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| super::Error::ConfigReadFailed(format!("{}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InventoryConfig::default();
        assert_eq!(
            config.settings_dir,
            PathBuf::from("/usr/local/share/openhd/interface")
        );
        assert_eq!(config.manifest_path, PathBuf::from("/tmp/wifi_manifest"));
        assert_eq!(config.default_txpower, "3100");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: InventoryConfig = toml::from_str("default_txpower = \"2000\"\n").unwrap();
        assert_eq!(config.default_txpower, "2000");
        assert_eq!(config.manifest_path, PathBuf::from("/tmp/wifi_manifest"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wifi-inventory.toml");
        std::fs::write(
            &path,
            "settings_dir = \"/data/interface\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let expected = InventoryConfig {
            settings_dir: PathBuf::from("/data/interface"),
            log_level: "debug".to_string(),
            ..InventoryConfig::default()
        };
        assert_eq!(InventoryConfig::load_from_file(&path).unwrap(), expected);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err =
            InventoryConfig::load_from_file(Path::new("/nonexistent/wifi.toml")).unwrap_err();
        assert!(matches!(err, super::super::Error::ConfigReadFailed(_)));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "settings_dir = [").unwrap();

        let err = InventoryConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, super::super::Error::ConfigParseFailed(_)));
    }
}
