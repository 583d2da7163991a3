// WiFi Inventory - Adapter Model
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Wireless adapter records and their persisted settings.
//!
//! An [`AdapterRecord`] separates what was detected about a card (driver,
//! MAC, capabilities), which never changes during a run, from the
//! [`AdapterSettings`] that a user assigns to it. Settings are resolved from
//! the [`SettingsStore`] exactly once, when the record is built, and are
//! read-only afterwards.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::chipset::{AdapterChipsetType, ChipsetCapabilities};
use super::error::{Error, Result};
use crate::settings_store::SettingsStore;

/// Transmit power written for adapters that have never been configured.
pub const DEFAULT_TX_POWER: &str = "3100";

/// What a downstream actor should use an adapter for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntendedUse {
    /// Not assigned to anything.
    #[default]
    Unspecified,
    /// Monitor mode, for the radio link.
    MonitorMode,
    /// Access point.
    Hotspot,
}

impl IntendedUse {
    /// Tag used in JSON documents. `Unspecified` serializes as null.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::MonitorMode => Some("MonitorMode"),
            Self::Hotspot => Some("Hotspot"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unknown",
            Self::MonitorMode => "monitor_mode",
            Self::Hotspot => "hotspot",
        }
    }
}

impl fmt::Display for IntendedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IntendedUse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.tag() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IntendedUse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None => Ok(Self::Unspecified),
            Some("MonitorMode") => Ok(Self::MonitorMode),
            Some("Hotspot") => Ok(Self::Hotspot),
            Some(other) => Err(serde::de::Error::unknown_variant(
                other,
                &["MonitorMode", "Hotspot"],
            )),
        }
    }
}

/// Per-adapter settings that survive reboots.
///
/// Frequency and power are passed through to the radio configurator as-is.
/// Unknown fields are rejected, so a misspelled key is treated as corruption
/// rather than silently dropped on the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSettings {
    /// Intended use. Missing or null means unassigned.
    #[serde(rename = "use", default)]
    pub use_for: IntendedUse,

    /// Frequency for this card; empty when unset.
    pub frequency: String,

    /// Transmission power for this card.
    pub txpower: String,
}

impl AdapterSettings {
    /// Default settings with a specific transmit power sentinel.
    pub fn with_txpower(txpower: impl Into<String>) -> Self {
        Self {
            use_for: IntendedUse::Unspecified,
            frequency: String::new(),
            txpower: txpower.into(),
        }
    }
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self::with_txpower(DEFAULT_TX_POWER)
    }
}

/// Stable identity of a physical adapter: `<canonical driver>_<mac>`.
///
/// Interface names and bus order change between boots; the chipset and MAC
/// do not, so this is what joins a detected adapter to its stored settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(chipset: AdapterChipsetType, mac: &str) -> Self {
        Self(format!("{}_{}", chipset.canonical_name(), mac))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as a single path component.
    ///
    /// Separators and NUL are replaced with `_`; a MAC never contains them,
    /// so for real adapters the file name equals the key.
    pub fn file_name(&self) -> Result<String> {
        let name: String = self
            .0
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                c => c,
            })
            .collect();

        if name.is_empty() || name == "." || name == ".." {
            return Err(Error::InvalidIdentityKey(self.0.clone()));
        }
        Ok(name)
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw discovery result for one adapter, before settings are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedAdapter {
    /// Name of the driver bound to the card, as reported by the OS.
    pub driver_name: String,
    /// Chipset type classified from the driver name.
    pub chipset: AdapterChipsetType,
    /// Interface name (e.g. "wlan0"); not stable across boots.
    pub interface_name: String,
    /// Hardware MAC address.
    pub mac: String,
    pub capabilities: ChipsetCapabilities,
}

impl ProbedAdapter {
    /// Create a probe result, classifying the driver and taking the
    /// chipset's default capabilities.
    pub fn new(
        driver_name: impl Into<String>,
        interface_name: impl Into<String>,
        mac: impl Into<String>,
    ) -> Self {
        let driver_name = driver_name.into();
        let chipset = AdapterChipsetType::classify(&driver_name);
        Self {
            driver_name,
            chipset,
            interface_name: interface_name.into(),
            mac: mac.into(),
            capabilities: chipset.capabilities(),
        }
    }

    /// Override the capability flags reported by discovery.
    #[cfg(test)]
    pub fn with_capabilities(mut self, capabilities: ChipsetCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(self.chipset, &self.mac)
    }
}

/// A detected wireless adapter together with its resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct AdapterRecord {
    driver_name: String,
    #[serde(rename = "type")]
    chipset: AdapterChipsetType,
    interface_name: String,
    mac: String,
    #[serde(flatten)]
    capabilities: ChipsetCapabilities,
    settings: AdapterSettings,
    /// Set when settings could not be resolved; `settings` then holds
    /// in-memory defaults that were not persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings_error: Option<String>,
}

impl AdapterRecord {
    /// Build a record, loading its settings from the store (or creating
    /// and persisting defaults on first sight).
    pub fn resolve(probe: ProbedAdapter, store: &SettingsStore) -> Result<Self> {
        let settings = store.load_or_default(&probe.identity_key())?;
        Ok(Self::from_parts(probe, settings, None))
    }

    /// Build a record whose settings could not be resolved.
    pub fn unresolved(probe: ProbedAdapter, defaults: AdapterSettings, error: &Error) -> Self {
        Self::from_parts(probe, defaults, Some(error.to_string()))
    }

    fn from_parts(
        probe: ProbedAdapter,
        settings: AdapterSettings,
        settings_error: Option<String>,
    ) -> Self {
        Self {
            driver_name: probe.driver_name,
            chipset: probe.chipset,
            interface_name: probe.interface_name,
            mac: probe.mac,
            capabilities: probe.capabilities,
            settings,
            settings_error,
        }
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn settings(&self) -> &AdapterSettings {
        &self.settings
    }
}

#[cfg(test)]
impl AdapterRecord {
    pub fn chipset(&self) -> AdapterChipsetType {
        self.chipset
    }

    pub fn settings_error(&self) -> Option<&str> {
        self.settings_error.as_deref()
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(self.chipset, &self.mac)
    }
}
