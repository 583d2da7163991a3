// WiFi Inventory - Chipset Classification
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Wireless chipset types and driver-name classification.
//!
//! The kernel only tells us which driver is bound to an interface. This
//! module maps that raw driver name onto a closed set of chipsets we know how
//! to handle, and back to the canonical driver-module name that the probing
//! side uses when it needs to reload a driver.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known wireless chipset families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdapterChipsetType {
    /// Driver not recognized.
    #[default]
    Unknown,
    Realtek8812au,
    Realtek8814au,
    Realtek88x2bu,
    Realtek8188eu,
    /// Atheros AR9271 and friends on USB.
    Atheros9khtc,
    /// Atheros PCI/PCIe.
    Atheros9k,
    Ralink,
    Intel,
    Broadcom,
}

/// Default capability flags of a chipset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChipsetCapabilities {
    pub supports_5ghz: bool,
    pub supports_2ghz: bool,
    pub supports_injection: bool,
    pub supports_hotspot: bool,
    pub supports_rts: bool,
}

impl AdapterChipsetType {
    /// All chipset types, `Unknown` first.
    pub const ALL: [AdapterChipsetType; 10] = [
        Self::Unknown,
        Self::Realtek8812au,
        Self::Realtek8814au,
        Self::Realtek88x2bu,
        Self::Realtek8188eu,
        Self::Atheros9khtc,
        Self::Atheros9k,
        Self::Ralink,
        Self::Intel,
        Self::Broadcom,
    ];

    /// Classify a raw driver name as reported by the kernel.
    ///
    /// Never fails: anything not in the table is `Unknown`.
    pub fn classify(driver_name: &str) -> Self {
        match driver_name.trim().to_ascii_lowercase().as_str() {
            "88xxau" | "rtl88xxau" | "rtl8812au" | "8812au" => Self::Realtek8812au,
            "8814au" | "rtl8814au" => Self::Realtek8814au,
            "88x2bu" | "rtl88x2bu" => Self::Realtek88x2bu,
            "8188eu" | "rtl8188eu" | "r8188eu" => Self::Realtek8188eu,
            "ath9k_htc" => Self::Atheros9khtc,
            "ath9k" => Self::Atheros9k,
            "rt2800usb" => Self::Ralink,
            "iwlwifi" => Self::Intel,
            "brcmfmac" | "bcmsdh_sdio" => Self::Broadcom,
            _ => Self::Unknown,
        }
    }

    /// Canonical driver-module name for this chipset.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Realtek8812au => "88xxau",
            Self::Realtek8814au => "8814au",
            Self::Realtek88x2bu => "88x2bu",
            Self::Realtek8188eu => "8188eu",
            Self::Atheros9khtc => "ath9k_htc",
            Self::Atheros9k => "ath9k",
            Self::Ralink => "rt2800usb",
            Self::Intel => "iwlwifi",
            Self::Broadcom => "brcmfmac",
        }
    }

    /// Tag used in JSON documents. `Unknown` has no tag and serializes as null.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Realtek8812au => Some("Realtek8812au"),
            Self::Realtek8814au => Some("Realtek8814au"),
            Self::Realtek88x2bu => Some("Realtek88x2bu"),
            Self::Realtek8188eu => Some("Realtek8188eu"),
            Self::Atheros9khtc => Some("Atheros9khtc"),
            Self::Atheros9k => Some("Atheros9k"),
            Self::Ralink => Some("Ralink"),
            Self::Intel => Some("Intel"),
            Self::Broadcom => Some("Broadcom"),
        }
    }

    /// Parse a JSON tag back into a chipset type.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == Some(tag))
            .unwrap_or(Self::Unknown)
    }

    /// Capability flags this chipset family is known to support.
    pub fn capabilities(&self) -> ChipsetCapabilities {
        let (supports_5ghz, supports_2ghz, supports_injection, supports_hotspot, supports_rts) =
            match self {
                Self::Realtek8812au | Self::Realtek8814au => (true, true, true, true, true),
                Self::Realtek88x2bu => (true, true, true, true, false),
                Self::Realtek8188eu => (false, true, true, true, false),
                Self::Atheros9khtc | Self::Atheros9k => (false, true, true, true, true),
                Self::Ralink => (false, true, true, true, false),
                Self::Intel | Self::Broadcom => (true, true, false, true, false),
                Self::Unknown => (false, false, false, false, false),
            };
        ChipsetCapabilities {
            supports_5ghz,
            supports_2ghz,
            supports_injection,
            supports_hotspot,
            supports_rts,
        }
    }
}

impl fmt::Display for AdapterChipsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("Unknown"))
    }
}

impl Serialize for AdapterChipsetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.tag() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for AdapterChipsetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(Self::from_tag).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_drivers() {
        let cases = [
            ("88xxau", AdapterChipsetType::Realtek8812au),
            ("rtl88xxau", AdapterChipsetType::Realtek8812au),
            ("rtl8812au", AdapterChipsetType::Realtek8812au),
            ("8814au", AdapterChipsetType::Realtek8814au),
            ("rtl88x2bu", AdapterChipsetType::Realtek88x2bu),
            ("8188eu", AdapterChipsetType::Realtek8188eu),
            ("r8188eu", AdapterChipsetType::Realtek8188eu),
            ("ath9k_htc", AdapterChipsetType::Atheros9khtc),
            ("ath9k", AdapterChipsetType::Atheros9k),
            ("rt2800usb", AdapterChipsetType::Ralink),
            ("iwlwifi", AdapterChipsetType::Intel),
            ("brcmfmac", AdapterChipsetType::Broadcom),
            ("bcmsdh_sdio", AdapterChipsetType::Broadcom),
        ];
        for (driver, expected) in cases {
            assert_eq!(AdapterChipsetType::classify(driver), expected, "driver {}", driver);
        }
    }

    #[test]
    fn test_classify_ignores_case_and_whitespace() {
        assert_eq!(
            AdapterChipsetType::classify("  ATH9K_HTC\n"),
            AdapterChipsetType::Atheros9khtc
        );
    }

    #[test]
    fn test_classify_unknown_driver() {
        assert_eq!(AdapterChipsetType::classify("e1000e"), AdapterChipsetType::Unknown);
        assert_eq!(AdapterChipsetType::classify(""), AdapterChipsetType::Unknown);
        assert_eq!(AdapterChipsetType::classify("mt7601u").canonical_name(), "unknown");
    }

    #[test]
    fn test_canonical_name_is_total() {
        for chipset in AdapterChipsetType::ALL {
            assert!(!chipset.canonical_name().is_empty(), "{:?}", chipset);
        }
        assert_eq!(AdapterChipsetType::Unknown.canonical_name(), "unknown");
        assert_eq!(AdapterChipsetType::Atheros9k.canonical_name(), "ath9k");
    }

    #[test]
    fn test_canonical_name_classifies_back() {
        for chipset in AdapterChipsetType::ALL {
            let name = chipset.canonical_name();
            assert_eq!(AdapterChipsetType::classify(name), chipset);
            // Repeated calls give the same answer
            assert_eq!(AdapterChipsetType::classify(name).canonical_name(), name);
        }
    }

    #[test]
    fn test_json_tags() {
        assert_eq!(
            serde_json::to_string(&AdapterChipsetType::Realtek8812au).unwrap(),
            "\"Realtek8812au\""
        );
        assert_eq!(serde_json::to_string(&AdapterChipsetType::Unknown).unwrap(), "null");

        let parsed: AdapterChipsetType = serde_json::from_str("\"Atheros9khtc\"").unwrap();
        assert_eq!(parsed, AdapterChipsetType::Atheros9khtc);
        let parsed: AdapterChipsetType = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, AdapterChipsetType::Unknown);
    }

    #[test]
    fn test_unknown_has_no_capabilities() {
        assert_eq!(
            AdapterChipsetType::Unknown.capabilities(),
            ChipsetCapabilities::default()
        );
        assert!(AdapterChipsetType::Realtek8812au.capabilities().supports_5ghz);
        assert!(!AdapterChipsetType::Atheros9k.capabilities().supports_5ghz);
    }
}
