// WiFi Inventory - Validation Utilities
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Input validation for values read from the system.

use super::error::{Error, Result};

/// Validate a MAC address string and normalize it to `AA:BB:CC:DD:EE:FF`.
pub fn validate_mac_address(s: &str) -> Result<String> {
    // Accept formats: AA:BB:CC:DD:EE:FF or AA-BB-CC-DD-EE-FF
    let normalized = s.trim().replace('-', ":").to_uppercase();
    let parts: Vec<&str> = normalized.split(':').collect();

    if parts.len() != 6 {
        return Err(Error::InvalidMacAddress(s.to_string()));
    }

    for part in &parts {
        if part.len() != 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidMacAddress(s.to_string()));
        }
    }

    Ok(normalized)
}

/// Whether a normalized MAC is the all-zero placeholder some drivers report
/// before firmware is loaded.
pub fn is_placeholder_mac(mac: &str) -> bool {
    mac == "00:00:00:00:00:00"
}
