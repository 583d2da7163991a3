// WiFi Inventory - Adapter Discovery
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Wireless adapter detection.
//!
//! This module finds wireless interfaces using the Linux sysfs interface
//! (`/sys/class/net`) and turns each one into a [`ProbedAdapter`]. Capability
//! flags come from the chipset's known profile; nothing here touches the
//! radio itself.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::models::validation::{is_placeholder_mac, validate_mac_address};
use crate::models::{AdapterChipsetType, Error, ProbedAdapter, Result};

/// Detect all wireless adapters below a sysfs `class/net` directory.
///
/// A missing directory yields an empty list. Adapters without a usable MAC
/// are skipped, since they cannot be given a stable identity.
pub fn detect_wifi_adapters(net_root: &Path) -> Result<Vec<ProbedAdapter>> {
    let entries = match fs::read_dir(net_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Network interface directory {:?} does not exist", net_root);
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::discovery(net_root, e)),
    };

    let mut adapters = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();

        if !is_wireless_interface(&path, &name) {
            debug!("Skipping non-wireless interface {}", name);
            continue;
        }

        let mac = match read_mac(&path) {
            Some(mac) => mac,
            None => {
                warn!("Skipping wireless interface {}: no usable MAC address", name);
                continue;
            }
        };

        let driver = read_driver_name(&path).unwrap_or_default();
        let adapter = ProbedAdapter::new(driver, &name, mac);
        if adapter.chipset == AdapterChipsetType::Unknown {
            warn!(
                "Interface {} uses unrecognized driver {:?}",
                name, adapter.driver_name
            );
        }
        info!(
            "Detected {} on {} ({}, {})",
            adapter.chipset, adapter.interface_name, adapter.driver_name, adapter.mac
        );
        adapters.push(adapter);
    }

    // Sort by name for consistent ordering
    adapters.sort_by(|a, b| {
        natural_sort_key(&a.interface_name).cmp(&natural_sort_key(&b.interface_name))
    });

    Ok(adapters)
}

/// Determine whether an interface is a wireless adapter.
fn is_wireless_interface(path: &Path, name: &str) -> bool {
    // cfg80211 devices expose one of these
    if path.join("wireless").exists() || path.join("phy80211").exists() {
        return true;
    }

    // Check uevent file for device type
    if let Ok(uevent) = fs::read_to_string(path.join("uevent")) {
        if uevent.lines().any(|line| line.trim() == "DEVTYPE=wlan") {
            return true;
        }
    }

    // Check name patterns for WiFi
    name.starts_with("wl")
}

/// Read the adapter's MAC address as the kernel reports it.
///
/// The address is validated but kept in its original case: stored settings
/// files are named after it, so rewriting it would orphan them.
fn read_mac(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path.join("address")).ok()?;
    let raw = raw.trim();
    match validate_mac_address(raw) {
        Ok(mac) if !is_placeholder_mac(&mac) => Some(raw.to_string()),
        Ok(_) => None,
        Err(e) => {
            debug!("Ignoring address in {:?}: {}", path, e);
            None
        }
    }
}

/// Read the name of the driver bound to the interface's device.
fn read_driver_name(path: &Path) -> Option<String> {
    let device_path = path.join("device");

    if let Ok(driver_link) = fs::read_link(device_path.join("driver")) {
        if let Some(driver_name) = driver_link.file_name() {
            return Some(driver_name.to_string_lossy().to_string());
        }
    }

    // Fall back to the DRIVER= line of the device uevent
    let uevent = fs::read_to_string(device_path.join("uevent")).ok()?;
    uevent
        .lines()
        .find_map(|line| line.trim().strip_prefix("DRIVER="))
        .map(str::to_string)
}

/// Sort key that orders `wlan2` before `wlan10`.
fn natural_sort_key(s: &str) -> (String, u64, String) {
    let prefix_len = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    let (prefix, rest) = s.split_at(prefix_len);
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, suffix) = rest.split_at(digits_len);

    let num = digits.parse().unwrap_or(0);
    (prefix.to_string(), num, suffix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use std::path::PathBuf;

    /// Create a fake sysfs interface directory.
    fn add_interface(
        root: &Path,
        name: &str,
        mac: &str,
        driver: Option<&str>,
        wireless: bool,
    ) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("device")).unwrap();
        fs::write(dir.join("address"), format!("{}\n", mac)).unwrap();
        if wireless {
            fs::create_dir_all(dir.join("wireless")).unwrap();
        }
        if let Some(driver) = driver {
            symlink(
                format!("../../../../bus/usb/drivers/{}", driver),
                dir.join("device").join("driver"),
            )
            .unwrap();
        }
        dir
    }

    #[test]
    fn test_natural_sort_key() {
        assert_eq!(natural_sort_key("wlan0"), ("wlan".to_string(), 0, String::new()));
        assert_eq!(natural_sort_key("wlan10"), ("wlan".to_string(), 10, String::new()));
        assert_eq!(
            natural_sort_key("wlp3s0"),
            ("wlp".to_string(), 3, "s0".to_string())
        );
        assert!(natural_sort_key("wlan2") < natural_sort_key("wlan10"));
    }

    #[test]
    fn test_detect_wifi_adapters() {
        let root = tempfile::tempdir().unwrap();
        add_interface(root.path(), "wlan10", "de:ad:be:ef:00:01", Some("rtl88xxau"), true);
        add_interface(root.path(), "wlan2", "aa:bb:cc:00:11:22", Some("ath9k_htc"), true);
        add_interface(root.path(), "eth0", "10:20:30:40:50:60", Some("r8169"), false);

        let adapters = detect_wifi_adapters(root.path()).unwrap();
        assert_eq!(adapters.len(), 2);

        assert_eq!(adapters[0].interface_name, "wlan2");
        assert_eq!(adapters[0].chipset, AdapterChipsetType::Atheros9khtc);
        assert_eq!(adapters[0].mac, "aa:bb:cc:00:11:22");
        assert!(adapters[0].capabilities.supports_injection);

        assert_eq!(adapters[1].interface_name, "wlan10");
        assert_eq!(adapters[1].driver_name, "rtl88xxau");
        assert_eq!(adapters[1].chipset, AdapterChipsetType::Realtek8812au);
    }

    #[test]
    fn test_detect_by_uevent_devtype() {
        let root = tempfile::tempdir().unwrap();
        let dir = add_interface(
            root.path(),
            "radio0",
            "00:c0:ca:11:22:33",
            Some("rt2800usb"),
            false,
        );
        fs::write(dir.join("uevent"), "DEVTYPE=wlan\nINTERFACE=radio0\n").unwrap();

        let adapters = detect_wifi_adapters(root.path()).unwrap();
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].chipset, AdapterChipsetType::Ralink);
    }

    #[test]
    fn test_driver_from_device_uevent() {
        let root = tempfile::tempdir().unwrap();
        let dir = add_interface(root.path(), "wlan0", "10:20:30:40:50:60", None, true);
        fs::write(
            dir.join("device").join("uevent"),
            "DRIVER=brcmfmac\nMODALIAS=sdio\n",
        )
        .unwrap();

        let adapters = detect_wifi_adapters(root.path()).unwrap();
        assert_eq!(adapters[0].driver_name, "brcmfmac");
        assert_eq!(adapters[0].chipset, AdapterChipsetType::Broadcom);
    }

    #[test]
    fn test_unknown_driver_is_kept() {
        let root = tempfile::tempdir().unwrap();
        add_interface(root.path(), "wlan0", "10:20:30:40:50:60", Some("mt7601u"), true);

        let adapters = detect_wifi_adapters(root.path()).unwrap();
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].chipset, AdapterChipsetType::Unknown);
        assert!(!adapters[0].capabilities.supports_2ghz);
    }

    #[test]
    fn test_skips_adapter_without_mac() {
        let root = tempfile::tempdir().unwrap();
        add_interface(root.path(), "wlan0", "00:00:00:00:00:00", Some("ath9k"), true);
        add_interface(root.path(), "wlan1", "garbage", Some("ath9k"), true);

        assert!(detect_wifi_adapters(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let adapters = detect_wifi_adapters(&root.path().join("class/net")).unwrap();
        assert!(adapters.is_empty());
    }
}
