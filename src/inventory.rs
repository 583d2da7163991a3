// WiFi Inventory - Inventory Pipeline
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Turns probed adapters into records with resolved settings.

use tracing::{error, info};

use crate::models::{AdapterRecord, ProbedAdapter};
use crate::settings_store::SettingsStore;

/// Resolve settings for every probed adapter.
///
/// Each adapter is resolved on its own. When the store fails for one adapter
/// it is still reported, with default settings and the failure attached, and
/// the remaining adapters are processed normally.
pub fn build_inventory(probes: Vec<ProbedAdapter>, store: &SettingsStore) -> Vec<AdapterRecord> {
    let mut records = Vec::with_capacity(probes.len());
    let mut failed = 0;

    for probe in probes {
        let key = probe.identity_key();
        match AdapterRecord::resolve(probe.clone(), store) {
            Ok(record) => {
                info!(
                    "{} ({}): use={} frequency={:?} txpower={}",
                    record.interface_name(),
                    key,
                    record.settings().use_for,
                    record.settings().frequency,
                    record.settings().txpower
                );
                records.push(record);
            }
            Err(e) => {
                error!("Failed to resolve settings for {}: {}", key, e);
                failed += 1;
                records.push(AdapterRecord::unresolved(probe, store.defaults().clone(), &e));
            }
        }
    }

    info!(
        "Inventory complete: {} adapter(s), {} with unresolved settings",
        records.len(),
        failed
    );
    records
}
