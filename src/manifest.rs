// WiFi Inventory - Manifest Writer
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Publishes the adapter inventory as a JSON manifest.
//!
//! The manifest is a JSON array with one object per adapter. Link and
//! hotspot setup read it on their own; this side only ever writes it, and
//! always replaces the whole file.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::fs_utils;
use crate::models::{AdapterRecord, Error, Result};

/// Writes the WiFi manifest to a fixed path.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    path: PathBuf,
}

impl ManifestWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` and replace the manifest file with the result.
    pub fn write(&self, records: &[AdapterRecord]) -> Result<()> {
        let document =
            fs_utils::to_json_pretty(records).map_err(|e| Error::manifest_write(&self.path, e))?;
        fs_utils::write_atomic(&self.path, &document)
            .map_err(|e| Error::manifest_write(&self.path, e))?;

        info!("Wrote {} adapter(s) to {:?}", records.len(), self.path);
        Ok(())
    }
}
