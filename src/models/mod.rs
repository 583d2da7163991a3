// WiFi Inventory - Shared Models
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # WiFi Inventory Models
//!
//! Types shared by discovery, the settings store and the manifest writer:
//!
//! - **Chipset**: Closed set of supported chipsets and driver classification
//! - **Adapter**: Detected adapters, their identity and persisted settings
//! - **Config**: Inventory configuration
//! - **Error**: Shared error types
//!
//! ## Design Principles
//!
//! 1. **Stable identity**: Adapters are keyed by chipset and MAC, never by
//!    interface name or bus order
//! 2. **Intent only**: Settings record what an adapter should be used for;
//!    applying them is someone else's job
//! 3. **Serializable**: All persisted types serialize to JSON

pub mod adapter;
pub mod chipset;
pub mod config;
pub mod error;
pub mod validation;

// Re-export main types for convenience
pub use adapter::{AdapterRecord, AdapterSettings, IdentityKey, IntendedUse, ProbedAdapter};
pub use adapter::DEFAULT_TX_POWER;
pub use chipset::{AdapterChipsetType, ChipsetCapabilities};
pub use config::{InventoryConfig, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
