// WiFi Inventory - Main Entry Point
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # WiFi Inventory
//!
//! Detects wireless adapters, attaches their persisted settings and writes
//! the WiFi manifest consumed by link and hotspot setup.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

mod discovery;
mod fs_utils;
mod inventory;
mod manifest;
mod models;
mod settings_store;

use manifest::ManifestWriter;
use models::{InventoryConfig, Result, DEFAULT_CONFIG_FILE};
use settings_store::{SettingsStore, StoreConfig};

/// Human-readable application name.
pub const APP_NAME: &str = "WiFi Inventory";

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version information and exit.
fn print_version() {
    println!("{} {}", APP_NAME, VERSION);
    println!("Copyright (C) 2026 Christos A. Daggas");
    println!("License: MIT");
}

/// Print help information and exit.
fn print_help() {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "wifi-inventory".to_string());
    println!("Usage: {} [OPTIONS]", program);
    println!();
    println!("Detect wireless adapters and publish the WiFi manifest.");
    println!();
    println!("Options:");
    println!("  -h, --help                 Show this help message and exit");
    println!("  -v, --version              Show version information and exit");
    println!("  -d, --debug                Enable debug logging");
    println!("  -c, --config <PATH>        Configuration file (default: {})", DEFAULT_CONFIG_FILE);
    println!("      --settings-dir <PATH>  Directory for per-adapter settings");
    println!("      --manifest <PATH>      Path of the manifest to write");
    println!("      --sysfs-root <PATH>    Network interface directory to scan");
    println!();
    println!("Environment variables:");
    println!("  RUST_LOG                   Set log level (trace, debug, info, warn, error)");
}

/// Options given on the command line.
#[derive(Debug, Default)]
struct CliOptions {
    debug: bool,
    config_path: Option<PathBuf>,
    settings_dir: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    sysfs_root: Option<PathBuf>,
}

/// Outcome of argument parsing.
enum CliAction {
    Run(CliOptions),
    Exit(ExitCode),
}

fn parse_args(args: &[String]) -> CliAction {
    let mut options = CliOptions::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let slot = match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit(ExitCode::SUCCESS);
            }
            "-v" | "--version" => {
                print_version();
                return CliAction::Exit(ExitCode::SUCCESS);
            }
            "-d" | "--debug" => {
                options.debug = true;
                continue;
            }
            "-c" | "--config" => &mut options.config_path,
            "--settings-dir" => &mut options.settings_dir,
            "--manifest" => &mut options.manifest_path,
            "--sysfs-root" => &mut options.sysfs_root,
            _ => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Try '--help' for more information.");
                return CliAction::Exit(ExitCode::FAILURE);
            }
        };

        match iter.next() {
            Some(value) => *slot = Some(PathBuf::from(value)),
            None => {
                eprintln!("Option {} requires a value", arg);
                return CliAction::Exit(ExitCode::FAILURE);
            }
        }
    }

    CliAction::Run(options)
}

/// Load the configuration file and apply command-line overrides.
///
/// The default file is optional; an explicitly given one must exist.
fn load_config(options: &CliOptions) -> Result<InventoryConfig> {
    let mut config = match &options.config_path {
        Some(path) => InventoryConfig::load_from_file(path)?,
        None => {
            let default_path = std::path::Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                InventoryConfig::load_from_file(default_path)?
            } else {
                InventoryConfig::default()
            }
        }
    };

    if let Some(dir) = &options.settings_dir {
        config.settings_dir = dir.clone();
    }
    if let Some(path) = &options.manifest_path {
        config.manifest_path = path.clone();
    }
    if let Some(root) = &options.sysfs_root {
        config.sysfs_net_root = root.clone();
    }
    Ok(config)
}

/// Discover adapters, resolve their settings and write the manifest.
fn run(config: &InventoryConfig) -> Result<()> {
    let store = SettingsStore::open(StoreConfig::from(config))?;
    let probes = discovery::detect_wifi_adapters(&config.sysfs_net_root)?;
    let records = inventory::build_inventory(probes, &store);
    ManifestWriter::new(&config.manifest_path).write(&records)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        CliAction::Run(options) => options,
        CliAction::Exit(code) => return code,
    };

    let config = load_config(&options);

    // Initialize logging with appropriate level
    let configured_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    let log_level = if options.debug {
        tracing::Level::DEBUG
    } else {
        configured_level
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level.into()),
        )
        .init();

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
