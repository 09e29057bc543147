#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for the locator.
//!
//! Library crates emit `tracing` events; hosts call one of the `init`
//! functions once to route them somewhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable consulted by [`init_from_env`].
pub const LOG_ENV: &str = "LOCUS_LOG";

fn filter(level: &str) -> EnvFilter { EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")) }

/// Install a stderr subscriber filtering at `level` (e.g. `"info"`, `"locator=debug"`).
///
/// Returns `false` if a global subscriber was already installed; the existing
/// one is left in place.
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt().with_env_filter(filter(level)).with_writer(std::io::stderr).try_init().is_ok()
}

/// Like [`init`], reading the filter from `LOCUS_LOG` and falling back to `default_level`.
pub fn init_from_env(default_level: &str) -> bool {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| default_level.to_string());
    init(&level)
}

/// Like [`init`], appending plain-text events to the file at `path`.
pub fn init_with_file(level: &str, path: &Path) -> std::io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok())
}
