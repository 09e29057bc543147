// SPDX-License-Identifier: CC0-1.0

//! Locus umbrella crate.
//!
//! Re-exports the locator facade and the types it is driven with, so hosts
//! can depend on a single crate. The implementation lives in the workspace
//! member crates under `primitives`, `engine` and `catalog`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError, LoggingConfig};
pub use locator::{shared, ActingUrl, LocatorError, LocatorService, LocatorServiceBuilder};
pub use types::{
    location, BrowsingLocation, ContextPatch, EnvironmentTags, InsightLocation, InsightLocations,
    LocationDescriptor, LocationNode, Patch, ResolutionContext,
};

/// Miscellaneous metadata about the Locus workspace.
pub mod locus_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Route `tracing` events as the `[logging]` section asks.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init_logging(logging: &LoggingConfig) -> std::io::Result<bool> {
    match &logging.file {
        Some(path) => locus_logging::init_with_file(&logging.level, path),
        None => Ok(locus_logging::init(&logging.level)),
    }
}
