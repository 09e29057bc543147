#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `locus-locator`: location resolution
//!
//! Resolves logical location ids (e.g. `cd17:overview`) into concrete URLs
//! for the current environment, residency and insight location, and works out
//! which location a given URL belongs to.
//!
//! ## Overview
//!
//! - [`LocatorService`] owns a [`registry::LocationRegistry`], the ambient
//!   [`types::ResolutionContext`] and a per-id lookup cache.
//! - `get_node` walks a fixed fallback chain from the most specific key
//!   (environment, residency and insight location) to the least
//!   (`{id}-*-*`).
//! - `set_acting_url` binds the URL the application runs at: a recognized
//!   URL rewrites the matching node to that URL and adopts its environment
//!   and residency, an unrecognized one is classified by host.
//! - The engine is synchronous and never fails: unknown ids and URLs yield
//!   `None`, and `resolve_url` falls back to the current page.
//!
//! ## Example
//! ```
//! use locator::{ActingUrl, LocatorService};
//! use types::{EnvironmentTags, LocationDescriptor};
//!
//! let mut locator = LocatorService::builder()
//!     .locations(vec![
//!         LocationDescriptor::new("insight:api", "https://api.cloudinsight.alertlogic.com")
//!             .with_environments(EnvironmentTags::parse("production|production-staging").unwrap())
//!             .with_residency("US"),
//!         LocationDescriptor::new("insight:api", "https://api.cloudinsight.alertlogic.co.uk")
//!             .with_environments(EnvironmentTags::parse("production|production-staging").unwrap())
//!             .with_residency("EMEA"),
//!     ])
//!     .build();
//!
//! assert_eq!(
//!     locator.resolve_url("insight:api", Some("/aims/v1/2/accounts"), None),
//!     "https://api.cloudinsight.alertlogic.com/aims/v1/2/accounts"
//! );
//!
//! locator.set_context(types::ContextPatch::new().residency("EMEA"));
//! assert_eq!(locator.resolve_url("insight:api", None, None), "https://api.cloudinsight.alertlogic.co.uk");
//!
//! locator.set_acting_url(ActingUrl::Unset, false);
//! assert!(locator.acting_node().is_none());
//! ```

mod acting;
mod resolver;
mod service;
pub mod shared;
mod store;

pub use acting::{base_url, url_path, ActingUrl};
use catalog::CatalogError;
use config::ConfigError;
pub use service::{LocatorService, LocatorServiceBuilder};
pub use store::ContextStore;
use thiserror::Error;

/// Errors from building a locator out of configuration files.
///
/// Resolution itself never fails; only loading does.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The configuration file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The descriptor catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result alias for locator construction
pub type Result<T> = std::result::Result<T, LocatorError>;
