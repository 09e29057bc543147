#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core data model for location resolution.
//!
//! This crate defines the records that flow through the locator: location
//! descriptors as they are loaded, the environment-specific nodes the registry
//! indexes, the ambient resolution context and its partial updates, and the
//! static table of insight locations used to normalize that context.
//! It carries no behavior beyond validation and small value helpers.

/// Browsing location supplied by the host application.
pub mod browsing;
/// Resolution context, tri-state patches and context merging.
pub mod context;
/// Location descriptors, environment tags and indexed nodes.
pub mod descriptor;
/// Static table of insight locations (datacenters) and their alternatives.
pub mod insight;
/// Well-known logical location identifiers.
pub mod location;

pub use browsing::BrowsingLocation;
pub use context::{ContextPatch, Patch, ResolutionContext};
pub use descriptor::{DescriptorError, EnvironmentTags, LocationDescriptor, LocationNode};
pub use insight::{InsightLocation, InsightLocations};

/// Environment assumed when neither a descriptor nor the context names one.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Residency assumed when the context does not name one.
pub const DEFAULT_RESIDENCY: &str = "US";
