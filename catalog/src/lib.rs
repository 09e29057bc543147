#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Location Catalog: loading and validating descriptor tables.
//!
//! A catalog is an ordered list of [`LocationDescriptor`]s. Order matters:
//! the registry lets the descriptor indexed last win a shared key, so tables
//! list general entries before specific ones.
//!
//! Tables are JSON arrays. The `environment` field may be a list or the legacy
//! pipe-delimited string; both are validated when loaded.

pub mod generators;

use std::path::Path;

pub use generators::{magma_node, o3_node};
use thiserror::Error;
use types::{location, DescriptorError, LocationDescriptor};

/// Descriptor table bundled with the crate.
const BUNDLED_LOCATIONS: &str = include_str!("../resources/locations.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while reading files
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON parsing error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A descriptor failed validation
    #[error("invalid descriptor #{index}: {source}")]
    Invalid {
        /// Position in the table
        index: usize,
        /// Validation failure
        #[source]
        source: DescriptorError,
    },
}

/// Result alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// An ordered, validated descriptor table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    descriptors: Vec<LocationDescriptor>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self { Self::default() }

    /// Build a catalog from descriptors, validating each.
    pub fn from_descriptors(descriptors: Vec<LocationDescriptor>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        catalog.extend(descriptors)?;
        Ok(catalog)
    }

    /// Parse a JSON descriptor array.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let descriptors: Vec<LocationDescriptor> = serde_json::from_str(json)?;
        Self::from_descriptors(descriptors)
    }

    /// Load a JSON descriptor array from `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), descriptors = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The console families followed by the bundled service table.
    pub fn builtin() -> CatalogResult<Self> {
        let mut catalog = Self::new();
        catalog.extend(magma_node(location::MAGMA_UI, "magma", 8888))?;
        for (loc_type_id, app_code, dev_port) in CONSOLES {
            catalog.extend(o3_node(loc_type_id, app_code, dev_port))?;
        }
        catalog.extend(Self::from_json_str(BUNDLED_LOCATIONS)?.descriptors)?;
        Ok(catalog)
    }

    /// Append descriptors, validating each.
    pub fn extend(&mut self, descriptors: Vec<LocationDescriptor>) -> CatalogResult<()> {
        let offset = self.descriptors.len();
        for (i, descriptor) in descriptors.iter().enumerate() {
            descriptor
                .validate()
                .map_err(|source| CatalogError::Invalid { index: offset + i, source })?;
        }
        self.descriptors.extend(descriptors);
        Ok(())
    }

    /// The descriptors in table order.
    pub fn descriptors(&self) -> &[LocationDescriptor] { &self.descriptors }

    /// Take the descriptors.
    pub fn into_descriptors(self) -> Vec<LocationDescriptor> { self.descriptors }

    /// Number of descriptors.
    pub fn len(&self) -> usize { self.descriptors.len() }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }
}

/// Standalone consoles: location id, app code, dev server port.
const CONSOLES: [(&str, &str, u16); 12] = [
    (location::ACCOUNTS_UI, "account", 8002),
    (location::OVERVIEW_UI, "overview", 4213),
    (location::INCIDENTS_UI, "incidents", 8001),
    (location::INTELLIGENCE_UI, "intelligence", 4211),
    (location::CONFIGURATION_UI, "configuration", 4210),
    (location::REMEDIATIONS_UI, "remediations", 4212),
    (location::SEARCH_UI, "search", 4220),
    (location::ENDPOINTS_UI, "endpoints", 8004),
    (location::DASHBOARDS_UI, "dashboards", 7001),
    (location::HEALTH_UI, "health", 8003),
    (location::EXPOSURES_UI, "exposures", 8006),
    (location::LANDSCAPE_UI, "landscape", 4230),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_parses() {
        let bundled = Catalog::from_json_str(BUNDLED_LOCATIONS).expect("bundled table");
        assert!(!bundled.is_empty());
        assert!(bundled.descriptors().iter().any(|d| d.loc_type_id == location::AUTH0));
    }

    #[test]
    fn test_builtin_orders_consoles_first() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.descriptors()[0].loc_type_id, location::MAGMA_UI);
        assert_eq!(catalog.len(), 6 + 12 * 4 + Catalog::from_json_str(BUNDLED_LOCATIONS).expect("bundled").len());
    }
}
