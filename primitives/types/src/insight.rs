//! Insight locations as reported by the account and locations services.
//!
//! A logical region such as `insight-us-virginia` may be served by several
//! physical datacenters; `alternatives` lists them in preference order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Static facts about one insight location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightLocation {
    /// Residency zone the location belongs to.
    pub residency: String,
    /// Human-readable residency caption.
    pub residency_caption: String,
    /// Logical cloud region, e.g. `us-east-1`.
    pub logical_region: String,
    /// Physical locations this one may be normalized to, in preference order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

impl InsightLocation {
    fn new(residency: &str, residency_caption: &str, logical_region: &str, alternatives: &[&str]) -> Self {
        Self {
            residency: residency.to_string(),
            residency_caption: residency_caption.to_string(),
            logical_region: logical_region.to_string(),
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Pick the first alternative present in `accessible`, else the first alternative.
    ///
    /// Returns `None` when the location has no alternatives.
    pub fn select_alternative(&self, accessible: &[String]) -> Option<&str> {
        self.alternatives
            .iter()
            .find(|candidate| accessible.contains(*candidate))
            .or_else(|| self.alternatives.first())
            .map(String::as_str)
    }
}

/// Lookup table of insight locations keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightLocations(HashMap<String, InsightLocation>);

impl InsightLocations {
    /// Empty table.
    pub fn new() -> Self { Self::default() }

    /// The known production datacenters and logical regions.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("defender-us-denver", InsightLocation::new("US", "UNITED STATES", "us-west-1", &[]));
        table.insert("defender-us-ashburn", InsightLocation::new("US", "UNITED STATES", "us-east-1", &[]));
        table.insert("defender-uk-newport", InsightLocation::new("EMEA", "UNITED KINGDOM", "uk-west-1", &[]));
        table.insert(
            "insight-us-virginia",
            InsightLocation::new(
                "US",
                "UNITED STATES",
                "us-east-1",
                &["defender-us-denver", "defender-us-ashburn"],
            ),
        );
        table.insert(
            "insight-eu-ireland",
            InsightLocation::new("EMEA", "UNITED KINGDOM", "uk-west-1", &["defender-uk-newport"]),
        );
        table
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, id: impl Into<String>, location: InsightLocation) {
        self.0.insert(id.into(), location);
    }

    /// Look up an entry.
    pub fn get(&self, id: &str) -> Option<&InsightLocation> { self.0.get(id) }

    /// Number of entries.
    pub fn len(&self) -> usize { self.0.len() }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}
