//! Location descriptors and the environment-specific nodes derived from them.
//!
//! A [`LocationDescriptor`] is what a catalog declares: one logical service
//! deployed to one or more environments. The registry expands each descriptor
//! into one [`LocationNode`] per environment tag; nodes are what lookups
//! return and what runtime rebinding mutates.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::DEFAULT_ENVIRONMENT;

/// Errors raised while validating descriptors at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// The environment list was empty.
    #[error("environment list is empty")]
    EmptyEnvironments,
    /// An environment tag was empty or whitespace.
    #[error("empty environment tag in {0:?}")]
    EmptyEnvironmentTag(String),
    /// An environment tag appeared more than once.
    #[error("duplicate environment tag: {0}")]
    DuplicateEnvironment(String),
    /// The logical location id was empty.
    #[error("descriptor has an empty location type id")]
    MissingLocationType,
    /// The base URI was empty.
    #[error("descriptor for {0} has an empty uri")]
    MissingUri(String),
}

/// Ordered, non-empty, duplicate-free list of environment tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvironmentTags", into = "Vec<String>")]
pub struct EnvironmentTags(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnvironmentTags {
    Delimited(String),
    List(Vec<String>),
}

impl TryFrom<RawEnvironmentTags> for EnvironmentTags {
    type Error = DescriptorError;

    fn try_from(raw: RawEnvironmentTags) -> Result<Self, Self::Error> {
        match raw {
            RawEnvironmentTags::Delimited(s) => Self::parse(&s),
            RawEnvironmentTags::List(tags) => Self::new(tags),
        }
    }
}

impl From<EnvironmentTags> for Vec<String> {
    fn from(tags: EnvironmentTags) -> Self { tags.0 }
}

impl EnvironmentTags {
    /// Build a tag list, rejecting empty lists, blank tags and duplicates.
    pub fn new<I, S>(tags: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                return Err(DescriptorError::EmptyEnvironmentTag(tag));
            }
            if out.iter().any(|t| t == trimmed) {
                return Err(DescriptorError::DuplicateEnvironment(trimmed.to_string()));
            }
            out.push(trimmed.to_string());
        }
        if out.is_empty() {
            return Err(DescriptorError::EmptyEnvironments);
        }
        Ok(Self(out))
    }

    /// Parse the legacy pipe-delimited form, e.g. `"production|production-staging"`.
    pub fn parse(delimited: &str) -> Result<Self, DescriptorError> {
        Self::new(delimited.split('|'))
    }

    /// A single-tag list.
    pub fn single(tag: impl Into<String>) -> Self { Self(vec![tag.into()]) }

    /// Iterate over the tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }

    /// Number of tags.
    pub fn len(&self) -> usize { self.0.len() }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Whether `tag` is one of the tags.
    pub fn contains(&self, tag: &str) -> bool { self.0.iter().any(|t| t == tag) }
}

impl Default for EnvironmentTags {
    fn default() -> Self { Self::single(DEFAULT_ENVIRONMENT) }
}

impl fmt::Display for EnvironmentTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0.join("|")) }
}

/// One logical service as declared by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescriptor {
    /// Logical service identity, stable across deployments (e.g. `cd17:overview`).
    pub loc_type_id: String,
    /// Base URL, or a bare domain without scheme for a few legacy entries.
    pub uri: String,
    /// Environments this descriptor applies to.
    #[serde(default, rename = "environment")]
    pub environments: EnvironmentTags,
    /// Data residency zone, e.g. `US` or `EMEA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency: Option<String>,
    /// Physical datacenter identity this descriptor is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_location_id: Option<String>,
    /// Alternate URL templates, possibly containing `*` wildcards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Link-out target that is never an acting location.
    #[serde(default)]
    pub external: bool,
    /// Opaque descriptor-specific payload.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl LocationDescriptor {
    /// Descriptor for `loc_type_id` at `uri` in the default environment.
    pub fn new(loc_type_id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            loc_type_id: loc_type_id.into(),
            uri: uri.into(),
            environments: EnvironmentTags::default(),
            residency: None,
            insight_location_id: None,
            aliases: Vec::new(),
            external: false,
            data: Value::Null,
        }
    }

    /// Replace the environment tags.
    pub fn with_environments(mut self, environments: EnvironmentTags) -> Self {
        self.environments = environments;
        self
    }

    /// Restrict to a single environment.
    pub fn with_environment(self, environment: impl Into<String>) -> Self {
        self.with_environments(EnvironmentTags::single(environment))
    }

    /// Set the residency.
    pub fn with_residency(mut self, residency: impl Into<String>) -> Self {
        self.residency = Some(residency.into());
        self
    }

    /// Bind to an insight location.
    pub fn with_insight_location(mut self, insight_location_id: impl Into<String>) -> Self {
        self.insight_location_id = Some(insight_location_id.into());
        self
    }

    /// Add an alias template.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Mark as external.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Attach an opaque payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Check the fields the locator relies on.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.loc_type_id.trim().is_empty() {
            return Err(DescriptorError::MissingLocationType);
        }
        if self.uri.trim().is_empty() {
            return Err(DescriptorError::MissingUri(self.loc_type_id.clone()));
        }
        Ok(())
    }

    /// Expand into one node per environment tag.
    pub fn variants(&self) -> impl Iterator<Item = LocationNode> + '_ {
        self.environments.iter().map(move |environment| LocationNode {
            loc_type_id: self.loc_type_id.clone(),
            uri: self.uri.clone(),
            environment: environment.to_string(),
            residency: self.residency.clone(),
            insight_location_id: self.insight_location_id.clone(),
            aliases: self.aliases.clone(),
            external: self.external,
            data: self.data.clone(),
        })
    }
}

/// A descriptor fixed to a single environment, as held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationNode {
    /// Logical service identity.
    pub loc_type_id: String,
    /// Current base URL; rewritten by alias promotion and remapping.
    pub uri: String,
    /// The single environment this node serves.
    pub environment: String,
    /// Data residency zone.
    pub residency: Option<String>,
    /// Bound insight location.
    pub insight_location_id: Option<String>,
    /// Alias templates inherited from the descriptor.
    pub aliases: Vec<String>,
    /// Link-out target flag.
    pub external: bool,
    /// Opaque payload.
    pub data: Value,
}

impl LocationNode {
    /// Whether the node's URI lacks a scheme (e.g. `alertlogic.auth0.com`).
    pub fn is_bare_domain(&self) -> bool { !self.uri.starts_with("http") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_tags_parse() {
        let tags = EnvironmentTags::parse("production|production-staging").expect("valid tags");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["production", "production-staging"]);
        assert_eq!(tags.to_string(), "production|production-staging");

        assert_eq!(EnvironmentTags::parse(""), Err(DescriptorError::EmptyEnvironmentTag(String::new())));
        assert_eq!(
            EnvironmentTags::parse("integration||development"),
            Err(DescriptorError::EmptyEnvironmentTag(String::new()))
        );
        assert_eq!(
            EnvironmentTags::parse("integration|integration"),
            Err(DescriptorError::DuplicateEnvironment("integration".to_string()))
        );
        assert_eq!(EnvironmentTags::new(Vec::<String>::new()), Err(DescriptorError::EmptyEnvironments));
    }

    #[test]
    fn test_descriptor_deserialize_legacy_and_list_forms() {
        let legacy: LocationDescriptor = serde_json::from_str(
            r#"{"locTypeId":"insight:api","uri":"https://api.cloudinsight.alertlogic.com","environment":"production|production-staging","residency":"US"}"#,
        )
        .expect("legacy form");
        assert_eq!(legacy.environments.len(), 2);
        assert_eq!(legacy.residency.as_deref(), Some("US"));
        assert!(!legacy.external);

        let listed: LocationDescriptor = serde_json::from_str(
            r#"{"locTypeId":"auth0","uri":"alertlogic.auth0.com","environment":["production","integration"],"external":true}"#,
        )
        .expect("list form");
        assert!(listed.environments.contains("integration"));
        assert!(listed.external);

        let defaulted: LocationDescriptor =
            serde_json::from_str(r#"{"locTypeId":"segment","uri":"https://segment.io"}"#)
                .expect("default environment");
        assert_eq!(defaulted.environments, EnvironmentTags::default());

        let bad = serde_json::from_str::<LocationDescriptor>(
            r#"{"locTypeId":"segment","uri":"https://segment.io","environment":[]}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_variants_fix_environment() {
        let descriptor = LocationDescriptor::new("cd17:overview", "https://console.overview.alertlogic.com")
            .with_environments(EnvironmentTags::parse("production|production-staging").expect("tags"))
            .with_residency("US")
            .with_alias("https://console.overview.alertlogic.co.uk");
        let nodes: Vec<_> = descriptor.variants().collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].environment, "production");
        assert_eq!(nodes[1].environment, "production-staging");
        assert_eq!(nodes[1].aliases, descriptor.aliases);
        assert!(!nodes[0].is_bare_domain());
    }

    #[test]
    fn test_validate() {
        assert!(LocationDescriptor::new("auth0", "alertlogic.auth0.com").validate().is_ok());
        assert_eq!(
            LocationDescriptor::new(" ", "https://x.example").validate(),
            Err(DescriptorError::MissingLocationType)
        );
        assert_eq!(
            LocationDescriptor::new("auth0", "").validate(),
            Err(DescriptorError::MissingUri("auth0".to_string()))
        );
    }
}
