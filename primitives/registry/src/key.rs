//! Dictionary keys, from least to most specific.

use std::fmt;

use types::LocationNode;

/// A dictionary key for one specificity tier.
///
/// Renders as `{loc}-*-*`, `{loc}-{env}-*`, `{loc}-{env}-{residency}` or
/// `{loc}-{env}-{residency}-{insight}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Any environment, any residency.
    Any {
        /// Logical location id.
        loc_type_id: String,
    },
    /// One environment, any residency.
    Environment {
        /// Logical location id.
        loc_type_id: String,
        /// Environment tag.
        environment: String,
    },
    /// One environment and residency.
    Residency {
        /// Logical location id.
        loc_type_id: String,
        /// Environment tag.
        environment: String,
        /// Residency zone.
        residency: String,
    },
    /// One environment, residency and insight location.
    InsightLocation {
        /// Logical location id.
        loc_type_id: String,
        /// Environment tag.
        environment: String,
        /// Residency zone.
        residency: String,
        /// Insight location id.
        insight_location_id: String,
    },
}

impl NodeKey {
    /// `{loc}-*-*`
    pub fn any(loc_type_id: &str) -> Self { NodeKey::Any { loc_type_id: loc_type_id.to_string() } }

    /// `{loc}-{env}-*`
    pub fn environment(loc_type_id: &str, environment: &str) -> Self {
        NodeKey::Environment {
            loc_type_id: loc_type_id.to_string(),
            environment: environment.to_string(),
        }
    }

    /// `{loc}-{env}-{residency}`
    pub fn residency(loc_type_id: &str, environment: &str, residency: &str) -> Self {
        NodeKey::Residency {
            loc_type_id: loc_type_id.to_string(),
            environment: environment.to_string(),
            residency: residency.to_string(),
        }
    }

    /// `{loc}-{env}-{residency}-{insight}`
    pub fn insight_location(
        loc_type_id: &str,
        environment: &str,
        residency: &str,
        insight_location_id: &str,
    ) -> Self {
        NodeKey::InsightLocation {
            loc_type_id: loc_type_id.to_string(),
            environment: environment.to_string(),
            residency: residency.to_string(),
            insight_location_id: insight_location_id.to_string(),
        }
    }

    /// Every key `node` is written under, least specific first.
    pub fn for_node(node: &LocationNode) -> Vec<NodeKey> {
        let loc = node.loc_type_id.as_str();
        let env = node.environment.as_str();
        let mut keys = vec![NodeKey::any(loc), NodeKey::environment(loc, env)];
        if let Some(residency) = node.residency.as_deref() {
            keys.push(NodeKey::residency(loc, env, residency));
            if let Some(insight) = node.insight_location_id.as_deref() {
                keys.push(NodeKey::insight_location(loc, env, residency, insight));
            }
        }
        keys
    }

    /// The logical location id this key belongs to.
    pub fn loc_type_id(&self) -> &str {
        match self {
            NodeKey::Any { loc_type_id }
            | NodeKey::Environment { loc_type_id, .. }
            | NodeKey::Residency { loc_type_id, .. }
            | NodeKey::InsightLocation { loc_type_id, .. } => loc_type_id,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Any { loc_type_id } => write!(f, "{}-*-*", loc_type_id),
            NodeKey::Environment { loc_type_id, environment } =>
                write!(f, "{}-{}-*", loc_type_id, environment),
            NodeKey::Residency { loc_type_id, environment, residency } =>
                write!(f, "{}-{}-{}", loc_type_id, environment, residency),
            NodeKey::InsightLocation { loc_type_id, environment, residency, insight_location_id } =>
                write!(f, "{}-{}-{}-{}", loc_type_id, environment, residency, insight_location_id),
        }
    }
}
