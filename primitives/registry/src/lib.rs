#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Location Registry: an in-memory index of location nodes.
//!
//! The registry expands descriptors into one node per environment and keeps
//! them in an arena. Two indices refer to nodes by [`NodeId`]:
//!
//! - a dictionary keyed by [`NodeKey`] at four specificity tiers, used for
//!   logical-id lookups;
//! - a list of [`UriMatcher`]s sorted by descending literal prefix, used to
//!   recognize which node a URL belongs to.
//!
//! Rewriting a node in the arena is therefore visible through every key and
//! matcher that refers to it.

pub mod key;
pub mod matcher;

use std::collections::{BTreeSet, HashMap};

pub use key::NodeKey;
pub use matcher::UriMatcher;
use pattern::UriPattern;
use types::{LocationDescriptor, LocationNode};

/// Stable handle of a node in the registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena.
    pub fn index(self) -> usize { self.0 }
}

/// A registry of location nodes.
#[derive(Debug, Default)]
pub struct LocationRegistry {
    /// Arena of indexed nodes.
    nodes: Vec<LocationNode>,
    /// Map from specificity key to node; later insertions win.
    dictionary: HashMap<NodeKey, NodeId>,
    /// Compiled templates in matching order.
    matchers: Vec<UriMatcher>,
}

impl LocationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self { Self::default() }

    /// Create a registry indexing `descriptors`.
    pub fn from_descriptors(descriptors: &[LocationDescriptor]) -> Self {
        let mut registry = Self::new();
        registry.index(descriptors);
        registry
    }

    /// Replace the registry contents with `descriptors`.
    ///
    /// Each descriptor is expanded per environment tag. When two nodes share a
    /// dictionary key, the one indexed last wins, so callers order input with
    /// the most specific intended descriptor last.
    pub fn index(&mut self, descriptors: &[LocationDescriptor]) {
        self.nodes.clear();
        self.dictionary.clear();
        self.matchers.clear();

        for descriptor in descriptors {
            for node in descriptor.variants() {
                self.insert_node(node);
            }
        }

        // Order is essential to `match_uri`.
        self.matchers.sort_by(|a, b| a.pattern.priority(&b.pattern));

        tracing::debug!(
            descriptors = descriptors.len(),
            nodes = self.nodes.len(),
            keys = self.dictionary.len(),
            matchers = self.matchers.len(),
            "indexed locations"
        );
    }

    fn insert_node(&mut self, node: LocationNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        for key in NodeKey::for_node(&node) {
            self.dictionary.insert(key, id);
        }
        if !node.external {
            self.add_matcher(id, &node.uri, false);
            for alias in &node.aliases {
                self.add_matcher(id, alias, true);
            }
        }
        self.nodes.push(node);
        id
    }

    fn add_matcher(&mut self, node: NodeId, template: &str, alias: bool) {
        match UriPattern::compile(template) {
            Ok(pattern) => self.matchers.push(UriMatcher { node, pattern, alias }),
            Err(e) => tracing::warn!(template, error = %e, "skipping uncompilable URI template"),
        }
    }

    /// Point one node at a new base URI.
    pub fn promote(&mut self, id: NodeId, uri: impl Into<String>) -> Option<&LocationNode> {
        let node = self.nodes.get_mut(id.0)?;
        node.uri = uri.into();
        Some(node)
    }

    /// Rewrite every indexed node of `loc_type_id`.
    ///
    /// `uri` is always replaced; `environment` and `residency` only when given.
    /// Returns the number of nodes rewritten.
    pub fn remap(
        &mut self,
        loc_type_id: &str,
        uri: &str,
        environment: Option<&str>,
        residency: Option<&str>,
    ) -> usize {
        let reachable: BTreeSet<NodeId> = self
            .dictionary
            .values()
            .copied()
            .chain(self.matchers.iter().map(|m| m.node))
            .collect();

        let mut count = 0;
        for id in reachable {
            let node = &mut self.nodes[id.0];
            if node.loc_type_id != loc_type_id {
                continue;
            }
            node.uri = uri.to_string();
            if let Some(environment) = environment {
                node.environment = environment.to_string();
            }
            if let Some(residency) = residency {
                node.residency = Some(residency.to_string());
            }
            count += 1;
        }
        tracing::debug!(loc_type_id, uri, count, "remapped location");
        count
    }

    /// Matchers in matching order.
    pub fn matchers(&self) -> &[UriMatcher] { &self.matchers }

    /// The first matcher accepting `target`, skipping external nodes.
    pub fn matcher_for(&self, target: &str) -> Option<&UriMatcher> {
        self.matchers
            .iter()
            .filter(|m| !self.nodes[m.node.0].external)
            .find(|m| m.pattern.matches(target))
    }
}

/// Read-only interface to the `LocationRegistry`.
///
/// Provides lookups by key and by URL without exposing mutation.
pub trait LocationRegistryReader {
    /// Get a node by id.
    fn node(&self, id: NodeId) -> Option<&LocationNode>;

    /// Get the node written last under `key`.
    fn lookup(&self, key: &NodeKey) -> Option<NodeId>;

    /// Find the node whose URI or alias template matches `target`.
    ///
    /// Candidates are tried longest literal prefix first; external nodes and
    /// candidates whose prefix `target` lacks are skipped.
    fn match_uri(&self, target: &str) -> Option<NodeId>;

    /// Ids of every node reachable from the dictionary, each once, in arena order.
    fn node_ids(&self) -> Vec<NodeId>;

    /// First dictionary node bound to `insight_location_id`.
    fn find_by_insight_location(&self, insight_location_id: &str) -> Option<NodeId>;

    /// Get the total number of nodes in the arena.
    fn node_count(&self) -> usize;
}

/// Implement the interface for `LocationRegistry`.
impl LocationRegistryReader for LocationRegistry {
    fn node(&self, id: NodeId) -> Option<&LocationNode> { self.nodes.get(id.0) }

    fn lookup(&self, key: &NodeKey) -> Option<NodeId> { self.dictionary.get(key).copied() }

    fn match_uri(&self, target: &str) -> Option<NodeId> { self.matcher_for(target).map(|m| m.node) }

    fn node_ids(&self) -> Vec<NodeId> {
        let ids: BTreeSet<NodeId> = self.dictionary.values().copied().collect();
        ids.into_iter().collect()
    }

    fn find_by_insight_location(&self, insight_location_id: &str) -> Option<NodeId> {
        self.node_ids().into_iter().find(|id| {
            self.nodes[id.0].insight_location_id.as_deref() == Some(insight_location_id)
        })
    }

    fn node_count(&self) -> usize { self.nodes.len() }
}
