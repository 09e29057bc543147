//! Reverse lookup entries: one compiled template per node URI or alias.

use pattern::UriPattern;

use crate::NodeId;

/// A compiled template bound to the node it resolves to.
#[derive(Debug, Clone)]
pub struct UriMatcher {
    /// Node the template belongs to.
    pub node: NodeId,
    /// Compiled template.
    pub pattern: UriPattern,
    /// Whether the template came from the node's alias list.
    pub alias: bool,
}
