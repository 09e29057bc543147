//! Logical id lookups.

use registry::{LocationRegistryReader, NodeId, NodeKey};
use types::{LocationNode, ResolutionContext};

use crate::LocatorService;

impl LocatorService {
    /// Find the node serving `loc_type_id`.
    ///
    /// Fields of `context` override the ambient context. Keys are tried from
    /// most to least specific:
    ///
    /// 1. environment, residency and insight location
    /// 2. environment, residency and each accessible insight location in turn
    /// 3. environment and residency
    /// 4. environment
    /// 5. the id alone
    ///
    /// Lookups without an override are cached until the next mutation.
    pub fn get_node(&self, loc_type_id: &str, context: Option<&ResolutionContext>) -> Option<&LocationNode> {
        self.get_node_id(loc_type_id, context).and_then(|id| self.registry.node(id))
    }

    /// Like [`get_node`](Self::get_node), returning the registry handle.
    pub fn get_node_id(&self, loc_type_id: &str, context: Option<&ResolutionContext>) -> Option<NodeId> {
        if context.is_none() {
            if let Some(id) = self.cache.borrow().get(loc_type_id) {
                return Some(*id);
            }
        }

        let id = candidate_keys(loc_type_id, self.context(), context)
            .iter()
            .find_map(|key| self.registry.lookup(key))?;

        if context.is_none() {
            self.cache.borrow_mut().insert(loc_type_id.to_string(), id);
        }
        Some(id)
    }

    /// URL of `loc_type_id`, with `path` appended.
    ///
    /// Bare domains gain an `https://` scheme. An unknown id resolves against
    /// the browsing location, or the configured fallback origin without one.
    pub fn resolve_url(
        &self,
        loc_type_id: &str,
        path: Option<&str>,
        context: Option<&ResolutionContext>,
    ) -> String {
        let mut url = match self.get_node(loc_type_id, context) {
            Some(node) if node.is_bare_domain() => format!("https://{}", node.uri),
            Some(node) => node.uri.clone(),
            None => self.browsing_href(),
        };
        if let Some(path) = path {
            match path.strip_prefix('/') {
                Some(rest) if url.ends_with('/') => url.push_str(rest),
                _ => url.push_str(path),
            }
        }
        url
    }

    /// The node whose URI or alias matches `uri`.
    pub fn get_node_by_uri(&self, uri: &str) -> Option<&LocationNode> {
        self.registry.match_uri(uri).and_then(|id| self.registry.node(id))
    }

    /// The page the host is showing, or the fallback origin.
    pub(crate) fn browsing_href(&self) -> String {
        match &self.browsing {
            Some(browsing) => browsing.href(),
            None => self.config.acting.fallback_origin.clone(),
        }
    }
}

/// Dictionary keys to try, most specific first.
fn candidate_keys(
    loc_type_id: &str,
    ambient: &ResolutionContext,
    overrides: Option<&ResolutionContext>,
) -> Vec<NodeKey> {
    let pick = |field: fn(&ResolutionContext) -> Option<&str>| overrides.and_then(field).or_else(|| field(ambient));

    let environment = pick(|c| c.environment.as_deref());
    let residency = pick(|c| c.residency.as_deref());
    let insight_location_id = pick(|c| c.insight_location_id.as_deref());
    let accessible: &[String] = overrides
        .and_then(|c| c.accessible.as_deref())
        .or(ambient.accessible.as_deref())
        .unwrap_or_default();

    let mut keys = Vec::new();
    if let (Some(environment), Some(residency)) = (environment, residency) {
        if let Some(insight_location_id) = insight_location_id {
            keys.push(NodeKey::insight_location(loc_type_id, environment, residency, insight_location_id));
        }
        keys.extend(
            accessible
                .iter()
                .filter(|id| Some(id.as_str()) != insight_location_id)
                .map(|id| NodeKey::insight_location(loc_type_id, environment, residency, id)),
        );
        keys.push(NodeKey::residency(loc_type_id, environment, residency));
    }
    if let Some(environment) = environment {
        keys.push(NodeKey::environment(loc_type_id, environment));
    }
    keys.push(NodeKey::any(loc_type_id));
    keys
}
