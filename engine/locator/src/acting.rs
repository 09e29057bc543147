//! Binding the URL the application runs at, and runtime remapping.

use std::sync::OnceLock;

use regex::Regex;
use registry::{LocationRegistryReader, NodeId};
use types::{ContextPatch, Patch};

use crate::LocatorService;

/// The URL the application is acting at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActingUrl {
    /// No acting URL; clears any binding.
    #[default]
    Unset,
    /// The page the host is showing, or the configured fallback origin.
    Current,
    /// A specific URL.
    Explicit(String),
}

impl From<&str> for ActingUrl {
    fn from(url: &str) -> Self { ActingUrl::Explicit(url.to_string()) }
}

impl From<String> for ActingUrl {
    fn from(url: String) -> Self { ActingUrl::Explicit(url) }
}

impl From<Option<String>> for ActingUrl {
    fn from(url: Option<String>) -> Self { url.map_or(ActingUrl::Unset, ActingUrl::Explicit) }
}

fn base_pattern() -> Option<&'static Regex> {
    static BASE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    BASE.get_or_init(|| Regex::new(r"^(https?://[a-zA-Z0-9_\-.:]+)")).as_ref().ok()
}

fn path_pattern() -> Option<&'static Regex> {
    static PATH: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATH.get_or_init(|| Regex::new(r"https?://[^/]+/([^?#]*)")).as_ref().ok()
}

/// Scheme and host of `url`.
///
/// Strings without a recognizable scheme and host lose their query,
/// fragment and trailing slash instead.
pub fn base_url(url: &str) -> String {
    if let Some(base) = base_pattern().and_then(|re| re.captures(url)).and_then(|c| c.get(1)) {
        return base.as_str().to_string();
    }
    let end = url.find(['#', '?']).unwrap_or(url.len());
    let stripped = &url[..end];
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

/// Path of `url` after its host, without query, fragment or trailing slash.
///
/// `None` when `url` has no path at all.
pub fn url_path(url: &str) -> Option<String> {
    let captures = path_pattern()?.captures(url)?;
    let path = captures.get(1).map_or("", |m| m.as_str());
    Some(path.strip_suffix('/').unwrap_or(path).to_string())
}

impl LocatorService {
    /// Bind the application to `acting_url`.
    ///
    /// A URL matching an indexed node promotes that node to the URL's base and
    /// path, and the context adopts its environment and residency. Any other
    /// URL is classified by what follows its scheme, resets the residency to
    /// the baseline and clears the insight location and accessible list.
    ///
    /// Binding the same URL twice is a no-op unless `force_refresh` is set.
    pub fn set_acting_url(&mut self, acting_url: impl Into<ActingUrl>, force_refresh: bool) {
        let url = match acting_url.into() {
            ActingUrl::Unset => {
                self.acting_url = None;
                self.actor = None;
                return;
            }
            ActingUrl::Current => self.browsing_href(),
            ActingUrl::Explicit(url) => url,
        };
        if !force_refresh && self.acting_url.as_deref() == Some(url.as_str()) {
            return;
        }

        let base = base_url(&url);
        let path = url_path(&url);

        let matched = self.registry.matcher_for(&url).map(|m| (m.node, m.alias));
        let patch = match matched {
            Some((id, alias)) => {
                let uri = match path.as_deref() {
                    Some(path) if !path.is_empty() => format!("{}/{}", base, path),
                    _ => base,
                };
                self.actor = Some(id);
                if let Some(node) = self.registry.promote(id, uri) {
                    tracing::debug!(url = %url, loc_type_id = %node.loc_type_id, uri = %node.uri, alias, "acting url recognized");
                }
                self.actor_patch(id, path)
            }
            None => {
                let rest = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
                let environment = self.config.acting.infer_environment(rest);
                tracing::debug!(url = %url, environment, "acting url not recognized");
                self.actor = None;
                ContextPatch {
                    environment: Patch::Set(environment.to_string()),
                    residency: Patch::Set(self.config.context.residency.clone()),
                    insight_location_id: Patch::Clear,
                    accessible: Patch::Clear,
                    path,
                }
            }
        };

        self.acting_url = Some(url);
        self.set_context(patch);
    }

    /// Point every node of `loc_type_id` at `uri`.
    ///
    /// `environment` and `residency` are rewritten only when given. When the
    /// acting node is among those rewritten, the context follows its new
    /// environment and residency; the node keeps the remapped URI.
    pub fn remap_location_to_uri(
        &mut self,
        loc_type_id: &str,
        uri: &str,
        environment: Option<&str>,
        residency: Option<&str>,
    ) {
        self.registry.remap(loc_type_id, uri, environment, residency);
        self.flush();
        self.refresh_acting_context();
    }

    /// Re-derive the context from the acting node as it is now.
    ///
    /// Unlike binding, this never promotes the node.
    pub(crate) fn refresh_acting_context(&mut self) {
        if let Some(id) = self.actor {
            let path = Some(self.store.context().path.clone());
            let patch = self.actor_patch(id, path);
            self.set_context(patch);
        }
    }

    /// Context update adopting the environment and residency of node `id`.
    ///
    /// A node without a residency keeps the ambient one.
    fn actor_patch(&self, id: NodeId, path: Option<String>) -> ContextPatch {
        match self.registry.node(id) {
            Some(node) => ContextPatch {
                environment: Patch::Set(node.environment.clone()),
                residency: node.residency.clone().or_else(|| self.store.context().residency.clone()).into(),
                path,
                ..ContextPatch::default()
            },
            None => ContextPatch { path, ..ContextPatch::default() },
        }
    }
}
