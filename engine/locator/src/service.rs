//! The locator service and its builder.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use catalog::Catalog;
use config::Config;
use registry::{LocationRegistry, LocationRegistryReader, NodeId};
use types::{
    BrowsingLocation, ContextPatch, InsightLocations, LocationDescriptor, LocationNode,
    ResolutionContext, DEFAULT_ENVIRONMENT, DEFAULT_RESIDENCY,
};

use crate::acting::ActingUrl;
use crate::store::ContextStore;

/// Resolves logical location ids against an indexed registry and an ambient
/// context.
///
/// Constructed once at the application root and passed to collaborators.
/// See [`crate::shared`] for a process-wide instance.
#[derive(Debug)]
pub struct LocatorService {
    pub(crate) registry: LocationRegistry,
    pub(crate) store: ContextStore,
    /// Ambient lookups by location id; flushed by every mutator.
    pub(crate) cache: RefCell<HashMap<String, NodeId>>,
    pub(crate) acting_url: Option<String>,
    pub(crate) actor: Option<NodeId>,
    pub(crate) browsing: Option<BrowsingLocation>,
    pub(crate) config: Config,
}

impl Default for LocatorService {
    fn default() -> Self { Self::new(Config::default()) }
}

impl LocatorService {
    /// Empty service at the configured baseline context.
    pub fn new(config: Config) -> Self {
        Self {
            registry: LocationRegistry::new(),
            store: ContextStore::new(config.context.baseline(), InsightLocations::builtin()),
            cache: RefCell::new(HashMap::new()),
            acting_url: None,
            actor: None,
            browsing: None,
            config,
        }
    }

    /// Create a new builder for LocatorService
    pub fn builder() -> LocatorServiceBuilder { LocatorServiceBuilder::default() }

    /// Service over the catalog named by `config`, or the built-in catalog.
    ///
    /// A relative catalog path resolves against `base_dir`, normally the
    /// directory holding the configuration file.
    pub fn from_config(config: Config, base_dir: &Path) -> crate::Result<Self> {
        let catalog = match config.catalog.resolve_path(base_dir) {
            Some(path) => Catalog::load_from_file(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Self::builder().config(config).locations(catalog.into_descriptors()).build())
    }

    /// Load the configuration file at `path` and build a service from it.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let config = Config::from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config(config, base_dir)
    }

    /// Replace every indexed location.
    ///
    /// A bound acting URL is bound again, since its node may have moved.
    pub fn set_locations(&mut self, descriptors: &[LocationDescriptor]) {
        self.registry.index(descriptors);
        self.flush();
        self.actor = None;
        self.rebind();
    }

    /// Merge `patch` into the ambient context.
    pub fn set_context(&mut self, patch: impl Into<ContextPatch>) {
        self.store.merge(patch.into(), &self.registry);
        self.flush();
        tracing::debug!(context = ?self.store.context(), "context updated");
    }

    /// The ambient context.
    pub fn context(&self) -> &ResolutionContext { self.store.context() }

    /// Replace the insight location table used for normalization.
    pub fn set_insight_locations(&mut self, insight_locations: InsightLocations) {
        self.store.set_insight_locations(insight_locations);
        self.flush();
    }

    /// Supply the page the host application is showing.
    ///
    /// Used by [`ActingUrl::Current`] and as the fallback of `resolve_url`.
    pub fn set_browsing_location(&mut self, browsing: Option<BrowsingLocation>) {
        self.browsing = browsing;
    }

    /// Ambient environment, `"production"` when unset.
    pub fn current_environment(&self) -> &str {
        self.context().environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Ambient residency, `"US"` when unset.
    pub fn current_residency(&self) -> &str {
        self.context().residency.as_deref().unwrap_or(DEFAULT_RESIDENCY)
    }

    /// Path of the acting application beneath its base URL.
    pub fn current_path(&self) -> &str { &self.context().path }

    /// The bound acting URL.
    pub fn acting_url(&self) -> Option<&str> { self.acting_url.as_deref() }

    /// The node the acting URL resolved to.
    pub fn acting_node(&self) -> Option<&LocationNode> {
        self.actor.and_then(|id| self.registry.node(id))
    }

    /// Every indexed node satisfying `predicate`, each once.
    pub fn search<F>(&self, predicate: F) -> Vec<&LocationNode>
    where
        F: Fn(&LocationNode) -> bool,
    {
        self.nodes().filter(|node| predicate(node)).collect()
    }

    /// The first indexed node satisfying `predicate`.
    pub fn find_one<F>(&self, predicate: F) -> Option<&LocationNode>
    where
        F: Fn(&LocationNode) -> bool,
    {
        self.nodes().find(|node| predicate(node))
    }

    /// Restore the baseline context and drop the acting URL binding.
    ///
    /// Indexed locations, including promoted or remapped URIs, are kept.
    pub fn reset(&mut self) {
        self.store.reset();
        self.flush();
        self.acting_url = None;
        self.actor = None;
        tracing::debug!("locator reset");
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &LocationRegistry { &self.registry }

    /// The configuration the service was built with.
    pub fn config(&self) -> &Config { &self.config }

    fn nodes(&self) -> impl Iterator<Item = &LocationNode> {
        self.registry.node_ids().into_iter().filter_map(|id| self.registry.node(id))
    }

    pub(crate) fn flush(&self) { self.cache.borrow_mut().clear(); }

    /// Bind the current acting URL again, if there is one.
    pub(crate) fn rebind(&mut self) {
        if let Some(url) = self.acting_url.clone() {
            self.set_acting_url(ActingUrl::Explicit(url), true);
        }
    }
}

/// Builder for LocatorService
///
/// Applies the context first, then indexes locations, then binds the acting URL.
#[derive(Debug, Default)]
pub struct LocatorServiceBuilder {
    config: Option<Config>,
    locations: Vec<LocationDescriptor>,
    context: Option<ContextPatch>,
    acting_url: ActingUrl,
    insight_locations: Option<InsightLocations>,
    browsing: Option<BrowsingLocation>,
}

impl LocatorServiceBuilder {
    /// Set the configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the locations to index
    pub fn locations(mut self, locations: Vec<LocationDescriptor>) -> Self {
        self.locations = locations;
        self
    }

    /// Set the initial context patch
    pub fn context(mut self, context: impl Into<ContextPatch>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the acting URL to bind once built
    pub fn acting_url(mut self, acting_url: impl Into<ActingUrl>) -> Self {
        self.acting_url = acting_url.into();
        self
    }

    /// Replace the insight location table
    pub fn insight_locations(mut self, insight_locations: InsightLocations) -> Self {
        self.insight_locations = Some(insight_locations);
        self
    }

    /// Set the browsing location
    pub fn browsing(mut self, browsing: BrowsingLocation) -> Self {
        self.browsing = Some(browsing);
        self
    }

    /// Build the LocatorService
    pub fn build(self) -> LocatorService {
        let mut service = LocatorService::new(self.config.unwrap_or_default());
        if let Some(insight_locations) = self.insight_locations {
            service.set_insight_locations(insight_locations);
        }
        service.set_browsing_location(self.browsing);
        if let Some(context) = self.context {
            service.set_context(context);
        }
        service.set_locations(&self.locations);
        service.set_acting_url(self.acting_url, false);
        service
    }
}
