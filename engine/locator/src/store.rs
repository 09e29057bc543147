//! The ambient resolution context and its normalization.

use registry::LocationRegistryReader;
use types::{ContextPatch, InsightLocations, ResolutionContext};

/// Holds the ambient [`ResolutionContext`] along with the insight location
/// table used to normalize it.
#[derive(Debug, Clone)]
pub struct ContextStore {
    context: ResolutionContext,
    baseline: ResolutionContext,
    insight_locations: InsightLocations,
}

impl ContextStore {
    /// Store starting at `baseline`, which `reset` restores.
    pub fn new(baseline: ResolutionContext, insight_locations: InsightLocations) -> Self {
        Self { context: baseline.clone(), baseline, insight_locations }
    }

    /// The current context.
    pub fn context(&self) -> &ResolutionContext { &self.context }

    /// The context `reset` restores.
    pub fn baseline(&self) -> &ResolutionContext { &self.baseline }

    /// The insight location table.
    pub fn insight_locations(&self) -> &InsightLocations { &self.insight_locations }

    /// Replace the insight location table and renormalize.
    pub fn set_insight_locations(&mut self, insight_locations: InsightLocations) {
        self.insight_locations = insight_locations;
        self.normalize();
    }

    /// Merge `patch` into the context.
    ///
    /// The insight location and accessible list are merged first. A bound
    /// insight location then lends the residency of the first indexed node
    /// carrying it, which an explicit residency in `patch` still overrides.
    /// Normalization runs last and may override the residency again.
    pub fn merge<R: LocationRegistryReader>(&mut self, mut patch: ContextPatch, registry: &R) {
        std::mem::take(&mut patch.insight_location_id).apply(&mut self.context.insight_location_id);
        std::mem::take(&mut patch.accessible).apply(&mut self.context.accessible);

        if let Some(residency) = self.bound_residency(registry) {
            self.context.residency = Some(residency);
        }

        self.context.merge(patch);
        self.normalize();
    }

    /// Restore the baseline context.
    pub fn reset(&mut self) { self.context = self.baseline.clone(); }

    fn bound_residency<R: LocationRegistryReader>(&self, registry: &R) -> Option<String> {
        let insight_location_id = self.context.insight_location_id.as_deref()?;
        let id = registry.find_by_insight_location(insight_location_id)?;
        registry.node(id)?.residency.clone()
    }

    /// Swap the insight location for an accessible alternative and align the
    /// residency with the chosen location.
    ///
    /// Location specificity outranks a requested residency.
    fn normalize(&mut self) {
        let (Some(insight_location_id), Some(accessible)) =
            (self.context.insight_location_id.as_deref(), self.context.accessible.as_deref())
        else {
            return;
        };
        let Some(entry) = self.insight_locations.get(insight_location_id) else {
            return;
        };

        let selected = entry.select_alternative(accessible).map(str::to_string);
        let residency = selected
            .as_deref()
            .and_then(|id| self.insight_locations.get(id))
            .unwrap_or(entry)
            .residency
            .clone();

        if let Some(selected) = selected {
            self.context.insight_location_id = Some(selected);
        }
        if self.context.residency.as_deref() != Some(residency.as_str()) {
            tracing::debug!(residency = %residency, "residency follows insight location");
            self.context.residency = Some(residency);
        }
    }
}
