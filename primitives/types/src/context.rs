//! Ambient resolution context and partial updates to it.
//!
//! The context is merged, never replaced: a [`ContextPatch`] names, per field,
//! whether to keep the prior value, set a new one, or clear it. `path` is the
//! one exception and is always replaced.

use serde::{Deserialize, Serialize};

/// Tri-state partial update of a single optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the current value untouched.
    #[default]
    Keep,
    /// Replace the current value.
    Set(T),
    /// Explicitly unset the current value.
    Clear,
}

impl<T> Patch<T> {
    /// Apply this patch to `slot`.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Set(value) => *slot = Some(value),
            Patch::Clear => *slot = None,
        }
    }

    /// Whether the patch leaves the field alone.
    pub fn is_keep(&self) -> bool { matches!(self, Patch::Keep) }

    /// The value being set, if any.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets, `None` keeps.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Keep,
        }
    }
}

/// Ambient state used to disambiguate lookups.
///
/// Also used as a per-call override, in which case absent fields fall back to
/// the ambient value and `path` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
    /// Deployment environment, e.g. `production` or `integration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Data residency zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency: Option<String>,
    /// Insight location (datacenter) of the current account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_location_id: Option<String>,
    /// Path of the acting application beneath its base URL.
    #[serde(default)]
    pub path: String,
    /// Insight locations reachable by the current principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible: Option<Vec<String>>,
}

impl ResolutionContext {
    /// Context with only `environment` and `residency` set.
    pub fn baseline(environment: impl Into<String>, residency: impl Into<String>) -> Self {
        Self {
            environment: Some(environment.into()),
            residency: Some(residency.into()),
            ..Self::default()
        }
    }

    /// Override naming just an environment.
    pub fn for_environment(environment: impl Into<String>) -> Self {
        Self { environment: Some(environment.into()), ..Self::default() }
    }

    /// Set the residency.
    pub fn with_residency(mut self, residency: impl Into<String>) -> Self {
        self.residency = Some(residency.into());
        self
    }

    /// Set the insight location.
    pub fn with_insight_location(mut self, insight_location_id: impl Into<String>) -> Self {
        self.insight_location_id = Some(insight_location_id.into());
        self
    }

    /// Set the accessible insight locations.
    pub fn with_accessible<I, S>(mut self, accessible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessible = Some(accessible.into_iter().map(Into::into).collect());
        self
    }

    /// Apply `patch` following the keep/set/clear rules; `path` is always replaced.
    pub fn merge(&mut self, patch: ContextPatch) {
        patch.environment.apply(&mut self.environment);
        patch.residency.apply(&mut self.residency);
        patch.insight_location_id.apply(&mut self.insight_location_id);
        patch.accessible.apply(&mut self.accessible);
        self.path = patch.path.unwrap_or_default();
    }
}

/// Partial update of a [`ResolutionContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextPatch {
    /// Environment update.
    pub environment: Patch<String>,
    /// Residency update.
    pub residency: Patch<String>,
    /// Insight location update.
    pub insight_location_id: Patch<String>,
    /// Accessible locations update.
    pub accessible: Patch<Vec<String>>,
    /// New path; `None` resets to empty.
    pub path: Option<String>,
}

impl ContextPatch {
    /// Patch that changes nothing except resetting `path`.
    pub fn new() -> Self { Self::default() }

    /// Set the environment.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Patch::Set(environment.into());
        self
    }

    /// Set the residency.
    pub fn residency(mut self, residency: impl Into<String>) -> Self {
        self.residency = Patch::Set(residency.into());
        self
    }

    /// Set the insight location.
    pub fn insight_location(mut self, insight_location_id: impl Into<String>) -> Self {
        self.insight_location_id = Patch::Set(insight_location_id.into());
        self
    }

    /// Set the accessible insight locations.
    pub fn accessible<I, S>(mut self, accessible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessible = Patch::Set(accessible.into_iter().map(Into::into).collect());
        self
    }

    /// Set the path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<&ResolutionContext> for ContextPatch {
    /// Present fields set; absent fields and an empty accessible list keep.
    fn from(context: &ResolutionContext) -> Self {
        Self {
            environment: context.environment.clone().into(),
            residency: context.residency.clone().into(),
            insight_location_id: context.insight_location_id.clone().into(),
            accessible: context.accessible.clone().filter(|a| !a.is_empty()).into(),
            path: Some(context.path.clone()).filter(|p| !p.is_empty()),
        }
    }
}

impl From<ResolutionContext> for ContextPatch {
    fn from(context: ResolutionContext) -> Self { Self::from(&context) }
}
