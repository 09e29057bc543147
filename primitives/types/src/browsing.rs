//! The page the host application is currently displaying.
//!
//! The locator never probes its runtime for this; hosts hand it over
//! explicitly when they have one.

use serde::{Deserialize, Serialize};

/// Origin and path of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsingLocation {
    /// Scheme, host and port, e.g. `https://console.alertlogic.com`.
    pub origin: String,
    /// Path component, e.g. `/alxdr/`.
    #[serde(default)]
    pub pathname: String,
}

impl BrowsingLocation {
    /// Location from an origin and a path.
    pub fn new(origin: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self { origin: origin.into(), pathname: pathname.into() }
    }

    /// Origin plus pathname, omitting a bare `/` pathname.
    pub fn href(&self) -> String {
        if self.pathname.len() > 1 {
            format!("{}{}", self.origin, self.pathname)
        } else {
            self.origin.clone()
        }
    }
}
