//! Well-known logical location identifiers.
//!
//! Each id names one application or API independent of where it is deployed.
//! Catalogs may use any string; these are the ids the bundled catalog uses.

/// Global API stack.
pub const GLOBAL_API: &str = "global:api";
/// Cloud Insight API stack.
pub const INSIGHT_API: &str = "insight:api";
/// Endpoints API.
pub const ENDPOINTS_API: &str = "endpoints:api";
/// Gestalt API.
pub const GESTALT_API: &str = "gestalt:api";
/// Integrations API.
pub const INTEGRATIONS_API: &str = "integrations:api";
/// Responder API.
pub const RESPONDER_API: &str = "responder:api";
/// Responder websocket endpoint.
pub const RESPONDER_WS: &str = "responder:ws";
/// YARD API.
pub const YARD_API: &str = "yard:api";
/// Generic MDR API; the service name goes into the domain rather than the path.
pub const MDR_API: &str = "mdr:api";

/// Legacy defender console.
pub const LEGACY_UI: &str = "cd14:ui";
/// Legacy console embedded in another application.
pub const EMBEDDED_LEGACY_UI: &str = "cd14:embedded";
/// Overview console.
pub const OVERVIEW_UI: &str = "cd17:overview";
/// Intelligence console.
pub const INTELLIGENCE_UI: &str = "cd17:intelligence";
/// Configuration console.
pub const CONFIGURATION_UI: &str = "cd17:config";
/// Remediations console.
pub const REMEDIATIONS_UI: &str = "cd17:remediations";
/// Incidents console.
pub const INCIDENTS_UI: &str = "cd17:incidents";
/// Accounts console.
pub const ACCOUNTS_UI: &str = "cd17:accounts";
/// Landscape console.
pub const LANDSCAPE_UI: &str = "cd17:landscape";
/// Endpoints console.
pub const ENDPOINTS_UI: &str = "cd19:endpoints";
/// HUD console.
pub const HUD_UI: &str = "insight:hud";
/// Iris console.
pub const IRIS_UI: &str = "insight:iris";
/// Search console.
pub const SEARCH_UI: &str = "cd17:search";
/// Health console.
pub const HEALTH_UI: &str = "cd17:health";
/// Dashboards console.
pub const DASHBOARDS_UI: &str = "cd19:dashboards";
/// Exposures console.
pub const EXPOSURES_UI: &str = "cd17:exposures";
/// Unified console.
pub const MAGMA_UI: &str = "cd21:magma";
/// Host platform for embedded deployments.
pub const FORTRA_PLATFORM: &str = "fortra:platform";
/// Frontline vulnerability management.
pub const FRONTLINE_VM: &str = "frontline:vm";
/// Static asset origin.
pub const STATIC_CONTENT_UI: &str = "static-content";

/// Support portal.
pub const SUPPORT_PORTAL: &str = "cd14:support";
/// Segment analytics.
pub const SEGMENT: &str = "segment";
/// Auth0 tenant.
pub const AUTH0: &str = "auth0";
/// Google Tag Manager.
pub const GOOGLE_TAG_MANAGER: &str = "gtm";
