//! Descriptor families for console applications.
//!
//! Every console is deployed the same way: a production host, a staging
//! bucket with a UK twin, an integration host with PR preview aliases, and a
//! local dev server.

use serde_json::json;
use types::LocationDescriptor;

const UI_DEV_DOMAIN: &str = "ui-dev.product.dev.alertlogic.com";

/// Descriptors for the unified console, including its embedded deployments.
pub fn magma_node(loc_type_id: &str, app_code: &str, dev_port: u16) -> Vec<LocationDescriptor> {
    vec![
        LocationDescriptor::new(loc_type_id, "https://console.alertlogic.com")
            .with_environment("production")
            .with_residency("US"),
        LocationDescriptor::new(
            loc_type_id,
            format!("https://{}-production-staging-us.{}", app_code, UI_DEV_DOMAIN),
        )
        .with_environment("production-staging")
        .with_residency("US")
        .with_alias(format!("https://{}-production-staging-uk.{}", app_code, UI_DEV_DOMAIN)),
        integration_node(loc_type_id, app_code)
            .with_alias(format!("https://{}.{}", app_code, UI_DEV_DOMAIN))
            .with_alias(format!("https://{}-*.{}", app_code, UI_DEV_DOMAIN))
            .with_alias(format!("https://{}-pr-*.{}", app_code, UI_DEV_DOMAIN)),
        LocationDescriptor::new(loc_type_id, format!("http://localhost:{}", dev_port))
            .with_environment("development"),
        LocationDescriptor::new(loc_type_id, "https://local.foundation.foundation-dev.cloudops.fortradev.com:8888")
            .with_environment("embedded-development")
            .with_alias("https://foundation.foundation-dev.cloudops.fortradev.com")
            .with_data(json!({ "assetBasePath": "http://localhost:8916" })),
        LocationDescriptor::new(loc_type_id, "https://foundation.foundation-stage.cloudops.fortradev.com")
            .with_environment("embedded-integration")
            .with_data(json!({ "assetBasePath": format!("https://{}-fortra-alxdr-v3.{}", app_code, UI_DEV_DOMAIN) })),
    ]
}

/// Descriptors for a standalone console served from `console.{app_code}.alertlogic.com`.
pub fn o3_node(loc_type_id: &str, app_code: &str, dev_port: u16) -> Vec<LocationDescriptor> {
    vec![
        LocationDescriptor::new(loc_type_id, format!("https://console.{}.alertlogic.com", app_code))
            .with_environment("production")
            .with_residency("US")
            .with_alias(format!("https://console.{}.alertlogic.co.uk", app_code)),
        LocationDescriptor::new(
            loc_type_id,
            format!("https://{}-production-staging-us.{}", app_code, UI_DEV_DOMAIN),
        )
        .with_environment("production-staging")
        .with_residency("US")
        .with_alias(format!("https://{}-production-staging-uk.{}", app_code, UI_DEV_DOMAIN)),
        integration_node(loc_type_id, app_code),
        LocationDescriptor::new(loc_type_id, format!("http://localhost:{}", dev_port))
            .with_environment("development"),
    ]
}

fn integration_node(loc_type_id: &str, app_code: &str) -> LocationDescriptor {
    LocationDescriptor::new(loc_type_id, format!("https://console.{}.product.dev.alertlogic.com", app_code))
        .with_environment("integration")
}
