use registry::{LocationRegistry, LocationRegistryReader, NodeKey};
use types::{EnvironmentTags, LocationDescriptor};

/// Helper function to create a console descriptor with integration aliases
fn create_magma_integration() -> LocationDescriptor {
    LocationDescriptor::new("cd21:magma", "https://console.magma.product.dev.alertlogic.com")
        .with_environment("integration")
        .with_alias("https://magma.ui-dev.product.dev.alertlogic.com")
        .with_alias("https://magma-*.ui-dev.product.dev.alertlogic.com")
        .with_alias("https://magma-pr-*.ui-dev.product.dev.alertlogic.com")
}

/// Helper function to create a descriptor in a list of environments
fn create_descriptor(loc: &str, uri: &str, environments: &str) -> LocationDescriptor {
    LocationDescriptor::new(loc, uri).with_environments(EnvironmentTags::parse(environments).expect("tags"))
}

#[test]
fn test_location_registry_new() {
    let registry = LocationRegistry::new();

    assert_eq!(registry.node_count(), 0);
    assert!(registry.node_ids().is_empty());
    assert!(registry.match_uri("https://console.alertlogic.com").is_none());
    assert!(registry.lookup(&NodeKey::any("cd21:magma")).is_none());
}

#[test]
fn test_match_uri_prefers_longest_prefix() {
    let loose = create_descriptor("insight:iris", "https://iris.ui-dev.product.dev.alertlogic.com", "integration")
        .with_alias("https://*.ui-dev.product.dev.alertlogic.com");
    let registry = LocationRegistry::from_descriptors(&[loose, create_magma_integration()]);

    let id = registry
        .match_uri("https://magma-pr-12.ui-dev.product.dev.alertlogic.com/#/summary/12345678?aaid=12345678")
        .expect("alias match");
    let node = registry.node(id).expect("node");
    assert_eq!(node.loc_type_id, "cd21:magma");
    assert_eq!(node.uri, "https://console.magma.product.dev.alertlogic.com");

    let id = registry.match_uri("https://something-else.ui-dev.product.dev.alertlogic.com/").expect("loose match");
    assert_eq!(registry.node(id).map(|n| n.loc_type_id.as_str()), Some("insight:iris"));
}

#[test]
fn test_match_uri_skips_external_nodes() {
    let registry = LocationRegistry::from_descriptors(&[
        create_descriptor("global:api", "https://api.global.alertlogic.com", "production|production-staging")
            .with_insight_location("insight-global")
            .external(),
        create_descriptor("insight:api", "https://api.cloudinsight.alertlogic.com", "production")
            .with_residency("US"),
    ]);

    assert!(registry.match_uri("https://api.global.alertlogic.com/aims/v1/2/accounts").is_none());
    assert!(registry.lookup(&NodeKey::environment("global:api", "production-staging")).is_some());
    assert!(registry.match_uri("https://api.cloudinsight.alertlogic.com/aims/v1/2/accounts").is_some());
    assert!(registry.match_uri("https://somewhere.over-the.rainbow.org/#/my-page").is_none());
}

#[test]
fn test_equal_prefix_ties_break_on_template() {
    // same literal prefix length, different templates
    let a = create_descriptor("a:ui", "https://a.example.com", "production").with_alias("https://x-*.example.com/a");
    let b = create_descriptor("b:ui", "https://b.example.com", "production").with_alias("https://x-*.example.com/a/longer");
    for order in [vec![a.clone(), b.clone()], vec![b, a]] {
        let registry = LocationRegistry::from_descriptors(&order);
        let id = registry.match_uri("https://x-1.example.com/a/longer/path").expect("match");
        assert_eq!(registry.node(id).map(|n| n.loc_type_id.as_str()), Some("b:ui"));
    }
}

#[test]
fn test_last_write_wins() {
    let registry = LocationRegistry::from_descriptors(&[
        create_descriptor("gestalt:api", "https://gestalt.cloudinsight.alertlogic.co.uk", "production").with_residency("EMEA"),
        create_descriptor("gestalt:api", "https://gestalt.cloudinsight.alertlogic.com", "production").with_residency("US"),
    ]);

    let env = registry.lookup(&NodeKey::environment("gestalt:api", "production")).expect("env key");
    assert_eq!(registry.node(env).map(|n| n.uri.as_str()), Some("https://gestalt.cloudinsight.alertlogic.com"));

    let emea = registry.lookup(&NodeKey::residency("gestalt:api", "production", "EMEA")).expect("residency key");
    assert_eq!(registry.node(emea).map(|n| n.uri.as_str()), Some("https://gestalt.cloudinsight.alertlogic.co.uk"));
}

#[test]
fn test_node_ids_are_unique_and_reachable() {
    let registry = LocationRegistry::from_descriptors(&[
        create_descriptor("cd14:ui", "https://console.clouddefender.alertlogic.com", "production")
            .with_residency("US")
            .with_insight_location("defender-us-denver"),
        create_descriptor("cd14:ui", "https://console.clouddefender.alertlogic.com", "production")
            .with_residency("US")
            .with_insight_location("defender-us-ashburn"),
    ]);

    // the first node keeps only its insight-location key, the second owns the rest
    let ids = registry.node_ids();
    assert_eq!(ids.len(), 2);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let denver = registry.find_by_insight_location("defender-us-denver").expect("denver node");
    assert_eq!(registry.node(denver).and_then(|n| n.residency.as_deref()), Some("US"));
    assert!(registry.find_by_insight_location("defender-uk-newport").is_none());
}

#[test]
fn test_descriptor_data_passes_through() {
    let descriptor = create_magma_integration().with_data(serde_json::json!({ "mapboxToken": "pk.test" }));
    let registry = LocationRegistry::from_descriptors(&[descriptor]);
    let id = registry.lookup(&NodeKey::any("cd21:magma")).expect("node");
    assert_eq!(registry.node(id).map(|n| n.data["mapboxToken"].clone()), Some(serde_json::json!("pk.test")));
}

#[test]
fn test_matcher_for_reports_alias_templates() {
    let registry = LocationRegistry::from_descriptors(&[create_magma_integration()]);

    let canonical = registry.matcher_for("https://console.magma.product.dev.alertlogic.com/#/x").expect("uri match");
    assert!(!canonical.alias);
    assert_eq!(canonical.pattern.template(), "https://console.magma.product.dev.alertlogic.com");

    let preview = registry.matcher_for("https://magma-pr-7.ui-dev.product.dev.alertlogic.com/").expect("alias match");
    assert!(preview.alias);
    assert_eq!(preview.pattern.template(), "https://magma-pr-*.ui-dev.product.dev.alertlogic.com");
    assert_eq!(Some(preview.node), registry.match_uri("https://magma-pr-7.ui-dev.product.dev.alertlogic.com/"));
}
