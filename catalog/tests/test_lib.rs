use std::fs;

use catalog::{Catalog, CatalogError};
use tempfile::NamedTempFile;
use types::DescriptorError;

#[test]
fn test_load_from_file() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    fs::write(
        &temp_file,
        r#"[
            { "locTypeId": "insight:api", "uri": "https://api.cloudinsight.alertlogic.com", "environment": "production|production-staging", "residency": "US" },
            { "locTypeId": "auth0", "uri": "alertlogic.auth0.com", "environment": ["production"], "data": { "clientID": "abc" } }
        ]"#,
    )
    .expect("Failed to write catalog");

    let catalog = Catalog::load_from_file(&temp_file).expect("Failed to load catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.descriptors()[0].environments.len(), 2);
    assert_eq!(catalog.descriptors()[1].data["clientID"], "abc");

    let result = Catalog::load_from_file("nonexistent_catalog.json");
    match result.expect_err("Expected error for nonexistent file") {
        CatalogError::Io(_) => {}
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_rejects_malformed_tables() {
    match Catalog::from_json_str("{ not json").expect_err("Expected JSON error") {
        CatalogError::Json(_) => {}
        other => panic!("Expected Json error, got {:?}", other),
    }

    // blank environment tag is a deserialization failure
    let result = Catalog::from_json_str(r#"[{ "locTypeId": "segment", "uri": "https://segment.io", "environment": "production|" }]"#);
    assert!(matches!(result, Err(CatalogError::Json(_))));

    let result = Catalog::from_json_str(
        r#"[
            { "locTypeId": "segment", "uri": "https://segment.io" },
            { "locTypeId": "segment", "uri": "" }
        ]"#,
    );
    match result.expect_err("Expected validation error") {
        CatalogError::Invalid { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, DescriptorError::MissingUri("segment".to_string()));
        }
        other => panic!("Expected Invalid error, got {:?}", other),
    }
}

#[test]
fn test_extend_reports_absolute_index() {
    let mut catalog = Catalog::from_json_str(r#"[{ "locTypeId": "segment", "uri": "https://segment.io" }]"#)
        .expect("catalog");
    let result = catalog.extend(vec![types::LocationDescriptor::new("", "https://x.example")]);
    match result.expect_err("Expected validation error") {
        CatalogError::Invalid { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected Invalid error, got {:?}", other),
    }
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_builtin_catalog_covers_known_locations() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let ids: Vec<&str> = catalog.descriptors().iter().map(|d| d.loc_type_id.as_str()).collect();
    for expected in ["cd21:magma", "cd17:overview", "cd17:incidents", "insight:api", "cd14:ui", "auth0", "insight:iris"] {
        assert!(ids.contains(&expected), "missing {}", expected);
    }
    assert!(catalog.descriptors().iter().all(|d| d.validate().is_ok()));
}
