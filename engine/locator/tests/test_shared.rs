use locator::{shared, LocatorService};
use types::{ContextPatch, LocationDescriptor};

#[test]
fn test_shared_lifecycle() {
    assert!(!shared::is_installed());
    assert_eq!(shared::with(|locator| locator.current_environment().to_string()), None);

    let service = LocatorService::builder()
        .locations(vec![LocationDescriptor::new("insight:api", "https://api.cloudinsight.alertlogic.com")])
        .build();
    assert!(shared::install(service).is_none());
    assert!(shared::is_installed());

    assert_eq!(
        shared::with(|locator| locator.resolve_url("insight:api", Some("/aims"), None)).as_deref(),
        Some("https://api.cloudinsight.alertlogic.com/aims")
    );

    shared::with_mut(|locator| locator.set_context(ContextPatch::new().environment("integration")));
    assert_eq!(
        shared::with(|locator| locator.current_environment().to_string()).as_deref(),
        Some("integration")
    );

    let replaced = shared::install(LocatorService::default()).expect("previous service");
    assert_eq!(replaced.current_environment(), "integration");

    let removed = shared::uninstall().expect("installed service");
    assert_eq!(removed.current_environment(), "production");
    assert!(!shared::is_installed());
    assert!(shared::uninstall().is_none());
}
