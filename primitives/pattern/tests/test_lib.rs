use pattern::UriPattern;

const TEMPLATES: [&str; 3] = [
    "https://magma-pr-*.ui-dev.product.dev.alertlogic.com",
    "https://*.ui-dev.product.dev.alertlogic.com",
    "https://iris-ui-pr-*.ui-dev.product.dev.alertlogic.com/",
];

fn substitute(template: &str, segment: &str) -> String { template.replacen('*', segment, 1) }

#[test]
fn test_wildcard_accepts_identifier_runs() {
    let segments = ["1", "199", "a", "Z", "feature_branch", "pr-12", "x-y_z-0", "-", "_"];
    for template in TEMPLATES {
        let pattern = UriPattern::compile(template).expect("compile template");
        for segment in segments {
            let url = substitute(template, segment);
            assert!(pattern.matches(&url), "{} should match {}", template, url);
            let with_tail = format!("{}#/summary/2?aaid=2", url);
            assert!(pattern.matches(&with_tail), "{} should match {}", template, with_tail);
        }
    }
}

#[test]
fn test_wildcard_rejects_empty_and_foreign_characters() {
    let segments = ["", ".", "a.b", "a/b", "!", "a b", "%20", "ü"];
    for template in TEMPLATES {
        let pattern = UriPattern::compile(template).expect("compile template");
        for segment in segments {
            let url = substitute(template, segment);
            assert!(!pattern.matches(&url), "{} should not match {}", template, url);
        }
    }
}

#[test]
fn test_literal_template_matches_as_prefix() {
    let pattern = UriPattern::compile("http://localhost:8001").expect("compile template");
    assert!(pattern.matches("http://localhost:8001"));
    assert!(pattern.matches("http://localhost:8001/#/some/arbitrary/path"));
    assert!(pattern.matches("http://localhost:80012"));
    assert!(!pattern.matches("http://localhost:800"));
    assert!(!pattern.matches("https://localhost:8001"));
}

#[test]
fn test_metacharacters_are_literal() {
    let pattern = UriPattern::compile("https://console.alertlogic.com").expect("compile template");
    assert!(!pattern.matches("https://consoleXalertlogic.com"));

    let odd = UriPattern::compile("https://a.example.com/(group)[class]{1}+?|^$").expect("compile template");
    assert!(odd.matches("https://a.example.com/(group)[class]{1}+?|^$/tail"));
    assert!(!odd.matches("https://a.example.com/group"));
}
