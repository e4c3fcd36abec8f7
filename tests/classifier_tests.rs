//! Category classification and browser labels.

use browsercase::browser::{
    browser_key, classify, display_label, is_browser_key, is_browser_tag, BrowserConfiguration,
};

#[test]
fn plain_and_browser_categories_are_partitioned_in_order() {
    let classified = classify([
        "smoke",
        "browser:chrome,48.0,Windows,10",
        "regression",
        "browser:iPhone,iPhone 6S Plus",
    ]);

    assert_eq!(classified.plain, vec!["smoke", "regression"]);
    assert_eq!(
        classified.browser_ids,
        vec!["chrome,48.0,Windows,10", "iPhone,iPhone 6S Plus"]
    );
    assert!(classified.has_browsers());
}

#[test]
fn prefix_is_compared_without_case() {
    assert!(is_browser_tag("BROWSER:chrome"));
    assert!(is_browser_tag("Browser:chrome"));
    assert!(is_browser_tag("browsers"));
    assert!(!is_browser_tag("brow"));
    assert!(!is_browser_tag("web browser:chrome"));
    assert!(!is_browser_tag(""));
}

#[test]
fn marker_removal_is_case_sensitive() {
    // Classified as a browser, but the marker is only removed in its exact form.
    let classified = classify(["Browser:chrome"]);
    assert_eq!(classified.browser_ids, vec!["Browser:chrome"]);
    assert!(classified.plain.is_empty());
}

#[test]
fn duplicates_are_kept() {
    let classified = classify(["browser:chrome", "browser:chrome", "smoke", "smoke"]);
    assert_eq!(classified.browser_ids.len(), 2);
    assert_eq!(classified.plain.len(), 2);
}

#[test]
fn empty_input_yields_empty_partitions() {
    let classified = classify(Vec::<String>::new());
    assert!(classified.plain.is_empty());
    assert!(!classified.has_browsers());
}

#[test]
fn display_label_uses_at_most_four_fields() {
    assert_eq!(display_label("chrome,48.0,Windows,10"), "chrome 48.0 Windows 10");
    assert_eq!(
        display_label("chrome,48.0,Windows,10,extra,fields"),
        "chrome 48.0 Windows 10"
    );
    assert_eq!(display_label("firefox, 45.0"), "firefox 45.0");
    assert_eq!(display_label("chrome,,Windows"), "chrome Windows");
    assert_eq!(display_label(""), "");
}

#[test]
fn configuration_parses_positionally() {
    let config = BrowserConfiguration::parse("chrome,48.0,Windows,10").unwrap();
    assert_eq!(config.name, "chrome");
    assert_eq!(config.version.as_deref(), Some("48.0"));
    assert_eq!(config.os.as_deref(), Some("Windows"));
    assert_eq!(config.os_version.as_deref(), Some("10"));
    assert_eq!(config.label(), display_label("chrome,48.0,Windows,10"));

    let mobile = BrowserConfiguration::parse("iPhone,iPhone 6S Plus").unwrap();
    assert_eq!(mobile.version.as_deref(), Some("iPhone 6S Plus"));
    assert_eq!(mobile.os, None);

    assert_eq!(BrowserConfiguration::parse(",48.0"), None);
}

#[test]
fn browser_keys_carry_the_marker() {
    let key = browser_key("chrome,48.0");
    assert_eq!(key, "browser:chrome,48.0");
    assert!(is_browser_key(&key));
    assert!(!is_browser_key("owner"));
}
