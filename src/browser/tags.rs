//! Browser tag classification.
//!
//! Scenario categories are free-form strings. A category whose first seven
//! characters spell `browser` (in any case) targets a browser configuration;
//! everything else is a plain category. The browser identifier is whatever is
//! left after removing the exact-case `browser:` marker. Identifiers are never
//! split on commas here: `browser:iPhone,iPhone 6S Plus` is one identifier.

use serde::Serialize;

/// Marker prefix for browser tags and for browser metadata keys.
pub const BROWSER_TAG_MARKER: &str = "browser:";

const BROWSER_PREFIX: &str = "browser";

/// Result of splitting a category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedCategories {
    /// Categories that do not target a browser, in input order.
    pub plain: Vec<String>,
    /// Browser identifiers with the marker stripped, in input order.
    pub browser_ids: Vec<String>,
}

impl ClassifiedCategories {
    pub fn has_browsers(&self) -> bool {
        !self.browser_ids.is_empty()
    }
}

/// Returns true when `category` starts with `browser`, compared case-insensitively.
///
/// Only the literal prefix is compared; the rest of the string is not inspected.
pub fn is_browser_tag(category: &str) -> bool {
    category
        .get(..BROWSER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BROWSER_PREFIX))
}

/// Strips every exact-case `browser:` marker from a browser tag.
///
/// ```rust
/// use browsercase::browser::strip_browser_marker;
/// assert_eq!(strip_browser_marker("browser:chrome,48.0"), "chrome,48.0");
/// // A differently-cased marker is left alone.
/// assert_eq!(strip_browser_marker("Browser:chrome"), "Browser:chrome");
/// ```
pub fn strip_browser_marker(category: &str) -> String {
    category.replace(BROWSER_TAG_MARKER, "")
}

/// Partitions `categories` into plain categories and browser identifiers.
///
/// Order is preserved on both sides and nothing is de-duplicated.
///
/// ```rust
/// use browsercase::browser::classify;
/// let classified = classify(["smoke", "browser:chrome", "browser:iPhone,iPhone 6S Plus"]);
/// assert_eq!(classified.plain, vec!["smoke"]);
/// assert_eq!(classified.browser_ids, vec!["chrome", "iPhone,iPhone 6S Plus"]);
/// ```
pub fn classify<I, S>(categories: I) -> ClassifiedCategories
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classified = ClassifiedCategories::default();
    for category in categories {
        let category = category.as_ref();
        if is_browser_tag(category) {
            classified.browser_ids.push(strip_browser_marker(category));
        } else {
            classified.plain.push(category.to_string());
        }
    }
    classified
}

/// Metadata key under which a method records a browser it targets.
pub fn browser_key(browser_id: &str) -> String {
    format!("{BROWSER_TAG_MARKER}{browser_id}")
}

/// Whether a metadata key names a browser. Uses the same prefix rule as tags.
pub fn is_browser_key(key: &str) -> bool {
    is_browser_tag(key)
}
