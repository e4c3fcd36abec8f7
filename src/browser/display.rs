//! User-facing browser labels and structured browser configurations.
//!
//! A browser identifier is `name[,version[,os[,osVersion]]]`. Formatting is
//! total: surplus fields are ignored and missing ones simply shorten the label.

use serde::{Deserialize, Serialize};

const MAX_BROWSER_FIELDS: usize = 4;

/// Turns a raw browser identifier into the label used for categories and test names.
///
/// ```rust
/// use browsercase::browser::display_label;
/// assert_eq!(display_label("chrome,48.0,Windows,10"), "chrome 48.0 Windows 10");
/// assert_eq!(display_label("iPhone,iPhone 6S Plus"), "iPhone iPhone 6S Plus");
/// assert_eq!(display_label("chrome"), "chrome");
/// ```
pub fn display_label(browser_id: &str) -> String {
    fields(browser_id).collect::<Vec<_>>().join(" ")
}

fn fields(browser_id: &str) -> impl Iterator<Item = &str> {
    browser_id
        .split(',')
        .take(MAX_BROWSER_FIELDS)
        .map(str::trim)
        .filter(|field| !field.is_empty())
}

/// The structured form of a browser identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserConfiguration {
    pub name: String,
    pub version: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
}

impl BrowserConfiguration {
    /// Parses an identifier positionally. Returns `None` when no name is present.
    pub fn parse(browser_id: &str) -> Option<Self> {
        let mut parts = browser_id
            .split(',')
            .take(MAX_BROWSER_FIELDS)
            .map(str::trim)
            .map(|field| (!field.is_empty()).then(|| field.to_string()));

        let name = parts.next().flatten()?;
        Some(BrowserConfiguration {
            name,
            version: parts.next().flatten(),
            os: parts.next().flatten(),
            os_version: parts.next().flatten(),
        })
    }

    pub fn label(&self) -> String {
        [
            Some(self.name.as_str()),
            self.version.as_deref(),
            self.os.as_deref(),
            self.os_version.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surplus_fields_are_ignored() {
        assert_eq!(
            display_label("chrome,48.0,Windows,10,extra,more"),
            "chrome 48.0 Windows 10"
        );
    }

    #[test]
    fn blank_fields_are_dropped() {
        assert_eq!(display_label("chrome,,Windows"), "chrome Windows");
        assert_eq!(display_label(" firefox , 45.0 "), "firefox 45.0");
    }

    #[test]
    fn parse_keeps_positions_of_blank_fields() {
        let config = BrowserConfiguration::parse("chrome,,Windows,10").unwrap();
        assert_eq!(config.name, "chrome");
        assert_eq!(config.version, None);
        assert_eq!(config.os.as_deref(), Some("Windows"));
        assert_eq!(config.os_version.as_deref(), Some("10"));
        assert_eq!(config.label(), display_label("chrome,,Windows,10"));
    }

    #[test]
    fn parse_requires_a_name() {
        assert!(BrowserConfiguration::parse("").is_none());
        assert!(BrowserConfiguration::parse(",48.0").is_none());
    }
}
