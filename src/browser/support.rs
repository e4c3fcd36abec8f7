//! Offline browser support checks.
//!
//! The support matrix mirrors the `browsers.json` listing published by the
//! remote grid service: an array of entries with `browser`, `browser_version`,
//! `os`, `os_version` and, for mobile targets, `device`. A configuration is
//! supported when some entry agrees with every field the configuration sets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browser::display::BrowserConfiguration;
use crate::errors::{CodegenError, Result};

/// One row of the supported browser listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedBrowser {
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub browser_version: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

impl SupportedBrowser {
    fn matches(&self, config: &BrowserConfiguration) -> bool {
        let name_matches = same(self.browser.as_deref(), &config.name)
            || same(self.device.as_deref(), &config.name);

        // Mobile targets are written `browser,device`, so the second field may name a device.
        let version_matches =
            optional_matches(self.browser_version.as_deref(), config.version.as_deref())
                || optional_matches(self.device.as_deref(), config.version.as_deref());

        name_matches
            && version_matches
            && optional_matches(self.os.as_deref(), config.os.as_deref())
            && optional_matches(self.os_version.as_deref(), config.os_version.as_deref())
    }
}

fn same(entry: Option<&str>, wanted: &str) -> bool {
    entry.is_some_and(|value| value.eq_ignore_ascii_case(wanted))
}

fn optional_matches(entry: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => same(entry, wanted),
    }
}

/// The full list of supported browser configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportMatrix {
    pub entries: Vec<SupportedBrowser>,
}

impl SupportMatrix {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source =
            fs::read_to_string(path).map_err(|e| CodegenError::io("read", path, e))?;
        let matrix = Self::from_json(&source).map_err(|e| CodegenError::SupportMatrixDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), entries = matrix.entries.len(), "loaded support matrix");
        Ok(matrix)
    }

    pub fn is_supported(&self, config: &BrowserConfiguration) -> bool {
        self.entries.iter().any(|entry| entry.matches(config))
    }

    /// Checks a raw browser identifier. Identifiers without a name are never supported.
    pub fn supports_id(&self, browser_id: &str) -> bool {
        BrowserConfiguration::parse(browser_id).is_some_and(|config| self.is_supported(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"browser": "chrome", "browser_version": "48.0", "os": "Windows", "os_version": "10", "device": null},
        {"browser": "firefox", "browser_version": "45.0", "os": "OS X", "os_version": "El Capitan"},
        {"browser": "iPhone", "browser_version": null, "os": "ios", "os_version": "9.1", "device": "iPhone 6S Plus"}
    ]"#;

    fn matrix() -> SupportMatrix {
        SupportMatrix::from_json(LISTING).unwrap()
    }

    #[test]
    fn fully_specified_desktop_browser_is_supported() {
        assert!(matrix().supports_id("chrome,48.0,Windows,10"));
    }

    #[test]
    fn unset_fields_act_as_wildcards() {
        assert!(matrix().supports_id("firefox"));
        assert!(matrix().supports_id("CHROME,48.0"));
    }

    #[test]
    fn mismatched_version_is_unsupported() {
        assert!(!matrix().supports_id("chrome,12.0,Windows,10"));
        assert!(!matrix().supports_id("opera"));
    }

    #[test]
    fn device_name_matches_the_browser_name_field() {
        assert!(matrix().supports_id("iPhone 6S Plus"));
        assert!(matrix().supports_id("iPhone"));
        assert!(matrix().supports_id("iPhone,iPhone 6S Plus"));
        assert!(!matrix().supports_id("iPhone,iPhone 4"));
    }

    #[test]
    fn empty_identifier_is_unsupported() {
        assert!(!matrix().supports_id(""));
    }
}
