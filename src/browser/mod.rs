//! Browser targeting: tag classification, display labels and support checks.

pub mod display;
pub mod support;
pub mod tags;

pub use display::{display_label, BrowserConfiguration};
pub use support::{SupportMatrix, SupportedBrowser};
pub use tags::{
    browser_key, classify, is_browser_key, is_browser_tag, strip_browser_marker,
    ClassifiedCategories, BROWSER_TAG_MARKER,
};
