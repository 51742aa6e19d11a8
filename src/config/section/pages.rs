//! `[[pages]]` section configuration.
//!
//! Ordered list of target pages. Each page carries its relative path and an
//! optional page-specific stylesheet name.
//!
//! # Example
//!
//! ```toml
//! [[pages]]
//! path = "dashboard.html"
//! stylesheet = "dashboard"
//!
//! [[pages]]
//! path = "404.html"          # No page-specific stylesheet
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One target page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Path relative to the project root.
    pub path: PathBuf,

    /// Page-specific stylesheet name; `css/{stylesheet}.css` is appended
    /// to the shared stylesheet block.
    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl Page {
    pub fn new(path: &str, stylesheet: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            stylesheet: Some(stylesheet.to_string()),
        }
    }
}

/// Default target set: the six dashboard pages, each with a stylesheet
/// named after the page.
pub fn default_pages() -> Vec<Page> {
    ["dashboard", "units", "aiagent", "contacts", "website", "index"]
        .iter()
        .map(|name| Page::new(&format!("{name}.html"), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_are_ordered_and_named() {
        let pages = default_pages();
        assert_eq!(pages.len(), 6);
        assert_eq!(pages[0].path, PathBuf::from("dashboard.html"));
        assert_eq!(pages[0].stylesheet.as_deref(), Some("dashboard"));
        assert_eq!(pages[5].path, PathBuf::from("index.html"));
    }
}
