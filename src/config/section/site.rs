//! `[site]` section configuration.
//!
//! Base-path literals for the deployed site.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base = "/hospitality-dashboard/"     # Base href the pages are served under
//! old_base = "/chaletdashboard/"       # Stale base path to replace everywhere
//! ```

use serde::{Deserialize, Serialize};

/// Base-path settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Base href the pages are served under (GitHub Pages project path).
    pub base: String,

    /// Stale base path; every occurrence is replaced with `base`.
    pub old_base: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base: "/hospitality-dashboard/".to_string(),
            old_base: "/chaletdashboard/".to_string(),
        }
    }
}
