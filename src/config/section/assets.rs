//! `[assets]` section configuration.
//!
//! Extracted asset files referenced from every page, and the head anchor
//! the stylesheet block is inserted after.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! styles = ["css/variables.css", "css/global.css"]
//! scripts = ["js/utils.js", "lib/supabase-client.js"]
//! style_anchor = '<link rel="stylesheet" href="https://cdn.example/all.min.css">'
//! ```

use serde::{Deserialize, Serialize};

/// Shared stylesheet/script references inserted into every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Stylesheets linked in `<head>`, in order. The page-specific
    /// stylesheet is appended after these.
    pub styles: Vec<String>,

    /// Scripts referenced before `</body>`, in order.
    pub scripts: Vec<String>,

    /// Head anchor line: the stylesheet block is inserted immediately after
    /// the first occurrence of this text.
    pub style_anchor: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            styles: vec![
                "css/variables.css".to_string(),
                "css/global.css".to_string(),
                "css/responsive.css".to_string(),
                "css/profile.css".to_string(),
            ],
            scripts: vec![
                "js/utils.js".to_string(),
                "js/components.js".to_string(),
                "js/components/profile.js".to_string(),
                "lib/supabase-client.js".to_string(),
            ],
            style_anchor: concat!(
                "<link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com",
                "/ajax/libs/font-awesome/6.5.1/css/all.min.css\">"
            )
            .to_string(),
        }
    }
}
