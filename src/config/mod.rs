//! Configuration management for `relink.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # Configuration section definitions
//! │   ├── site       # [site]   base-path literals
//! │   ├── assets     # [assets] shared asset references
//! │   └── pages      # [[pages]] target page list
//! ├── error.rs   # ConfigError
//! └── mod.rs     # RelinkConfig (this file)
//! ```
//!
//! An absent config file is not an error: every section has defaults equal
//! to the original hard-coded page and asset sets, so the tool is usable
//! with zero configuration.

pub mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{AssetsSection, Page, SiteSection};

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, looked up in the working directory.
const DEFAULT_CONFIG: &str = "relink.toml";

/// Root configuration structure representing relink.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelinkConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Base-path literals
    pub site: SiteSection,

    /// Shared asset references and the head insertion anchor
    pub assets: AssetsSection,

    /// Ordered target page list
    pub pages: Vec<Page>,
}

impl Default for RelinkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            site: SiteSection::default(),
            assets: AssetsSection::default(),
            pages: section::default_pages(),
        }
    }
}

impl RelinkConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// A missing file at the default location falls back to defaults; a
    /// missing file given explicitly via `-C` is an error.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = &cli.config;
        if !path.exists() {
            if path == Path::new(DEFAULT_CONFIG) {
                return Ok(Self::default());
            }
            return Err(ConfigError::Io(
                path.clone(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ));
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let mut config: Self = toml::from_str(&raw)?;
        config.root = match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.validate()?;
        Ok(config)
    }

    /// Directory the relative page paths are resolved against.
    ///
    /// The CLI `--root` override wins over the config file location. This
    /// replaces the original scripts' process-global working-directory
    /// change with an explicit value.
    pub fn resolve_root(&self, cli_root: Option<&Path>) -> PathBuf {
        cli_root.map_or_else(|| self.root.clone(), Path::to_path_buf)
    }

    /// Validate the loaded configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() {
            return Err(ConfigError::Validation(
                "no target pages configured".to_string(),
            ));
        }
        for page in &self.pages {
            if page.path.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "page path must be relative: `{}`",
                    page.path.display()
                )));
            }
        }
        if self.site.base.is_empty() {
            return Err(ConfigError::Validation("site.base must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_sets() {
        let config = RelinkConfig::default();
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.site.base, "/hospitality-dashboard/");
        assert_eq!(config.site.old_base, "/chaletdashboard/");
        assert_eq!(config.assets.styles.len(), 4);
        assert_eq!(config.assets.scripts.len(), 4);
        assert!(config.assets.style_anchor.contains("font-awesome"));
    }

    #[test]
    fn test_parse_partial_toml_keeps_section_defaults() {
        let config: RelinkConfig = toml::from_str(
            r#"
            [site]
            base = "/other-site/"

            [[pages]]
            path = "home.html"
            stylesheet = "home"
            "#,
        )
        .unwrap();
        assert_eq!(config.site.base, "/other-site/");
        // Unset fields keep their defaults.
        assert_eq!(config.site.old_base, "/chaletdashboard/");
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].stylesheet.as_deref(), Some("home"));
        assert_eq!(config.assets.scripts.len(), 4);
    }

    #[test]
    fn test_validate_rejects_empty_page_list() {
        let config = RelinkConfig {
            pages: Vec::new(),
            ..RelinkConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_absolute_page_path() {
        let mut config = RelinkConfig::default();
        config.pages[0].path = PathBuf::from("/etc/index.html");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_root_prefers_cli_override() {
        let config = RelinkConfig::default();
        assert_eq!(config.resolve_root(None), PathBuf::from("."));
        assert_eq!(
            config.resolve_root(Some(Path::new("/srv/site"))),
            PathBuf::from("/srv/site")
        );
    }
}
