//! Configuration management for `taxa.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `debug`        | Verbose diagnostics (never changes output)       |
//! | `[build]`      | Documents root, corpus dir, output dir, URLs     |
//! | `[exclude]`    | Directory / file / glob rules to skip documents  |
//! | `[include]`    | Whitelist of directories                         |
//! | `[page]`       | Placeholders for missing document fields         |
//! | `[archive]`    | Yearly archive page                              |
//! | `[posts]`      | List of every post with its summary (opt-in)     |
//! | `[categories]` | Category index and pages                         |
//! | `[tags]`       | Tag index and per-tag pages                      |
//!
//! # Example
//!
//! ```toml
//! debug = true
//!
//! [build]
//! content = "docs"
//! posts = "blog/posts"
//!
//! [exclude]
//! dirs = ["blog/drafts"]
//! patterns = ["*.wip.md"]
//!
//! [tags]
//! catch_all = "untagged"
//! ```

mod build;
pub mod defaults;
mod error;
mod filter;
mod page;
mod taxonomy;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use filter::{ExcludeConfig, IncludeConfig};
pub use page::{ArchiveConfig, PageConfig, PostsConfig};
pub use taxonomy::{TaxonomyConfig, TaxonomyKind};

use crate::{cli::Cli, utils::filter::PathFilter};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing taxa.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Log every filter decision and index update
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub debug: bool,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,

    #[serde(default)]
    pub include: IncludeConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub posts: PostsConfig,

    #[serde(
        default = "defaults::taxonomy::categories",
        deserialize_with = "TaxonomyConfig::categories"
    )]
    #[educe(Default = defaults::taxonomy::categories())]
    pub categories: TaxonomyConfig,

    #[serde(
        default = "defaults::taxonomy::tags",
        deserialize_with = "TaxonomyConfig::tags"
    )]
    #[educe(Default = defaults::taxonomy::tags())]
    pub tags: TaxonomyConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Settings of one taxonomy.
    pub fn taxonomy(&self, kind: TaxonomyKind) -> &TaxonomyConfig {
        match kind {
            TaxonomyKind::Categories => &self.categories,
            TaxonomyKind::Tags => &self.tags,
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Update configuration with CLI arguments and resolve paths against root
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.debug |= cli.debug;

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.root = Some(root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate URL prefixes, exclude patterns and reserved labels
    pub fn validate(&self) -> Result<()> {
        if !self.build.url_prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[build.url_prefix] must start with `/`".into()
            ));
        }

        if self.build.extension.trim_start_matches('.').is_empty() {
            bail!(ConfigError::Validation(
                "[build.extension] must not be empty".into()
            ));
        }

        if !self.archive.link_prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[archive.link_prefix] must start with `/`".into()
            ));
        }

        if self.archive.unknown_year.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[archive.unknown_year] must not be empty".into()
            ));
        }

        PathFilter::new(&self.exclude, &self.include)?;

        for kind in TaxonomyKind::ALL {
            let taxonomy = self.taxonomy(kind);
            if !taxonomy.url_prefix.starts_with('/') {
                bail!(ConfigError::Validation(format!(
                    "[{kind}.url_prefix] must start with `/`"
                )));
            }
            if taxonomy.catch_all.trim().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[{kind}.catch_all] must not be empty"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert!(!config.debug);
        assert!(config.archive.enable);
        assert!(config.categories.enable);
        assert!(config.tags.enable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_flag() {
        let config = SiteConfig::from_str("debug = true").unwrap();
        assert!(config.debug);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let result = SiteConfig::from_str("[serve]\nport = 1");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_taxonomy_accessor() {
        let config = SiteConfig::default();
        assert_eq!(config.taxonomy(TaxonomyKind::Categories).catch_all, "未分类");
        assert_eq!(config.taxonomy(TaxonomyKind::Tags).catch_all, "无标签");
    }

    #[test]
    fn test_validate_url_prefix() {
        let mut config = SiteConfig::default();
        config.build.url_prefix = "blog/".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_taxonomy_prefix_and_catch_all() {
        let mut config = SiteConfig::default();
        config.tags.url_prefix = "tags/".into();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.categories.catch_all = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("categories.catch_all"));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let mut config = SiteConfig::default();
        config.exclude.patterns = vec!["blog/[".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/definitely/not/here/taxa.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxa.toml");
        fs::write(&path, "[archive]\nenable = false\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert!(!config.archive.enable);
        assert_eq!(config.config_path, path);
    }
}
