//! `[exclude]` and `[include]` sections.
//!
//! Paths are relative to `build.content` and may use either separator.

use serde::{Deserialize, Serialize};

/// `[exclude]` section - documents matching any rule are not indexed.
///
/// # Example
/// ```toml
/// [exclude]
/// dirs = ["blog/drafts"]
/// files = ["blog/posts/about.md"]
/// patterns = ["*.draft.md"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcludeConfig {
    /// Directory prefixes
    pub dirs: Vec<String>,
    /// Exact file paths
    pub files: Vec<String>,
    /// Shell-glob patterns
    pub patterns: Vec<String>,
}

/// `[include]` section - when non-empty, only these directories are indexed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncludeConfig {
    pub dirs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_filter_config_defaults_empty() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.exclude.dirs.is_empty());
        assert!(config.exclude.files.is_empty());
        assert!(config.exclude.patterns.is_empty());
        assert!(config.include.dirs.is_empty());
    }

    #[test]
    fn test_filter_config_parse() {
        let config = r#"
            [exclude]
            dirs = ["drafts", "blog\\old"]
            patterns = ["*.tmp.md"]

            [include]
            dirs = ["blog"]
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.exclude.dirs, vec!["drafts", "blog\\old"]);
        assert!(config.exclude.files.is_empty());
        assert_eq!(config.exclude.patterns, vec!["*.tmp.md"]);
        assert_eq!(config.include.dirs, vec!["blog"]);
    }
}
