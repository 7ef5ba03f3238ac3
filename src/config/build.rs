//! `[build]` section configuration.
//!
//! Where documents are read from, where generated pages go, and how
//! document URLs are formed.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in taxa.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "docs"         # Documents root, source ids are relative to it
/// posts = "blog/posts"     # Corpus directory inside `content`
/// output = "docs"          # Generated pages are written here
/// url_prefix = "/blog/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Documents root. Filter rules see paths relative to this directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Corpus directory, relative to `content`.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Output directory for generated pages.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Prefix of every document URL.
    #[serde(default = "defaults::build::url_prefix")]
    #[educe(Default = defaults::build::url_prefix())]
    pub url_prefix: String,

    /// File extension of documents (without dot).
    #[serde(default = "defaults::build::extension")]
    #[educe(Default = defaults::build::extension())]
    pub extension: String,
}

impl BuildConfig {
    /// Absolute corpus directory (`content/posts`).
    pub fn corpus_dir(&self) -> PathBuf {
        self.content.join(&self.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.build.content, PathBuf::from("docs"));
        assert_eq!(config.build.posts, PathBuf::from("blog/posts"));
        assert_eq!(config.build.output, PathBuf::from("docs"));
        assert_eq!(config.build.url_prefix, "/blog/");
        assert_eq!(config.build.extension, "md");
        assert_eq!(config.build.corpus_dir(), PathBuf::from("docs/blog/posts"));
    }

    #[test]
    fn test_build_config_override() {
        let config = r#"
            [build]
            content = "site"
            posts = "articles"
            url_prefix = "/posts/"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.build.corpus_dir(), PathBuf::from("site/articles"));
        assert_eq!(config.build.url_prefix, "/posts/");
        assert_eq!(config.build.output, PathBuf::from("docs"));
    }

    #[test]
    fn test_build_config_rejects_unknown_fields() {
        let config = r#"
            [build]
            minify = true
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }
}
