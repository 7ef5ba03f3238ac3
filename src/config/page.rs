//! `[page]`, `[archive]` and `[posts]` sections.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[page]` section - placeholders for documents and generated headers.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Title prefix for documents without a title; the file stem is appended.
    #[serde(default = "defaults::page::untitled")]
    #[educe(Default = defaults::page::untitled())]
    pub untitled: String,

    /// Summary for documents without one.
    #[serde(default = "defaults::page::summary")]
    #[educe(Default = defaults::page::summary())]
    pub summary: String,

    /// Shown instead of a date on term pages when the date is unknown.
    #[serde(default = "defaults::page::unknown_date")]
    #[educe(Default = defaults::page::unknown_date())]
    pub unknown_date: String,

    /// Optional `date:` written into generated page headers.
    #[serde(default = "defaults::page::header_date")]
    #[educe(Default = defaults::page::header_date())]
    pub header_date: Option<String>,
}

/// `[archive]` section - yearly archive page.
///
/// # Example
/// ```toml
/// [archive]
/// path = "archives.md"
/// link_prefix = "/blog/archive/"   # each year links to <prefix><year>/
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to `build.output`.
    #[serde(default = "defaults::archive::path")]
    #[educe(Default = defaults::archive::path())]
    pub path: PathBuf,

    #[serde(default = "defaults::archive::title")]
    #[educe(Default = defaults::archive::title())]
    pub title: String,

    #[serde(default = "defaults::archive::link_prefix")]
    #[educe(Default = defaults::archive::link_prefix())]
    pub link_prefix: String,

    /// Appended to the year in link text, e.g. `2024年`.
    #[serde(default = "defaults::archive::year_suffix")]
    #[educe(Default = defaults::archive::year_suffix())]
    pub year_suffix: String,

    /// Row label for documents without a usable date.
    #[serde(default = "defaults::archive::unknown_year")]
    #[educe(Default = defaults::archive::unknown_year())]
    pub unknown_year: String,

    #[serde(default = "defaults::archive::year_column")]
    #[educe(Default = defaults::archive::year_column())]
    pub year_column: String,

    #[serde(default = "defaults::archive::count_column")]
    #[educe(Default = defaults::archive::count_column())]
    pub count_column: String,
}

/// `[posts]` section - every post newest first, with its date and summary.
///
/// # Example
/// ```toml
/// [posts]
/// enable = true
/// path = "blog/index.md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PostsConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Output path, relative to `build.output`.
    #[serde(default = "defaults::posts::path")]
    #[educe(Default = defaults::posts::path())]
    pub path: PathBuf,

    #[serde(default = "defaults::posts::title")]
    #[educe(Default = defaults::posts::title())]
    pub title: String,

    /// Paragraph under the heading; empty to omit.
    #[serde(default = "defaults::posts::intro")]
    #[educe(Default = defaults::posts::intro())]
    pub intro: String,

    #[serde(default = "defaults::posts::date_label")]
    #[educe(Default = defaults::posts::date_label())]
    pub date_label: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_page_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.page.untitled, "未命名文章：");
        assert_eq!(config.page.summary, "无摘要");
        assert_eq!(config.page.header_date, None);
    }

    #[test]
    fn test_archive_config_override() {
        let config = r#"
            [archive]
            path = "archive/index.md"
            year_suffix = ""
            unknown_year = "Unknown"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert!(config.archive.enable);
        assert_eq!(config.archive.path, PathBuf::from("archive/index.md"));
        assert_eq!(config.archive.year_suffix, "");
        assert_eq!(config.archive.unknown_year, "Unknown");
        assert_eq!(config.archive.link_prefix, "/blog/archive/");
    }

    #[test]
    fn test_posts_config() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(!config.posts.enable);
        assert_eq!(config.posts.path, PathBuf::from("blog/index.md"));

        let config = SiteConfig::from_str("[posts]\nenable = true\nintro = \"\"").unwrap();
        assert!(config.posts.enable);
        assert_eq!(config.posts.intro, "");
        assert_eq!(config.posts.date_label, "发布日期");
    }
}
