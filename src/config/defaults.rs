//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.
//! Labels default to the Chinese wording of the blogs this tool was
//! written for; every one of them can be overridden in `taxa.toml`.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "docs".into()
    }

    pub fn posts() -> PathBuf {
        "blog/posts".into()
    }

    pub fn output() -> PathBuf {
        "docs".into()
    }

    pub fn url_prefix() -> String {
        "/blog/".into()
    }

    pub fn extension() -> String {
        "md".into()
    }
}

// ============================================================================
// [page] Section Defaults
// ============================================================================

pub mod page {
    pub fn untitled() -> String {
        "未命名文章：".into()
    }

    pub fn summary() -> String {
        "无摘要".into()
    }

    pub fn unknown_date() -> String {
        "未知日期".into()
    }

    pub fn header_date() -> Option<String> {
        None
    }
}

// ============================================================================
// [archive] Section Defaults
// ============================================================================

pub mod archive {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "archives.md".into()
    }

    pub fn title() -> String {
        "归档".into()
    }

    pub fn link_prefix() -> String {
        "/blog/archive/".into()
    }

    pub fn year_suffix() -> String {
        "年".into()
    }

    pub fn unknown_year() -> String {
        "未知年份".into()
    }

    pub fn year_column() -> String {
        "年份".into()
    }

    pub fn count_column() -> String {
        "文章总数".into()
    }
}

// ============================================================================
// [posts] Section Defaults
// ============================================================================

pub mod posts {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "blog/index.md".into()
    }

    pub fn title() -> String {
        "博客文章列表".into()
    }

    pub fn intro() -> String {
        "以下是所有博客文章，按发布日期排序：".into()
    }

    pub fn date_label() -> String {
        "发布日期".into()
    }
}

// ============================================================================
// [categories] / [tags] Section Defaults
// ============================================================================

pub mod taxonomy {
    use crate::config::TaxonomyConfig;

    pub fn count_column() -> String {
        "文章总数".into()
    }

    pub fn categories() -> TaxonomyConfig {
        TaxonomyConfig {
            enable: true,
            path: "categories.md".into(),
            title: "文章分类".into(),
            nav_title: "分类导航".into(),
            term_column: "分类".into(),
            count_column: count_column(),
            catch_all: "未分类".into(),
            url_prefix: "/blog/category/".into(),
            pages: false,
            pages_dir: "blog/category".into(),
            page_title_prefix: String::new(),
            index_url: "/categories".into(),
            index_label: "全部分类".into(),
        }
    }

    pub fn tags() -> TaxonomyConfig {
        TaxonomyConfig {
            enable: true,
            path: "tags.md".into(),
            title: "文章标签".into(),
            nav_title: "标签导航".into(),
            term_column: "标签".into(),
            count_column: count_column(),
            catch_all: "无标签".into(),
            url_prefix: "/blog/tags/".into(),
            pages: true,
            pages_dir: "blog/tags".into(),
            page_title_prefix: "🏷️".into(),
            index_url: "/tags".into(),
            index_label: "全部标签".into(),
        }
    }
}
