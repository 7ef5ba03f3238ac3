//! `[categories]` and `[tags]` sections.
//!
//! Both sections share one shape but have different defaults, so a
//! partially written table is layered over the defaults of its own kind:
//!
//! ```toml
//! [tags]
//! catch_all = "untagged"   # everything else keeps the tag defaults
//! ```

use super::defaults;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, path::PathBuf};

/// Which front matter taxonomy a section configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    Categories,
    Tags,
}

impl TaxonomyKind {
    pub const ALL: [Self; 2] = [Self::Categories, Self::Tags];

    /// Front matter key holding the terms.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Settings of one taxonomy: its index page, term URLs and term pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonomyConfig {
    /// Generate the index page.
    pub enable: bool,
    /// Index page path, relative to `build.output`.
    pub path: PathBuf,
    pub title: String,
    /// Heading above the bucket navigation line.
    pub nav_title: String,
    pub term_column: String,
    pub count_column: String,
    /// Reserved term for documents that declare none.
    pub catch_all: String,
    /// Generated term URL = `url_prefix` + slug + `/`.
    pub url_prefix: String,
    /// Generate one page per term.
    pub pages: bool,
    /// Directory of term pages, relative to `build.output`.
    pub pages_dir: PathBuf,
    pub page_title_prefix: String,
    /// Back-link target on term pages.
    pub index_url: String,
    pub index_label: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        defaults::taxonomy::categories()
    }
}

impl TaxonomyConfig {
    /// Defaults for the given kind.
    pub fn defaults_for(kind: TaxonomyKind) -> Self {
        match kind {
            TaxonomyKind::Categories => defaults::taxonomy::categories(),
            TaxonomyKind::Tags => defaults::taxonomy::tags(),
        }
    }

    /// `deserialize_with` for `[categories]`.
    pub fn categories<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TaxonomyOverrides::deserialize(deserializer)
            .map(|overrides| overrides.apply(Self::defaults_for(TaxonomyKind::Categories)))
    }

    /// `deserialize_with` for `[tags]`.
    pub fn tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TaxonomyOverrides::deserialize(deserializer)
            .map(|overrides| overrides.apply(Self::defaults_for(TaxonomyKind::Tags)))
    }
}

/// Fields present in the TOML table; absent ones keep the kind defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TaxonomyOverrides {
    enable: Option<bool>,
    path: Option<PathBuf>,
    title: Option<String>,
    nav_title: Option<String>,
    term_column: Option<String>,
    count_column: Option<String>,
    catch_all: Option<String>,
    url_prefix: Option<String>,
    pages: Option<bool>,
    pages_dir: Option<PathBuf>,
    page_title_prefix: Option<String>,
    index_url: Option<String>,
    index_label: Option<String>,
}

impl TaxonomyOverrides {
    fn apply(self, mut base: TaxonomyConfig) -> TaxonomyConfig {
        fn set<T>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        set(&mut base.enable, self.enable);
        set(&mut base.path, self.path);
        set(&mut base.title, self.title);
        set(&mut base.nav_title, self.nav_title);
        set(&mut base.term_column, self.term_column);
        set(&mut base.count_column, self.count_column);
        set(&mut base.catch_all, self.catch_all);
        set(&mut base.url_prefix, self.url_prefix);
        set(&mut base.pages, self.pages);
        set(&mut base.pages_dir, self.pages_dir);
        set(&mut base.page_title_prefix, self.page_title_prefix);
        set(&mut base.index_url, self.index_url);
        set(&mut base.index_label, self.index_label);
        base
    }
}
