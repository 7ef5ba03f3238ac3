//! Include/exclude rules deciding which documents get indexed.
//!
//! Evaluation order for one document:
//!
//! | Step | Rule                       | Effect on match       |
//! |------|----------------------------|-----------------------|
//! | 1    | `include.dirs` (whitelist) | continue, else exclude |
//! | 2    | `exclude.dirs`             | exclude               |
//! | 3    | `exclude.files`            | exclude               |
//! | 4    | `exclude.patterns` (glob)  | exclude               |
//!
//! All paths are compared after separator normalization, and directory
//! rules match whole path components (`drafts` never matches
//! `drafts-extra/a.md`).

use crate::{
    config::{ConfigError, ExcludeConfig, IncludeConfig},
    content::Document,
    debug,
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rustc_hash::FxHashSet;

/// Normalize path separators: `\` → `/`, and repeated `/` collapse to one.
pub fn normalize_path(path: &str) -> String {
    let replaced = path.replace('\\', "/");
    let mut normalized = String::with_capacity(replaced.len());
    let mut last_slash = false;
    for c in replaced.chars() {
        if c == '/' {
            if !last_slash {
                normalized.push(c);
            }
            last_slash = true;
        } else {
            normalized.push(c);
            last_slash = false;
        }
    }
    normalized
}

/// Normalize a directory rule into a prefix ending with exactly one `/`.
fn dir_prefix(dir: &str) -> String {
    format!("{}/", normalize_path(dir).trim_end_matches('/'))
}

/// Compiled filter rules.
#[derive(Debug)]
pub struct PathFilter {
    include_dirs: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_files: FxHashSet<String>,
    exclude_patterns: Vec<String>,
    exclude_globs: GlobSet,
}

/// A document that passed the filter.
///
/// Only [`PathFilter::admit`] creates these, so anything taking an
/// `Admitted` is guaranteed to run after filtering.
#[derive(Debug)]
pub struct Admitted(Document);

impl Admitted {
    pub fn document(&self) -> &Document {
        &self.0
    }
}

impl PathFilter {
    /// Compile rules from config. Fails on an invalid glob pattern.
    pub fn new(exclude: &ExcludeConfig, include: &IncludeConfig) -> Result<Self, ConfigError> {
        let include_dirs = include
            .dirs
            .iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| dir_prefix(d))
            .collect();
        let exclude_dirs = exclude
            .dirs
            .iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| dir_prefix(d))
            .collect();
        let exclude_files = exclude.files.iter().map(|f| normalize_path(f)).collect();

        let exclude_patterns: Vec<String> = exclude
            .patterns
            .iter()
            .map(|p| normalize_path(p))
            .filter(|p| !p.is_empty())
            .collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &exclude_patterns {
            builder.add(Glob::new(pattern)?);
        }
        let exclude_globs = builder.build()?;

        Ok(Self {
            include_dirs,
            exclude_dirs,
            exclude_files,
            exclude_patterns,
            exclude_globs,
        })
    }

    /// Whether the document must be left out of aggregation.
    pub fn is_excluded(&self, document: &Document) -> bool {
        self.is_path_excluded(&document.source)
    }

    /// Consume a document, returning it only if it is not excluded.
    pub fn admit(&self, document: Document) -> Option<Admitted> {
        (!self.is_excluded(&document)).then(|| Admitted(document))
    }

    /// Path-level check behind [`is_excluded`](Self::is_excluded).
    pub fn is_path_excluded(&self, source: &str) -> bool {
        let path = normalize_path(source);
        if path.is_empty() {
            return false;
        }

        if !self.include_dirs.is_empty() && !self.include_dirs.iter().any(|d| path.starts_with(d)) {
            debug!("filter"; "excluded {path}: outside include dirs {:?}", self.include_dirs);
            return true;
        }

        if let Some(dir) = self.exclude_dirs.iter().find(|d| path.starts_with(d.as_str())) {
            debug!("filter"; "excluded {path}: dir '{dir}'");
            return true;
        }

        if self.exclude_files.contains(&path) {
            debug!("filter"; "excluded {path}: file list");
            return true;
        }

        if let Some(&index) = self.exclude_globs.matches(&path).first() {
            debug!("filter"; "excluded {path}: pattern '{}'", self.exclude_patterns[index]);
            return true;
        }

        false
    }

    /// Multi-line summary of the normalized rules, for debug output.
    pub fn describe(&self) -> String {
        let mut files: Vec<_> = self.exclude_files.iter().map(String::as_str).collect();
        files.sort_unstable();
        format!(
            "include dirs: {:?}\nexclude dirs: {:?}\nexclude files: {:?}\nexclude patterns: {:?}",
            self.include_dirs, self.exclude_dirs, files, self.exclude_patterns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        include: &[&str],
        dirs: &[&str],
        files: &[&str],
        patterns: &[&str],
    ) -> PathFilter {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let exclude = ExcludeConfig {
            dirs: to_vec(dirs),
            files: to_vec(files),
            patterns: to_vec(patterns),
        };
        let include = IncludeConfig { dirs: to_vec(include) };
        PathFilter::new(&exclude, &include).unwrap()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a\\b\\c.md"), "a/b/c.md");
        assert_eq!(normalize_path("a//b///c.md"), "a/b/c.md");
        assert_eq!(normalize_path("a\\\\b/\\c.md"), "a/b/c.md");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_dir_prefix() {
        assert_eq!(dir_prefix("drafts"), "drafts/");
        assert_eq!(dir_prefix("drafts/"), "drafts/");
        assert_eq!(dir_prefix("blog\\drafts//"), "blog/drafts/");
    }

    #[test]
    fn test_exclude_dir_is_component_exact() {
        let f = filter(&[], &["drafts"], &[], &[]);
        assert!(f.is_path_excluded("drafts/a.md"));
        assert!(f.is_path_excluded("drafts\\nested\\b.md"));
        assert!(!f.is_path_excluded("posts/drafts-extra/a.md"));
        assert!(!f.is_path_excluded("drafts-extra/a.md"));
    }

    #[test]
    fn test_exclude_files_exact_match() {
        let f = filter(&[], &[], &["blog/posts/secret.md"], &[]);
        assert!(f.is_path_excluded("blog/posts/secret.md"));
        assert!(f.is_path_excluded("blog\\posts\\secret.md"));
        assert!(!f.is_path_excluded("blog/posts/secret.md.bak"));
        assert!(!f.is_path_excluded("other/blog/posts/secret.md"));
    }

    #[test]
    fn test_exclude_patterns_glob() {
        let f = filter(&[], &[], &[], &["*.draft.md", "blog/20??/*"]);
        assert!(f.is_path_excluded("notes/idea.draft.md"));
        assert!(f.is_path_excluded("blog/2023/post.md"));
        assert!(!f.is_path_excluded("blog/posts/post.md"));
    }

    #[test]
    fn test_include_dirs_whitelist() {
        let f = filter(&["blog/posts"], &[], &[], &[]);
        assert!(!f.is_path_excluded("blog/posts/a.md"));
        assert!(f.is_path_excluded("blog/postscript/a.md"));
        assert!(f.is_path_excluded("about.md"));
    }

    #[test]
    fn test_whitelist_then_blacklist() {
        let f = filter(&["blog"], &["blog/drafts"], &[], &[]);
        assert!(!f.is_path_excluded("blog/a.md"));
        assert!(f.is_path_excluded("blog/drafts/a.md"));
        assert!(f.is_path_excluded("docs/a.md"));
    }

    #[test]
    fn test_no_rules_admits_everything() {
        let f = filter(&[], &[], &[], &[]);
        assert!(!f.is_path_excluded("anything/at/all.md"));
        assert!(!f.is_path_excluded(""));
    }

    #[test]
    fn test_empty_rules_are_ignored() {
        let f = filter(&[""], &["", "  "], &[], &[""]);
        assert!(!f.is_path_excluded("blog/a.md"));
    }

    #[test]
    fn test_invalid_glob_is_config_error() {
        let exclude = ExcludeConfig {
            patterns: vec!["blog/[".to_string()],
            ..Default::default()
        };
        let result = PathFilter::new(&exclude, &IncludeConfig::default());
        assert!(matches!(result, Err(ConfigError::Glob(_))));
    }

    #[test]
    fn test_debug_mode_does_not_change_decisions() {
        let f = filter(&[], &["drafts"], &[], &["*.tmp"]);
        let paths = ["drafts/a.md", "b.tmp", "posts/c.md"];
        let quiet: Vec<_> = paths.iter().map(|p| f.is_path_excluded(p)).collect();
        crate::logger::set_debug(true);
        let loud: Vec<_> = paths.iter().map(|p| f.is_path_excluded(p)).collect();
        crate::logger::set_debug(false);
        assert_eq!(quiet, loud);
        assert_eq!(quiet, vec![true, true, false]);
    }
}
