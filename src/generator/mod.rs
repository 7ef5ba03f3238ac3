//! Markdown page rendering.
//!
//! Every function here is pure: it turns index query results into page
//! text and leaves writing to the caller.
//!
//! | Page           | Source                        | Path                          |
//! |----------------|-------------------------------|-------------------------------|
//! | archive        | `TaxonomyIndex::year_counts`  | `[archive].path`              |
//! | post list      | admitted documents            | `[posts].path`                |
//! | category index | `Taxonomy::grouped`           | `[categories].path`           |
//! | tag index      | `Taxonomy::grouped`           | `[tags].path`                 |
//! | term page      | `Term::pages_by_date`         | `<pages_dir>/<slug>.md`       |

mod archive;
mod index;
mod posts;
mod term_page;

pub use archive::render_archive;
pub use index::render_index;
pub use posts::render_posts;
pub use term_page::render_term_page;

use crate::{
    config::{PageConfig, SiteConfig, TaxonomyKind},
    data::TaxonomyIndex,
    log,
    utils::filter::Admitted,
};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::path::PathBuf;

/// A rendered page and where it goes, relative to `build.output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// YAML header of a generated page.
#[derive(Debug, Serialize)]
struct Header<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    comments: bool,
}

/// `---`-delimited header block followed by a blank line.
pub fn render_header(title: &str, page: &PageConfig) -> Result<String> {
    let header = Header {
        title,
        date: page.header_date.as_deref(),
        comments: false,
    };
    let yaml = serde_yaml::to_string(&header).context("Failed to serialize page header")?;
    Ok(format!("---\n{yaml}---\n\n"))
}

/// Escape characters that would break a table cell or link text.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '|' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render every enabled page of one pass.
///
/// `posts` are the documents fed to `index`, already in list order.
pub fn render_all(
    index: &TaxonomyIndex,
    posts: &[Admitted],
    config: &SiteConfig,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    if config.archive.enable {
        artifacts.push(Artifact {
            path: config.archive.path.clone(),
            content: render_archive(&index.year_counts(), &config.archive, &config.page)?,
        });
    }

    if config.posts.enable {
        let posts: Vec<_> = posts.iter().map(Admitted::document).collect();
        artifacts.push(Artifact {
            path: config.posts.path.clone(),
            content: render_posts(&posts, &config.posts, &config.page)?,
        });
    }

    for kind in TaxonomyKind::ALL {
        let settings = config.taxonomy(kind);
        let taxonomy = index.taxonomy(kind);

        if settings.enable {
            artifacts.push(Artifact {
                path: settings.path.clone(),
                content: render_index(taxonomy, settings, &config.page)?,
            });
        }

        if settings.pages {
            let mut taken = FxHashSet::default();
            for term in taxonomy.terms() {
                let path = settings.pages_dir.join(format!("{}.md", term.slug()));
                if !taken.insert(path.clone()) {
                    log!(
                        "warn";
                        "{kind} '{}' shares page {} with another term, skipped",
                        term.name,
                        path.display()
                    );
                    continue;
                }
                artifacts.push(Artifact {
                    path,
                    content: render_term_page(term, settings, &config.page)?,
                });
            }
        }
    }

    Ok(artifacts)
}
