//! One aggregation pass over the corpus.
//!
//! # Architecture
//!
//! ```text
//! run_pass()
//!     │
//!     ├── collect_documents()   walk `content/posts`, sorted by path
//!     ├── read_documents()      read + parse front matter (parallel)
//!     ├── PathFilter::admit()   drop excluded documents
//!     ├── TaxonomyIndex::ingest()
//!     └── render_all()          archive, post list, index pages, term pages
//!
//! build_site()  ──► write artifacts under `build.output`
//! check_site()  ──► compare artifacts with what is on disk
//! ```

use crate::{
    config::{SiteConfig, TaxonomyKind},
    content::{CorpusError, collect_documents, read_documents},
    data::TaxonomyIndex,
    debug,
    generator::{Artifact, render_all},
    log,
    utils::filter::PathFilter,
};
use anyhow::{Context, Result};
use std::fs;

/// Result of a completed pass.
#[derive(Debug)]
pub struct Pass {
    pub index: TaxonomyIndex,
    pub artifacts: Vec<Artifact>,
    /// Documents read from the corpus
    pub read: usize,
    /// Documents dropped by the filter
    pub excluded: usize,
}

/// Run a full pass. `None` when the corpus directory is missing.
pub fn run_pass(config: &SiteConfig) -> Result<Option<Pass>> {
    let filter = PathFilter::new(&config.exclude, &config.include)?;
    debug!("filter"; "rules:\n{}", filter.describe());

    let paths = match collect_documents(&config.build) {
        Ok(paths) => paths,
        Err(CorpusError::MissingRoot(dir)) => {
            log!(
                "warn";
                "corpus directory {} does not exist, skipping generated pages",
                dir.display()
            );
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let mut documents = read_documents(&paths, &config.build, &config.page);
    documents.sort_by(|a, b| b.date.cmp(&a.date));
    let read = documents.len();

    let posts: Vec<_> = documents
        .into_iter()
        .filter_map(|document| filter.admit(document))
        .collect();
    let excluded = read - posts.len();

    let mut index = TaxonomyIndex::new(config);
    for admitted in &posts {
        index.ingest(admitted);
    }

    debug!("build"; "read {read} documents, {excluded} excluded");
    index.log_summary();

    let artifacts = render_all(&index, &posts, config)?;
    Ok(Some(Pass {
        index,
        artifacts,
        read,
        excluded,
    }))
}

/// Run a pass and write every artifact; `clean` empties term page directories first.
pub fn build_site(config: &SiteConfig, clean: bool) -> Result<()> {
    let Some(pass) = run_pass(config)? else {
        return Ok(());
    };

    if clean {
        clean_term_pages(config)?;
    }

    let output = &config.build.output;
    for artifact in &pass.artifacts {
        let path = output.join(&artifact.path);

        if fs::read_to_string(&path).is_ok_and(|current| current == artifact.content) {
            debug!("write"; "{} unchanged", artifact.path.display());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &artifact.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log!("write"; "{}", artifact.path.display());
    }

    log!(
        "build";
        "{} pages generated from {} documents ({} excluded)",
        pass.artifacts.len(),
        pass.read,
        pass.excluded
    );
    Ok(())
}

/// Remove the page directory of every taxonomy that generates term pages.
fn clean_term_pages(config: &SiteConfig) -> Result<()> {
    for kind in TaxonomyKind::ALL {
        let settings = config.taxonomy(kind);
        if !settings.pages {
            continue;
        }

        let dir = config.build.output.join(&settings.pages_dir);
        if dir.is_dir() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to clean directory {}", dir.display()))?;
            log!("clean"; "{}", dir.display());
        }
    }
    Ok(())
}

/// Outcome of comparing a pass with the output directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub fresh: usize,
    pub stale: Vec<String>,
    pub missing: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}

/// Run a pass and compare its artifacts with the files on disk.
pub fn check_site(config: &SiteConfig) -> Result<CheckReport> {
    let Some(pass) = run_pass(config)? else {
        return Ok(CheckReport::default());
    };

    let mut report = CheckReport::default();
    for artifact in &pass.artifacts {
        let name = artifact.path.display().to_string();
        match fs::read_to_string(config.build.output.join(&artifact.path)) {
            Ok(current) if current == artifact.content => report.fresh += 1,
            Ok(_) => {
                log!("check"; "stale: {name}");
                report.stale.push(name);
            }
            Err(_) => {
                log!("check"; "missing: {name}");
                report.missing.push(name);
            }
        }
    }

    log!(
        "check";
        "{} documents ({} excluded): {} up to date, {} stale, {} missing",
        pass.read,
        pass.excluded,
        report.fresh,
        report.stale.len(),
        report.missing.len()
    );
    Ok(report)
}

/// Run a pass and render its counts as pretty JSON.
pub fn counts_json(config: &SiteConfig) -> Result<Option<String>> {
    let Some(pass) = run_pass(config)? else {
        return Ok(None);
    };
    let json = serde_json::to_string_pretty(&pass.index.counts())
        .context("Failed to serialize index counts")?;
    Ok(Some(json))
}
