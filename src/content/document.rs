//! Documents: discovery on disk and the per-document record built from front matter.

use super::{
    CorpusError,
    frontmatter::{FrontMatter, TermInput, extract_metadata},
};
use crate::{
    config::{BuildConfig, PageConfig, TaxonomyKind},
    log,
    utils::{
        date::{RawDate, normalize_date},
        filter::normalize_path,
    },
};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Index file name of a directory; maps to the directory URL.
const INDEX_STEM: &str = "index";

/// Raw document read from the corpus.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the documents root, `/`-separated
    pub source: String,
    /// Public URL, always ending with `/`
    pub url: String,
    /// File name without extension
    pub stem: String,
    pub text: String,
}

impl SourceFile {
    /// Locate `path` inside the documents root and derive its source id and URL.
    pub fn locate(path: &Path, text: String, config: &BuildConfig) -> Self {
        let corpus = config.corpus_dir();
        let source = path
            .strip_prefix(&config.content)
            .unwrap_or(path)
            .to_string_lossy();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = path.strip_prefix(&corpus).unwrap_or(path);

        Self {
            source: normalize_path(&source),
            url: document_url(&config.url_prefix, relative),
            stem,
            text,
        }
    }
}

/// `url_prefix` + corpus-relative path without extension + `/`.
///
/// `a/index.md` maps to the URL of `a/`.
pub fn document_url(prefix: &str, relative: &Path) -> String {
    let mut path = relative.with_extension("");
    if path.file_name().is_some_and(|name| name == INDEX_STEM) {
        path.pop();
    }

    let path = normalize_path(&path.to_string_lossy());
    let path = path.trim_matches('/');
    let prefix = prefix.trim_end_matches('/');

    if path.is_empty() {
        format!("{prefix}/")
    } else {
        format!("{prefix}/{path}/")
    }
}

/// Everything aggregation needs from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: String,
    pub url: String,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub categories: Vec<TermInput>,
    pub tags: Vec<TermInput>,
}

impl Document {
    /// Parse the front matter of `file`, filling missing fields from `[page]`.
    pub fn parse(file: &SourceFile, config: &PageConfig) -> Self {
        let front_matter = extract_metadata(&file.text, &file.source);
        Self::from_front_matter(file, &front_matter, config)
    }

    pub fn from_front_matter(
        file: &SourceFile,
        front_matter: &FrontMatter,
        config: &PageConfig,
    ) -> Self {
        let title = front_matter
            .text("title")
            .map_or_else(|| format!("{}{}", config.untitled, file.stem), str::to_owned);
        let summary = front_matter
            .text("summary")
            .map_or_else(|| config.summary.clone(), str::to_owned);
        let date = normalize_date(&RawDate::from(front_matter.text("date")));

        Self {
            source: file.source.clone(),
            url: file.url.clone(),
            title,
            date,
            summary,
            categories: front_matter.terms(TaxonomyKind::Categories.key()),
            tags: front_matter.terms(TaxonomyKind::Tags.key()),
        }
    }

    pub fn terms(&self, kind: TaxonomyKind) -> &[TermInput] {
        match kind {
            TaxonomyKind::Categories => &self.categories,
            TaxonomyKind::Tags => &self.tags,
        }
    }
}

/// Collect corpus documents, sorted by path.
///
/// The corpus root's own `index` page is the blog landing page, not a post.
pub fn collect_documents(config: &BuildConfig) -> Result<Vec<PathBuf>, CorpusError> {
    let corpus = config.corpus_dir();
    if !corpus.is_dir() {
        return Err(CorpusError::MissingRoot(corpus));
    }

    let extension = config.extension.trim_start_matches('.');
    let root_index = corpus.join(format!("{INDEX_STEM}.{extension}"));

    let files = WalkDir::new(&corpus)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == extension))
        .filter(|p| *p != root_index)
        .collect();

    Ok(files)
}

/// Read a document as text. Invalid UTF-8 is replaced rather than rejected.
fn read_source(path: &Path) -> Result<String, CorpusError> {
    let bytes = fs::read(path).map_err(|err| CorpusError::Io(path.to_path_buf(), err))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log!("warn"; "{} is not valid UTF-8, replacing invalid bytes", path.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Read and parse documents in parallel, preserving input order.
///
/// Unreadable files are logged and left out; one bad file never stops the pass.
pub fn read_documents(
    paths: &[PathBuf],
    build: &BuildConfig,
    page: &PageConfig,
) -> Vec<Document> {
    paths
        .par_iter()
        .filter_map(|path| match read_source(path) {
            Ok(text) => Some(Document::parse(&SourceFile::locate(path, text, build), page)),
            Err(err) => {
                log!("warn"; "{err}, skipped");
                None
            }
        })
        .collect()
}
