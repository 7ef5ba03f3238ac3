//! Records held by the taxonomy index.

use crate::{
    content::Document,
    utils::{bucket::Bucket, date::is_unknown, slug::slugify_term},
};
use chrono::{Datelike, NaiveDate};
use std::{cmp::Ordering, collections::BTreeMap};

/// Minimal view of a document listed under a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub url: String,
    pub title: String,
    pub date: NaiveDate,
}

impl From<&Document> for PageRef {
    fn from(document: &Document) -> Self {
        Self {
            url: document.url.clone(),
            title: document.title.clone(),
            date: document.date,
        }
    }
}

/// Where a term URL came from.
///
/// An explicit URL always replaces a generated one, never the reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermUrl {
    /// `url_prefix` + slug + `/`
    Generated(String),
    /// Supplied in front matter via `{name, url}`
    Explicit(String),
}

impl TermUrl {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(url) | Self::Explicit(url) => url,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// One taxonomy term and the documents carrying it.
#[derive(Debug, Clone)]
pub struct Term {
    pub name: String,
    pub url: TermUrl,
    pub bucket: Bucket,
    /// Keyed by document URL, which makes membership idempotent
    pages: BTreeMap<String, PageRef>,
}

impl Term {
    pub fn new(name: String, url: TermUrl, bucket: Bucket) -> Self {
        Self {
            name,
            url,
            bucket,
            pages: BTreeMap::new(),
        }
    }

    /// Insert a page; `false` if its URL was already listed.
    pub(super) fn insert(&mut self, page: &PageRef) -> bool {
        if self.pages.contains_key(&page.url) {
            return false;
        }
        self.pages.insert(page.url.clone(), page.clone());
        true
    }

    pub fn count(&self) -> usize {
        self.pages.len()
    }

    pub fn slug(&self) -> String {
        slugify_term(&self.name)
    }

    /// Pages newest first; unknown dates last, ties broken by title then URL.
    pub fn pages_by_date(&self) -> Vec<&PageRef> {
        let mut pages: Vec<_> = self.pages.values().collect();
        pages.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.url.cmp(&b.url))
        });
        pages
    }
}

/// Terms of one bucket, sorted by name.
#[derive(Debug, Clone)]
pub struct BucketGroup<'a> {
    pub bucket: Bucket,
    pub terms: Vec<&'a Term>,
}

/// Archive row key: a calendar year, or the row for undated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveYear {
    Year(i32),
    Unknown,
}

impl ArchiveYear {
    pub fn of(date: NaiveDate) -> Self {
        if is_unknown(date) {
            Self::Unknown
        } else {
            Self::Year(date.year())
        }
    }

    pub fn year(self) -> Option<i32> {
        match self {
            Self::Year(year) => Some(year),
            Self::Unknown => None,
        }
    }
}

/// Newest year first, `Unknown` after every real year.
impl Ord for ArchiveYear {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Year(a), Self::Year(b)) => b.cmp(a),
            (Self::Year(_), Self::Unknown) => Ordering::Less,
            (Self::Unknown, Self::Year(_)) => Ordering::Greater,
            (Self::Unknown, Self::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for ArchiveYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
