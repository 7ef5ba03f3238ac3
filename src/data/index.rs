//! Pass-wide accumulator: categories, tags and archive years.

use super::{
    taxonomy::Taxonomy,
    types::{ArchiveYear, PageRef},
};
use crate::{
    config::{SiteConfig, TaxonomyKind},
    debug, log,
    utils::filter::Admitted,
};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything one pass learns about the corpus.
///
/// Built empty at the start of a pass and only fed [`Admitted`] documents,
/// so filtering always happens before aggregation.
#[derive(Debug, Clone)]
pub struct TaxonomyIndex {
    pub categories: Taxonomy,
    pub tags: Taxonomy,
    years: BTreeMap<ArchiveYear, usize>,
    /// Document URLs already counted in `years`
    seen: FxHashSet<String>,
}

/// Serializable snapshot of the index counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexCounts {
    pub documents: usize,
    pub categories: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
    pub years: Vec<YearCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    /// `None` for undated documents
    pub year: Option<i32>,
    pub count: usize,
}

impl TaxonomyIndex {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            categories: Taxonomy::new(TaxonomyKind::Categories, &config.categories),
            tags: Taxonomy::new(TaxonomyKind::Tags, &config.tags),
            years: BTreeMap::new(),
            seen: FxHashSet::default(),
        }
    }

    pub fn taxonomy(&self, kind: TaxonomyKind) -> &Taxonomy {
        match kind {
            TaxonomyKind::Categories => &self.categories,
            TaxonomyKind::Tags => &self.tags,
        }
    }

    fn taxonomy_mut(&mut self, kind: TaxonomyKind) -> &mut Taxonomy {
        match kind {
            TaxonomyKind::Categories => &mut self.categories,
            TaxonomyKind::Tags => &mut self.tags,
        }
    }

    /// Record one admitted document in every taxonomy and in the archive.
    ///
    /// A document without terms (or with blank ones) is filed under the
    /// taxonomy's catch-all term.
    pub fn ingest(&mut self, admitted: &Admitted) {
        let document = admitted.document();
        let page = PageRef::from(document);

        for kind in TaxonomyKind::ALL {
            let taxonomy = self.taxonomy_mut(kind);
            let catch_all = taxonomy.catch_all().to_owned();
            let terms = document.terms(kind);

            if terms.is_empty() {
                taxonomy.add_membership(&page, &catch_all, None);
                continue;
            }

            for term in terms {
                let name = match term.name.trim() {
                    "" => catch_all.as_str(),
                    name => name,
                };
                taxonomy.add_membership(&page, name, term.url.as_deref());
            }
        }

        if self.seen.insert(page.url.clone()) {
            *self.years.entry(ArchiveYear::of(page.date)).or_default() += 1;
        }
    }

    /// Number of distinct documents ingested.
    pub fn documents(&self) -> usize {
        self.seen.len()
    }

    /// Documents per year, newest first, unknown year last.
    pub fn year_counts(&self) -> Vec<(ArchiveYear, usize)> {
        self.years.iter().map(|(&year, &count)| (year, count)).collect()
    }

    pub fn counts(&self) -> IndexCounts {
        IndexCounts {
            documents: self.documents(),
            categories: self.categories.counts(),
            tags: self.tags.counts(),
            years: self
                .year_counts()
                .into_iter()
                .map(|(year, count)| YearCount {
                    year: year.year(),
                    count,
                })
                .collect(),
        }
    }

    /// Log totals after a pass.
    pub fn log_summary(&self) {
        log!(
            "index";
            "{} documents, {} categories ({} memberships), {} tags ({} memberships)",
            self.documents(),
            self.categories.len(),
            self.categories.memberships(),
            self.tags.len(),
            self.tags.memberships()
        );

        for taxonomy in [&self.categories, &self.tags] {
            for term in taxonomy.terms() {
                debug!("index"; "{} '{}': {} documents", taxonomy.kind(), term.name, term.count());
            }
        }
    }
}
