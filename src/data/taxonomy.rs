//! Term → documents aggregation for one taxonomy.

use super::types::{BucketGroup, PageRef, Term, TermUrl};
use crate::{
    config::{TaxonomyConfig, TaxonomyKind},
    debug, log,
    utils::{
        bucket::{Bucket, bucket_for},
        slug::slugify_term,
    },
};
use std::collections::BTreeMap;

/// All terms of one taxonomy, keyed by display name.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    kind: TaxonomyKind,
    catch_all: String,
    url_prefix: String,
    terms: BTreeMap<String, Term>,
}

impl Taxonomy {
    pub fn new(kind: TaxonomyKind, config: &TaxonomyConfig) -> Self {
        Self {
            kind,
            catch_all: config.catch_all.trim().to_owned(),
            url_prefix: config.url_prefix.clone(),
            terms: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    /// Reserved term for documents that declare none.
    pub fn catch_all(&self) -> &str {
        &self.catch_all
    }

    /// `url_prefix` + slug + `/`.
    pub fn generated_url(&self, name: &str) -> String {
        format!("{}/{}/", self.url_prefix.trim_end_matches('/'), slugify_term(name))
    }

    fn bucket_of(&self, name: &str) -> Bucket {
        if name == self.catch_all {
            Bucket::CatchAll
        } else {
            bucket_for(name)
        }
    }

    /// Register that `page` carries the term `name`.
    ///
    /// A non-empty `hint` is an explicit term URL. The first explicit URL a
    /// term sees replaces its generated one and is kept from then on.
    /// Returns `false` when the page was already listed under the term.
    pub fn add_membership(&mut self, page: &PageRef, name: &str, hint: Option<&str>) -> bool {
        let name = name.trim();
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());

        if !self.terms.contains_key(name) {
            let url = match hint {
                Some(hint) => TermUrl::Explicit(hint.to_owned()),
                None => TermUrl::Generated(self.generated_url(name)),
            };
            let term = Term::new(name.to_owned(), url, self.bucket_of(name));
            self.terms.insert(name.to_owned(), term);
        }

        let kind = self.kind;
        let Some(term) = self.terms.get_mut(name) else {
            return false;
        };

        if let Some(hint) = hint {
            if !term.url.is_explicit() {
                term.url = TermUrl::Explicit(hint.to_owned());
            } else if term.url.as_str() != hint {
                log!(
                    "warn";
                    "{kind} '{name}': conflicting url '{hint}' from {}, keeping '{}'",
                    page.url,
                    term.url.as_str()
                );
            }
        }

        if term.insert(page) {
            debug!("index"; "{kind} '{name}' += {}", page.url);
            true
        } else {
            debug!("index"; "{kind} '{name}' already lists {}, skipped", page.url);
            false
        }
    }

    #[cfg(test)]
    pub fn term(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    /// Terms sorted by name.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Sum of per-term document counts.
    pub fn memberships(&self) -> usize {
        self.terms.values().map(Term::count).sum()
    }

    /// Document count per term.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.terms
            .iter()
            .map(|(name, term)| (name.clone(), term.count()))
            .collect()
    }

    /// Non-empty buckets in render order, each with its terms sorted by name.
    pub fn grouped(&self) -> Vec<BucketGroup<'_>> {
        let mut groups: BTreeMap<Bucket, Vec<&Term>> = BTreeMap::new();
        for term in self.terms.values() {
            groups.entry(term.bucket).or_default().push(term);
        }

        groups
            .into_iter()
            .map(|(bucket, terms)| BucketGroup { bucket, terms })
            .collect()
    }
}
