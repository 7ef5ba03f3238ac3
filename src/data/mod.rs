//! Taxonomy aggregation.
//!
//! ```text
//! Admitted ──► TaxonomyIndex::ingest ──┬─► categories: Taxonomy ─► grouped() / counts()
//!                                      ├─► tags: Taxonomy       ─► grouped() / counts()
//!                                      └─► years                ─► year_counts()
//! ```
//!
//! Each term keeps its documents keyed by URL, so ingesting the same
//! (document, term) pair twice never double-counts.

mod index;
mod taxonomy;
mod types;

pub use index::TaxonomyIndex;
pub use taxonomy::Taxonomy;
pub use types::{ArchiveYear, Term};

#[cfg(test)]
pub use types::PageRef;
