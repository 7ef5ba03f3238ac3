//! Markdown documents and their front matter.

mod document;
mod error;
mod frontmatter;

pub use document::{Document, collect_documents, read_documents};
pub use error::CorpusError;

#[cfg(test)]
pub use frontmatter::{TermInput, parse_front_matter};
