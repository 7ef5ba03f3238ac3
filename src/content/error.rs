//! Content reading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Front matter that exists but cannot be read as a key/value block.
///
/// Never fatal: the extractor logs it and continues with empty metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("front matter is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter is not a key/value mapping")]
    NotAMapping,

    #[error("front matter has no closing `---` line")]
    Unterminated,
}

/// Problems reaching the corpus or one of its files.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus directory `{0}` does not exist")]
    MissingRoot(PathBuf),

    #[error("failed to read `{0}`: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}
