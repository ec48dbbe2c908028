//! Errors raised while loading a corpus or constructing an engine.
//!
//! Queries never fail: an empty result list is the only negative outcome of a search.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::DocId;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Two corpus entries share an id.
    #[error("duplicate document id {0}")]
    DuplicateDocumentId(DocId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown scoring algorithm '{0}' (expected tfidf or bm25)")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse {} line {line}: {source}", path.display())]
    ParseLine {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
