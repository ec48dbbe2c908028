//! In-memory document search over a static corpus, ranked with TF-IDF or BM25.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod ranker;
pub mod sample;
pub mod scorer;
pub mod tokenizer;

pub type DocId = u32;

pub use config::{Algorithm, EngineConfig, TermFrequencyMode};
pub use corpus::{Corpus, Document};
pub use engine::{SearchEngine, SearchHits};
pub use error::{EngineError, Result};
pub use index::InvertedIndex;
pub use ranker::SearchResult;
pub use scorer::ScoreMap;
