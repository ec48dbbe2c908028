use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, EngineConfig};
use crate::corpus::{Corpus, Document};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::ranker::{rank, SearchResult};
use crate::scorer::{Bm25, ScoreMap, Scorer, TfIdf};
use crate::tokenizer::tokenize;
use crate::DocId;

/// Ranked results of one query plus the number of documents that matched before truncation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    pub total_hits: usize,
    pub results: Vec<SearchResult>,
}

/// Corpus, index and configuration built once and then only read.
///
/// Share it by reference (or behind an `Arc`) between query handlers; no locking is needed.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    corpus: Corpus,
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new(documents: Vec<Document>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let corpus = Corpus::build(documents)?;
        let index = InvertedIndex::build(&corpus);
        tracing::info!(
            num_docs = corpus.len(),
            num_terms = index.num_terms(),
            avg_doc_len = corpus.average_document_length(),
            algorithm = %config.algorithm,
            "built search index"
        );
        Ok(Self { config, corpus, index })
    }

    pub fn with_defaults(documents: Vec<Document>) -> Result<Self> {
        Self::new(documents, EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.corpus.get(id)
    }

    /// Search with the configured algorithm and limit.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_with(query, self.config.algorithm, self.config.limit).results
    }

    pub fn search_with(&self, query: &str, algorithm: Algorithm, limit: usize) -> SearchHits {
        let tokens = tokenize(query);
        let scores = self.score_tokens(&tokens, algorithm);
        let total_hits = scores.len();
        let results = rank(scores, &self.corpus, limit);
        tracing::debug!(
            query,
            %algorithm,
            num_tokens = tokens.len(),
            total_hits,
            returned = results.len(),
            "search"
        );
        SearchHits { total_hits, results }
    }

    /// Unranked scores of every document matching at least one query token.
    pub fn scores(&self, query: &str, algorithm: Algorithm) -> ScoreMap {
        self.score_tokens(&tokenize(query), algorithm)
    }

    fn score_tokens(&self, tokens: &[String], algorithm: Algorithm) -> ScoreMap {
        if tokens.is_empty() {
            return ScoreMap::new();
        }
        let tf_mode = self.config.term_frequency;
        match algorithm {
            Algorithm::TfIdf => TfIdf { tf_mode }.score(tokens, &self.corpus, &self.index),
            Algorithm::Bm25 => Bm25 { k1: self.config.k1, k2: self.config.k2, tf_mode }
                .score(tokens, &self.corpus, &self.index),
        }
    }
}
