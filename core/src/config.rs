//! Engine configuration, fixed at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_K2: f64 = 0.75;
pub const DEFAULT_LIMIT: usize = 10;

/// Scoring strategy used to rank documents against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "tf-idf")]
    TfIdf,
    Bm25,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::TfIdf => f.write_str("tfidf"),
            Algorithm::Bm25 => f.write_str("bm25"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(Algorithm::TfIdf),
            "bm25" => Ok(Algorithm::Bm25),
            _ => Err(EngineError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// How a term's frequency inside a document is counted at scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermFrequencyMode {
    /// Non-overlapping, case-insensitive substring occurrences in the raw content.
    /// Over-counts terms embedded in longer words ("cat" in "category"); kept as the default
    /// so rankings match the established behaviour.
    #[default]
    Substring,
    /// Exact token occurrences, as produced by the tokenizer.
    Token,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    /// BM25 term-frequency saturation.
    pub k1: f64,
    /// BM25 length-normalization weight.
    pub k2: f64,
    /// Maximum number of results returned by a search.
    pub limit: usize,
    pub term_frequency: TermFrequencyMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
            limit: DEFAULT_LIMIT,
            term_frequency: TermFrequencyMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "k1 must be a finite non-negative number, got {}",
                self.k1
            )));
        }
        // k2 > 1 lets the BM25 length normalization reach zero or below
        if !(0.0..=1.0).contains(&self.k2) {
            return Err(EngineError::InvalidConfig(format!(
                "k2 must be between 0 and 1, got {}",
                self.k2
            )));
        }
        if self.limit == 0 {
            return Err(EngineError::InvalidConfig("limit must be at least 1".into()));
        }
        Ok(())
    }
}
