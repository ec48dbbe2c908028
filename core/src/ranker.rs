use serde::{Deserialize, Serialize};
use std::fmt;

use crate::corpus::Corpus;
use crate::scorer::ScoreMap;
use crate::DocId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub content: String,
    pub score: f64,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score={:.2})", self.content, self.score)
    }
}

/// Order scored documents by descending score, ties by ascending doc id, and keep the first `limit`.
pub fn rank(scores: ScoreMap, corpus: &Corpus, limit: usize) -> Vec<SearchResult> {
    let mut scored: Vec<(DocId, f64)> = scores.into_iter().collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored
        .into_iter()
        .filter_map(|(doc_id, score)| {
            corpus.get(doc_id).map(|doc| SearchResult { doc_id, content: doc.content.clone(), score })
        })
        .take(limit)
        .collect()
}
