use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::tokenizer::tokenize;
use crate::DocId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub content: String,
}

impl Document {
    pub fn new(id: DocId, content: impl Into<String>) -> Self {
        Self { id, content: content.into() }
    }
}

/// Statistics derived from a document once, when the corpus is built.
#[derive(Debug, Clone)]
struct DocStats {
    lowered: String,
    length: u32,
    term_counts: HashMap<String, u32>,
}

impl DocStats {
    fn from_content(content: &str) -> Self {
        let tokens = tokenize(content);
        let length = tokens.len() as u32;
        let mut term_counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *term_counts.entry(token).or_insert(0) += 1;
        }
        Self { lowered: content.to_lowercase(), length, term_counts }
    }
}

/// The documents being searched, in insertion order, with per-document statistics.
///
/// Ids only need to be unique; they are resolved through a position map, not used as offsets.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    stats: Vec<DocStats>,
    positions: HashMap<DocId, usize>,
    avg_doc_length: f64,
}

impl Corpus {
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(documents.len());
        for (pos, doc) in documents.iter().enumerate() {
            if positions.insert(doc.id, pos).is_some() {
                return Err(EngineError::DuplicateDocumentId(doc.id));
            }
        }
        let stats: Vec<DocStats> = documents.iter().map(|d| DocStats::from_content(&d.content)).collect();
        let total: u64 = stats.iter().map(|s| s.length as u64).sum();
        let avg_doc_length = match (stats.len(), total) {
            (0, _) => 0.0,
            // All documents blank: keep the average positive
            (_, 0) => 1.0,
            (n, total) => total as f64 / n as f64,
        };
        Ok(Self { documents, stats, positions, avg_doc_length })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.positions.get(&id).map(|&pos| &self.documents[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter()
    }

    /// Mean token count over all documents; 0 for an empty corpus, 1 if every document is blank.
    pub fn average_document_length(&self) -> f64 {
        self.avg_doc_length
    }

    /// Token count of a document; 0 for an unknown id.
    pub fn document_length(&self, id: DocId) -> u32 {
        self.stats_for(id).map_or(0, |s| s.length)
    }

    /// Occurrences of `term` as a non-overlapping substring of the lowercased document.
    ///
    /// `term` is expected lowercase, as the tokenizer produces it.
    /// Known quirk: "cat" is counted inside "category".
    pub fn term_frequency(&self, id: DocId, term: &str) -> u32 {
        if term.is_empty() {
            return 0;
        }
        self.stats_for(id)
            .map_or(0, |s| s.lowered.matches(term).count() as u32)
    }

    /// Occurrences of `term` as a whole token of the document.
    pub fn token_count(&self, id: DocId, term: &str) -> u32 {
        self.stats_for(id)
            .and_then(|s| s.term_counts.get(term).copied())
            .unwrap_or(0)
    }

    /// Per-term token counts of a document.
    pub fn term_counts(&self, id: DocId) -> Option<&HashMap<String, u32>> {
        self.stats_for(id).map(|s| &s.term_counts)
    }

    fn stats_for(&self, id: DocId) -> Option<&DocStats> {
        self.positions.get(&id).map(|&pos| &self.stats[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::build(vec![
            Document::new(7, "The cat sat in the Category aisle"),
            Document::new(3, "dog dog"),
        ])
        .unwrap()
    }

    #[test]
    fn caches_lengths_and_average() {
        let c = corpus();
        assert_eq!(c.len(), 2);
        assert_eq!(c.document_length(7), 7);
        assert_eq!(c.document_length(3), 2);
        assert_eq!(c.document_length(99), 0);
        assert!((c.average_document_length() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn substring_frequency_overcounts_embedded_terms() {
        let c = corpus();
        assert_eq!(c.term_frequency(7, "cat"), 2);
        assert_eq!(c.token_count(7, "cat"), 1);
        assert_eq!(c.term_frequency(7, "the"), 2);
        assert_eq!(c.term_frequency(3, "cat"), 0);
        assert_eq!(c.term_frequency(7, ""), 0);
    }

    #[test]
    fn blank_documents_keep_average_positive() {
        let c = Corpus::build(vec![Document::new(0, ""), Document::new(1, "  ")]).unwrap();
        assert_eq!(c.document_length(0), 0);
        assert_eq!(c.average_document_length(), 1.0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Corpus::build(vec![Document::new(1, "a"), Document::new(1, "b")]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateDocumentId(1)));
    }

    #[test]
    fn empty_corpus_is_valid() {
        let c = Corpus::build(Vec::new()).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.average_document_length(), 0.0);
        assert!(c.get(0).is_none());
    }
}
