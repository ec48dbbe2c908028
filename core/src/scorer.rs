//! Relevance scoring strategies.
//!
//! Both strategies walk the posting list of every query token (repeats included) and
//! accumulate into a [`ScoreMap`]. Documents matching no token never enter the map, and tokens
//! missing from the index contribute nothing.

use std::collections::HashMap;

use crate::config::TermFrequencyMode;
use crate::corpus::Corpus;
use crate::index::InvertedIndex;
use crate::DocId;

/// Accumulated score per matching document for one query evaluation.
pub type ScoreMap = HashMap<DocId, f64>;

pub trait Scorer {
    fn score(&self, tokens: &[String], corpus: &Corpus, index: &InvertedIndex) -> ScoreMap;
}

fn term_frequency(corpus: &Corpus, id: DocId, term: &str, mode: TermFrequencyMode) -> f64 {
    match mode {
        TermFrequencyMode::Substring => corpus.term_frequency(id, term) as f64,
        TermFrequencyMode::Token => corpus.token_count(id, term) as f64,
    }
}

/// `tf * ln(N / df)` summed over query tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf {
    pub tf_mode: TermFrequencyMode,
}

impl Scorer for TfIdf {
    fn score(&self, tokens: &[String], corpus: &Corpus, index: &InvertedIndex) -> ScoreMap {
        let mut scores = ScoreMap::new();
        let n = corpus.len() as f64;
        for token in tokens {
            let postings = index.postings(token);
            if postings.is_empty() {
                continue;
            }
            let idf = (n / postings.len() as f64).ln();
            for &doc_id in postings {
                let tf = term_frequency(corpus, doc_id, token, self.tf_mode);
                *scores.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
        scores
    }
}

/// BM25 with `k1` saturation and `k2` length normalization.
///
/// The arithmetic is kept exactly as the engine has always ranked:
/// `idf = ln(N - df + 0.5) / (df + 0.5)` and a term score of
/// `idf * (k1 + 1) * tf * (k1 + 1) / sat / sat` with `sat = tf + k1 * (1 - k2 + k2 * dl / avgdl)`.
/// Textbook BM25 differs in both places, so scores can be negative for very common terms.
#[derive(Debug, Clone, Copy)]
pub struct Bm25 {
    pub k1: f64,
    pub k2: f64,
    pub tf_mode: TermFrequencyMode,
}

impl Bm25 {
    pub fn idf(num_docs: usize, doc_freq: usize) -> f64 {
        let n = num_docs as f64;
        let df = doc_freq as f64;
        (n - df + 0.5).ln() / (df + 0.5)
    }

    pub fn term_score(&self, idf: f64, tf: f64, doc_len: f64, avg_doc_len: f64) -> f64 {
        let saturation = tf + self.k1 * (1.0 - self.k2 + self.k2 * doc_len / avg_doc_len);
        let numerator = (self.k1 + 1.0) * tf * (self.k1 + 1.0) / saturation;
        idf * numerator / saturation
    }
}

impl Scorer for Bm25 {
    fn score(&self, tokens: &[String], corpus: &Corpus, index: &InvertedIndex) -> ScoreMap {
        let mut scores = ScoreMap::new();
        let avgdl = corpus.average_document_length();
        for token in tokens {
            let postings = index.postings(token);
            if postings.is_empty() {
                continue;
            }
            let idf = Self::idf(corpus.len(), postings.len());
            for &doc_id in postings {
                let tf = term_frequency(corpus, doc_id, token, self.tf_mode);
                let dl = corpus.document_length(doc_id) as f64;
                *scores.entry(doc_id).or_insert(0.0) += self.term_score(idf, tf, dl, avgdl);
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use crate::tokenizer::tokenize;

    fn fixture() -> (Corpus, InvertedIndex) {
        let corpus = Corpus::build(vec![
            Document::new(0, "the quick brown fox"),
            Document::new(1, "the lazy dog"),
        ])
        .unwrap();
        let index = InvertedIndex::build(&corpus);
        (corpus, index)
    }

    #[test]
    fn tfidf_weights_rare_terms() {
        let (corpus, index) = fixture();
        let scores = TfIdf::default().score(&tokenize("fox"), &corpus, &index);
        assert_eq!(scores.len(), 1);
        assert!((scores[&0] - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn tfidf_repeated_query_tokens_accumulate() {
        let (corpus, index) = fixture();
        let scores = TfIdf::default().score(&tokenize("fox FOX"), &corpus, &index);
        assert!((scores[&0] - 2.0 * 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn bm25_matches_hand_computed_score() {
        let (corpus, index) = fixture();
        let bm25 = Bm25 { k1: 1.2, k2: 0.75, tf_mode: TermFrequencyMode::Substring };
        let scores = bm25.score(&tokenize("fox"), &corpus, &index);
        // idf = ln(1.5) / 1.5, dl = 4, avgdl = 3.5
        assert!((scores[&0] - 0.241284).abs() < 1e-5, "got {}", scores[&0]);
    }

    #[test]
    fn bm25_ubiquitous_terms_score_negative() {
        let (corpus, index) = fixture();
        let bm25 = Bm25 { k1: 1.2, k2: 0.75, tf_mode: TermFrequencyMode::Token };
        let scores = bm25.score(&tokenize("the"), &corpus, &index);
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|s| *s < 0.0));
    }

    #[test]
    fn unknown_tokens_score_nothing() {
        let (corpus, index) = fixture();
        assert!(TfIdf::default().score(&tokenize("cat"), &corpus, &index).is_empty());
        assert!(TfIdf::default().score(&[], &corpus, &index).is_empty());
    }
}
