use std::collections::HashMap;

use crate::corpus::Corpus;
use crate::DocId;

/// Term → ids of the documents containing it.
///
/// Each posting list holds a document at most once and is sorted by doc id. Term frequency
/// is recovered from the corpus at scoring time, not from the postings.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::new();
        for doc in corpus.iter() {
            let Some(terms) = corpus.term_counts(doc.id) else { continue };
            for term in terms.keys() {
                postings.entry(term.clone()).or_default().push(doc.id);
            }
        }
        for list in postings.values_mut() {
            list.sort_unstable();
            list.dedup();
        }
        Self { postings }
    }

    /// Documents containing `term`; empty for unseen terms.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }
}
