use crate::document::{DocId, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_into_words_no_stop};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Metadata kept for every accepted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Term -> (document id -> term frequency), plus per-document metadata.
///
/// The index only grows: documents are never updated or removed once accepted.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    stop_words: HashSet<String>,
    word_to_document_freqs: HashMap<String, BTreeMap<DocId, f64>>, // postings ordered by doc id
    documents: HashMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl InvertedIndex {
    /// Build an empty index with the given stop words. Empty words are ignored,
    /// words with control characters are rejected.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(SearchError::InvalidCharacter(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { stop_words: set, ..Self::default() })
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn split_into_words_no_stop(&self, text: &str) -> Result<Vec<String>> {
        split_into_words_no_stop(text, &self.stop_words)
    }

    /// Ingest one document. All checks run before anything is mutated, so a
    /// failed call leaves the index untouched.
    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if id < 0 {
            return Err(SearchError::NegativeId(id));
        }
        if self.documents.contains_key(&id) {
            return Err(SearchError::DuplicateId(id));
        }
        if text.is_empty() {
            return Err(SearchError::EmptyDocument(id));
        }
        let words = self.split_into_words_no_stop(text)?;

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for word in &words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        let total = words.len() as f64;
        for (word, count) in counts {
            self.word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .insert(id, f64::from(count) / total);
        }

        self.documents.insert(id, DocumentData { rating: compute_average_rating(ratings), status });
        self.document_ids.push(id);
        tracing::debug!(document_id = id, words = words.len(), %status, "document added");
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.document_ids.len()
    }

    /// Id of the document accepted at `position` (0-based insertion order).
    pub fn document_id_at(&self, position: usize) -> Result<DocId> {
        self.document_ids
            .get(position)
            .copied()
            .ok_or(SearchError::OutOfRange { position, count: self.document_ids.len() })
    }

    pub fn document_data(&self, id: DocId) -> Option<DocumentData> {
        self.documents.get(&id).copied()
    }

    /// Postings for a word, `None` when the word was never indexed.
    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    /// ln(N / df). `None` for words absent from the index.
    pub fn inverse_document_freq(&self, word: &str) -> Option<f64> {
        self.postings(word)
            .map(|postings| (self.document_count() as f64 / postings.len() as f64).ln())
    }

    pub fn contains(&self, word: &str, id: DocId) -> bool {
        self.postings(word).is_some_and(|postings| postings.contains_key(&id))
    }
}

/// Integer mean of the ratings, truncated toward zero; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
