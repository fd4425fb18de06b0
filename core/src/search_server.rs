use crate::config::SearchConfig;
use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::ranking::{find_all_documents, top_documents};
use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// In-memory search server: document ingestion plus ranked queries.
#[derive(Debug, Default)]
pub struct SearchServer {
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    /// A server without stop words.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Stop words given as a single space-separated string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::from_stop_words(split_into_words(text)?)
    }

    pub fn with_config<I, S>(stop_words: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { index: InvertedIndex::new(stop_words)?, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        self.index.stop_words()
    }

    pub fn split_into_words(&self, text: &str) -> Result<Vec<String>> {
        split_into_words(text)
    }

    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.index.add_document(id, text, status, ratings)
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    pub fn document_id_at(&self, position: usize) -> Result<DocId> {
        self.index.document_id_at(position)
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| document_status == status)
    }

    /// Top documents accepted by `predicate(id, status, rating)`.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse_checked(raw_query, &self.index)?;
        let matched = find_all_documents(&self.index, &query, predicate);
        tracing::trace!(query = raw_query, matched = matched.len(), "query evaluated");
        Ok(top_documents(matched, &self.config))
    }

    /// Plus words of the query found in the document, sorted, with the
    /// document's status. Any matching minus word empties the list.
    ///
    /// Unknown ids are not an error: they match nothing and report `Actual`.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse_checked(raw_query, &self.index)?;
        let status = self.index.document_data(id).map(|data| data.status).unwrap_or_default();

        if query.minus_words.iter().any(|word| self.index.contains(word, id)) {
            return Ok((Vec::new(), status));
        }
        let words: Vec<String> = query
            .plus_words
            .into_iter()
            .filter(|word| self.index.contains(word, id))
            .collect();
        Ok((words, status))
    }
}
