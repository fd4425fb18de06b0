use crate::config::SearchConfig;
use crate::document::{DocId, Document, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::Query;
use std::collections::BTreeMap;

/// Score every document matching the query's plus words by TF-IDF, drop those
/// containing a minus word, then keep the ones `accept` approves.
///
/// Words missing from the index are skipped. The output is in ascending id
/// order; callers sort.
pub fn find_all_documents<F>(index: &InvertedIndex, query: &Query, accept: F) -> Vec<Document>
where
    F: Fn(DocId, DocumentStatus, i32) -> bool,
{
    if query.plus_words.is_empty() {
        return Vec::new();
    }

    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let (Some(postings), Some(idf)) = (index.postings(word), index.inverse_document_freq(word)) else {
            continue;
        };
        for (&id, &tf) in postings {
            *relevance.entry(id).or_insert(0.0) += idf * tf;
        }
    }

    for word in &query.minus_words {
        if let Some(postings) = index.postings(word) {
            for id in postings.keys() {
                relevance.remove(id);
            }
        }
    }

    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            let data = index.document_data(id).unwrap_or_default();
            accept(id, data.status, data.rating).then(|| Document::new(id, relevance, data.rating))
        })
        .collect()
}

/// Sort by relevance descending, then truncate to the configured result count.
///
/// Documents within epsilon of the first document of their group count as
/// equally relevant and are ordered by rating descending. Grouping is anchored
/// on the group's first document, so a group never spans more than epsilon.
pub fn top_documents(mut documents: Vec<Document>, config: &SearchConfig) -> Vec<Document> {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    let mut start = 0;
    while start < documents.len() {
        let anchor = documents[start].relevance;
        let end = documents[start + 1..]
            .iter()
            .position(|doc| anchor - doc.relevance >= config.relevance_epsilon)
            .map_or(documents.len(), |offset| start + 1 + offset);
        documents[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
        start = end;
    }

    documents.truncate(config.max_result_document_count);
    documents
}
