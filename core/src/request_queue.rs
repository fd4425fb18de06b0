use crate::config::MIN_IN_DAY;
use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::search_server::SearchServer;
use std::collections::VecDeque;

struct QueryResult {
    empty: bool,
}

/// Remembers the outcome of the most recent requests made through it and
/// counts how many of them found nothing.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_capacity(server, MIN_IN_DAY)
    }

    pub fn with_capacity(server: &'a SearchServer, capacity: usize) -> Self {
        Self { server, requests: VecDeque::with_capacity(capacity), capacity, no_result_requests: 0 }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let documents = self.server.find_top_documents(raw_query)?;
        self.record(&documents);
        Ok(documents)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        let documents = self.server.find_top_documents_by_status(raw_query, status)?;
        self.record(&documents);
        Ok(documents)
    }

    pub fn add_find_request_with<F>(&mut self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let documents = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(&documents);
        Ok(documents)
    }

    /// Requests among the remembered ones that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, documents: &[Document]) {
        if self.capacity == 0 {
            return;
        }
        if self.requests.len() == self.capacity {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.empty {
                    self.no_result_requests -= 1;
                }
                tracing::trace!(evicted_empty = evicted.empty, "request history evicted oldest entry");
            }
        }
        let empty = documents.is_empty();
        if empty {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryResult { empty });
    }
}
