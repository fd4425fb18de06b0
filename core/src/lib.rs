//! In-memory document search: TF-IDF ranking over an inverted index with
//! plus/minus query words and caller-supplied filters.

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod search_server;
pub mod tokenizer;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT, MIN_IN_DAY, RELEVANCE_EPSILON};
pub use document::{DocId, Document, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::{DocumentData, InvertedIndex};
pub use paginator::{paginate, Page, Paginator};
pub use query::Query;
pub use request_queue::RequestQueue;
pub use search_server::SearchServer;
