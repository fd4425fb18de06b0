use crate::DocId;
use thiserror::Error;

/// Errors surfaced by the search engine. None of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("word `{0}` contains control characters")]
    InvalidCharacter(String),

    #[error("document id {0} is negative")]
    NegativeId(DocId),

    #[error("document id {0} has already been added")]
    DuplicateId(DocId),

    #[error("document {0} is empty")]
    EmptyDocument(DocId),

    #[error("query word `-{0}` starts with two minus signs")]
    DoubleMinus(String),

    #[error("query contains a bare minus sign")]
    EmptyMinusTerm,

    #[error("position {position} is out of range for {count} documents")]
    OutOfRange { position: usize, count: usize },

    #[error("nothing to paginate")]
    EmptyPagination,

    #[error("page size must be positive")]
    ZeroPageSize,
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// True when the error comes from the shape of a query rather than from ingestion.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidCharacter(_) | SearchError::DoubleMinus(_) | SearchError::EmptyMinusTerm
        )
    }
}
