use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use std::collections::BTreeSet;

/// A parsed free-text query: words that must match and words that exclude a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Unique, kept sorted.
    pub plus_words: BTreeSet<String>,
    /// May hold duplicates; they are harmless.
    pub minus_words: Vec<String>,
}

impl Query {
    /// Parse `raw` against the index's stop words. A word starting with `-`
    /// becomes a minus word with the sign stripped.
    pub fn parse(raw: &str, index: &InvertedIndex) -> Result<Self> {
        let mut query = Query::default();
        if raw.is_empty() {
            return Ok(query);
        }
        for word in index.split_into_words_no_stop(raw)? {
            match word.strip_prefix('-') {
                Some(minus) => query.minus_words.push(minus.to_string()),
                None => {
                    query.plus_words.insert(word);
                }
            }
        }
        Ok(query)
    }

    /// Reject `--word` and a bare `-`.
    pub fn validate(&self) -> Result<()> {
        for word in &self.minus_words {
            if word.starts_with('-') {
                return Err(SearchError::DoubleMinus(word.clone()));
            }
            if word.is_empty() {
                return Err(SearchError::EmptyMinusTerm);
            }
        }
        Ok(())
    }

    /// Parse and validate in one step.
    pub fn parse_checked(raw: &str, index: &InvertedIndex) -> Result<Self> {
        let query = Self::parse(raw, index)?;
        query.validate()?;
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> InvertedIndex {
        InvertedIndex::new(["and", "in"]).unwrap()
    }

    #[test]
    fn empty_query() {
        let q = Query::parse("", &index()).unwrap();
        assert!(q.plus_words.is_empty() && q.minus_words.is_empty());
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let q = Query::parse("cat and -dog cat -dog in", &index()).unwrap();
        assert_eq!(q.plus_words.iter().collect::<Vec<_>>(), vec!["cat"]);
        assert_eq!(q.minus_words, vec!["dog", "dog"]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn double_minus_rejected() {
        let err = Query::parse_checked("cat --dog", &index()).unwrap_err();
        assert_eq!(err, SearchError::DoubleMinus("-dog".into()));
    }

    #[test]
    fn bare_minus_rejected() {
        assert_eq!(Query::parse_checked("cat -", &index()), Err(SearchError::EmptyMinusTerm));
    }

    #[test]
    fn invalid_character_propagates() {
        assert_eq!(
            Query::parse("ca\u{7}t", &index()),
            Err(SearchError::InvalidCharacter("ca\u{7}t".into()))
        );
    }
}
