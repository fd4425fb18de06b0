use crate::error::{Result, SearchError};
use std::collections::HashSet;

/// A word is valid when it holds no control characters (codes below 0x20).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

/// Split text on ASCII spaces, dropping empty fragments.
///
/// Every produced word is checked for control characters; the first offending
/// word is reported in the error.
pub fn split_into_words(text: &str) -> Result<Vec<String>> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            if is_valid_word(word) {
                Ok(word.to_string())
            } else {
                Err(SearchError::InvalidCharacter(word.to_string()))
            }
        })
        .collect()
}

/// Same as [`split_into_words`], then removes stop words. Stop words are
/// still validated before they are dropped.
pub fn split_into_words_no_stop(text: &str, stop_words: &HashSet<String>) -> Result<Vec<String>> {
    let mut words = split_into_words(text)?;
    words.retain(|word| !stop_words.contains(word));
    Ok(words)
}
