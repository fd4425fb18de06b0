use search_core::tokenizer::{split_into_words, split_into_words_no_stop};
use search_core::SearchError;
use std::collections::HashSet;

#[test]
fn it_keeps_punctuation_and_case() {
    let words = split_into_words("Running, runner's RUN!").unwrap();
    assert_eq!(words, vec!["Running,", "runner's", "RUN!"]);
}

#[test]
fn it_filters_stopwords() {
    let stop: HashSet<String> = ["the", "and"].iter().map(|s| s.to_string()).collect();
    let words = split_into_words_no_stop("The quick brown fox and the lazy dog", &stop).unwrap();
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    // matching is exact, so the capitalised form survives
    assert!(words.contains(&"The".to_string()));
}

#[test]
fn it_reports_the_offending_word() {
    let err = split_into_words("fine\nline").unwrap_err();
    assert_eq!(err, SearchError::InvalidCharacter("fine\nline".into()));
}

#[test]
fn it_handles_blank_text() {
    assert!(split_into_words("").unwrap().is_empty());
    assert!(split_into_words("     ").unwrap().is_empty());
}
