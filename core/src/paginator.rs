use crate::error::{Result, SearchError};
use std::fmt;
use std::ops::Deref;

/// One page of a paginated result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Deref for Page<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<'a, T: fmt::Display> fmt::Display for Page<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Splits a result list into pages of `page_size` items; the last page may be shorter.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(SearchError::EmptyPagination);
        }
        if page_size == 0 {
            return Err(SearchError::ZeroPageSize);
        }
        let pages = items.chunks(page_size).map(|items| Page { items }).collect();
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<'a, T>> {
        self.pages.iter()
    }
}

impl<'p, 'a, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'p Page<'a, T>;
    type IntoIter = std::slice::Iter<'p, Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_shorter() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let pages = paginate(&items, 2).unwrap();
        let sizes: Vec<_> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 2, 2, 1]);
        assert_eq!(pages.iter().last().unwrap().to_vec(), vec![7]);
    }

    #[test]
    fn page_larger_than_input() {
        let items = ["a", "b"];
        assert_eq!(paginate(&items, 10).unwrap().len(), 1);
    }

    #[test]
    fn rejects_empty_input_and_zero_size() {
        let empty: [i32; 0] = [];
        assert_eq!(paginate(&empty, 2).unwrap_err(), SearchError::EmptyPagination);
        assert_eq!(paginate(&[1], 0).unwrap_err(), SearchError::ZeroPageSize);
    }

    #[test]
    fn page_display_concatenates_items() {
        let items = [1, 2, 3];
        let pages = paginate(&items, 2).unwrap();
        let rendered: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["12", "3"]);
    }
}
