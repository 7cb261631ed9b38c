//! Pagination utilities for Backlog API responses.
//!
//! Backlog addresses pages by `offset`/`count` rather than page numbers,
//! and its list endpoints never report a total: the only end-of-results
//! signal is a page shorter than the requested count.

use serde::{Deserialize, Serialize};

/// A page of results from the Backlog API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Offset of the first item on this page.
    pub offset: u64,
    /// Number of items requested.
    pub count: u32,
    /// Whether another page may exist.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a page from items and the request window that produced it.
    ///
    /// A full page suggests more results; a short page is the last one.
    #[must_use]
    pub fn new(items: Vec<T>, offset: u64, count: u32) -> Self {
        let has_more = items.len() >= count as usize;
        Self {
            items,
            offset,
            count,
            has_more,
        }
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            count: self.count,
            has_more: self.has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Offset of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl PaginationParams {
    /// Create pagination params for a specific window.
    #[must_use]
    pub fn for_offset(offset: u64, count: u32) -> Self {
        Self {
            offset: Some(offset),
            count: Some(count),
        }
    }
}
