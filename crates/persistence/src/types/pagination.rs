//! Pagination types for list results.
//!
//! Pages are offset-based and zero-indexed. A [`PageRequest`] says which slice
//! to fetch; a [`Page`] carries that slice plus the total element count from
//! which every other piece of page metadata is derived.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,

    /// Maximum number of items on the page. Always at least 1.
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a page request. A size of zero is raised to one.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Returns the number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Creates the request for the following page.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }

    /// Creates the request for the preceding page, or the first page if
    /// this is already the first one.
    pub fn previous_or_first(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            size: self.size,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,

    /// The request this page answers.
    pub request: PageRequest,

    /// Total number of matching items across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            request,
            total_elements,
        }
    }

    /// Creates an empty page for the given request.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Returns the zero-based index of this page.
    pub fn number(&self) -> u32 {
        self.request.page
    }

    /// Returns the requested page size.
    pub fn size(&self) -> u32 {
        self.request.size
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size))
    }

    /// Returns true if a page follows this one.
    pub fn has_next(&self) -> bool {
        u64::from(self.request.page) + 1 < self.total_pages()
    }

    /// Returns true if a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.request.page > 0
    }

    /// Returns true if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
