//! Page arithmetic for list views

use serde::{Deserialize, Serialize};

/// Default page size for list views
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-indexed page over some ordered collection.
///
/// Both fields are clamped to at least 1 on construction, so every value of
/// this type addresses a valid (possibly empty) window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Same page size, different page
    pub fn with_page(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }

    /// New page size, back on the first page
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Back on the first page, same page size
    pub fn first(self) -> Self {
        self.with_page(1)
    }

    /// Index of the first element of this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` elements (never zero)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// The window of `items` this page addresses; empty past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}
