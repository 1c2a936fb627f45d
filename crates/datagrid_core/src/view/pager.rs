//! Page arithmetic over the view sequence.
//!
//! The pager never fails: requests outside the valid page range are
//! ignored and report `false`.

use serde::Serialize;

/// The "Showing start-end of total" triple for the current page.
///
/// `start` and `end` are 1-based view positions; both are 0 when the
/// view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    /// First position shown.
    pub start: usize,
    /// Last position shown.
    pub end: usize,
    /// View length.
    pub total: usize,
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
}

impl Pager {
    /// Creates a pager on page 1. A zero size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for a view of `view_len` records, never below 1.
    #[must_use]
    pub fn page_count(&self, view_len: usize) -> usize {
        view_len.div_ceil(self.page_size).max(1)
    }

    /// Returns the records of the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, view: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= view.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(view.len());
        &view[start..end]
    }

    /// Moves to page `page`.
    ///
    /// Returns `false` without changing anything when `page` is the
    /// current page or outside `1..=page_count`.
    pub fn go_to_page(&mut self, page: usize, view_len: usize) -> bool {
        if page == self.current_page || page == 0 || page > self.page_count(view_len) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Changes the page size and returns to page 1.
    ///
    /// A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.current_page = 1;
        true
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls the current page back into `1..=page_count`.
    pub fn clamp(&mut self, view_len: usize) {
        self.current_page = self.current_page.clamp(1, self.page_count(view_len));
    }

    /// Moves to the first page.
    pub fn first_page(&mut self, view_len: usize) -> bool {
        self.go_to_page(1, view_len)
    }

    /// Moves one page back.
    pub fn previous_page(&mut self, view_len: usize) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1), view_len)
    }

    /// Moves one page forward.
    pub fn next_page(&mut self, view_len: usize) -> bool {
        self.go_to_page(self.current_page + 1, view_len)
    }

    /// Moves to the last page.
    pub fn last_page(&mut self, view_len: usize) -> bool {
        self.go_to_page(self.page_count(view_len), view_len)
    }

    /// Returns up to `max_visible` consecutive page numbers centred on
    /// the current page, shifted to stay within `1..=page_count`.
    #[must_use]
    pub fn page_window(&self, view_len: usize, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 {
            return Vec::new();
        }
        let count = self.page_count(view_len);
        let mut start = self.current_page.saturating_sub(max_visible / 2).max(1);
        let end = count.min(start + max_visible - 1);
        if end + 1 - start < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
        (start..=end).collect()
    }

    /// Returns the range of view positions on the current page.
    #[must_use]
    pub fn page_range(&self, view_len: usize) -> PageRange {
        if view_len == 0 {
            return PageRange {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        let start = ((self.current_page - 1) * self.page_size + 1).min(view_len);
        let end = (self.current_page * self.page_size).min(view_len);
        PageRange {
            start,
            end,
            total: view_len,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(10)
    }
}
