//! Client-side pagination over an in-memory list.
//!
//! Pages are 1-based. An empty list has zero pages but still reports page 1
//! as current so the footer never shows page 0.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

/// Selectable rows-per-page values.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    /// Start on page 1 with `page_size`, falling back to the default for
    /// sizes not offered in [`PAGE_SIZES`].
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) { page_size } else { DEFAULT_PAGE_SIZE };
        Self { page: 1, page_size }
    }

    /// `ceil(total / page_size)`.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        *self = Self::with_page_size(page_size);
    }

    /// Jump to `page`, clamped to the pages `total` rows fill.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total).max(1));
    }

    /// Pull the current page back into range after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    /// Index range of the rows on the current page.
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page.saturating_sub(1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Page numbers to show as buttons: at most [`PAGE_WINDOW`], centred on
    /// the current page where possible.
    #[must_use]
    pub fn window(&self, total: usize) -> Vec<usize> {
        let count = self.page_count(total);
        if count == 0 {
            return Vec::new();
        }
        let current = self.page.clamp(1, count);
        let start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
        let end = (start + PAGE_WINDOW - 1).min(count);
        let start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
        (start..=end).collect()
    }

    /// Footer text, e.g. `Showing 11–20 of 45`.
    #[must_use]
    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("Showing 0 of {total}");
        }
        format!("Showing {}–{} of {total}", range.start + 1, range.end)
    }
}
