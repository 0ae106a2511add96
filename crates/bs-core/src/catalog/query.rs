use serde::Serialize;

use super::pagination;

/// Search term and page position of a catalog listing.
///
/// Invariants:
/// - `current_page >= 1`
/// - changing the search term resets `current_page` to 1 and forgets the
///   page count of the previous term
/// - `current_page <= total_pages` once the page count is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    search_term: String,
    current_page: u32,
    total_pages: Option<u32>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            total_pages: None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page count for the current term, `None` until a page has loaded.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Highest reachable page; an unknown count behaves as a single page.
    pub fn last_page(&self) -> u32 {
        self.total_pages.unwrap_or(1)
    }

    /// Returns `true` when the term actually changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.current_page = 1;
        self.total_pages = None;
        true
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn can_advance(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Move one page forward; `false` when already on the last page.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Move one page back; `false` when already on the first page.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Record the result count of a committed page and clamp the position.
    pub fn apply_count(&mut self, count: u64) {
        let total = pagination::total_pages(count);
        self.total_pages = Some(total);
        self.current_page = self.current_page.clamp(1, total);
    }

    /// Whether this state still targets `(term, page)`.
    pub fn targets(&self, term: &str, page: u32) -> bool {
        self.search_term == term && self.current_page == page
    }
}
