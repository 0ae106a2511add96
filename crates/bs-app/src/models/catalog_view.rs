use serde::Serialize;

use bs_core::catalog::has_pagination;
use bs_core::{BookSummary, QueryState};

use super::user_error::UserError;

pub const EMPTY_RESULT_MESSAGE: &str = "No books found. Try another search term.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Snapshot of a catalog listing.
///
/// `books` is empty unless `status` is `Loaded`; `error` is set only when
/// `status` is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogViewState {
    pub query: QueryState,
    pub status: CatalogStatus,
    pub books: Vec<BookSummary>,
    pub error: Option<UserError>,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self {
            query: QueryState::new(),
            status: CatalogStatus::Idle,
            books: Vec::new(),
            error: None,
        }
    }
}

impl CatalogViewState {
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// A load finished and matched nothing.
    pub fn is_empty_result(&self) -> bool {
        self.status == CatalogStatus::Loaded && self.books.is_empty()
    }

    pub fn empty_result_message(&self) -> Option<&'static str> {
        self.is_empty_result().then_some(EMPTY_RESULT_MESSAGE)
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.query.can_advance()
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_loading() && self.query.can_go_back()
    }

    pub fn show_pagination(&self) -> bool {
        has_pagination(self.query.last_page())
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.query.current_page(),
            self.query.last_page()
        )
    }
}
