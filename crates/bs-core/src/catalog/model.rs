use serde::{Deserialize, Serialize};

use super::pagination;
use crate::book::BookSummary;

/// One page of catalog search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<BookSummary>,
    /// Total matching records across all pages.
    #[serde(default)]
    pub count: u64,
}

impl CatalogPage {
    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
