use async_trait::async_trait;

use crate::book::BookDetail;
use crate::catalog::CatalogPage;
use crate::error::ServiceError;
use crate::ids::BookId;

#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch one page of books matching `search_term`.
    ///
    /// An empty term lists the whole catalog. `page` is 1-based.
    async fn fetch_catalog_page(
        &self,
        search_term: &str,
        page: u32,
    ) -> Result<CatalogPage, ServiceError>;

    /// Fetch the detail record of one book.
    ///
    /// Error semantics:
    /// - NotFound          : no book with this id
    /// - NetworkUnreachable: no response received
    async fn fetch_book_detail(&self, book_id: BookId) -> Result<BookDetail, ServiceError>;
}
