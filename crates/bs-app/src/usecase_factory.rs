//! Factory functions for creating controllers with AppDeps

use crate::deps::AppDeps;
use crate::usecases::{BookDetailController, CatalogQueryController};

impl AppDeps {
    /// Fresh catalog controller for a list view.
    pub fn catalog_query(&self) -> CatalogQueryController {
        CatalogQueryController::new(self.catalog.clone(), self.backend_url.clone())
    }

    /// Fresh detail controller; each detail view owns its own instance.
    pub fn book_detail(&self) -> BookDetailController {
        BookDetailController::new(
            self.catalog.clone(),
            self.summarizer.clone(),
            self.backend_url.clone(),
        )
    }
}
