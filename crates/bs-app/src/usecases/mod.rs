//! Controllers driving the catalog list and the book detail view.
//!
//! Each controller owns one `watch` channel of view state. Operations take
//! `&self`, so several may be in flight at once; state is only touched in
//! synchronous closures between awaits.

pub mod book_detail;
pub mod catalog_query;

pub use book_detail::{BookDetailController, SummarizeOutcome};
pub use catalog_query::CatalogQueryController;
