//! Observable state published by the controllers.

pub mod catalog_view;
pub mod detail_view;
pub mod user_error;

pub use catalog_view::{CatalogStatus, CatalogViewState};
pub use detail_view::{DetailStatus, DetailViewState, SummaryStatus};
pub use user_error::UserError;
