//! booksum application orchestration layer
//!
//! This crate owns the controllers that sit between user input and the remote
//! services: catalog search/pagination and per-book detail + summarization.
//! Controllers depend only on the port traits from `bs-core`.

pub mod deps;
pub mod messages;
pub mod models;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use models::{
    CatalogStatus, CatalogViewState, DetailStatus, DetailViewState, SummaryStatus, UserError,
};
pub use usecases::{BookDetailController, CatalogQueryController, SummarizeOutcome};
