//! # bs-core
//!
//! Core domain models and port contracts for booksum.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! catalog records, pagination math, text-source resolution, page-number
//! validation and the error taxonomy shared by every adapter.

// Public module exports
pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod ports;
pub mod summary;

// Re-export commonly used types at the crate root
pub use book::{Author, BookDetail, BookSummary, Formats};
pub use catalog::{CatalogPage, QueryState, PAGE_SIZE};
pub use config::AppConfig;
pub use error::{ErrorKind, ServiceError};
pub use ids::BookId;
pub use summary::{PageNumber, SummarizationRequest, SummarizationResult};
