//! Catalog book records and text-source resolution.

pub mod formats;
pub mod model;
pub mod text_source;

pub use formats::Formats;
pub use model::{Author, BookDetail, BookSummary, UNKNOWN_AUTHOR};
