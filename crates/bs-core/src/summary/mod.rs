//! Summarization request and result models.

pub mod model;
pub mod page_number;

pub use model::{SummarizationRequest, SummarizationResult};
pub use page_number::PageNumber;
