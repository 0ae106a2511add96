//! User-facing wording for service failures.
//!
//! Each surface (catalog list, book detail, summary) phrases the same
//! failure kinds differently.

use bs_core::{ErrorKind, ServiceError};

use crate::models::UserError;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const SELECT_BOOK_FIRST: &str = "Select a book before requesting a summary.";

fn unreachable(base_url: &str) -> String {
    format!(
        "Cannot connect to the book server. Please make sure the backend is running at {base_url}."
    )
}

pub fn catalog_error(err: &ServiceError, base_url: &str) -> UserError {
    let kind = err.kind();
    let message = match kind {
        ErrorKind::NetworkUnreachable => unreachable(base_url),
        ErrorKind::NotFound => {
            "Book service endpoint not found. Please check API configuration.".to_string()
        }
        ErrorKind::ServerError => {
            "Book server encountered an error. Please try again later.".to_string()
        }
        ErrorKind::ValidationError | ErrorKind::Unknown => {
            "Failed to load books. Please try again later.".to_string()
        }
    };
    UserError::new(kind, message)
}

pub fn detail_error(err: &ServiceError, base_url: &str) -> UserError {
    let kind = err.kind();
    let message = match kind {
        ErrorKind::NetworkUnreachable => unreachable(base_url),
        ErrorKind::NotFound => BOOK_NOT_FOUND.to_string(),
        _ => "Failed to load book details. Please try again later.".to_string(),
    };
    UserError::new(kind, message)
}

pub fn summary_error(err: &ServiceError, base_url: &str) -> UserError {
    let kind = err.kind();
    let message = match kind {
        ErrorKind::NetworkUnreachable => unreachable(base_url),
        ErrorKind::NotFound => "Summary service endpoint not found.".to_string(),
        _ => "Failed to generate summary. Please try again later.".to_string(),
    };
    UserError::new(kind, message)
}

pub fn missing_book() -> UserError {
    UserError::new(ErrorKind::ValidationError, SELECT_BOOK_FIRST)
}
