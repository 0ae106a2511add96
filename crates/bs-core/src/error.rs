//! Failure taxonomy shared by ports, adapters and controllers.

use serde::Serialize;
use thiserror::Error;

/// Coarse failure category used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// No response was received (connect failure, DNS, timeout).
    NetworkUnreachable,
    /// HTTP 404: missing record or misconfigured endpoint.
    NotFound,
    /// HTTP 5xx.
    ServerError,
    /// Rejected on the client before any request was sent.
    ValidationError,
    /// Anything else that is not a success.
    Unknown,
}

/// Error surfaced by a remote service port.
///
/// Adapters never swallow failures: every non-success outcome maps to one of
/// these variants, with the HTTP status when a response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("service unreachable: {message}")]
    NetworkUnreachable { message: String },

    #[error("not found{}", detail_suffix(.detail))]
    NotFound { detail: Option<String> },

    #[error("server error (HTTP {status}){}", detail_suffix(.detail))]
    ServerError { status: u16, detail: Option<String> },

    #[error("unexpected status (HTTP {status}){}", detail_suffix(.detail))]
    Unknown { status: u16, detail: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => String::new(),
    }
}

impl ServiceError {
    /// Map a non-success HTTP status onto the taxonomy.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            404 => ServiceError::NotFound { detail },
            500..=599 => ServiceError::ServerError { status, detail },
            _ => ServiceError::Unknown { status, detail },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NetworkUnreachable { .. } => ErrorKind::NetworkUnreachable,
            ServiceError::NotFound { .. } => ErrorKind::NotFound,
            ServiceError::ServerError { .. } => ErrorKind::ServerError,
            ServiceError::InvalidRequest(_) => ErrorKind::ValidationError,
            ServiceError::Unknown { .. } | ServiceError::Decode(_) => ErrorKind::Unknown,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::NotFound { .. } => Some(404),
            ServiceError::ServerError { status, .. } | ServiceError::Unknown { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
