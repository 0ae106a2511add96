use async_trait::async_trait;

use crate::error::ServiceError;
use crate::summary::{SummarizationRequest, SummarizationResult};

#[async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Generate a summary of a book up to the requested page.
    ///
    /// Requirements:
    /// - exactly one outbound call per invocation, no retry
    /// - a result without an echoed excerpt is a success
    async fn request_summary(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, ServiceError>;
}
