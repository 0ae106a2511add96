use serde::{Deserialize, Deserializer, Serialize};

use super::page_number::PageNumber;
use crate::ids::BookId;

/// Body of a summarization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRequest {
    pub book_id: BookId,
    pub page_number: PageNumber,
    /// Direct link to a plain-text rendition. When absent the summarizer
    /// resolves the text on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_url: Option<String>,
}

impl SummarizationRequest {
    pub fn new(book_id: BookId, page_number: PageNumber, text_url: Option<String>) -> Self {
        Self {
            book_id,
            page_number,
            text_url,
        }
    }
}

/// Summary returned by the summarization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub book_title: String,
    pub author: String,
    pub page_number: u32,
    pub summary: String,
    /// Excerpt that was summarized; only present when the service echoes it.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_text: Option<String>,
}

impl SummarizationResult {
    pub fn has_original_text(&self) -> bool {
        self.original_text.is_some()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}
