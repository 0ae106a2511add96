use serde::Serialize;

use bs_core::{BookDetail, BookId, PageNumber, SummarizationResult};

use super::user_error::UserError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailStatus {
    Idle,
    Loading,
    Loaded,
    /// Terminal: the catalog has no such book.
    NotFound,
    /// Terminal: any other load failure.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SummaryStatus {
    Ready,
    Summarizing,
}

/// Snapshot of one book's detail view and its summarization slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailViewState {
    pub book_id: Option<BookId>,
    pub detail_status: DetailStatus,
    pub book: Option<BookDetail>,
    pub load_error: Option<UserError>,

    pub page_number: PageNumber,
    pub summary_status: SummaryStatus,
    pub summary: Option<SummarizationResult>,
    pub original_text: Option<String>,
    pub summary_error: Option<UserError>,
}

impl Default for DetailViewState {
    fn default() -> Self {
        Self {
            book_id: None,
            detail_status: DetailStatus::Idle,
            book: None,
            load_error: None,
            page_number: PageNumber::default(),
            summary_status: SummaryStatus::Ready,
            summary: None,
            original_text: None,
            summary_error: None,
        }
    }
}

impl DetailViewState {
    pub fn is_summarizing(&self) -> bool {
        self.summary_status == SummaryStatus::Summarizing
    }

    pub fn can_summarize(&self) -> bool {
        self.book.is_some() && !self.is_summarizing()
    }

    pub fn summary_heading(&self) -> Option<String> {
        self.summary
            .as_ref()
            .map(|summary| format!("Summary up to page {}", summary.page_number))
    }

    pub fn summary_byline(&self) -> Option<String> {
        self.summary.as_ref().map(|summary| {
            format!(
                "AI-generated summary of \"{}\" by {}",
                summary.book_title, summary.author
            )
        })
    }
}
