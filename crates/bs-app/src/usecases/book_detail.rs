use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

use bs_core::book::text_source;
use bs_core::ports::{CatalogPort, SummarizerPort};
use bs_core::{BookId, ErrorKind, PageNumber, SummarizationRequest};

use crate::messages;
use crate::models::{DetailStatus, DetailViewState, SummaryStatus};

/// How a `summarize` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizeOutcome {
    /// A summary was stored.
    Completed,
    /// An error message was stored.
    Failed,
    /// Another summarization was still running; nothing was sent.
    Rejected,
}

/// Detail view of a single book plus its summarization slot.
///
/// One instance per opened book. The detail is fetched at most once;
/// summarization is single-flight.
pub struct BookDetailController {
    catalog: Arc<dyn CatalogPort>,
    summarizer: Arc<dyn SummarizerPort>,
    backend_url: String,
    state: watch::Sender<DetailViewState>,
    detail_requested: AtomicBool,
}

impl BookDetailController {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        summarizer: Arc<dyn SummarizerPort>,
        backend_url: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(DetailViewState::default());
        Self {
            catalog,
            summarizer,
            backend_url: backend_url.into(),
            state,
            detail_requested: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> DetailViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailViewState> {
        self.state.subscribe()
    }

    /// Fetch the book record. Only the first call does anything; failures are
    /// terminal for this instance.
    pub async fn load_detail(&self, book_id: BookId) {
        if self.detail_requested.swap(true, Ordering::SeqCst) {
            debug!(%book_id, "Detail already requested, ignoring");
            return;
        }

        self.state.send_modify(|state| {
            state.book_id = Some(book_id);
            state.detail_status = DetailStatus::Loading;
            state.load_error = None;
        });

        let span = info_span!("usecase.book_detail.load", %book_id);
        let result = async {
            debug!("Fetching book detail");
            self.catalog.fetch_book_detail(book_id).await
        }
        .instrument(span.clone())
        .await;

        let _entered = span.enter();
        self.state.send_modify(|state| match result {
            Ok(book) => {
                info!(title = book.title(), "Book detail loaded");
                state.book = Some(book);
                state.detail_status = DetailStatus::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "Book detail failed to load");
                state.detail_status = if err.kind() == ErrorKind::NotFound {
                    DetailStatus::NotFound
                } else {
                    DetailStatus::Failed
                };
                state.load_error = Some(messages::detail_error(&err, &self.backend_url));
            }
        });
    }

    /// Store the summarization target parsed from raw user input.
    pub fn set_page_number(&self, input: &str) -> PageNumber {
        let page_number = PageNumber::parse_lenient(input);
        self.state.send_if_modified(|state| {
            let changed = state.page_number != page_number;
            state.page_number = page_number;
            changed
        });
        page_number
    }

    /// Request a summary of the loaded book up to the selected page.
    pub async fn summarize(&self) -> SummarizeOutcome {
        let mut outcome = None;
        let mut request = None;
        self.state.send_if_modified(|state| {
            if state.summary_status == SummaryStatus::Summarizing {
                outcome = Some(SummarizeOutcome::Rejected);
                return false;
            }
            let Some(book) = state.book.as_ref() else {
                state.summary_error = Some(messages::missing_book());
                outcome = Some(SummarizeOutcome::Failed);
                return true;
            };

            request = Some(SummarizationRequest::new(
                book.id(),
                state.page_number,
                text_source::resolve(book.formats()).map(str::to_string),
            ));
            state.summary = None;
            state.original_text = None;
            state.summary_error = None;
            state.summary_status = SummaryStatus::Summarizing;
            true
        });

        if let Some(outcome) = outcome {
            if outcome == SummarizeOutcome::Rejected {
                debug!("Summarization already in flight, rejecting");
            }
            return outcome;
        }
        let Some(request) = request else {
            return SummarizeOutcome::Failed;
        };

        let span = info_span!(
            "usecase.book_detail.summarize",
            book_id = %request.book_id,
            page_number = %request.page_number,
        );
        let result = async {
            if request.text_url.is_none() {
                debug!("No plain-text format, summarizer will resolve the text");
            }
            self.summarizer.request_summary(&request).await
        }
        .instrument(span.clone())
        .await;

        let _entered = span.enter();
        let mut outcome = SummarizeOutcome::Completed;
        self.state.send_modify(|state| {
            state.summary_status = SummaryStatus::Ready;
            match result {
                Ok(result) => {
                    info!(
                        has_original_text = result.has_original_text(),
                        "Summary generated"
                    );
                    state.original_text = result.original_text.clone();
                    state.summary = Some(result);
                }
                Err(err) => {
                    warn!(error = %err, "Summarization failed");
                    state.summary_error = Some(messages::summary_error(&err, &self.backend_url));
                    outcome = SummarizeOutcome::Failed;
                }
            }
        });
        outcome
    }
}
