//! Single-flight summarization and result handling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use bs_app::{BookDetailController, SummarizeOutcome, SummaryStatus};
use bs_core::ports::{CatalogPort, SummarizerPort};
use bs_core::{
    Author, BookDetail, BookId, BookSummary, CatalogPage, Formats, ServiceError,
    SummarizationRequest, SummarizationResult,
};

type Reply = Result<SummarizationResult, ServiceError>;

struct OneBookCatalog;

#[async_trait]
impl CatalogPort for OneBookCatalog {
    async fn fetch_catalog_page(
        &self,
        _search_term: &str,
        _page: u32,
    ) -> Result<CatalogPage, ServiceError> {
        Ok(CatalogPage::default())
    }

    async fn fetch_book_detail(&self, book_id: BookId) -> Result<BookDetail, ServiceError> {
        let mut formats = Formats::new();
        formats.insert("text/plain; charset=us-ascii", "https://example.org/1342.txt");
        Ok(BookDetail::from(BookSummary {
            id: book_id,
            title: "Pride and Prejudice".to_string(),
            authors: vec![Author::new("Austen, Jane")],
            formats,
        }))
    }
}

/// Summarizer that blocks every call until the test releases it.
struct GatedSummarizer {
    calls: AtomicUsize,
    gates: Mutex<Vec<oneshot::Receiver<Reply>>>,
    dispatched: mpsc::UnboundedSender<SummarizationRequest>,
}

#[async_trait]
impl SummarizerPort for GatedSummarizer {
    async fn request_summary(&self, request: &SummarizationRequest) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop();
        let _ = self.dispatched.send(request.clone());
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| Err(ServiceError::Decode("dropped".into()))),
            None => Err(ServiceError::from_status(500, None)),
        }
    }
}

fn result(original_text: Option<&str>) -> SummarizationResult {
    SummarizationResult {
        book_title: "Pride and Prejudice".to_string(),
        author: "Austen, Jane".to_string(),
        page_number: 12,
        summary: "Mr. Bingley arrives at Netherfield.".to_string(),
        original_text: original_text.map(str::to_string),
    }
}

fn fixture() -> (
    Arc<GatedSummarizer>,
    oneshot::Sender<Reply>,
    mpsc::UnboundedReceiver<SummarizationRequest>,
    Arc<BookDetailController>,
) {
    let (dispatched, rx) = mpsc::unbounded_channel();
    let (gate_tx, gate_rx) = oneshot::channel();
    let summarizer = Arc::new(GatedSummarizer {
        calls: AtomicUsize::new(0),
        gates: Mutex::new(vec![gate_rx]),
        dispatched,
    });
    let controller = Arc::new(BookDetailController::new(
        Arc::new(OneBookCatalog),
        summarizer.clone(),
        "http://localhost:8000",
    ));
    (summarizer, gate_tx, rx, controller)
}

#[tokio::test]
async fn second_summarize_while_in_flight_is_rejected() {
    let (summarizer, gate, mut dispatched, controller) = fixture();
    controller.load_detail(BookId::new(1342)).await;
    controller.set_page_number("12");

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.summarize().await }
    });
    let request = tokio::time::timeout(Duration::from_secs(5), dispatched.recv())
        .await
        .expect("summary request dispatched")
        .expect("summarizer alive");
    assert_eq!(request.text_url.as_deref(), Some("https://example.org/1342.txt"));
    assert_eq!(controller.state().summary_status, SummaryStatus::Summarizing);

    assert_eq!(controller.summarize().await, SummarizeOutcome::Rejected);
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);

    gate.send(Ok(result(Some("It is a truth universally acknowledged")))).unwrap();
    assert_eq!(first.await.unwrap(), SummarizeOutcome::Completed);

    let state = controller.state();
    assert_eq!(state.summary_status, SummaryStatus::Ready);
    assert_eq!(
        state.summary_byline().as_deref(),
        Some("AI-generated summary of \"Pride and Prejudice\" by Austen, Jane")
    );
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn summary_without_original_text_is_not_an_error() {
    let (_, gate, _dispatched, controller) = fixture();
    controller.load_detail(BookId::new(1342)).await;

    gate.send(Ok(result(None))).unwrap();
    assert_eq!(controller.summarize().await, SummarizeOutcome::Completed);

    let state = controller.state();
    assert!(state.summary.is_some());
    assert_eq!(state.original_text, None);
    assert_eq!(state.summary_error, None);
}

#[tokio::test]
async fn new_summarize_clears_previous_result() {
    let (_, gate, _dispatched, controller) = fixture();
    controller.load_detail(BookId::new(1342)).await;

    gate.send(Ok(result(Some("excerpt")))).unwrap();
    assert_eq!(controller.summarize().await, SummarizeOutcome::Completed);

    // no gate left: the next call fails with a server error
    assert_eq!(controller.summarize().await, SummarizeOutcome::Failed);
    let state = controller.state();
    assert_eq!(state.summary, None);
    assert_eq!(state.original_text, None);
    assert_eq!(
        state.summary_error.map(|e| e.message).as_deref(),
        Some("Failed to generate summary. Please try again later.")
    );
}
