//! Out-of-order completions must never overwrite the newest query.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use bs_app::{CatalogQueryController, CatalogStatus};
use bs_core::ports::CatalogPort;
use bs_core::{BookDetail, BookId, BookSummary, CatalogPage, ServiceError};

type Reply = Result<CatalogPage, ServiceError>;

/// Catalog whose responses are released by the test, one gate per
/// `(term, page)`. Queries without a gate answer immediately with 100 hits.
struct GatedCatalog {
    gates: Mutex<HashMap<(String, u32), oneshot::Receiver<Reply>>>,
    dispatched: mpsc::UnboundedSender<(String, u32)>,
}

impl GatedCatalog {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<(String, u32)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let catalog = Arc::new(Self {
            gates: Mutex::new(HashMap::new()),
            dispatched: tx,
        });
        (catalog, rx)
    }

    fn gate(&self, term: &str, page: u32) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert((term.to_string(), page), rx);
        tx
    }
}

#[async_trait]
impl CatalogPort for GatedCatalog {
    async fn fetch_catalog_page(&self, search_term: &str, page: u32) -> Reply {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(&(search_term.to_string(), page));
        let _ = self.dispatched.send((search_term.to_string(), page));
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| {
                Err(ServiceError::NetworkUnreachable {
                    message: "gate dropped".to_string(),
                })
            }),
            None => Ok(page_with(100, 0)),
        }
    }

    async fn fetch_book_detail(&self, book_id: BookId) -> Result<BookDetail, ServiceError> {
        Err(ServiceError::NotFound {
            detail: Some(format!("no detail for {book_id}")),
        })
    }
}

fn page_with(count: u64, first_id: u64) -> CatalogPage {
    CatalogPage {
        results: (first_id..first_id + 2)
            .map(|id| BookSummary {
                id: BookId::new(id),
                title: format!("Book {id}"),
                authors: Vec::new(),
                formats: Default::default(),
            })
            .collect(),
        count,
    }
}

async fn next_dispatch(rx: &mut mpsc::UnboundedReceiver<(String, u32)>) -> (String, u32) {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("request should be dispatched")
        .expect("catalog dropped")
}

async fn loaded_controller() -> (
    Arc<GatedCatalog>,
    mpsc::UnboundedReceiver<(String, u32)>,
    Arc<CatalogQueryController>,
) {
    let (catalog, mut rx) = GatedCatalog::new();
    let controller = Arc::new(CatalogQueryController::new(
        catalog.clone(),
        "http://localhost:8000",
    ));
    controller.refresh().await;
    assert_eq!(next_dispatch(&mut rx).await, (String::new(), 1));
    assert_eq!(controller.state().query.total_pages(), Some(5));
    (catalog, rx, controller)
}

#[tokio::test]
async fn older_page_completing_last_is_discarded() {
    let (catalog, mut rx, controller) = loaded_controller().await;
    let page2 = catalog.gate("", 2);
    let page3 = catalog.gate("", 3);

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    assert_eq!(next_dispatch(&mut rx).await, (String::new(), 2));

    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    assert_eq!(next_dispatch(&mut rx).await, (String::new(), 3));

    page3.send(Ok(page_with(100, 300))).unwrap();
    assert!(second.await.unwrap());

    let state = controller.state();
    assert_eq!(state.status, CatalogStatus::Loaded);
    assert_eq!(state.books[0].id, BookId::new(300));

    page2.send(Ok(page_with(100, 200))).unwrap();
    assert!(first.await.unwrap());

    let state = controller.state();
    assert_eq!(state.query.current_page(), 3);
    assert_eq!(state.books[0].id, BookId::new(300));
}

#[tokio::test]
async fn older_page_completing_first_does_not_commit() {
    let (catalog, mut rx, controller) = loaded_controller().await;
    let page2 = catalog.gate("", 2);
    let page3 = catalog.gate("", 3);

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    next_dispatch(&mut rx).await;
    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    next_dispatch(&mut rx).await;

    page2.send(Ok(page_with(100, 200))).unwrap();
    first.await.unwrap();

    let state = controller.state();
    assert_eq!(state.status, CatalogStatus::Loading);
    assert!(state.books.is_empty());

    page3.send(Ok(page_with(100, 300))).unwrap();
    second.await.unwrap();
    assert_eq!(controller.state().books[0].id, BookId::new(300));
}

#[tokio::test]
async fn stale_failure_does_not_replace_newer_results() {
    let (catalog, mut rx, controller) = loaded_controller().await;
    let page2 = catalog.gate("", 2);
    let page3 = catalog.gate("", 3);

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    next_dispatch(&mut rx).await;
    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.next_page().await }
    });
    next_dispatch(&mut rx).await;

    page3.send(Ok(page_with(100, 300))).unwrap();
    second.await.unwrap();
    page2
        .send(Err(ServiceError::from_status(500, None)))
        .unwrap();
    first.await.unwrap();

    let state = controller.state();
    assert_eq!(state.status, CatalogStatus::Loaded);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn term_edited_while_loading_discards_response() {
    let (catalog, mut rx, controller) = loaded_controller().await;
    let gate = catalog.gate("austen", 1);

    controller.set_search_term("austen");
    let search = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_search().await }
    });
    assert_eq!(next_dispatch(&mut rx).await, ("austen".to_string(), 1));

    controller.set_search_term("austen, jane");
    gate.send(Ok(page_with(3, 1342))).unwrap();
    search.await.unwrap();

    let state = controller.state();
    assert_eq!(state.status, CatalogStatus::Idle);
    assert!(state.books.is_empty());
    assert_eq!(state.query.search_term(), "austen, jane");
    assert_eq!(state.query.total_pages(), None);
}
