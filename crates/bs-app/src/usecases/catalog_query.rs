use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

use bs_core::ports::CatalogPort;

use crate::messages;
use crate::models::{CatalogStatus, CatalogViewState};

/// Search and pagination over the remote catalog.
///
/// Every fetch takes a generation ticket. A completion is committed only if
/// its ticket is still the newest one and the query still targets the same
/// `(term, page)`; anything else is dropped.
pub struct CatalogQueryController {
    catalog: Arc<dyn CatalogPort>,
    backend_url: String,
    state: watch::Sender<CatalogViewState>,
    generation: AtomicU64,
}

impl CatalogQueryController {
    pub fn new(catalog: Arc<dyn CatalogPort>, backend_url: impl Into<String>) -> Self {
        let (state, _) = watch::channel(CatalogViewState::default());
        Self {
            catalog,
            backend_url: backend_url.into(),
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> CatalogViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogViewState> {
        self.state.subscribe()
    }

    /// Update the search term without fetching.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.state
            .send_if_modified(|state| state.query.set_search_term(term));
    }

    /// Jump back to page 1 and fetch it.
    pub async fn submit_search(&self) {
        self.state.send_modify(|state| state.query.reset_page());
        self.fetch_current().await;
    }

    /// Advance one page and fetch it. Returns `false` on the last page.
    pub async fn next_page(&self) -> bool {
        if !self.state.send_if_modified(|state| state.query.advance()) {
            return false;
        }
        self.fetch_current().await;
        true
    }

    /// Go back one page and fetch it. Returns `false` on the first page.
    pub async fn prev_page(&self) -> bool {
        if !self.state.send_if_modified(|state| state.query.go_back()) {
            return false;
        }
        self.fetch_current().await;
        true
    }

    /// Re-fetch the current `(term, page)` unchanged.
    pub async fn refresh(&self) {
        self.fetch_current().await;
    }

    async fn fetch_current(&self) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut target = (String::new(), 1);
        self.state.send_modify(|state| {
            state.status = CatalogStatus::Loading;
            state.books.clear();
            state.error = None;
            target = (
                state.query.search_term().to_string(),
                state.query.current_page(),
            );
        });
        let (term, page) = target;

        let span = info_span!("usecase.catalog_query.fetch", term = %term, page, ticket);
        let result = async {
            debug!("Fetching catalog page");
            self.catalog.fetch_catalog_page(&term, page).await
        }
        .instrument(span.clone())
        .await;

        let _entered = span.enter();
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                debug!("Discarding superseded catalog response");
                return false;
            }
            if !state.query.targets(&term, page) {
                debug!(
                    current_term = state.query.search_term(),
                    current_page = state.query.current_page(),
                    "Discarding catalog response for an outdated query"
                );
                state.status = CatalogStatus::Idle;
                return true;
            }

            match result {
                Ok(catalog_page) => {
                    state.query.apply_count(catalog_page.count);
                    info!(
                        count = catalog_page.count,
                        results = catalog_page.results.len(),
                        total_pages = state.query.last_page(),
                        "Catalog page loaded"
                    );
                    state.books = catalog_page.results;
                    state.status = CatalogStatus::Loaded;
                }
                Err(err) => {
                    warn!(error = %err, "Catalog page failed to load");
                    state.books.clear();
                    state.error = Some(messages::catalog_error(&err, &self.backend_url));
                    state.status = CatalogStatus::Failed;
                }
            }
            true
        });
    }
}
