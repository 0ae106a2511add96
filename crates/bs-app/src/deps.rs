//! # Application Dependencies
//!
//! Parameter grouping for controller construction. Not a builder: no build
//! steps, no defaults, no hidden logic.

use std::sync::Arc;

use bs_core::ports::{CatalogPort, SummarizerPort};

/// Everything the controllers need from the outside world.
#[derive(Clone)]
pub struct AppDeps {
    pub catalog: Arc<dyn CatalogPort>,
    pub summarizer: Arc<dyn SummarizerPort>,

    /// Backend location quoted in "cannot connect" messages.
    pub backend_url: String,
}
