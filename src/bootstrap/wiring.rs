//! # Dependency Injection
//!
//! The only place that knows about `bs-infra` and `bs-app` at the same time.
//! Assembly only: no decisions, no validation beyond what constructing the
//! adapters requires.

use std::sync::Arc;

use bs_app::AppDeps;
use bs_core::config::AppConfig;
use bs_infra::HttpBookService;
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Build the port adapters and group them for controller construction.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let service = HttpBookService::from_config(&config.api)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    let backend_url = service.base_url().to_string();
    info!(
        %backend_url,
        timeout_secs = config.api.timeout_secs,
        "Wired HTTP book service"
    );

    let service = Arc::new(service);
    Ok(AppDeps {
        catalog: service.clone(),
        summarizer: service,
        backend_url,
    })
}
