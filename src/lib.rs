//! booksum bootstrap: configuration, tracing and dependency wiring for the
//! catalog browser and summarization client.

pub mod bootstrap;

pub use bootstrap::config::{apply_env_overrides, load_config};
pub use bootstrap::tracing::init_tracing_subscriber;
pub use bootstrap::wiring::{wire_dependencies, WiringError};
