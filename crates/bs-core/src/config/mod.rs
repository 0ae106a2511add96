pub mod app_config;

pub use app_config::{ApiConfig, AppConfig, LoggingConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
