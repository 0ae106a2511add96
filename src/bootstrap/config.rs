//! # Configuration Loader
//!
//! Reads the TOML config file into the `AppConfig` DTO and layers
//! environment overrides on top. A missing file is not an error; the
//! defaults point at a local backend.

use std::path::Path;

use anyhow::Context;
use bs_core::config::AppConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "booksum.toml";

pub const API_URL_ENV: &str = "BOOKSUM_API_URL";
pub const TIMEOUT_SECS_ENV: &str = "BOOKSUM_TIMEOUT_SECS";

/// Load configuration from a TOML file, or defaults when it does not exist.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Apply `BOOKSUM_*` environment variables on top of file values.
pub fn apply_env_overrides(config: &mut AppConfig) -> anyhow::Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(base_url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = base_url.trim().to_string();
    }

    if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
        let secs: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{TIMEOUT_SECS_ENV} must be a whole number of seconds, got {raw:?}"))?;
        config.api.timeout_secs = secs.max(1);
    }

    Ok(())
}
