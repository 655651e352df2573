// config.rs - Catalog configuration
//
// Every tunable of the front-end lives here. Defaults match the behaviour
// of the catalog pages; the native tools can override them from the
// environment (optionally through a .env file).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::search::{TriggerConfig, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW, MIN_QUERY_LEN};

/// Remote API used when nothing else is configured
///
/// The WASM bundle cannot read the environment at runtime, so the value
/// can be overridden at compile time with `CATALOG_API_URL`.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "https://api01.f8team.dev",
};

/// Quiet period before a search request is issued
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

pub const ENV_API_URL: &str = "CATALOG_API_URL";
pub const ENV_DEBOUNCE_MS: &str = "CATALOG_DEBOUNCE_MS";
pub const ENV_PER_PAGE: &str = "CATALOG_PER_PAGE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Configuration shared by every page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the product API, without the `/api/products` suffix
    pub api_base_url: String,
    /// Debounce interval in milliseconds
    pub debounce_ms: u64,
    /// Minimum trimmed search text length that enables search mode
    pub min_query_len: usize,
    /// Page size used when the URL carries none
    pub default_per_page: u32,
    /// Number of page buttons around the current page
    pub page_window: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: MIN_QUERY_LEN,
            default_per_page: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_WINDOW,
        }
    }
}

impl CatalogConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Settings consumed by the debounced search trigger
    pub fn trigger(&self) -> TriggerConfig {
        TriggerConfig {
            delay: self.debounce(),
            min_query_len: self.min_query_len,
            default_page_size: self.default_per_page,
        }
    }

    /// Build a config from a key lookup, falling back to defaults for
    /// missing keys. Present but malformed values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(ConfigError::Invalid { key: ENV_API_URL, value: url });
            }
            config.api_base_url = url;
        }

        if let Some(value) = lookup(ENV_DEBOUNCE_MS) {
            config.debounce_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: ENV_DEBOUNCE_MS, value })?;
        }

        if let Some(value) = lookup(ENV_PER_PAGE) {
            config.default_per_page = match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: ENV_PER_PAGE, value }),
            };
        }

        Ok(config)
    }

    /// Load `.env` (if any) and read the process environment
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::debug!("Loaded catalog config: {:?}", config);
        Ok(config)
    }
}
