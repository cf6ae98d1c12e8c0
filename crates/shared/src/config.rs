//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Exchange rate feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Exchange rate feed configuration.
///
/// The endpoint hosts are deployment configuration, not part of the core
/// contract: both are expected to answer `GET {url}/{BASE}` with a JSON
/// object carrying a `rates` map.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// MAD-quoting endpoint, tried first.
    #[serde(default = "default_primary_url")]
    pub primary_url: String,
    /// USD-quoting endpoint, tried when the primary fails.
    #[serde(default = "default_secondary_url")]
    pub secondary_url: String,
    /// Bounded wait per HTTP request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How long a cached rate table stays valid, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_primary_url() -> String {
    "https://open.er-api.com/v6/latest".to_string()
}

fn default_secondary_url() -> String {
    "https://api.exchangerate-api.com/v4/latest".to_string()
}

fn default_request_timeout_secs() -> u64 {
    8
}

fn default_cache_ttl_secs() -> u64 {
    30 * 60 // 30 minutes
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            primary_url: default_primary_url(),
            secondary_url: default_secondary_url(),
            request_timeout_secs: default_request_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SARRAF").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
