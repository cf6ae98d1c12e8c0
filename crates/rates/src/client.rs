//! Network fetch capability and its reqwest implementation.

use std::time::Duration;

use sarraf_shared::FeedConfig;

use crate::error::FeedError;

/// The network capability the rate service consumes.
///
/// Implementations fetch a URL and hand back the body on a 2xx response.
/// Everything else (timeouts included) surfaces as a [`FeedError`], which
/// the service turns into a tier transition.
#[allow(async_fn_in_trait)]
pub trait FetchText {
    /// Fetches `url` and returns the response body.
    async fn get_text(&self, url: &str) -> Result<String, FeedError>;
}

/// reqwest-backed [`FetchText`] with a bounded per-request wait.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS/connection setup fails.
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sarraf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a client from feed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS/connection setup fails.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        Self::new(Duration::from_secs(config.request_timeout_secs))
    }
}

impl FetchText for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))
    }
}
