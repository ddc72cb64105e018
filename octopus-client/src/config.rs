//! Client configuration

use tokio_util::sync::CancellationToken;

use crate::client::NetworkHttpClient;
use crate::ClientResult;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Octopus-ApiKey";

/// Client configuration for connecting to the deployment server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://octopus.example.com")
    pub base_url: String,

    /// API key sent in the `X-Octopus-ApiKey` header
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Aborts in-flight requests when cancelled
    pub cancellation: Option<CancellationToken>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: 30,
            cancellation: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Attach a cancellation token shared with the caller
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
