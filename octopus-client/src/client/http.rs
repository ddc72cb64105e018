// octopus-client/src/client/http.rs
// HTTP client - network transport

use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;

use crate::config::{API_KEY_HEADER, ClientConfig};
use crate::{ClientError, ClientResult};

/// Generic resource client.
///
/// Issues requests against paths relative to a configured base URL and
/// returns the raw response body. Non-success statuses come back as
/// `ClientError::NotFound` or `ClientError::Status`; decoding is left to the
/// caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> ClientResult<String>;

    /// POST `body` as JSON, or an empty body when `None`.
    async fn post(&self, path: &str, body: Option<String>) -> ClientResult<String>;

    fn base_url(&self) -> &str;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    cancellation: Option<CancellationToken>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| {
            ClientError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "Unsupported scheme '{}' in base URL",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            cancellation: config.cancellation.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> ClientResult<String> {
        let mut req = self
            .client
            .request(method.clone(), self.url(path))
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        tracing::debug!(%method, path, "Sending request");
        let exchange = async {
            let response = req.send().await?;
            Self::handle_response(path, response).await
        };

        match &self.cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(%method, path, "Request cancelled");
                    Err(ClientError::Cancelled)
                }
                result = exchange => result,
            },
            None => exchange.await,
        }
    }

    async fn handle_response(path: &str, response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, path, "Request failed");
            return Err(ClientError::from_status(status, path, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str) -> ClientResult<String> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Option<String>) -> ClientResult<String> {
        self.send(Method::POST, path, body).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
