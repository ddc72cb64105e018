// octopus-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process transport

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::config::API_KEY_HEADER;
use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` through Tower's `oneshot`, so a server running in
/// the same process is reached without a socket. Status mapping matches
/// `NetworkHttpClient`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use octopus_client::{InterruptionService, OneshotHttpClient};
///
/// let router: Router = build_app().with_state(state);
/// let service = InterruptionService::new(OneshotHttpClient::new(router));
/// let pending = service.get_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    api_key: Option<String>,
    cancellation: Option<CancellationToken>,
}

impl OneshotHttpClient {
    /// Create a new oneshot client
    ///
    /// # Arguments
    /// * `router` - Initialised axum Router (`with_state` already applied)
    pub fn new(router: Router) -> Self {
        Self {
            router,
            api_key: None,
            cancellation: None,
        }
    }

    /// Send `X-Octopus-ApiKey` on every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let body = match body {
            Some(body) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::InvalidArgument(format!("Invalid request path '{}': {}", path, e)))
    }

    /// Execute the request and handle the response
    async fn execute(&self, path: &str, request: Request<Body>) -> ClientResult<String> {
        let router = self.router.clone();

        let response = router
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Transport(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read body: {}", e)))?;
        let text = String::from_utf8_lossy(&body_bytes).into_owned();

        if !status.is_success() {
            tracing::warn!(%status, path, "Request failed");
            return Err(ClientError::from_status(status, path, text));
        }
        Ok(text)
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> ClientResult<String> {
        tracing::debug!(%method, path, "Dispatching in-process request");
        let request = self.build_request(method, path, body)?;

        match &self.cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(ClientError::Cancelled),
                result = self.execute(path, request) => result,
            },
            None => self.execute(path, request).await,
        }
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get(&self, path: &str) -> ClientResult<String> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Option<String>) -> ClientResult<String> {
        self.send(Method::POST, path, body).await
    }

    /// Requests are dispatched by path; there is no network origin.
    fn base_url(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_get() {
        let router = Router::new().route("/api/ping", get(|| async { "pong" }));
        let client = OneshotHttpClient::new(router);

        assert_eq!(client.get("/api/ping").await.unwrap(), "pong");
    }

    #[tokio::test]
    async fn test_oneshot_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());

        let err = client.get("/api/missing").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound { ref path, .. } if path == "/api/missing"));
    }

    #[tokio::test]
    async fn test_cancelled_before_dispatch() {
        let token = CancellationToken::new();
        token.cancel();
        let router = Router::new().route("/api/ping", get(|| async { "pong" }));
        let client = OneshotHttpClient::new(router).with_cancellation(token);

        assert!(matches!(client.get("/api/ping").await, Err(ClientError::Cancelled)));
    }
}
