//! Resource client module.
//!
//! `HttpClient` is the transport seam consumed by the resource services.
//! Two implementations are provided: a reqwest-backed network client and an
//! in-process client that dispatches to an axum `Router`.

pub mod http;
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
