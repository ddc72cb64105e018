//! Client error types

use http::StatusCode;
use octopus_shared::LinkName;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller supplied an empty or malformed identifier or payload
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource does not advertise the requested link
    #[error("Resource {resource} has no '{link}' link")]
    MissingLink { resource: String, link: LinkName },

    /// HTTP request failed before a status was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failed without an HTTP status (in-process transports)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Resource not found (404)
    #[error("Not found: {path}")]
    NotFound { path: String, body: String },

    /// Response body did not match the expected schema
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller's cancellation token fired
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Maps a non-success response to `NotFound` or `Status`.
    pub fn from_status(status: StatusCode, path: &str, body: String) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound {
                path: path.to_string(),
                body,
            }
        } else {
            Self::Status { status, body }
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Server body returned with a non-success status.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::NotFound { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True for failures of the underlying HTTP exchange (including 404).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Transport(_) | Self::Status { .. } | Self::NotFound { .. }
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
