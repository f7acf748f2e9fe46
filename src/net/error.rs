//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, authentication rejections, and server-reported domain
//! errors are kept distinct so the session controller can react to a 401
//! differently from a validation error. Server messages arrive in a
//! FastAPI-style `{"detail": "..."}` body and are surfaced verbatim when
//! present. Nothing is retried and nothing is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error produced by any API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection reset, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the credential (HTTP 401).
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success response, with the server's detail message.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// The response arrived but its body was not the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Build an error from a non-success status and its raw body.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        if status == 401 {
            return Self::Unauthorized(detail.unwrap_or_else(|| "Authentication required".to_owned()));
        }
        Self::Server {
            status,
            detail: detail.unwrap_or_else(|| format!("Request failed with status {status}")),
        }
    }

    /// Whether the server rejected the session credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Stub error returned by SSR builds, where no fetch is available.
    pub(crate) fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }
}
