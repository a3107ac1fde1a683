//! Error types used throughout the access layer
//!
//! [`ApiError`] is the closed taxonomy every request operation returns.
//! [`RepairMinderError`] covers everything that is not a request outcome
//! (configuration, client construction).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide error for non-request concerns
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RepairMinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for non-request operations
pub type Result<T> = std::result::Result<T, RepairMinderError>;

/// Result type alias for request operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// What went wrong below HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The request or connection timed out
    Timeout,
    /// DNS resolution or TCP connect failed
    Connect,
    /// TLS negotiation failed
    Tls,
    /// The request could not be built or sent
    Request,
    /// The response body could not be read
    Body,
    /// Anything the transport could not classify
    Other,
}

impl TransportErrorKind {
    /// Stable lowercase name, used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Tls => "tls",
            Self::Request => "request",
            Self::Body => "body",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport failure carried by [`ApiError::Network`]
///
/// Keeps the underlying cause without leaking the HTTP library's error type
/// into the domain crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    /// Create a transport error of the given kind
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Coarse grouping of [`ApiError`] members, used as a structured log field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Transport failures
    Network,
    /// Envelope or payload did not parse
    Decoding,
    /// 401 or refresh exhausted
    Authentication,
    /// 403
    Authorization,
    /// 404, other 4xx and client-side precondition failures
    Client,
    /// 429
    RateLimit,
    /// 5xx, or `success: false` in the envelope
    Server,
    /// Caller-initiated
    Cancelled,
}

/// Every failure a request can produce
///
/// The set is closed: no transport or decoding error escapes unclassified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure (DNS, timeout, TLS, connection reset)
    #[error("Network error: {0}")]
    Network(TransportError),

    /// Envelope or payload did not parse
    #[error("Failed to decode response: {0}")]
    DecodingFailed(String),

    /// 401, or the token refresh was exhausted
    #[error("Unauthorized")]
    Unauthorized,

    /// 403, with the server's message and error code when present
    #[error("Forbidden{}", suffix(.code, .message))]
    Forbidden { message: Option<String>, code: Option<String> },

    /// 404
    #[error("Not found")]
    NotFound,

    /// 429, with `Retry-After` seconds when the server sent them
    #[error("Rate limited")]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-2xx status
    #[error("HTTP {status}{}", suffix(.message, &None))]
    HttpError { status: u16, message: Option<String> },

    /// 2xx transport but `success: false` in the envelope
    #[error("Server error{}", suffix(.message, &None))]
    ServerError { message: Option<String>, code: Option<String> },

    /// Caller-initiated cancellation
    #[error("Request cancelled")]
    Cancelled,

    /// Client-side precondition failure (malformed URL, unserializable body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn suffix(primary: &Option<String>, fallback: &Option<String>) -> String {
    primary.as_ref().or(fallback.as_ref()).map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Shorthand for a transport failure
    pub fn network(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Network(TransportError::new(kind, message))
    }

    /// Get the error category for this error
    #[must_use]
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) => ApiErrorCategory::Network,
            Self::DecodingFailed(_) => ApiErrorCategory::Decoding,
            Self::Unauthorized => ApiErrorCategory::Authentication,
            Self::Forbidden { .. } => ApiErrorCategory::Authorization,
            Self::NotFound | Self::HttpError { .. } | Self::InvalidRequest(_) => {
                ApiErrorCategory::Client
            }
            Self::RateLimited { .. } => ApiErrorCategory::RateLimit,
            Self::ServerError { .. } => ApiErrorCategory::Server,
            Self::Cancelled => ApiErrorCategory::Cancelled,
        }
    }

    /// Whether calling code may offer a retry
    ///
    /// The core never retries these itself; only the 401 path is retried
    /// locally.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::ServerError { .. } | Self::RateLimited { .. })
    }

    /// Whether calling code must force a new login
    #[must_use]
    pub const fn requires_reauth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Whether this is a caller-initiated cancellation
    ///
    /// Upstream code should not show an error for these.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status this error was derived from, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error code carried by `Forbidden` and `ServerError`
    #[must_use]
    pub fn server_code(&self) -> Option<&str> {
        match self {
            Self::Forbidden { code, .. } | Self::ServerError { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Human-readable description suitable for showing to a user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            Self::DecodingFailed(_) => "Received an unexpected response from the server.".to_string(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::Forbidden { message, .. } => message
                .clone()
                .unwrap_or_else(|| "You don't have permission to access this resource.".to_string()),
            Self::NotFound => "The requested resource was not found.".to_string(),
            Self::RateLimited { retry_after: Some(seconds) } => {
                format!("Too many requests. Please wait {seconds} seconds.")
            }
            Self::RateLimited { retry_after: None } => {
                "Too many requests. Please try again later.".to_string()
            }
            Self::HttpError { status, message } => {
                message.clone().unwrap_or_else(|| format!("HTTP error {status}"))
            }
            Self::ServerError { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Server error. Please try again later.".to_string()),
            Self::Cancelled => "The request was cancelled.".to_string(),
            Self::InvalidRequest(_) => "The request could not be sent.".to_string(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodingFailed(err.to_string())
    }
}
