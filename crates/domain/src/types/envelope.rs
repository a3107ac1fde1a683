//! JSON response envelope
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```json
//! { "success": true, "data": {...}, "pagination": {...}, "filters": {...},
//!   "error": null, "code": null }
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ApiError;

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// Decoded payload, pagination and echoed filters of a successful envelope
pub type EnvelopeParts<T, F> = (T, Option<Pagination>, Option<F>);

/// The standard response wrapper
///
/// `F` is the shape of the echoed `filters` object on list endpoints; it
/// defaults to an untyped JSON value for endpoints that do not send one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T, F = serde_json::Value> {
    pub success: bool,
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
    pub filters: Option<F>,
    pub error: Option<String>,
    pub code: Option<String>,
    /// Some handlers report failures under `message` instead of `error`
    pub message: Option<String>,
}

impl<T, F> ApiEnvelope<T, F> {
    /// Server-provided failure text, preferring `error` over `message`
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }

    /// Split a successful envelope into its parts
    ///
    /// # Errors
    ///
    /// - [`ApiError::ServerError`] when `success` is false
    /// - [`ApiError::DecodingFailed`] when `success` is true but `data` is
    ///   null or missing
    pub fn into_parts(self) -> Result<EnvelopeParts<T, F>, ApiError> {
        if !self.success {
            return Err(self.into_server_error());
        }
        match self.data {
            Some(data) => Ok((data, self.pagination, self.filters)),
            None => Err(ApiError::DecodingFailed(
                "envelope reported success without data".to_string(),
            )),
        }
    }

    /// Check the success flag only, ignoring whatever `data` holds
    ///
    /// # Errors
    ///
    /// [`ApiError::ServerError`] when `success` is false.
    pub fn into_acknowledged(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(self.into_server_error())
        }
    }

    fn into_server_error(self) -> ApiError {
        let message = self.server_message().map(str::to_string);
        ApiError::ServerError { message, code: self.code }
    }
}

/// Lenient error shape for non-2xx bodies
///
/// Every field is optional and unknown fields are ignored, so any JSON object
/// decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<String>,
    pub message: Option<String>,
    pub code: Option<String>,
}

impl ErrorEnvelope {
    /// Best-effort decode; `None` when the body is not a JSON object
    #[must_use]
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        self.error.clone().or_else(|| self.message.clone())
    }
}

/// Payload for operations whose `data` carries nothing of interest
///
/// Accepts any JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyPayload;

impl<'de> Deserialize<'de> for EmptyPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}
