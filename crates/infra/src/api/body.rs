//! Request bodies
//!
//! Serialization happens when the body is built, so a body that cannot be
//! encoded surfaces as [`ApiError::InvalidRequest`] before anything is sent.

use serde::Serialize;

use repairminder_domain::ApiError;

/// JSON body of a request, already encoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Encoded JSON bytes
    Json(Vec<u8>),
    /// Serialization failed; the request will not be sent
    Invalid(String),
}

impl RequestBody {
    /// Encode `value` as JSON
    pub fn json<B: Serialize + ?Sized>(value: &B) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => Self::Json(bytes),
            Err(err) => Self::Invalid(format!("failed to serialize request body: {err}")),
        }
    }

    pub(crate) fn bytes(&self) -> Result<Option<&[u8]>, ApiError> {
        match self {
            Self::Empty => Ok(None),
            Self::Json(bytes) => Ok(Some(bytes)),
            Self::Invalid(reason) => Err(ApiError::InvalidRequest(reason.clone())),
        }
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::json(&value)
    }
}
