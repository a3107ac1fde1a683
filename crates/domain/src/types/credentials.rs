//! Credential types exchanged with the refresh endpoint

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Body of `POST /api/auth/refresh`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// `data` of a successful refresh response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub token: String,
    /// Rotated refresh token; the previous one is invalid after use
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Access/refresh token pair with its expiry
///
/// Owned by the external credential store; the access layer only hands new
/// pairs to it after a refresh.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CredentialPair {
    /// Build a pair expiring `expires_in` seconds after `issued_at`
    ///
    /// # Errors
    ///
    /// `DecodingFailed` when the lifetime does not fit in a timestamp.
    pub fn from_refresh(
        response: RefreshResponse,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, ApiError> {
        let expires_at = TimeDelta::try_seconds(response.expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ApiError::DecodingFailed(format!(
                    "expires_in out of range: {}",
                    response.expires_in
                ))
            })?;

        Ok(Self {
            access_token: response.token,
            refresh_token: response.refresh_token,
            expires_at,
        })
    }

    /// Whether the access token is expired or expires within
    /// `threshold_seconds`
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        self.is_expired_at(Utc::now(), threshold_seconds)
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>, threshold_seconds: i64) -> bool {
        TimeDelta::try_seconds(threshold_seconds)
            .and_then(|threshold| now.checked_add_signed(threshold))
            .map_or(threshold_seconds > 0, |deadline| deadline >= self.expires_at)
    }

    /// Seconds until expiry; negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

// Tokens never appear in logs
impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
