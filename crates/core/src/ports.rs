//! Port interfaces for the access layer's external collaborators
//!
//! The credential store, the consent notification sink and the response
//! logging hook are owned by the embedding application. The token refresher
//! is the one port implemented inside the workspace, by the request executor.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use repairminder_domain::{ApiError, CredentialPair, HttpMethod, RefreshResponse};

/// Credential store (keychain or equivalent)
///
/// Read before every authenticated send; written only by the refresh
/// coordinator's two outcome paths.
pub trait TokenStore: Send + Sync {
    /// Current access token, if signed in
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if signed in
    fn refresh_token(&self) -> Option<String>;

    /// Access token expiry, when the store tracks it
    ///
    /// Lets the executor refresh ahead of expiry instead of waiting for a 401.
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Replace both tokens after a successful refresh
    fn update_tokens(&self, credentials: &CredentialPair);

    /// Forget both tokens after an unrecoverable authentication failure
    fn clear_tokens(&self);
}

/// Process-wide signal for a 403 carrying the consent-required code
///
/// Fire-and-forget: implementations must not block.
pub trait ConsentNotifier: Send + Sync {
    fn consent_required(&self);
}

/// Notifier that drops the signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsentNotifier;

impl ConsentNotifier for NoopConsentNotifier {
    fn consent_required(&self) {}
}

/// One HTTP exchange as seen by the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
    pub elapsed: Duration,
    pub body_len: usize,
    /// 1 for the first send, 2 for the post-refresh retry
    pub attempt: u8,
}

/// Hook called after every response is received
pub trait ResponseObserver: Send + Sync {
    fn on_response(&self, record: &ResponseRecord);
}

/// Observer that ignores every response
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResponseObserver;

impl ResponseObserver for NoopResponseObserver {
    fn on_response(&self, _record: &ResponseRecord) {}
}

/// Performs the refresh-token network call
///
/// Implementations must not attempt a nested refresh when the refresh call
/// itself is rejected.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Exchange `refresh_token` for a new credential pair
    ///
    /// # Errors
    /// Any [`ApiError`]; the coordinator reports every failure to its waiters
    /// as [`ApiError::Unauthorized`].
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError>;
}
