//! In-memory doubles for the ports
//!
//! Enabled for this crate's tests and, through the `test-utils` feature, for
//! downstream test suites.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use repairminder_domain::CredentialPair;

use crate::ports::{ConsentNotifier, ResponseObserver, ResponseRecord, TokenStore};

/// A write made to [`MemoryTokenStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Update { access_token: String, refresh_token: String },
    Clear,
}

#[derive(Debug, Default)]
struct StoredTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

/// Token store held in memory, logging every write
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<StoredTokens>,
    calls: Mutex<Vec<StoreCall>>,
}

impl MemoryTokenStore {
    /// Store holding the given pair with no known expiry
    pub fn signed_in(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::default();
        store.set(access_token, refresh_token);
        store
    }

    /// Replace the tokens without logging a write
    pub fn set(&self, access_token: &str, refresh_token: &str) {
        let mut tokens = self.tokens.lock();
        tokens.access_token = Some(access_token.to_string());
        tokens.refresh_token = Some(refresh_token.to_string());
        tokens.expires_at = None;
    }

    /// Set the access token expiry without logging a write
    pub fn set_expires_at(&self, expires_at: Option<DateTime<Utc>>) {
        self.tokens.lock().expires_at = expires_at;
    }

    /// Every write so far, oldest first
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    /// Whether both tokens are gone
    pub fn is_empty(&self) -> bool {
        let tokens = self.tokens.lock();
        tokens.access_token.is_none() && tokens.refresh_token.is_none()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.lock().access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.lock().refresh_token.clone()
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.tokens.lock().expires_at
    }

    fn update_tokens(&self, credentials: &CredentialPair) {
        {
            let mut tokens = self.tokens.lock();
            tokens.access_token = Some(credentials.access_token.clone());
            tokens.refresh_token = Some(credentials.refresh_token.clone());
            tokens.expires_at = Some(credentials.expires_at);
        }
        self.calls.lock().push(StoreCall::Update {
            access_token: credentials.access_token.clone(),
            refresh_token: credentials.refresh_token.clone(),
        });
    }

    fn clear_tokens(&self) {
        *self.tokens.lock() = StoredTokens::default();
        self.calls.lock().push(StoreCall::Clear);
    }
}

/// Notifier that counts consent-required signals
#[derive(Debug, Default)]
pub struct RecordingConsentNotifier {
    count: AtomicUsize,
}

impl RecordingConsentNotifier {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ConsentNotifier for RecordingConsentNotifier {
    fn consent_required(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Observer that keeps every response record
#[derive(Debug, Default)]
pub struct RecordingResponseObserver {
    records: Mutex<Vec<ResponseRecord>>,
}

impl RecordingResponseObserver {
    pub fn records(&self) -> Vec<ResponseRecord> {
        self.records.lock().clone()
    }
}

impl ResponseObserver for RecordingResponseObserver {
    fn on_response(&self, record: &ResponseRecord) {
        self.records.lock().push(record.clone());
    }
}
