//! # Repair Minder Core
//!
//! Ports and coordination logic for the API access layer, with no HTTP code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the credential store, the consent
//!   notification sink, the response logging hook and the token refresher
//! - The single-flight [`RefreshCoordinator`]
//! - In-memory port doubles under [`testing`] (`test-utils` feature)
//!
//! ## Architecture Principles
//! - Only depends on `repairminder-domain`
//! - All external collaborators via traits

pub mod ports;
pub mod refresh;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use ports::{
    ConsentNotifier, NoopConsentNotifier, NoopResponseObserver, ResponseObserver,
    ResponseRecord, TokenRefresher, TokenStore,
};
pub use refresh::RefreshCoordinator;
