//! Wire data types: the response envelope and credential payloads

pub mod credentials;
pub mod envelope;

pub use credentials::{CredentialPair, RefreshRequest, RefreshResponse};
pub use envelope::{ApiEnvelope, EmptyPayload, EnvelopeParts, ErrorEnvelope, Pagination};
