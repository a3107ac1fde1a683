//! Wire constants
//!
//! Fixed values shared by the endpoint catalog and the request executor.

// Headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CLIENT_INFO: &str = "X-Client-Info";
pub const HEADER_RETRY_AFTER: &str = "Retry-After";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const BEARER_PREFIX: &str = "Bearer ";

/// Client identification sent on every request when no override is configured.
pub const DEFAULT_CLIENT_IDENTIFIER: &str =
    concat!("RepairMinder-Rust/", env!("CARGO_PKG_VERSION"));

// Server error codes
/// 403 code that asks the presentation layer to show the consent screen.
pub const CONSENT_REQUIRED_CODE: &str = "CONSENT_REQUIRED";

// Pagination defaults
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// Timeouts
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REFRESH_THRESHOLD_SECS: i64 = 300;

// Base origins
pub const PRODUCTION_BASE_URL: &str = "https://api.repairminder.com";
pub const STAGING_BASE_URL: &str = "https://api-staging.repairminder.com";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8787";
