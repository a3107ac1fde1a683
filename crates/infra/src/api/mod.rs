//! Repair Minder API client
//!
//! # Architecture
//!
//! - [`ApiClient`] is the public surface: one `execute*` method per response
//!   shape, all sharing the same status mapping
//! - The executor sends each request once, plus at most one resend after a
//!   session refresh on 401
//! - Refreshes go through the shared
//!   [`RefreshCoordinator`](repairminder_core::RefreshCoordinator), so
//!   concurrent 401s produce a single refresh call
//! - Structured tracing only; bodies and tokens are never logged

mod body;
pub mod client;
mod executor;

pub use body::RequestBody;
pub use client::{ApiClient, ApiClientBuilder};
