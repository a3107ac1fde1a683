//! # Repair Minder Infrastructure
//!
//! HTTP implementation of the Repair Minder API access layer.
//!
//! This crate contains:
//! - The API client and request executor (reqwest)
//! - Configuration loading (environment variables, TOML/JSON files)
//! - Error conversions from reqwest and url into the domain taxonomy
//! - Tracing setup and the tracing-backed response hook
//!
//! ## Architecture
//! - Implements the `TokenRefresher` port defined in `repairminder-core`
//! - Depends on `repairminder-domain` and `repairminder-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, RequestBody};
pub use config::{ApiClientConfig, AppEnvironment};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat, TracingResponseObserver};
