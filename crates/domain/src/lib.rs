//! # Repair Minder Domain
//!
//! Wire-level domain types for the Repair Minder API access layer.
//!
//! This crate contains:
//! - The endpoint catalog (every logical API operation and its path, method,
//!   query string and auth requirement)
//! - The JSON response envelope and pagination metadata
//! - Credential types exchanged with the token refresh endpoint
//! - The closed error taxonomy returned by every request
//!
//! ## Architecture
//! - No dependencies on other Repair Minder crates
//! - No I/O: everything here is pure data and lookup

pub mod constants;
pub mod endpoint;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use endpoint::{Endpoint, HttpMethod, QueryBuilder};
pub use errors::*;
pub use types::*;
