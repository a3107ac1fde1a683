//! Transport layer: a thin reqwest wrapper with fixed timeout and headers

mod client;

pub use client::{HttpClient, HttpClientBuilder};
