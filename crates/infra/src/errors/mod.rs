//! Error conversions from infrastructure libraries into the domain taxonomy

pub(crate) mod conversions;

pub use conversions::InfraError;
