//! Conversions from external infrastructure errors into domain errors.

use std::error::Error as StdError;

use repairminder_domain::{ApiError, RepairMinderError, TransportErrorKind};
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ApiError);

impl From<InfraError> for ApiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ApiError> for InfraError {
    fn from(value: ApiError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoApiError {
    fn into_api_error(self) -> ApiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

/// Error text including every source in the chain
fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn looks_like_tls(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("tls") || lower.contains("certificate") || lower.contains("handshake")
}

impl IntoApiError for HttpError {
    fn into_api_error(self) -> ApiError {
        let message = describe_chain(&self);

        if self.is_builder() {
            return ApiError::InvalidRequest(message);
        }

        if self.is_timeout() {
            return ApiError::network(TransportErrorKind::Timeout, message);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            let kind = if looks_like_tls(&message) {
                TransportErrorKind::Tls
            } else {
                TransportErrorKind::Connect
            };
            return ApiError::network(kind, message);
        }

        if self.is_body() || self.is_decode() {
            return ApiError::network(TransportErrorKind::Body, message);
        }

        if self.is_request() || self.is_redirect() {
            return ApiError::network(TransportErrorKind::Request, message);
        }

        ApiError::network(TransportErrorKind::Other, message)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_api_error())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → ApiError */
/* -------------------------------------------------------------------------- */

impl IntoApiError for UrlError {
    fn into_api_error(self) -> ApiError {
        ApiError::InvalidRequest(format!("invalid request URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_api_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Client construction */
/* -------------------------------------------------------------------------- */

/// reqwest fails to build a client only on TLS backend or configuration
/// problems, which are configuration errors rather than request outcomes.
pub(crate) fn client_build_error(err: &HttpError) -> RepairMinderError {
    RepairMinderError::Config(format!("failed to build HTTP client: {}", describe_chain(err)))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
