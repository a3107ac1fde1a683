//! API client settings
//!
//! [`ApiClientConfig`] is what the client is built from. [`ConfigOverrides`]
//! is the partial shape read from environment variables and config files;
//! unset fields fall back to the selected [`AppEnvironment`]'s defaults.

use std::time::Duration;

use repairminder_domain::constants::{
    DEFAULT_CLIENT_IDENTIFIER, DEFAULT_REFRESH_THRESHOLD_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL, STAGING_BASE_URL,
};
use repairminder_domain::impl_wire_value_conversions;
use serde::{Deserialize, Serialize};

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[default]
    Production,
    Staging,
    Development,
}

impl_wire_value_conversions!(AppEnvironment {
    Production => "production",
    Staging => "staging",
    Development => "development",
});

impl AppEnvironment {
    /// API origin for this deployment
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Staging => STAGING_BASE_URL,
            Self::Development => DEVELOPMENT_BASE_URL,
        }
    }
}

/// Configuration for the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// API origin, without a trailing slash (e.g. "https://api.repairminder.com")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Sent as `User-Agent` and `X-Client-Info`
    pub client_identifier: String,
    /// Refresh ahead of a 401 when the access token expires within this many
    /// seconds; only applies when the token store reports an expiry
    pub refresh_threshold_seconds: i64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::for_environment(AppEnvironment::default())
    }
}

impl ApiClientConfig {
    /// Defaults for a deployment
    #[must_use]
    pub fn for_environment(environment: AppEnvironment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            client_identifier: DEFAULT_CLIENT_IDENTIFIER.to_string(),
            refresh_threshold_seconds: DEFAULT_REFRESH_THRESHOLD_SECS,
        }
    }

    /// Defaults pointed at an arbitrary origin
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Apply overrides on top of the selected environment's defaults
    #[must_use]
    pub fn from_overrides(overrides: ConfigOverrides) -> Self {
        let defaults = Self::for_environment(overrides.environment.unwrap_or_default());
        Self {
            base_url: overrides
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: overrides.timeout_secs.map(Duration::from_secs).unwrap_or(defaults.timeout),
            client_identifier: overrides.client_identifier.unwrap_or(defaults.client_identifier),
            refresh_threshold_seconds: overrides
                .refresh_threshold_seconds
                .unwrap_or(defaults.refresh_threshold_seconds),
        }
    }
}

/// Partial configuration as read from a file or the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub environment: Option<AppEnvironment>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub client_identifier: Option<String>,
    pub refresh_threshold_seconds: Option<i64>,
}
