//! Configuration loader
//!
//! Loads the API client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If none are set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `REPAIRMINDER_ENVIRONMENT`: `production`, `staging` or `development`
//! - `REPAIRMINDER_API_BASE_URL`: API origin, overrides the environment's
//! - `REPAIRMINDER_API_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `REPAIRMINDER_CLIENT_ID`: Client identification header value
//! - `REPAIRMINDER_REFRESH_THRESHOLD_SECS`: Proactive refresh window
//!
//! At least one of the first two must be set for the environment to count as
//! a configuration source.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./repairminder.toml` or `./repairminder.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. `../repairminder.toml` or `../repairminder.json` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use repairminder_domain::{RepairMinderError, Result};

use super::settings::{ApiClientConfig, AppEnvironment, ConfigOverrides};

pub const ENV_ENVIRONMENT: &str = "REPAIRMINDER_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "REPAIRMINDER_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "REPAIRMINDER_API_TIMEOUT_SECS";
pub const ENV_CLIENT_ID: &str = "REPAIRMINDER_CLIENT_ID";
pub const ENV_REFRESH_THRESHOLD_SECS: &str = "REPAIRMINDER_REFRESH_THRESHOLD_SECS";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If neither the
/// environment name nor the base URL is set, falls back to loading from a
/// config file.
///
/// # Errors
/// Returns `RepairMinderError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value cannot be parsed
pub fn load() -> Result<ApiClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(
                base_url = %config.base_url,
                "Configuration loaded from environment variables"
            );
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `RepairMinderError::Config` if neither `REPAIRMINDER_ENVIRONMENT`
/// nor `REPAIRMINDER_API_BASE_URL` is set, or a value is invalid.
pub fn load_from_env() -> Result<ApiClientConfig> {
    let environment = optional_env_var(ENV_ENVIRONMENT)
        .map(|value| value.parse::<AppEnvironment>().map_err(RepairMinderError::Config))
        .transpose()?;
    let base_url = optional_env_var(ENV_BASE_URL);

    if environment.is_none() && base_url.is_none() {
        return Err(RepairMinderError::Config(format!(
            "Missing required environment variable: {ENV_ENVIRONMENT} or {ENV_BASE_URL}"
        )));
    }

    let timeout_secs = optional_env_var(ENV_TIMEOUT_SECS)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| RepairMinderError::Config(format!("Invalid request timeout: {e}")))
        })
        .transpose()?;
    let refresh_threshold_seconds = optional_env_var(ENV_REFRESH_THRESHOLD_SECS)
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| RepairMinderError::Config(format!("Invalid refresh threshold: {e}")))
        })
        .transpose()?;

    Ok(ApiClientConfig::from_overrides(ConfigOverrides {
        environment,
        base_url,
        timeout_secs,
        client_identifier: optional_env_var(ENV_CLIENT_ID),
        refresh_threshold_seconds,
    }))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RepairMinderError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ApiClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RepairMinderError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RepairMinderError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RepairMinderError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path).map(ApiClientConfig::from_overrides)
}

/// Parse overrides from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ConfigOverrides> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RepairMinderError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RepairMinderError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(RepairMinderError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "repairminder.toml",
        "repairminder.json",
        "config.toml",
        "config.json",
        "../repairminder.toml",
        "../repairminder.json",
    ];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Non-empty environment variable, if set
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
