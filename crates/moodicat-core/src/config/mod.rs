//! Client configuration.
//!
//! The API endpoint and HTTP timeout are read from the environment so the
//! same binary can target a local backend or a deployed one.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Base URL used when `MOODICAT_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:10000/api/v1";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

pub const API_URL_ENV: &str = "MOODICAT_API_URL";
pub const HTTP_TIMEOUT_ENV: &str = "MOODICAT_HTTP_TIMEOUT_SECS";

/// Settings needed to talk to the Moodicat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config for an explicit base URL with the default timeout.
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_api_base_url(api_base_url.as_ref())?,
            ..Self::default()
        })
    }

    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(HTTP_TIMEOUT_ENV).ok(),
        )
    }

    /// Resolve configuration from optional raw values; blanks use defaults.
    pub fn from_values(api_url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let api_base_url = match normalize_text_option(api_url) {
            Some(url) => normalize_api_base_url(&url)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let request_timeout = match normalize_text_option(timeout_secs) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    Error::Config(format!("{HTTP_TIMEOUT_ENV} must be a whole number of seconds"))
                })?;
                if secs == 0 {
                    return Err(Error::Config(format!(
                        "{HTTP_TIMEOUT_ENV} must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
pub fn normalize_api_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(trimmed) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
