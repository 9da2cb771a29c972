//! Client configuration baked in at build time.
//!
//! The client ships as a static bundle, so "environment" means the build
//! environment: values come from `option_env!` and are parsed once at startup.
//!
//! - `UPPICK_API_URL`: API origin, default `https://up-pick.com`
//! - `UPPICK_API_TIMEOUT_MS`: per-request bound, default 10000
//! - `UPPICK_NOTIFICATION_POLL_SECS`: header badge refresh, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://up-pick.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_NOTIFICATION_POLL_SECS: u64 = 30;
pub const DEFAULT_STORAGE_KEY: &str = "accessToken";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DISPLAY_NAME_CLAIM: &str = "memberNickname";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// `localStorage` slot holding the credential.
    pub storage_key: String,
    pub login_path: String,
    /// Claim read from the credential for the header greeting.
    pub display_name_claim: String,
    pub notification_poll_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            display_name_claim: DEFAULT_DISPLAY_NAME_CLAIM.to_owned(),
            notification_poll_secs: DEFAULT_NOTIFICATION_POLL_SECS,
        }
    }
}

impl ClientConfig {
    /// Build config from the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a provided value does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("UPPICK_API_URL"),
            option_env!("UPPICK_API_TIMEOUT_MS"),
            option_env!("UPPICK_NOTIFICATION_POLL_SECS"),
        )
    }

    /// Build config from raw optional strings; `None` or blank means default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a provided value does not parse.
    pub fn from_values(
        api_url: Option<&str>,
        timeout_ms: Option<&str>,
        poll_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_url)?;
        let request_timeout_ms = parse_positive("UPPICK_API_TIMEOUT_MS", timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS)?;
        let notification_poll_secs =
            parse_positive("UPPICK_NOTIFICATION_POLL_SECS", poll_secs, DEFAULT_NOTIFICATION_POLL_SECS)?;
        Ok(Self { api_base_url, request_timeout_ms, notification_poll_secs, ..Self::default() })
    }

    /// Join an API path onto the configured origin.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_API_BASE_URL.to_owned()),
        Some(v) => v,
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var: "UPPICK_API_URL", value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_positive(var: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidNumber { var, value: v.to_owned() }),
        },
    }
}
