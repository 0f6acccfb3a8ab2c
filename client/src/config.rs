//! Client configuration for the remote API and session handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR process reads these keys from its runtime environment. The WASM
//! bundle has no process environment, so the same keys are baked in at
//! compile time with `option_env!` and parsed by the same code path.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use crate::util::redirect::NavMode;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";
pub const SESSION_STORAGE_KEY: &str = "rentdesk.session";

/// Errors produced while parsing client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the remote API, without a trailing slash.
    pub api_url: String,
    pub timeout_ms: u64,
    /// Send cookies alongside bearer tokens on every request.
    pub with_credentials: bool,
    pub login_path: String,
    /// Follow-up view after login, signup, or invite acceptance.
    pub home_path: String,
    pub storage_key: String,
    /// How the session-expiry handler reaches the login page.
    pub expiry_navigation: NavMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
            with_credentials: true,
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            storage_key: SESSION_STORAGE_KEY.to_owned(),
            expiry_navigation: NavMode::Soft,
        }
    }
}

impl ClientConfig {
    /// Load config for the current build target.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured value cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "hydrate")]
        {
            Self::from_lookup(|key| build_env(key).map(str::to_owned))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Build typed client config from a key lookup.
    ///
    /// Optional:
    /// - `RENTDESK_API_URL`: default `http://localhost:8000`
    /// - `RENTDESK_API_TIMEOUT_MS`: default 10000
    /// - `RENTDESK_LOGIN_PATH`: default `/auth/login`
    /// - `RENTDESK_HOME_PATH`: default `/dashboard`
    /// - `RENTDESK_EXPIRY_NAVIGATION`: `soft` (default) or `hard`
    ///
    /// # Errors
    ///
    /// Returns an error if `RENTDESK_API_TIMEOUT_MS` is not a whole number of
    /// milliseconds or `RENTDESK_EXPIRY_NAVIGATION` is not a known mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("RENTDESK_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let timeout_ms = match lookup("RENTDESK_API_TIMEOUT_MS") {
            None => DEFAULT_API_TIMEOUT_MS,
            Some(raw) => match raw.trim() {
                "" => DEFAULT_API_TIMEOUT_MS,
                value => value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue { key: "RENTDESK_API_TIMEOUT_MS", value: raw.clone() })?,
            },
        };
        let login_path = lookup("RENTDESK_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
        let home_path = lookup("RENTDESK_HOME_PATH").unwrap_or_else(|| DEFAULT_HOME_PATH.to_owned());
        let expiry_navigation = match lookup("RENTDESK_EXPIRY_NAVIGATION") {
            None => NavMode::Soft,
            Some(raw) => raw
                .parse::<NavMode>()
                .map_err(|()| ConfigError::InvalidValue { key: "RENTDESK_EXPIRY_NAVIGATION", value: raw })?,
        };

        Ok(Self {
            api_url,
            timeout_ms,
            login_path,
            home_path,
            expiry_navigation,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Join an API path onto the configured base address.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_url)
        } else {
            format!("{}/{path}", self.api_url)
        }
    }
}

#[cfg(feature = "hydrate")]
fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "RENTDESK_API_URL" => option_env!("RENTDESK_API_URL"),
        "RENTDESK_API_TIMEOUT_MS" => option_env!("RENTDESK_API_TIMEOUT_MS"),
        "RENTDESK_LOGIN_PATH" => option_env!("RENTDESK_LOGIN_PATH"),
        "RENTDESK_HOME_PATH" => option_env!("RENTDESK_HOME_PATH"),
        "RENTDESK_EXPIRY_NAVIGATION" => option_env!("RENTDESK_EXPIRY_NAVIGATION"),
        _ => None,
    }
}
