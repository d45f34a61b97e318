//! Client configuration.
//!
//! Values come from code or from the environment:
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `INTRINIO_API_KEY` | yes | |
//! | `INTRINIO_BASE_URL` | no | `https://api-v2.intrinio.com` |
//! | `INTRINIO_TIMEOUT_MS` | no | `30000` |

use crate::error::ConfigError;
use crate::http_client::HttpAuth;

pub const DEFAULT_BASE_URL: &str = "https://api-v2.intrinio.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_USER_AGENT: &str = concat!("intrinio-rust/", env!("CARGO_PKG_VERSION"));

pub const API_KEY_ENV: &str = "INTRINIO_API_KEY";
pub const BASE_URL_ENV: &str = "INTRINIO_BASE_URL";
pub const TIMEOUT_ENV: &str = "INTRINIO_TIMEOUT_MS";

/// Connection settings shared by every accessor built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    auth: HttpAuth,
    timeout_ms: u64,
    user_agent: String,
}

impl ClientConfig {
    /// Configuration authenticating with the `api_key` query parameter.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        Ok(Self {
            base_url: String::from(DEFAULT_BASE_URL),
            auth: HttpAuth::api_key(api_key.trim()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or(ConfigError::MissingEnv { name: API_KEY_ENV })?;
        let mut config = Self::new(api_key)?;

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url)?;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_timeout_ms(parse_timeout(&raw)?);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl { value: base_url });
        }

        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_auth(mut self, auth: HttpAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &HttpAuth {
        &self.auth
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_owned(),
        }),
    }
}
