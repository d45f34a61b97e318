use serde::Deserialize;
use thiserror::Error;

/// Local input validation errors raised before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier cannot be empty")]
    EmptyIdentifier,
    #[error("tag cannot be empty")]
    EmptyTag,

    #[error(
        "invalid frequency '{value}', expected one of daily, weekly, monthly, quarterly, yearly"
    )]
    InvalidFrequency { value: String },
    #[error("invalid sort order '{value}', expected asc or desc")]
    InvalidSortOrder { value: String },

    #[error("date must be formatted YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("next page token cannot be empty")]
    EmptyNextPage,
}

/// Client configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },
    #[error("api key cannot be empty")]
    EmptyApiKey,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be a positive number of milliseconds: '{value}'")]
    InvalidTimeout { value: String },
}

/// Error raised by every remote operation.
///
/// A `status_code` of `0` means no HTTP response was received (connection
/// failure, timeout, unreadable body). Otherwise it is the status returned by
/// the service, including `2xx` when the body did not have the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("intrinio api error (status {status_code}): {message}")]
pub struct RemoteApiError {
    status_code: u16,
    message: String,
    raw_body: Option<String>,
}

impl RemoteApiError {
    pub fn new(status_code: u16, message: impl Into<String>, raw_body: Option<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            raw_body,
        }
    }

    /// Failure below HTTP: nothing came back from the service.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(0, message, None)
    }

    /// Non-success HTTP status. The message is lifted from the service's
    /// JSON error body when one is present.
    pub fn from_response(status_code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = service_message(&body).unwrap_or_else(|| format!("HTTP {status_code}"));
        Self::new(status_code, message, Some(body))
    }

    /// Success status but the body could not be read as the expected model.
    pub fn unexpected_body(
        status_code: u16,
        body: impl Into<String>,
        detail: impl AsRef<str>,
    ) -> Self {
        Self::new(
            status_code,
            format!("unexpected response body: {}", detail.as_ref()),
            Some(body.into()),
        )
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    pub const fn is_transport(&self) -> bool {
        self.status_code == 0
    }

    pub const fn is_client_error(&self) -> bool {
        self.status_code >= 400 && self.status_code < 500
    }

    pub const fn is_server_error(&self) -> bool {
        self.status_code >= 500 && self.status_code < 600
    }
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn service_message(body: &str) -> Option<String> {
    let parsed: ServiceErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
