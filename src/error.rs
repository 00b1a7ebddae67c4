use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Quote provider errors.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("quote provider rejected {ticker}: {reason}")]
    Provider { ticker: String, reason: String },

    #[error("malformed quote response for {ticker}: {reason}")]
    Malformed { ticker: String, reason: String },
}

/// Notification delivery errors.
#[derive(Error, Debug, Clone)]
pub enum NotifyError {
    #[error("notifications are disabled")]
    Disabled,

    #[error("notifier not configured: missing {field}")]
    MissingCredential { field: &'static str },

    #[error("invalid notifier credential {field}: {reason}")]
    InvalidCredential { field: &'static str, reason: String },

    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "telegram")]
impl From<teloxide::RequestError> for Error {
    fn from(err: teloxide::RequestError) -> Self {
        Error::Notify(NotifyError::Delivery(err.to_string()))
    }
}
