//! Yahoo Finance quote provider configuration.

use serde::Deserialize;

/// HTTP client settings for the chart API.
#[derive(Debug, Clone, Deserialize)]
pub struct YahooHttpConfig {
    /// Total request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection establishment timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// User-Agent header; the chart API throttles requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    concat!("Mozilla/5.0 (compatible; yieldwatch/", env!("CARGO_PKG_VERSION"), ")").into()
}

impl Default for YahooHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Yahoo Finance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct YahooConfig {
    /// Chart API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Chart range requested per quote (one trading day by default).
    #[serde(default = "default_range")]
    pub range: String,
    /// HTTP client settings.
    #[serde(default)]
    pub http: YahooHttpConfig,
}

fn default_base_url() -> String {
    "https://query1.finance.yahoo.com".into()
}

fn default_range() -> String {
    "1d".into()
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            range: default_range(),
            http: YahooHttpConfig::default(),
        }
    }
}
