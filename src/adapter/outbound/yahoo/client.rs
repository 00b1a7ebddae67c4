//! Yahoo Finance chart API client.
//!
//! Reads the latest close from
//! `GET {base_url}/v8/finance/chart/{ticker}?range=1d&interval=1d`.
//! No retries: a failed request skips the ticker for this run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use url::Url;

use super::dto::ChartResponse;
use super::settings::YahooConfig;
use crate::domain::{Price, Ticker};
use crate::error::{ConfigError, QuoteError, Result};
use crate::port::QuoteSource;

/// HTTP client for the Yahoo Finance chart API.
pub struct YahooClient {
    http: HttpClient,
    base_url: Url,
    range: String,
}

impl YahooClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: parse_base_url(base_url)?,
            range: "1d".into(),
        })
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn from_config(config: &YahooConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .user_agent(config.http.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: parse_base_url(&config.base_url)?,
            range: config.range.clone(),
        })
    }

    fn chart_url(&self, ticker: &Ticker) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidValue {
                field: "yahoo.base_url",
                reason: "cannot be used as a base URL".into(),
            })?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker.as_str()]);
        url.query_pairs_mut()
            .append_pair("range", &self.range)
            .append_pair("interval", "1d");
        Ok(url)
    }

    /// Fetch the chart for a ticker and return the latest close.
    pub async fn latest_close(&self, ticker: &Ticker) -> Result<Option<Price>> {
        let url = self.chart_url(ticker)?;
        debug!(url = %url, "Fetching chart");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols come back as 404 with an error payload.
        let parsed: ChartResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(QuoteError::Malformed {
                    ticker: ticker.to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
            Err(_) => {
                return Err(QuoteError::Provider {
                    ticker: ticker.to_string(),
                    reason: format!("HTTP {status}"),
                }
                .into());
            }
        };

        if let Some(error) = parsed.chart.error {
            return Err(QuoteError::Provider {
                ticker: ticker.to_string(),
                reason: error.to_string(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(QuoteError::Provider {
                ticker: ticker.to_string(),
                reason: format!("HTTP {status}"),
            }
            .into());
        }

        let Some(close) = parsed.chart.latest_close() else {
            debug!(ticker = %ticker, "Chart has no closes");
            return Ok(None);
        };

        let price = Decimal::from_f64(close).ok_or_else(|| QuoteError::Malformed {
            ticker: ticker.to_string(),
            reason: format!("close {close} is not a finite number"),
        })?;

        debug!(
            ticker = %ticker,
            price = %price,
            currency = parsed.chart.currency().unwrap_or("?"),
            "Fetched latest close"
        );
        Ok(Some(price))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: "yahoo.base_url",
            reason: "cannot be used as a base URL".into(),
        }
        .into());
    }
    Ok(url)
}

#[async_trait]
impl QuoteSource for YahooClient {
    fn name(&self) -> &'static str {
        "Yahoo Finance"
    }

    async fn fetch_latest_close(&self, ticker: &Ticker) -> Result<Option<Price>> {
        self.latest_close(ticker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_url() {
        let client = YahooClient::new("https://query1.finance.yahoo.com").unwrap();
        let url = client.chart_url(&Ticker::from("00878.TW")).unwrap();

        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/00878.TW?range=1d&interval=1d"
        );
    }

    #[test]
    fn test_chart_url_keeps_base_path() {
        let client = YahooClient::new("http://localhost:9000/proxy/").unwrap();
        let url = client.chart_url(&Ticker::from("0056.TW")).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/proxy/v8/finance/chart/0056.TW?range=1d&interval=1d"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(YahooClient::new("mailto:someone@example.com").is_err());
        assert!(YahooClient::new("not a url").is_err());
    }
}
