//! Quote source port for latest closing prices.
//!
//! A quote source may fail (network or provider error) or succeed with no
//! data (unknown, delisted, or halted ticker). The run treats both as "no
//! data" for that ticker, but they are kept apart here so the cause can be
//! logged.

use async_trait::async_trait;

use crate::domain::{Price, Ticker};
use crate::error::Result;

/// Latest close for a ticker as reported by a quote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// The requested ticker.
    pub ticker: Ticker,
    /// Latest closing price, or `None` when the provider had no data.
    pub price: Option<Price>,
}

/// Trait for market-data providers.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the most recent closing price for `ticker`.
    ///
    /// Returns `Ok(None)` when the provider answered but had no price for the
    /// current period.
    async fn fetch_latest_close(&self, ticker: &Ticker) -> Result<Option<Price>>;

    /// Fetch the latest close wrapped as a [`PriceQuote`].
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<PriceQuote> {
        let price = self.fetch_latest_close(ticker).await?;
        Ok(PriceQuote {
            ticker: ticker.clone(),
            price,
        })
    }
}
