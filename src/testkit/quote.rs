//! Scripted [`QuoteSource`] for testing.
//!
//! Each ticker is scripted with a price, an empty result, or a failure.
//! Unscripted tickers fail. Every call is recorded so tests can assert on
//! ordering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{Price, Ticker};
use crate::error::{QuoteError, Result};
use crate::port::QuoteSource;

/// Scripted response for one ticker.
#[derive(Debug, Clone)]
pub enum Scripted {
    Price(Price),
    NoData,
    Fail(String),
}

/// A quote source answering from a fixed script.
#[derive(Clone, Default)]
pub struct ScriptedQuoteSource {
    script: HashMap<Ticker, Scripted>,
    calls: Arc<Mutex<Vec<Ticker>>>,
}

impl ScriptedQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, ticker: &str, price: Price) -> Self {
        self.script.insert(Ticker::from(ticker), Scripted::Price(price));
        self
    }

    pub fn with_no_data(mut self, ticker: &str) -> Self {
        self.script.insert(Ticker::from(ticker), Scripted::NoData);
        self
    }

    pub fn with_failure(mut self, ticker: &str, reason: &str) -> Self {
        self.script
            .insert(Ticker::from(ticker), Scripted::Fail(reason.to_string()));
        self
    }

    /// Tickers requested so far, in call order.
    pub fn calls(&self) -> Vec<Ticker> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl QuoteSource for ScriptedQuoteSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_latest_close(&self, ticker: &Ticker) -> Result<Option<Price>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ticker.clone());

        match self.script.get(ticker) {
            Some(Scripted::Price(price)) => Ok(Some(*price)),
            Some(Scripted::NoData) => Ok(None),
            Some(Scripted::Fail(reason)) => Err(QuoteError::Provider {
                ticker: ticker.to_string(),
                reason: reason.clone(),
            }
            .into()),
            None => Err(QuoteError::Provider {
                ticker: ticker.to_string(),
                reason: "not scripted".to_string(),
            }
            .into()),
        }
    }
}
