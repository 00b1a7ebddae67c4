//! Yahoo Finance chart API response types.
//!
//! Only the fields needed to read the latest close are modelled. A typical
//! response:
//!
//! ```json
//! {"chart": {"result": [{"meta": {"symbol": "0056.TW", "currency": "TWD"},
//!   "timestamp": [1760000000],
//!   "indicators": {"quote": [{"close": [37.45]}]}}], "error": null}}
//! ```

use serde::Deserialize;

/// Top-level chart response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Chart payload: either results or an error.
#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// One symbol's chart data.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

/// Symbol metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// OHLCV series container.
#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
}

/// Close series; individual points are null for bars with no trades.
#[derive(Debug, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

/// Provider-reported error.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.code, description),
            None => write!(f, "{}", self.code),
        }
    }
}

impl Chart {
    /// Last non-null close of the first series, if any.
    #[must_use]
    pub fn latest_close(&self) -> Option<f64> {
        self.result
            .as_ref()?
            .first()?
            .indicators
            .as_ref()?
            .quote
            .first()?
            .close
            .iter()
            .rev()
            .find_map(|close| *close)
    }

    /// Currency reported for the first result.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.result
            .as_ref()?
            .first()?
            .meta
            .as_ref()?
            .currency
            .as_deref()
    }
}
