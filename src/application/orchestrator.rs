//! Single-pass valuation run.
//!
//! Walks the watchlist in order, fetching one quote per ticker, evaluating it,
//! and accumulating the report. The notifier is invoked at most once, and
//! only when at least one security is at or below its cheap price.
//!
//! Nothing in a run is fatal: quote failures skip the entry, missing
//! credentials skip delivery, and delivery failures are logged and dropped.

use std::fmt;
use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{evaluate_with, ThresholdPolicy, Ticker, Watchlist};
use crate::error::NotifyError;
use crate::port::{Clock, Notifier, QuoteSource};

use super::report::{format_timestamp, ReportBuilder};

/// UTC offset of the target market (Taipei), in seconds.
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Tunables for a run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Offset used to stamp the report.
    pub utc_offset: FixedOffset,
    /// Classification of a price exactly at the threshold.
    pub threshold: ThresholdPolicy,
    /// Deliver through the notifier but report the run as a dry run.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or(Utc.fix()),
            threshold: ThresholdPolicy::default(),
            dry_run: false,
        }
    }
}

/// Why an entry was left out of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The quote source failed.
    FetchFailed(String),
    /// The quote source returned no price.
    NoData,
    /// A price was returned but could not be evaluated (zero or negative).
    NotEvaluable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed(reason) => write!(f, "fetch failed: {reason}"),
            Self::NoData => write!(f, "no data"),
            Self::NotEvaluable => write!(f, "price cannot be valued"),
        }
    }
}

/// A skipped watchlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub ticker: Ticker,
    pub reason: SkipReason,
}

/// Outcome of the notify step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum NotificationStatus {
    /// The report was delivered.
    Sent,
    /// No entry signalled a buy; nothing was sent.
    NotNeeded,
    /// A buy was found but the notifier is not configured.
    MissingCredentials(String),
    /// Delivery was attempted and failed; the message was dropped.
    Failed(String),
    /// A buy was found but notifications are turned off.
    Disabled,
    /// A buy was found and the report was handed to the dry-run notifier.
    DryRun,
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::NotNeeded => write!(f, "not needed"),
            Self::MissingCredentials(field) => write!(f, "skipped (missing {field})"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
            Self::Disabled => write!(f, "disabled"),
            Self::DryRun => write!(f, "dry run"),
        }
    }
}

/// Operational summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Report timestamp in market-local time.
    pub timestamp: String,
    /// Entries that produced a report block.
    pub evaluated: usize,
    /// Entries left out of the report.
    pub skipped: Vec<SkippedEntry>,
    /// Entries at or below their cheap price.
    pub buy_signals: usize,
    /// What happened at the notify step.
    pub notification: NotificationStatus,
    /// The rendered report (headline included when there was an opportunity).
    pub report: String,
}

impl RunSummary {
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    #[must_use]
    pub const fn has_opportunity(&self) -> bool {
        self.buy_signals > 0
    }
}

/// Runs one valuation pass over a watchlist.
///
/// The notifier is held as a `Result` so a missing credential surfaces as a
/// typed condition at construction time rather than as an empty value.
pub struct RunOrchestrator {
    quotes: Arc<dyn QuoteSource>,
    notifier: std::result::Result<Arc<dyn Notifier>, NotifyError>,
    clock: Arc<dyn Clock>,
    options: RunOptions,
}

impl RunOrchestrator {
    #[must_use]
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        notifier: std::result::Result<Arc<dyn Notifier>, NotifyError>,
        clock: Arc<dyn Clock>,
        options: RunOptions,
    ) -> Self {
        Self {
            quotes,
            notifier,
            clock,
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Evaluate every entry once and notify if anything is cheap.
    pub async fn run_once(&self, watchlist: &Watchlist) -> RunSummary {
        let timestamp = format_timestamp(self.clock.now(), self.options.utc_offset);
        info!(
            timestamp = %timestamp,
            entries = watchlist.len(),
            provider = self.quotes.name(),
            "Starting valuation run"
        );

        let mut report = ReportBuilder::new(timestamp.clone());
        let mut skipped = Vec::new();
        let mut buy_signals = 0usize;

        for entry in watchlist {
            let ticker = entry.ticker();
            debug!(ticker = %ticker, "Fetching quote");

            let price = match self.quotes.fetch_latest_close(ticker).await {
                Ok(Some(price)) => price,
                Ok(None) => {
                    warn!(ticker = %ticker, "No quote data, skipping");
                    skipped.push(SkippedEntry {
                        ticker: ticker.clone(),
                        reason: SkipReason::NoData,
                    });
                    continue;
                }
                Err(e) => {
                    warn!(ticker = %ticker, error = %e, "Quote fetch failed, skipping");
                    skipped.push(SkippedEntry {
                        ticker: ticker.clone(),
                        reason: SkipReason::FetchFailed(e.to_string()),
                    });
                    continue;
                }
            };

            let Some(result) = evaluate_with(entry, Some(price), self.options.threshold) else {
                warn!(ticker = %ticker, price = %price, "Price not evaluable, skipping");
                skipped.push(SkippedEntry {
                    ticker: ticker.clone(),
                    reason: SkipReason::NotEvaluable,
                });
                continue;
            };

            info!(
                ticker = %ticker,
                price = %price,
                cheap_price = %result.cheap_price.round_dp(2),
                current_yield = %result.current_yield.round_dp(2),
                buy = result.is_buy_signal,
                "Evaluated"
            );

            if result.is_buy_signal {
                buy_signals += 1;
            }
            report.push_entry(entry, &result);
        }

        let has_opportunity = buy_signals > 0;
        let text = report.render(has_opportunity);
        let notification = if has_opportunity {
            info!(buy_signals, "Buy signal found, notifying");
            self.deliver(&text).await
        } else {
            info!("No buy signals, staying quiet");
            NotificationStatus::NotNeeded
        };

        let summary = RunSummary {
            timestamp,
            evaluated: report.len(),
            skipped,
            buy_signals,
            notification,
            report: text,
        };

        info!(
            evaluated = summary.evaluated,
            skipped = summary.skipped_count(),
            buy_signals = summary.buy_signals,
            notification = %summary.notification,
            "Valuation run complete"
        );

        summary
    }

    async fn deliver(&self, text: &str) -> NotificationStatus {
        let notifier = match &self.notifier {
            Ok(notifier) => notifier,
            Err(NotifyError::MissingCredential { field }) => {
                warn!(
                    field = *field,
                    "Notifier credential missing, report not delivered"
                );
                return NotificationStatus::MissingCredentials((*field).to_string());
            }
            Err(NotifyError::Disabled) => {
                info!("Notifications disabled, report not delivered");
                return NotificationStatus::Disabled;
            }
            Err(e) => {
                warn!(error = %e, "Notifier unavailable, report not delivered");
                return NotificationStatus::Failed(e.to_string());
            }
        };

        match notifier.send(text).await {
            Ok(()) if self.options.dry_run => NotificationStatus::DryRun,
            Ok(()) => {
                info!(channel = notifier.name(), "Notification sent");
                NotificationStatus::Sent
            }
            Err(e) => {
                warn!(channel = notifier.name(), error = %e, "Notification failed, dropping message");
                NotificationStatus::Failed(e.to_string())
            }
        }
    }
}
