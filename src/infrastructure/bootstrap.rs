//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

#[cfg(not(feature = "telegram"))]
use tracing::warn;
use tracing::{debug, info};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::yahoo::YahooClient;
use crate::application::RunOrchestrator;
use crate::error::{NotifyError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::{Clock, LogNotifier, Notifier, QuoteSource, SystemClock};

/// Build the quote source from configuration.
#[allow(clippy::result_large_err)]
pub fn build_quote_source(config: &Config) -> Result<Arc<dyn QuoteSource>> {
    let client = YahooClient::from_config(&config.yahoo)?;
    debug!(base_url = %config.yahoo.base_url, "Quote source configured");
    Ok(Arc::new(client))
}

/// Build the notifier from configuration and the environment.
///
/// Dry runs always use the [`LogNotifier`]. Otherwise the Telegram notifier
/// is built from `TELEGRAM_TOKEN` and `CHAT_ID`; a missing credential is
/// returned as an error so the run can still produce its report.
pub fn build_notifier(
    config: &Config,
    dry_run: bool,
) -> std::result::Result<Arc<dyn Notifier>, NotifyError> {
    if dry_run {
        info!("Dry run: report will be logged instead of delivered");
        return Ok(Arc::new(LogNotifier));
    }
    if !config.telegram.enabled {
        return Err(NotifyError::Disabled);
    }
    telegram_notifier()
}

#[cfg(feature = "telegram")]
fn telegram_notifier() -> std::result::Result<Arc<dyn Notifier>, NotifyError> {
    let tg_config = TelegramConfig::from_env()?;
    Ok(Arc::new(TelegramNotifier::new(tg_config)))
}

#[cfg(not(feature = "telegram"))]
fn telegram_notifier() -> std::result::Result<Arc<dyn Notifier>, NotifyError> {
    warn!("Telegram enabled in config but this build lacks the `telegram` feature");
    Err(NotifyError::Disabled)
}

/// Build a run orchestrator with production collaborators.
///
/// The notifier comes from [`build_notifier`]; an error there is kept and
/// reported per run instead of aborting.
#[allow(clippy::result_large_err)]
pub fn build_orchestrator(
    config: &Config,
    notifier: std::result::Result<Arc<dyn Notifier>, NotifyError>,
    dry_run: bool,
) -> Result<RunOrchestrator> {
    let quotes = build_quote_source(config)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let options = config.run_options(dry_run)?;
    Ok(RunOrchestrator::new(quotes, notifier, clock, options))
}
