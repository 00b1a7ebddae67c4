//! Handler for the `run` command.

use std::path::Path;

use tracing::warn;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::error::{NotifyError, Result};
use crate::infrastructure::bootstrap;

/// Execute the run command.
///
/// Only configuration problems are returned as errors; quote and delivery
/// failures are reported in the summary.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = config::load(config_path)?;
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }
    config.init_logging();

    let watchlist = config.watchlist()?;
    let notifier = bootstrap::build_notifier(&config, args.dry_run);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Entries", watchlist.len());
    output::field("Threshold", config.valuation.threshold);
    if args.dry_run {
        output::warning("Dry-run mode enabled, the report will not be sent");
    }
    // Warn even when no buy signal needs delivering.
    if let Err(
        e @ (NotifyError::MissingCredential { .. } | NotifyError::InvalidCredential { .. }),
    ) = &notifier
    {
        warn!(error = %e, "Telegram credentials unusable, buy signals will not be delivered");
        output::warning(&format!("Telegram not ready: {e}"));
        output::hint("set TELEGRAM_TOKEN and CHAT_ID, or add them to .env");
    }

    let orchestrator = bootstrap::build_orchestrator(&config, notifier, args.dry_run)?;
    let summary = orchestrator.run_once(&watchlist).await;
    output::run_summary(&summary, args.dry_run);
    Ok(())
}
