use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::TelegramConfig;

/// Validate configuration without fetching any quotes.
#[allow(clippy::result_large_err)]
pub fn execute_config(config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    let watchlist = config.watchlist()?;
    let credentials = credential_status();

    if output::is_json() {
        output::result(json!({
            "command": "check.config",
            "config": config_path.display().to_string(),
            "entries": watchlist.len(),
            "threshold": config.valuation.threshold.to_string(),
            "utc_offset_hours": config.report.utc_offset_hours,
            "quote_provider": config.yahoo.base_url,
            "telegram_enabled": config.telegram.enabled,
            "telegram_credentials": credentials.as_ref().err(),
            "status": "valid",
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Entries", watchlist.len());
    output::field("Threshold", config.valuation.threshold);
    output::field("UTC offset", format!("{:+}h", config.report.utc_offset_hours));
    output::field("Quotes", &config.yahoo.base_url);

    if !config.telegram.enabled {
        output::field("Telegram", "disabled");
    } else {
        match credentials {
            Ok(chat) => {
                output::field("Chat", chat);
                output::success("Telegram integration configured");
            }
            Err(problem) => {
                output::warning(&format!("Telegram enabled but {problem}"));
                output::hint("buy signals will be reported but not delivered");
            }
        }
    }

    output::success("Configuration check complete");
    Ok(())
}

#[cfg(feature = "telegram")]
fn credential_status() -> std::result::Result<String, String> {
    TelegramConfig::from_env()
        .map(|tg| tg.chat_display())
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "telegram"))]
fn credential_status() -> std::result::Result<String, String> {
    Err("this build lacks the `telegram` feature".to_string())
}
