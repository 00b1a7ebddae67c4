use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::adapter::inbound::cli::{config, output};
use crate::application::report::format_timestamp;
use crate::error::Result;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{
    format_test_message, TelegramConfig, TelegramNotifier,
};
#[cfg(feature = "telegram")]
use crate::port::Notifier;

/// Test Telegram notification by sending a test message.
#[cfg(feature = "telegram")]
pub async fn execute_telegram(config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    let tg_config = TelegramConfig::from_env()?;
    let masked_token = tg_config.masked_token();
    let chat = tg_config.chat_display();

    if !output::is_json() {
        output::section("Telegram Check");
        output::action("Sending", "Telegram test message", false);
        output::field("Bot token", &masked_token);
        output::field("Chat", &chat);
    }

    let timestamp = format_timestamp(Utc::now(), config.utc_offset()?);
    let notifier = TelegramNotifier::new(tg_config);
    notifier.send(&format_test_message(&timestamp)).await?;

    if output::is_json() {
        output::result(json!({
            "command": "check.telegram",
            "masked_token": masked_token,
            "chat_id": chat,
            "status": "sent",
        }));
        return Ok(());
    }

    output::action("Sent", "Telegram test message", true);
    output::hint("check Telegram for the message");
    Ok(())
}

/// Without the `telegram` feature there is nothing to test.
#[cfg(not(feature = "telegram"))]
pub async fn execute_telegram(config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    let timestamp = format_timestamp(Utc::now(), config.utc_offset()?);
    if output::is_json() {
        output::result(json!({
            "command": "check.telegram",
            "timestamp": timestamp,
            "status": "unavailable",
        }));
    }
    Err(crate::error::NotifyError::Disabled.into())
}
