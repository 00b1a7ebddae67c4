//! Telegram notifier.
//!
//! Provides the [`TelegramNotifier`], which delivers the run report to one
//! chat through the Bot API using `MarkdownV2` formatting.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};
use tracing::{debug, info};

use crate::error::{NotifyError, Result};
use crate::port::Notifier;

use super::format::{split_message, MESSAGE_CHAR_LIMIT};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat.
pub const CHAT_ID_VAR: &str = "CHAT_ID";

const TOKEN_FALLBACK_VAR: &str = "TELEGRAM_BOT_TOKEN";
const CHAT_ID_FALLBACK_VAR: &str = "TELEGRAM_CHAT_ID";

/// Credentials for the Telegram notifier.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Destination chat: a numeric chat ID or a `@channel` username.
    pub chat: Recipient,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat", &self.chat)
            .finish()
    }
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_TOKEN` and `CHAT_ID` (falling back to
    /// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`). Empty values count as
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingCredential`] naming the first absent
    /// variable, or [`NotifyError::InvalidCredential`] if the chat cannot be
    /// parsed.
    pub fn from_env() -> std::result::Result<Self, NotifyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, fallback: &str| {
            lookup(primary)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(fallback).filter(|v| !v.trim().is_empty()))
        };

        let bot_token = read(TOKEN_VAR, TOKEN_FALLBACK_VAR)
            .ok_or(NotifyError::MissingCredential { field: TOKEN_VAR })?;
        let chat_raw = read(CHAT_ID_VAR, CHAT_ID_FALLBACK_VAR)
            .ok_or(NotifyError::MissingCredential { field: CHAT_ID_VAR })?;

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            chat: parse_chat(&chat_raw)?,
        })
    }

    /// Chat in display form.
    #[must_use]
    pub fn chat_display(&self) -> String {
        match &self.chat {
            Recipient::Id(id) => id.0.to_string(),
            Recipient::ChannelUsername(name) => name.clone(),
        }
    }

    /// Token with all but the bot ID hidden.
    #[must_use]
    pub fn masked_token(&self) -> String {
        mask_token(&self.bot_token)
    }
}

fn parse_chat(raw: &str) -> std::result::Result<Recipient, NotifyError> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if raw.len() > 1 && raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    Err(NotifyError::InvalidCredential {
        field: CHAT_ID_VAR,
        reason: "expected a numeric chat ID or an @channel username".into(),
    })
}

fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, _)) => format!("{bot_id}:***"),
        None => "***".to_string(),
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        info!(chat = %config.chat_display(), "Telegram notifier configured");
        Self {
            bot: Bot::new(&config.bot_token),
            chat: config.chat,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: &str) -> Result<()> {
        let chunks = split_message(message, MESSAGE_CHAR_LIMIT);
        let total = chunks.len();

        for (i, chunk) in chunks.into_iter().enumerate() {
            debug!(part = i + 1, total, "Sending Telegram message");
            self.bot
                .send_message(self.chat.clone(), chunk)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }

        Ok(())
    }
}
