//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; Telegram credentials
//! are read from the environment (`TELEGRAM_TOKEN`, `CHAT_ID`) and never
//! from the file.
//!
//! # Example
//!
//! ```no_run
//! use yieldwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let watchlist = config.watchlist()?;
//!     println!("watching {} securities", watchlist.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use chrono::FixedOffset;
use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use super::valuation::{ReportConfig, ValuationConfig};
use super::watchlist::{build_watchlist, default_watchlist, WatchlistEntryConfig};
use crate::adapter::outbound::yahoo::YahooConfig;
use crate::application::RunOptions;
use crate::domain::Watchlist;
use crate::error::{ConfigError, Result};

/// Valid range for `report.utc_offset_hours`.
const UTC_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -12..=14;

/// Main application configuration.
///
/// Every section has defaults, so an empty file (or no file at all) yields
/// a working configuration that watches the built-in list.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Quote provider settings.
    #[serde(default)]
    pub yahoo: YahooConfig,

    /// Valuation rule settings.
    #[serde(default)]
    pub valuation: ValuationConfig,

    /// Report presentation settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Securities to monitor, in report order.
    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<WatchlistEntryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            yahoo: YahooConfig::default(),
            valuation: ValuationConfig::default(),
            report: ReportConfig::default(),
            telegram: TelegramAppConfig::default(),
            watchlist: default_watchlist(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, or fall back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Checks value ranges and that the watchlist forms a valid
    /// [`Watchlist`].
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.yahoo.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "yahoo.base_url",
            }
            .into());
        }
        if self.yahoo.range.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "yahoo.range",
            }
            .into());
        }
        if self.yahoo.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "yahoo.http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.yahoo.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "yahoo.http.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !UTC_OFFSET_RANGE.contains(&self.report.utc_offset_hours) {
            return Err(ConfigError::InvalidValue {
                field: "report.utc_offset_hours",
                reason: format!(
                    "must be between {} and {}",
                    UTC_OFFSET_RANGE.start(),
                    UTC_OFFSET_RANGE.end()
                ),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }

        self.watchlist()?;
        Ok(())
    }

    /// Build the validated watchlist.
    ///
    /// # Errors
    ///
    /// Returns a domain error if an entry is invalid, the list is empty, or
    /// a ticker appears twice.
    #[allow(clippy::result_large_err)]
    pub fn watchlist(&self) -> Result<Watchlist> {
        Ok(build_watchlist(&self.watchlist)?)
    }

    /// Report offset as a [`FixedOffset`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured offset is out of range.
    #[allow(clippy::result_large_err)]
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.report.utc_offset_hours * 3600).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "report.utc_offset_hours",
                reason: "offset out of range".to_string(),
            }
            .into()
        })
    }

    /// Run options derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured offset is out of range.
    #[allow(clippy::result_large_err)]
    pub fn run_options(&self, dry_run: bool) -> Result<RunOptions> {
        Ok(RunOptions {
            utc_offset: self.utc_offset()?,
            threshold: self.valuation.threshold,
            dry_run,
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
