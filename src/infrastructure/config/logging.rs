//! Logging configuration and initialization.

use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Calling this
    /// more than once is harmless; later calls are ignored.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = if self.is_json() {
            fmt().json().with_env_filter(filter).try_init()
        } else {
            fmt().with_env_filter(filter).try_init()
        };
        if let Err(e) = installed {
            debug!(error = %e, "Tracing subscriber already installed, keeping it");
        }
    }

    /// True when logs are emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
