//! Valuation and report settings.

use serde::Deserialize;

use crate::domain::ThresholdPolicy;

/// Valuation rule configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ValuationConfig {
    /// Whether a price exactly at the cheap price counts as a buy.
    #[serde(default)]
    pub threshold: ThresholdPolicy,
}

/// Report presentation configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReportConfig {
    /// Hours east of UTC used to stamp the report (market local time).
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

const fn default_utc_offset_hours() -> i32 {
    8
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}
