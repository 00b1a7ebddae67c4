//! Report rendering.
//!
//! Builds the Telegram `MarkdownV2` text for a run: a dated header, one block
//! per evaluated security, and a headline prepended when at least one
//! security is cheap. Numbers are rounded here and nowhere else.

pub mod markdown;

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;

use crate::domain::{round_for_display, ValuationResult, WatchlistEntry};

use markdown::{code, escape_markdown, truncate};

/// Timestamp layout used in report headers and logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Maximum display-name length shown in a block header.
const NAME_DISPLAY_LIMIT: usize = 40;

/// Format `now` in the market's local offset.
#[must_use]
pub fn format_timestamp(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
}

/// Format a decimal with exactly two places, midpoint away from zero.
#[must_use]
pub fn two_places(value: Decimal) -> String {
    format!("{:.2}", round_for_display(value))
}

/// Format a fractional yield (0.09) as a percentage with one place ("9.0%").
#[must_use]
pub fn target_percent(target_yield: Decimal) -> String {
    let percent = (target_yield * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Render the block for one evaluated security.
#[must_use]
pub fn format_entry(entry: &WatchlistEntry, result: &ValuationResult) -> String {
    let name = truncate(entry.display_name(), NAME_DISPLAY_LIMIT);
    let mut block = format!(
        "📊 *{} \\({}\\)*\n\
        \\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\\-\n\
        💰 Price: {}\n\
        📉 Target: {} \\(yield {}\\)\n\
        📈 Current yield: {}",
        escape_markdown(&name),
        escape_markdown(entry.ticker().as_str()),
        code(&two_places(result.price)),
        code(&two_places(result.cheap_price)),
        escape_markdown(&target_percent(entry.target_yield())),
        code(&format!("{}%", two_places(result.current_yield))),
    );

    block.push('\n');
    block.push_str(&format_signal(result));
    block
}

/// Render the buy/hold line with the gap to the threshold.
#[must_use]
pub fn format_signal(result: &ValuationResult) -> String {
    let gap = code(&two_places(result.gap));
    if result.is_buy_signal {
        format!("🔴 *BUY: price is at or below target*\n   {gap} under target")
    } else {
        format!("🟢 *HOLD:* {gap} above target")
    }
}

/// Accumulates per-entry blocks into the final message.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    timestamp: String,
    blocks: Vec<String>,
}

impl ReportBuilder {
    /// Start a report stamped with a preformatted timestamp.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            blocks: Vec::new(),
        }
    }

    /// Append the block for an evaluated entry.
    pub fn push_entry(&mut self, entry: &WatchlistEntry, result: &ValuationResult) {
        self.blocks.push(format_entry(entry, result));
    }

    /// Number of blocks appended so far.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Header line: `📅 *YYYY-MM-DD HH:MM Dividend Watch Report*`.
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "📅 *{} Dividend Watch Report*",
            escape_markdown(&self.timestamp)
        )
    }

    /// Render the report body, prepending the headline when `has_opportunity`.
    #[must_use]
    pub fn render(&self, has_opportunity: bool) -> String {
        let mut text = String::new();
        if has_opportunity {
            text.push_str(HEADLINE);
            text.push('\n');
        }
        text.push_str(&self.header());
        text.push('\n');
        for block in &self.blocks {
            text.push('\n');
            text.push_str(block);
            text.push('\n');
        }
        text
    }
}

/// Headline prepended when at least one security is cheap.
pub const HEADLINE: &str = "🔥 *Bargains found\\! See below:*";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluate;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn etf() -> WatchlistEntry {
        WatchlistEntry::try_new(
            "00878.TW",
            "Cathay ESG High Dividend",
            dec!(0.55),
            4,
            dec!(0.09),
        )
        .unwrap()
    }

    #[test]
    fn test_format_timestamp_in_utc_plus_8() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 22, 5, 0).unwrap();
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_timestamp(now, offset), "2026-10-20 06:05");
    }

    #[test]
    fn test_two_places_pads_and_rounds() {
        assert_eq!(two_places(dec!(19)), "19.00");
        assert_eq!(two_places(dec!(24.444444)), "24.44");
        assert_eq!(two_places(dec!(11.578947)), "11.58");
        assert_eq!(two_places(dec!(0.125)), "0.13");
    }

    #[test]
    fn test_target_percent() {
        assert_eq!(target_percent(dec!(0.09)), "9.0%");
        assert_eq!(target_percent(dec!(0.0725)), "7.3%");
    }

    #[test]
    fn test_format_entry_buy() {
        let entry = etf();
        let result = evaluate(&entry, Some(dec!(19.00))).unwrap();
        let block = format_entry(&entry, &result);

        assert!(block.contains("Cathay ESG High Dividend \\(00878\\.TW\\)"));
        assert!(block.contains("Price: `19.00`"));
        assert!(block.contains("Target: `24.44` \\(yield 9\\.0%\\)"));
        assert!(block.contains("Current yield: `11.58%`"));
        assert!(block.contains("BUY"));
        assert!(block.contains("`5.44` under target"));
    }

    #[test]
    fn test_format_entry_hold() {
        let entry = etf();
        let result = evaluate(&entry, Some(dec!(30.00))).unwrap();
        let block = format_entry(&entry, &result);

        assert!(block.contains("Current yield: `7.33%`"));
        assert!(block.contains("HOLD"));
        assert!(block.contains("`5.56` above target"));
        assert!(!block.contains("BUY"));
    }

    #[test]
    fn test_render_prepends_headline_only_with_opportunity() {
        let entry = etf();
        let result = evaluate(&entry, Some(dec!(19.00))).unwrap();
        let mut report = ReportBuilder::new("2026-10-19 14:30");
        report.push_entry(&entry, &result);

        let with = report.render(true);
        assert!(with.starts_with(HEADLINE));
        assert!(with.contains("2026\\-10\\-19 14:30 Dividend Watch Report"));

        let without = report.render(false);
        assert!(without.starts_with("📅"));
        assert!(!without.contains(HEADLINE));
    }

    #[test]
    fn test_render_keeps_entry_order() {
        let first = etf();
        let second =
            WatchlistEntry::try_new("0056.TW", "Yuanta High Dividend", dec!(0.866), 4, dec!(0.09))
                .unwrap();
        let mut report = ReportBuilder::new("2026-10-19 14:30");
        report.push_entry(&first, &evaluate(&first, Some(dec!(30))).unwrap());
        report.push_entry(&second, &evaluate(&second, Some(dec!(40))).unwrap());

        let text = report.render(false);
        let a = text.find("00878").unwrap();
        let b = text.find("0056\\.TW").unwrap();
        assert!(a < b);
        assert_eq!(report.len(), 2);
    }
}
