//! Terminal and JSON-lines rendering for CLI handlers.
//!
//! Every printed item is a [`Line`]. In text mode it is rendered with colors.
//! In JSON mode it becomes one `{"type": ..., "payload": ...}` object per
//! line. Quiet mode drops everything except warnings, errors, and
//! command results.
//!
//! Command results (run summary, watchlist) are rendered here as well, so
//! the handlers only decide *what* to show.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

use crate::application::report::{target_percent, two_places};
use crate::application::{NotificationStatus, RunSummary, SkippedEntry};
use crate::domain::Watchlist;

/// Output mode selected by the global `--json` and `--quiet` flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn mode() -> OutputConfig {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    mode().json
}

/// One unit of CLI output.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Header { version: String },
    Section(String),
    Field { label: String, value: String },
    Success(String),
    Warning(String),
    Hint(String),
    Action { verb: String, target: String, done: bool },
    Text(String),
}

impl Line {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Section(_) => "section",
            Self::Field { .. } => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Hint(_) => "hint",
            Self::Action { .. } => "action",
            Self::Text(_) => "lines",
        }
    }

    /// Warnings survive `--quiet`.
    const fn is_essential(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    fn payload(&self) -> Value {
        match self {
            Self::Header { version } => json!({ "app": "yieldwatch", "version": version }),
            Self::Section(title) => json!({ "title": title }),
            Self::Field { label, value } => json!({ "label": label, "value": value }),
            Self::Success(message) | Self::Warning(message) | Self::Hint(message) => {
                json!({ "message": message })
            }
            Self::Action { verb, target, done } => json!({
                "verb": verb,
                "target": target,
                "status": if *done { "done" } else { "in_progress" },
            }),
            Self::Text(content) => json!({ "content": content }),
        }
    }

    /// Text-mode rendering; may span several lines.
    fn render(&self) -> String {
        match self {
            Self::Header { version } => format!("{} {}\n", "yieldwatch".bold(), version.dimmed()),
            Self::Section(title) => format!("\n{}", title.bold()),
            Self::Field { label, value } => format!("  {:<14} {}", label.dimmed(), value),
            Self::Success(message) => format!("  {} {}", "✓".green(), message),
            Self::Warning(message) => format!("  {} {}", "⚠".yellow(), message),
            Self::Hint(message) => format!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()),
            Self::Action {
                verb,
                target,
                done: false,
            } => format!("  {} {}...", verb.bold().cyan(), target),
            Self::Action {
                verb,
                target,
                done: true,
            } => format!("  {} {} {}", "✓".green(), verb.bold().green(), target),
            Self::Text(content) => content
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Print one line according to the current mode.
pub fn emit(line: Line) {
    let config = mode();
    if config.json {
        println!("{}", json!({ "type": line.kind(), "payload": line.payload() }));
    } else if !config.quiet || line.is_essential() {
        println!("{}", line.render());
    }
}

/// Print a command result: a single JSON object, or nothing in text mode.
pub fn result(value: Value) {
    if is_json() {
        println!("{value}");
    }
}

/// Print an error to stderr regardless of quiet mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn header(version: &str) {
    emit(Line::Header {
        version: version.to_string(),
    });
}

pub fn section(title: &str) {
    emit(Line::Section(title.to_string()));
}

pub fn field(label: &str, value: impl Display) {
    emit(Line::Field {
        label: label.to_string(),
        value: value.to_string(),
    });
}

pub fn success(message: &str) {
    emit(Line::Success(message.to_string()));
}

pub fn warning(message: &str) {
    emit(Line::Warning(message.to_string()));
}

pub fn hint(message: &str) {
    emit(Line::Hint(message.to_string()));
}

pub fn action(verb: &str, target: &str, done: bool) {
    emit(Line::Action {
        verb: verb.to_string(),
        target: target.to_string(),
        done,
    });
}

/// Warning line for a skipped watchlist entry.
#[must_use]
pub fn skipped_line(skipped: &SkippedEntry) -> Line {
    Line::Warning(format!("{} skipped: {}", skipped.ticker, skipped.reason))
}

/// Lines explaining the outcome of the notify step.
#[must_use]
pub fn notification_lines(status: &NotificationStatus) -> Vec<Line> {
    match status {
        NotificationStatus::Sent => vec![Line::Success("Report delivered".into())],
        NotificationStatus::NotNeeded => {
            vec![Line::Success("Nothing at target, no message sent".into())]
        }
        NotificationStatus::MissingCredentials(field) => vec![
            Line::Warning(format!("Buy signal found but {field} is not set")),
            Line::Hint("set TELEGRAM_TOKEN and CHAT_ID, or add them to .env".into()),
        ],
        NotificationStatus::Failed(reason) => {
            vec![Line::Warning(format!("Delivery failed: {reason}"))]
        }
        NotificationStatus::Disabled => {
            vec![Line::Warning("Buy signal found but Telegram is disabled".into())]
        }
        NotificationStatus::DryRun => vec![Line::Success("Report logged (dry run)".into())],
    }
}

/// Render a finished run. JSON mode prints the whole summary as one object.
pub fn run_summary(summary: &RunSummary, dry_run: bool) {
    if is_json() {
        result(json!({ "command": "run", "summary": summary }));
        return;
    }

    section("Summary");
    field("Time", &summary.timestamp);
    field("Evaluated", summary.evaluated);
    field("Skipped", summary.skipped_count());
    field("Buy signals", summary.buy_signals);
    field("Notification", &summary.notification);

    for skipped in &summary.skipped {
        emit(skipped_line(skipped));
    }
    for line in notification_lines(&summary.notification) {
        emit(line);
    }

    if dry_run && !summary.report.is_empty() {
        section("Report");
        emit(Line::Text(summary.report.clone()));
    }
}

/// Column widths for the watchlist table; the last column is unpadded.
const WATCHLIST_COLUMNS: [(&str, usize); 5] = [
    ("Ticker", 10),
    ("Annual div", 10),
    ("Target", 7),
    ("Cheap price", 11),
    ("Name", 0),
];

/// Cells of one watchlist table row.
fn watchlist_cells(watchlist: &Watchlist) -> Vec<[String; 5]> {
    watchlist
        .iter()
        .map(|entry| {
            [
                entry.ticker().to_string(),
                two_places(entry.annual_dividend()),
                target_percent(entry.target_yield()),
                two_places(entry.cheap_price()),
                entry.display_name().to_string(),
            ]
        })
        .collect()
}

/// Format a row: first column left-aligned, the rest right-aligned.
fn table_row(cells: &[String]) -> String {
    let mut line = String::from("  ");
    for (i, (cell, (_, width))) in cells.iter().zip(WATCHLIST_COLUMNS.iter()).enumerate() {
        if i == 0 {
            line.push_str(&format!("{cell:<width$} "));
        } else {
            line.push_str(&format!("{cell:>width$} "));
        }
    }
    line.trim_end().to_string()
}

/// Render the watchlist with derived cheap prices.
pub fn watchlist(watchlist: &Watchlist) {
    if is_json() {
        let entries: Vec<Value> = watchlist
            .iter()
            .map(|entry| {
                json!({
                    "ticker": entry.ticker().as_str(),
                    "name": entry.display_name(),
                    "single_dividend": entry.single_dividend(),
                    "frequency": entry.frequency(),
                    "target_yield": entry.target_yield(),
                    "annual_dividend": entry.annual_dividend(),
                    "cheap_price": two_places(entry.cheap_price()),
                })
            })
            .collect();
        result(json!({ "command": "watchlist", "entries": entries }));
        return;
    }
    if mode().quiet {
        return;
    }

    section("Watchlist");
    let header: Vec<String> = WATCHLIST_COLUMNS
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect();
    println!("{}", table_row(&header).dimmed());
    for cells in watchlist_cells(watchlist) {
        println!("{}", table_row(&cells));
    }
}
