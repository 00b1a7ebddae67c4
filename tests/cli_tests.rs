//! End-to-end tests for the `yieldwatch` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREDENTIAL_VARS: [&str; 4] = [
    "TELEGRAM_TOKEN",
    "CHAT_ID",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_CHAT_ID",
];

/// Command isolated from the caller's environment and `.env` file.
fn yieldwatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("yieldwatch").expect("binary built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn single_entry_config(base_url: &str) -> String {
    format!(
        r#"
[yahoo]
base_url = "{base_url}"

[[watchlist]]
ticker = "00878.TW"
name = "ESG High Dividend"
single_dividend = 0.55
frequency = 4
target_yield = 0.09
"#
    )
}

async fn chart_server(close: f64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v8/finance/chart/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": [{ "indicators": { "quote": [{ "close": [close] }] } }],
                "error": null
            }
        })))
        .mount(&server)
        .await;
    server
}

#[test]
fn watchlist_without_config_uses_built_in_entries() {
    let dir = TempDir::new().unwrap();

    yieldwatch(dir.path())
        .arg("watchlist")
        .assert()
        .success()
        .stdout(predicate::str::contains("00878.TW"))
        .stdout(predicate::str::contains("0056.TW"))
        .stdout(predicate::str::contains("24.44"))
        .stdout(predicate::str::contains("9.0%"));
}

#[test]
fn watchlist_json_lists_cheap_prices() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &single_entry_config("http://127.0.0.1:1"));

    yieldwatch(dir.path())
        .args(["--json", "watchlist", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"watchlist""#))
        .stdout(predicate::str::contains(r#""cheap_price":"24.44""#));
}

#[test]
fn check_config_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[[watchlist]\nticker = ");

    yieldwatch(dir.path())
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn check_config_reports_missing_credentials() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &single_entry_config("http://127.0.0.1:1"));

    yieldwatch(dir.path())
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("TELEGRAM_TOKEN"));
}

#[test]
fn run_exits_nonzero_on_invalid_watchlist() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "watchlist = []\n");

    yieldwatch(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("watchlist"));
}

#[tokio::test]
async fn run_without_credentials_still_succeeds() {
    let server = chart_server(19.0).await;
    let dir = TempDir::new().unwrap();
    write_config(&dir, &single_entry_config(&server.uri()));

    yieldwatch(dir.path())
        .args(["--json", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"missing_credentials""#))
        .stdout(predicate::str::contains(r#""buy_signals":1"#));
}

#[tokio::test]
#[cfg(feature = "telegram")]
async fn run_warns_about_missing_credentials_without_buy_signal() {
    let server = chart_server(30.0).await;
    let dir = TempDir::new().unwrap();
    write_config(&dir, &single_entry_config(&server.uri()));

    yieldwatch(dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Telegram not ready"))
        .stdout(predicate::str::contains("TELEGRAM_TOKEN"))
        .stdout(predicate::str::contains("Nothing at target"));
}

#[tokio::test]
async fn dry_run_prints_report_and_does_not_need_credentials() {
    let server = chart_server(19.0).await;
    let dir = TempDir::new().unwrap();
    write_config(&dir, &single_entry_config(&server.uri()));

    yieldwatch(dir.path())
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"))
        .stdout(predicate::str::contains("Bargains found"));
}

#[tokio::test]
async fn run_with_unreachable_provider_skips_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    write_config(&dir, &single_entry_config(&server.uri()));

    yieldwatch(dir.path())
        .args(["--json", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""evaluated":0"#))
        .stdout(predicate::str::contains(r#""status":"not_needed""#));
}
