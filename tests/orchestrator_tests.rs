//! Run orchestrator behavior with scripted collaborators.

use std::sync::Arc;

use rust_decimal_macros::dec;

use yieldwatch::application::report::HEADLINE;
use yieldwatch::application::{
    NotificationStatus, RunOptions, RunOrchestrator, RunSummary, SkipReason,
};
use yieldwatch::domain::{ThresholdPolicy, Ticker, Watchlist};
use yieldwatch::error::NotifyError;
use yieldwatch::port::Notifier;
use yieldwatch::testkit::clock::FixedClock;
use yieldwatch::testkit::domain::{entry, quarterly_watchlist, watchlist};
use yieldwatch::testkit::notifier::{FailingNotifier, RecordingNotifier};
use yieldwatch::testkit::quote::ScriptedQuoteSource;

fn clock() -> Arc<FixedClock> {
    // 09:30 in Taipei.
    Arc::new(FixedClock::at_utc(2026, 10, 19, 1, 30))
}

async fn run_with(
    quotes: ScriptedQuoteSource,
    notifier: Result<Arc<dyn Notifier>, NotifyError>,
    options: RunOptions,
    watchlist: &Watchlist,
) -> RunSummary {
    RunOrchestrator::new(Arc::new(quotes), notifier, clock(), options)
        .run_once(watchlist)
        .await
}

fn recording() -> (RecordingNotifier, Result<Arc<dyn Notifier>, NotifyError>) {
    let notifier = RecordingNotifier::new();
    let handle: Arc<dyn Notifier> = Arc::new(notifier.clone());
    (notifier, Ok(handle))
}

#[tokio::test]
async fn two_holds_and_one_failure_do_not_notify() {
    let list = quarterly_watchlist(&["A.TW", "B.TW", "C.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_price("A.TW", dec!(30.00))
        .with_failure("B.TW", "HTTP 500")
        .with_price("C.TW", dec!(28.00));
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    assert_eq!(summary.evaluated, 2);
    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.skipped[0].ticker, Ticker::from("B.TW"));
    assert!(matches!(summary.skipped[0].reason, SkipReason::FetchFailed(_)));
    assert_eq!(summary.buy_signals, 0);
    assert_eq!(summary.notification, NotificationStatus::NotNeeded);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn all_fetches_failing_never_notifies() {
    let list = quarterly_watchlist(&["A.TW", "B.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_failure("A.TW", "timeout")
        .with_no_data("B.TW");
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    assert_eq!(summary.evaluated, 0);
    assert_eq!(summary.skipped_count(), 2);
    assert_eq!(summary.skipped[1].reason, SkipReason::NoData);
    assert!(!summary.has_opportunity());
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn failure_does_not_stop_later_entries() {
    let list = quarterly_watchlist(&["A.TW", "B.TW", "C.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_failure("A.TW", "connection reset")
        .with_price("B.TW", dec!(30.00))
        .with_price("C.TW", dec!(19.00));
    let calls = quotes.clone();
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    let called: Vec<String> = calls.calls().iter().map(ToString::to_string).collect();
    assert_eq!(called, ["A.TW", "B.TW", "C.TW"]);
    assert_eq!(summary.evaluated, 2);
    assert_eq!(summary.buy_signals, 1);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn buy_signal_notifies_exactly_once_with_headline() {
    let list = quarterly_watchlist(&["A.TW", "B.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_price("A.TW", dec!(19.00))
        .with_price("B.TW", dec!(20.00));
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    assert_eq!(summary.buy_signals, 2);
    assert_eq!(summary.notification, NotificationStatus::Sent);
    assert_eq!(notifier.len(), 1);

    let message = notifier.last().unwrap();
    assert!(message.starts_with(HEADLINE));
    assert!(message.contains("2026\\-10\\-19 09:30"));
    assert!(message.contains("A\\.TW"));
    assert!(message.contains("B\\.TW"));
    assert!(message.contains("`24.44`"));
    assert!(message.contains("`11.58%`"));
    assert_eq!(summary.report, message);
}

#[tokio::test]
async fn report_keeps_watchlist_order() {
    let list = quarterly_watchlist(&["Z.TW", "A.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_price("Z.TW", dec!(19.00))
        .with_price("A.TW", dec!(30.00));
    let (notifier, handle) = recording();

    run_with(quotes, handle, RunOptions::default(), &list).await;

    let message = notifier.last().unwrap();
    let z = message.find("Z\\.TW").unwrap();
    let a = message.find("A\\.TW").unwrap();
    assert!(z < a);
}

#[tokio::test]
async fn missing_credentials_skip_delivery_but_keep_summary() {
    let list = quarterly_watchlist(&["A.TW"]);
    let quotes = ScriptedQuoteSource::new().with_price("A.TW", dec!(19.00));

    let summary = run_with(
        quotes,
        Err(NotifyError::MissingCredential { field: "CHAT_ID" }),
        RunOptions::default(),
        &list,
    )
    .await;

    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.buy_signals, 1);
    assert_eq!(
        summary.notification,
        NotificationStatus::MissingCredentials("CHAT_ID".into())
    );
    assert!(summary.report.starts_with(HEADLINE));
}

#[tokio::test]
async fn delivery_failure_is_dropped() {
    let list = quarterly_watchlist(&["A.TW"]);
    let quotes = ScriptedQuoteSource::new().with_price("A.TW", dec!(19.00));
    let failing = FailingNotifier::new("chat not found");
    let handle: Arc<dyn Notifier> = Arc::new(failing.clone());

    let summary = run_with(quotes, Ok(handle), RunOptions::default(), &list).await;

    assert_eq!(failing.attempts(), 1);
    match summary.notification {
        NotificationStatus::Failed(reason) => assert!(reason.contains("chat not found")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn disabled_notifier_reports_disabled() {
    let list = quarterly_watchlist(&["A.TW"]);
    let quotes = ScriptedQuoteSource::new().with_price("A.TW", dec!(19.00));

    let summary = run_with(
        quotes,
        Err(NotifyError::Disabled),
        RunOptions::default(),
        &list,
    )
    .await;

    assert_eq!(summary.notification, NotificationStatus::Disabled);
}

#[tokio::test]
async fn dry_run_hands_report_to_notifier() {
    let list = quarterly_watchlist(&["A.TW"]);
    let quotes = ScriptedQuoteSource::new().with_price("A.TW", dec!(19.00));
    let (notifier, handle) = recording();
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };

    let summary = run_with(quotes, handle, options, &list).await;

    assert_eq!(summary.notification, NotificationStatus::DryRun);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn non_positive_price_is_skipped() {
    let list = quarterly_watchlist(&["A.TW"]);
    let quotes = ScriptedQuoteSource::new().with_price("A.TW", dec!(0));
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    assert_eq!(summary.evaluated, 0);
    assert_eq!(summary.skipped[0].reason, SkipReason::NotEvaluable);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn exclusive_threshold_holds_at_equality() {
    // 0.9 * 4 / 0.09 = 40 exactly.
    let list = watchlist(vec![entry("EQ.TW", dec!(0.9), 4, dec!(0.09))]);

    let inclusive = run_with(
        ScriptedQuoteSource::new().with_price("EQ.TW", dec!(40)),
        recording().1,
        RunOptions::default(),
        &list,
    )
    .await;
    assert_eq!(inclusive.buy_signals, 1);

    let exclusive = run_with(
        ScriptedQuoteSource::new().with_price("EQ.TW", dec!(40)),
        recording().1,
        RunOptions {
            threshold: ThresholdPolicy::Exclusive,
            ..RunOptions::default()
        },
        &list,
    )
    .await;
    assert_eq!(exclusive.buy_signals, 0);
    assert_eq!(exclusive.notification, NotificationStatus::NotNeeded);
}

#[tokio::test]
async fn summary_serializes_for_json_output() {
    let list = quarterly_watchlist(&["A.TW", "B.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_price("A.TW", dec!(30.00))
        .with_no_data("B.TW");
    let (_notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["evaluated"], 1);
    assert_eq!(value["skipped"][0]["ticker"], "B.TW");
    assert_eq!(value["skipped"][0]["reason"]["kind"], "no_data");
    assert_eq!(value["notification"]["status"], "not_needed");
    assert_eq!(value["timestamp"], "2026-10-19 09:30");
}

#[tokio::test]
async fn price_too_small_to_value_is_skipped() {
    let list = quarterly_watchlist(&["A.TW", "B.TW"]);
    let quotes = ScriptedQuoteSource::new()
        .with_price("A.TW", rust_decimal::Decimal::new(1, 28))
        .with_price("B.TW", dec!(30.00));
    let (notifier, handle) = recording();

    let summary = run_with(quotes, handle, RunOptions::default(), &list).await;

    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.skipped[0].ticker, Ticker::from("A.TW"));
    assert_eq!(summary.skipped[0].reason, SkipReason::NotEvaluable);
    assert!(notifier.is_empty());
}
