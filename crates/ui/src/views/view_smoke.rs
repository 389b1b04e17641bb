use chrono::TimeZone;

use companion_core::model::{IntervalKind, SessionHistoryEntry};
use storage::repository::{InMemorySnapshots, SnapshotRepository};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_snapshots};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_landing_copy() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Feeling Stuck?"), "missing headline in {html}");
    assert!(html.contains("Get Started"), "missing CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_input_form() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("How are you feeling about your lesson?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Analyze"), "missing submit button in {html}");
    assert!(html.contains("Photosynthesis"), "missing suggestion chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timer_view_smoke_renders_idle_clock() {
    let mut harness = setup_view_harness(ViewKind::Timer);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Focus Session"), "missing mode title in {html}");
    assert!(html.contains("25:00"), "missing remaining time in {html}");
    assert!(html.contains("Start"), "missing toggle button in {html}");
    assert!(
        html.contains("No completed sessions yet"),
        "missing empty history copy in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timer_view_smoke_renders_persisted_history() {
    let snapshots = InMemorySnapshots::new();
    let at = chrono::Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
    let entries = vec![
        SessionHistoryEntry::new(IntervalKind::Break, 300, at),
        SessionHistoryEntry::new(IntervalKind::Focus, 1500, at),
    ];
    snapshots
        .put("pomodoroHistory", &serde_json::to_string(&entries).unwrap())
        .await
        .unwrap();

    let mut harness = setup_view_harness_with_snapshots(ViewKind::Timer, snapshots);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Session History"), "missing history heading in {html}");
    assert!(html.contains("05:00"), "missing break entry duration in {html}");
    assert!(html.contains("Clear"), "missing clear button in {html}");
    assert!(
        !html.contains("No completed sessions yet"),
        "empty-state copy should be gone in {html}"
    );

    // Loading is read-only: the stored snapshot must survive untouched.
    let stored = harness.snapshots.get("pomodoroHistory").await.unwrap();
    assert!(stored.is_some(), "snapshot should remain after load");
}
