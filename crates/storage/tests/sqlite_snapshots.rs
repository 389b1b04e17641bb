use storage::repository::SnapshotRepository;
use storage::sqlite::SqliteSnapshots;

#[tokio::test]
async fn sqlite_snapshot_roundtrip() {
    let repo = SqliteSnapshots::connect("sqlite:file:memdb_snap_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("pomodoro_history").await.unwrap(), None);

    let snapshot = r#"[{"type":"Focus","duration":"25:00","completedAt":"09:15"}]"#;
    repo.put("pomodoro_history", snapshot).await.unwrap();
    assert_eq!(
        repo.get("pomodoro_history").await.unwrap().as_deref(),
        Some(snapshot)
    );
}

#[tokio::test]
async fn sqlite_put_overwrites_and_delete_clears() {
    let repo = SqliteSnapshots::connect("sqlite:file:memdb_snap_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put("slot", "first").await.unwrap();
    repo.put("slot", "second").await.unwrap();
    assert_eq!(repo.get("slot").await.unwrap().as_deref(), Some("second"));

    repo.delete("slot").await.unwrap();
    assert_eq!(repo.get("slot").await.unwrap(), None);

    // Deleting a missing key stays quiet.
    repo.delete("slot").await.unwrap();
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteSnapshots::connect("sqlite:file:memdb_snap_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.put("slot", "value").await.unwrap();
    assert_eq!(repo.get("slot").await.unwrap().as_deref(), Some("value"));
}
