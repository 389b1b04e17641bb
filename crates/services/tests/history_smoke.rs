use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeZone;

use companion_core::model::{IntervalKind, SessionHistoryEntry};
use services::HistoryService;
use storage::repository::{InMemorySnapshots, SnapshotRepository, StorageError};

fn sample_entries() -> Vec<SessionHistoryEntry> {
    let at = chrono::Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
    vec![
        SessionHistoryEntry::new(IntervalKind::Break, 300, at),
        SessionHistoryEntry::new(IntervalKind::Focus, 1500, at),
    ]
}

#[tokio::test]
async fn history_round_trips_through_the_snapshot_store() {
    let repo = InMemorySnapshots::new();
    let service = HistoryService::new(Arc::new(repo));

    let entries = sample_entries();
    service.save(&entries).await;

    let loaded = service.load().await;
    assert_eq!(loaded, entries);
}

#[tokio::test]
async fn missing_snapshot_loads_as_empty() {
    let service = HistoryService::new(Arc::new(InMemorySnapshots::new()));
    assert!(service.load().await.is_empty());
}

#[tokio::test]
async fn corrupted_snapshot_loads_as_empty() {
    let repo = InMemorySnapshots::new();
    repo.put("pomodoroHistory", "{definitely not json")
        .await
        .unwrap();

    let service = HistoryService::new(Arc::new(repo));
    assert!(service.load().await.is_empty());
}

#[tokio::test]
async fn clear_empties_the_store() {
    let repo = InMemorySnapshots::new();
    let service = HistoryService::new(Arc::new(repo.clone()));

    service.save(&sample_entries()).await;
    service.clear().await;

    assert_eq!(repo.get("pomodoroHistory").await.unwrap(), None);
    assert!(service.load().await.is_empty());
}

/// A store whose every operation fails, to pin the degrade-silently contract.
#[derive(Clone, Default)]
struct BrokenSnapshots;

#[async_trait]
impl SnapshotRepository for BrokenSnapshots {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("disk on fire".into()))
    }

    async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk on fire".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk on fire".into()))
    }
}

#[tokio::test]
async fn broken_store_never_panics_or_errors() {
    let service = HistoryService::new(Arc::new(BrokenSnapshots));

    assert!(service.load().await.is_empty());
    service.save(&sample_entries()).await;
    service.clear().await;
}
