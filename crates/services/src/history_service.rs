use std::sync::Arc;

use tracing::warn;

use companion_core::model::SessionHistoryEntry;
use storage::repository::SnapshotRepository;

/// Slot key for the serialized history list.
const HISTORY_SLOT: &str = "pomodoroHistory";

/// Persists the focus-timer session history as one whole-list snapshot.
///
/// History is decoration, not data the user can lose work over: every
/// failure path here degrades to "no history" with a warn log instead of
/// surfacing an error.
#[derive(Clone)]
pub struct HistoryService {
    repo: Arc<dyn SnapshotRepository>,
}

impl HistoryService {
    #[must_use]
    pub fn new(repo: Arc<dyn SnapshotRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted history, newest first.
    ///
    /// A missing slot, unreadable store, or corrupted snapshot all come
    /// back as an empty list.
    pub async fn load(&self) -> Vec<SessionHistoryEntry> {
        let snapshot = match self.repo.get(HISTORY_SLOT).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read timer history: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&snapshot) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("discarding corrupted timer history snapshot: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the full history list. Failures are logged and swallowed.
    pub async fn save(&self, entries: &[SessionHistoryEntry]) {
        let snapshot = match serde_json::to_string(entries) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("failed to serialize timer history: {err}");
                return;
            }
        };
        if let Err(err) = self.repo.put(HISTORY_SLOT, &snapshot).await {
            warn!("failed to write timer history: {err}");
        }
    }

    /// Drop the persisted history. Failures are logged and swallowed.
    pub async fn clear(&self) {
        if let Err(err) = self.repo.delete(HISTORY_SLOT).await {
            warn!("failed to clear timer history: {err}");
        }
    }
}
