use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, format_mm_ss};

/// What kind of interval a history entry records.
///
/// Serialized as `"Focus"` / `"Break"`, the labels the history list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalKind {
    Focus,
    Break,
}

impl IntervalKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IntervalKind::Focus => "Focus",
            IntervalKind::Break => "Break",
        }
    }
}

impl From<TimerMode> for IntervalKind {
    fn from(mode: TimerMode) -> Self {
        match mode {
            TimerMode::Work => IntervalKind::Focus,
            TimerMode::Break => IntervalKind::Break,
        }
    }
}

/// One completed interval, as shown in the session history list.
///
/// Entries are immutable once created. The persisted JSON uses the stable
/// key names `type`, `duration`, and `completedAt`; snapshots written by
/// earlier releases must keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryEntry {
    #[serde(rename = "type")]
    kind: IntervalKind,
    duration: String,
    completed_at: String,
}

impl SessionHistoryEntry {
    /// Build an entry for an interval of `duration_secs` finishing at
    /// `completed_at` local wall-clock time.
    #[must_use]
    pub fn new(kind: IntervalKind, duration_secs: u32, completed_at: DateTime<Local>) -> Self {
        Self {
            kind,
            duration: format_mm_ss(duration_secs),
            completed_at: completed_at.format("%H:%M").to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> IntervalKind {
        self.kind
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn completed_at(&self) -> &str {
        &self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_afternoon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 30).unwrap()
    }

    #[test]
    fn entry_formats_duration_and_time() {
        let entry = SessionHistoryEntry::new(IntervalKind::Focus, 1500, local_afternoon());
        assert_eq!(entry.kind(), IntervalKind::Focus);
        assert_eq!(entry.duration(), "25:00");
        assert_eq!(entry.completed_at(), "14:07");
    }

    #[test]
    fn entry_round_trips_with_stable_key_names() {
        let entry = SessionHistoryEntry::new(IntervalKind::Break, 300, local_afternoon());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"Break""#), "unexpected json: {json}");
        assert!(json.contains(r#""completedAt""#), "unexpected json: {json}");

        let back: SessionHistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
