use chrono::Local;

use companion_core::model::SessionHistoryEntry;
use companion_core::timer::{TimerConfig, TimerEngine, TimerMode, format_mm_ss};
use companion_core::Clock;

/// Display adapter over the countdown engine plus the session history list.
///
/// Owns the history (newest first) so a completed interval becomes an entry
/// in one place; the view persists whatever this hands back.
#[derive(Clone, Debug)]
pub struct TimerVm {
    engine: TimerEngine,
    clock: Clock,
    history: Vec<SessionHistoryEntry>,
}

impl TimerVm {
    #[must_use]
    pub fn new(config: TimerConfig, clock: Clock) -> Self {
        Self {
            engine: TimerEngine::new(config),
            clock,
            history: Vec::new(),
        }
    }

    /// Replace the history with the persisted list loaded at startup.
    pub fn set_history(&mut self, entries: Vec<SessionHistoryEntry>) {
        self.history = entries;
    }

    #[must_use]
    pub fn history(&self) -> &[SessionHistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn toggle(&mut self) {
        self.engine.toggle();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// One countdown second. On completion the finished interval is already
    /// prepended to the history; the caller cues the user and persists.
    pub fn tick(&mut self) -> Option<SessionHistoryEntry> {
        let done = self.engine.tick()?;
        let completed_at = self.clock.now().with_timezone(&Local);
        let entry = SessionHistoryEntry::new(done.kind, done.duration_secs, completed_at);
        self.history.insert(0, entry.clone());
        Some(entry)
    }

    #[must_use]
    pub fn mode_title(&self) -> &'static str {
        match self.engine.mode() {
            TimerMode::Work => "Focus Session",
            TimerMode::Break => "Break Time",
        }
    }

    #[must_use]
    pub fn in_work_mode(&self) -> bool {
        self.engine.mode() == TimerMode::Work
    }

    #[must_use]
    pub fn remaining_label(&self) -> String {
        format_mm_ss(self.engine.remaining_secs())
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.engine.is_running() { "Pause" } else { "Start" }
    }

    /// Elapsed fraction as a 0–100 percentage for the progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.engine.progress() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_core::model::IntervalKind;
    use companion_core::time::fixed_clock;

    fn vm_with(work: u32, brk: u32) -> TimerVm {
        TimerVm::new(TimerConfig::new(work, brk).unwrap(), fixed_clock())
    }

    #[test]
    fn completion_prepends_a_focus_entry() {
        let mut vm = vm_with(3, 2);
        vm.toggle();

        assert_eq!(vm.tick(), None);
        assert_eq!(vm.tick(), None);
        let entry = vm.tick().expect("third tick completes the interval");

        assert_eq!(entry.kind(), IntervalKind::Focus);
        assert_eq!(entry.duration(), "00:03");
        assert_eq!(entry.completed_at().len(), 5, "expected HH:MM");
        assert_eq!(vm.history(), &[entry]);
        assert_eq!(vm.mode_title(), "Break Time");
        assert_eq!(vm.remaining_label(), "00:02");
        assert!(!vm.is_running());
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut vm = vm_with(2, 1);

        vm.toggle();
        vm.tick();
        vm.tick();
        vm.toggle();
        vm.tick();

        let kinds: Vec<_> = vm.history().iter().map(SessionHistoryEntry::kind).collect();
        assert_eq!(kinds, vec![IntervalKind::Break, IntervalKind::Focus]);
    }

    #[test]
    fn default_labels_match_the_pomodoro_defaults() {
        let vm = TimerVm::new(TimerConfig::default(), fixed_clock());
        assert_eq!(vm.mode_title(), "Focus Session");
        assert_eq!(vm.remaining_label(), "25:00");
        assert_eq!(vm.toggle_label(), "Start");
        assert_eq!(vm.progress_percent(), 0.0);
    }

    #[test]
    fn reset_leaves_history_alone() {
        let mut vm = vm_with(1, 1);
        vm.toggle();
        vm.tick();
        assert_eq!(vm.history().len(), 1);

        vm.reset();
        assert_eq!(vm.history().len(), 1);
        assert_eq!(vm.mode_title(), "Focus Session");
        assert_eq!(vm.remaining_label(), "00:01");
    }
}
