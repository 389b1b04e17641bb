use crate::model::IntervalKind;

/// Default work interval, in seconds (25 minutes).
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Default break interval, in seconds (5 minutes).
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Fixed interval durations for the focus timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    work_secs: u32,
    break_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

impl TimerConfig {
    /// Build a config with explicit durations. Zero durations are rejected,
    /// a timer that completes on its first tick is never what anyone wants.
    #[must_use]
    pub fn new(work_secs: u32, break_secs: u32) -> Option<Self> {
        if work_secs == 0 || break_secs == 0 {
            return None;
        }
        Some(Self {
            work_secs,
            break_secs,
        })
    }

    #[must_use]
    pub fn work_secs(&self) -> u32 {
        self.work_secs
    }

    #[must_use]
    pub fn break_secs(&self) -> u32 {
        self.break_secs
    }

    #[must_use]
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

//
// ─── MODE ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            TimerMode::Work => TimerMode::Break,
            TimerMode::Break => TimerMode::Work,
        }
    }
}

/// Emitted by [`TimerEngine::tick`] when an interval runs down to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedInterval {
    pub kind: IntervalKind,
    pub duration_secs: u32,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Work/break countdown state machine.
///
/// Pure state: the owner drives it with `toggle`/`tick`/`reset` and reacts to
/// the returned completion (cue, history entry, persistence). Invariant:
/// `0 <= remaining <= duration of the current mode`. A completion always
/// leaves the engine idle in the opposite mode with a full interval loaded;
/// the next interval needs a manual start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEngine {
    config: TimerConfig,
    mode: TimerMode,
    remaining: u32,
    running: bool,
}

impl TimerEngine {
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            mode: TimerMode::Work,
            remaining: config.work_secs(),
            running: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Duration of the interval currently loaded.
    #[must_use]
    pub fn current_duration(&self) -> u32 {
        self.config.duration_for(self.mode)
    }

    /// Fraction of the current interval already elapsed, for display.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let duration = self.current_duration();
        (duration - self.remaining) as f32 / duration as f32
    }

    /// Start or pause the countdown. Remaining time is untouched.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance one second. Returns the finished interval when this tick
    /// completes it: the mode has flipped, the new interval is fully loaded,
    /// and the engine is paused.
    pub fn tick(&mut self) -> Option<CompletedInterval> {
        if !self.running || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return None;
        }

        let finished = CompletedInterval {
            kind: self.mode.into(),
            duration_secs: self.current_duration(),
        };
        self.mode = self.mode.flipped();
        self.remaining = self.current_duration();
        self.running = false;
        Some(finished)
    }

    /// Back to a paused work interval, whatever the current state.
    pub fn reset(&mut self) {
        self.mode = TimerMode::Work;
        self.remaining = self.config.work_secs();
        self.running = false;
    }
}

/// Zero-padded `MM:SS` rendering of a second count.
#[must_use]
pub fn format_mm_ss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
