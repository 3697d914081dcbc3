//! Countdown timer used for rest and set intervals.
//!
//! The timer never reads a clock itself: the owner calls [`Countdown::tick`]
//! once per elapsed second while it is shown. Dropping the owner's ticker is
//! enough to cancel it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Result of feeding one second to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Idle,
    Ticked { remaining: u32 },
    /// Reached zero on this tick. Reported once per run.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    initial_secs: u32,
    remaining_secs: u32,
    state: TimerState,
}

impl Countdown {
    #[must_use]
    pub fn new(initial_secs: u32) -> Self {
        Self {
            initial_secs,
            remaining_secs: initial_secs,
            state: TimerState::Idle,
        }
    }

    #[must_use]
    pub fn initial_secs(&self) -> u32 {
        self.initial_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == TimerState::Completed
    }

    /// Start or resume. No effect once completed; call [`Countdown::reset`] first.
    pub fn start(&mut self) {
        if matches!(self.state, TimerState::Idle | TimerState::Paused) {
            self.state = TimerState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Play/pause button behaviour.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Restore the initial duration and clear running/completed, from any state.
    pub fn reset(&mut self) {
        self.remaining_secs = self.initial_secs;
        self.state = TimerState::Idle;
    }

    /// Advance by one second of wall-clock time.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Completed;
            return TickOutcome::Completed;
        }
        TickOutcome::Ticked {
            remaining: self.remaining_secs,
        }
    }

    /// Share of the initial duration already elapsed, 0..=100.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.initial_secs == 0 {
            return if self.is_completed() { 100 } else { 0 };
        }
        let elapsed = u64::from(self.initial_secs - self.remaining_secs.min(self.initial_secs));
        u32::try_from(elapsed * 100 / u64::from(self.initial_secs)).unwrap_or(100)
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_clock(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}
