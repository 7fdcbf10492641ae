use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use crate::error::{HarnessErr, Result};

/// The two states a [`Timer`] can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
}

impl Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerState::Idle => f.write_str("idle"),
            TimerState::Running => f.write_str("running"),
        }
    }
}

/// A stopwatch measuring both the total duration of a phase and the deltas
/// between sub-phases, using a single clock.
///
/// The timer is reusable: after `stop` it is idle again and can be restarted.
/// Calling an operation in the wrong state is a caller bug and yields
/// [`HarnessErr::IllegalState`] without touching the timer.
#[derive(Debug, Default)]
pub struct Timer {
    start: Option<Instant>,
    last_record: Option<Instant>,
}

impl Timer {
    /// Creates a new idle `Timer`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state of the timer.
    pub fn state(&self) -> TimerState {
        match self.start {
            Some(_) => TimerState::Running,
            None => TimerState::Idle,
        }
    }

    /// Starts the timer.
    ///
    /// # Errors
    /// Returns `IllegalState` if the timer is already running.
    pub fn start(&mut self) -> Result<()> {
        if self.start.is_some() {
            return Err(self.illegal("start"));
        }

        let now = Instant::now();
        self.start = Some(now);
        self.last_record = Some(now);
        Ok(())
    }

    /// Returns the time elapsed since the last `record` or `start` call and
    /// resets the record mark to now.
    ///
    /// # Errors
    /// Returns `IllegalState` if the timer is idle.
    pub fn record(&mut self) -> Result<Duration> {
        let Some(last) = self.last_record else {
            return Err(self.illegal("record"));
        };

        let now = Instant::now();
        self.last_record = Some(now);
        Ok(now.duration_since(last))
    }

    /// Stops the timer, returning the time elapsed since `start`.
    ///
    /// # Errors
    /// Returns `IllegalState` if the timer is idle.
    pub fn stop(&mut self) -> Result<Duration> {
        let Some(start) = self.start.take() else {
            return Err(self.illegal("stop"));
        };

        let end = Instant::now();
        self.last_record = None;
        Ok(end.duration_since(start))
    }

    fn illegal(&self, op: &'static str) -> HarnessErr {
        HarnessErr::IllegalState {
            op,
            state: self.state(),
        }
    }
}
