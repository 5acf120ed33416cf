use crate::error::{InvalidStateError, Result};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Idle,
    Running,
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Idle => write!(f, "idle"),
            State::Running => write!(f, "running"),
        }
    }
}

/// A point-in-time view of a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: State,
    pub running: bool,
    /// Seconds accumulated over completed intervals.
    pub duration: f64,
    pub laps: usize,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let noun = if self.laps == 1 { "lap" } else { "laps" };
        write!(f, "{}, {}s over {} {noun}", self.state, self.duration, self.laps)
    }
}

/// Accumulates elapsed time over one or more start/stop intervals.
///
/// Calling [`start`](Stopwatch::start) while running or
/// [`stop`](Stopwatch::stop) while idle is rejected with an
/// [`InvalidStateError`] and leaves the stopwatch untouched.
#[derive(Debug, Default)]
pub struct Stopwatch<C = SystemClock> {
    clock: C,
    state: State,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    duration: Duration,
    laps: usize,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: State::Idle,
            start_time: None,
            end_time: None,
            duration: Duration::ZERO,
            laps: 0,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            tracing::debug!("Rejected start of a running stopwatch");
            return Err(InvalidStateError::AlreadyStarted);
        }

        self.state = State::Running;
        self.start_time = Some(self.clock.now());

        tracing::debug!(laps = self.laps, "Started stopwatch");

        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        let (State::Running, Some(start_time)) = (self.state, self.start_time) else {
            tracing::debug!("Rejected stop of an idle stopwatch");
            return Err(InvalidStateError::NotStarted);
        };

        let end_time = self.clock.now();
        // A clock that went backwards contributes nothing.
        let interval = end_time.saturating_duration_since(start_time);

        self.state = State::Idle;
        self.end_time = Some(end_time);
        self.duration += interval;
        self.laps += 1;

        tracing::debug!(
            interval = interval.as_secs_f64(),
            duration = self.duration.as_secs_f64(),
            laps = self.laps,
            "Stopped stopwatch"
        );

        Ok(())
    }

    /// Returns to the initial state. An interval in progress is discarded.
    pub fn reset(&mut self) {
        if self.is_running() {
            tracing::debug!("Discarding the running interval");
        }

        self.state = State::Idle;
        self.start_time = None;
        self.end_time = None;
        self.duration = Duration::ZERO;
        self.laps = 0;

        tracing::debug!("Reset stopwatch");
    }

    /// Like [`reset`](Stopwatch::reset), but refuses to discard a running interval.
    pub fn try_reset(&mut self) -> Result<()> {
        if self.is_running() {
            tracing::debug!("Rejected reset of a running stopwatch");
            return Err(InvalidStateError::StillRunning);
        }

        self.reset();
        Ok(())
    }

    /// Seconds accumulated over completed intervals since the last reset.
    pub fn duration(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn elapsed(&self) -> Duration {
        self.duration
    }

    /// The accumulated duration plus the interval in progress, if any.
    pub fn current(&self) -> Duration {
        match (self.state, self.start_time) {
            (State::Running, Some(start_time)) => {
                self.duration + self.clock.now().saturating_duration_since(start_time)
            }
            _ => self.duration,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Instant> {
        self.end_time
    }

    pub fn laps(&self) -> usize {
        self.laps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            running: self.is_running(),
            duration: self.duration(),
            laps: self.laps,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
