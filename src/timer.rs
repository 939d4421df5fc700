use std::time::Duration;

use crate::constants::MIN_ARM_DURATION;

/// Single-shot countdown against the scheduler clock.
///
/// The timer holds an absolute deadline. Arming again replaces the pending
/// deadline, so a superseded arm can never fire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimer {
    started: Duration,
    deadline: Option<Duration>,
}

impl RotationTimer {
    pub fn new() -> Self {
        Self {
            started: Duration::ZERO,
            deadline: None,
        }
    }

    /// Arms the timer to fire `duration` after `from`.
    pub fn arm(&mut self, from: Duration, duration: Duration) {
        self.started = from;
        self.deadline = Some(from + duration.max(MIN_ARM_DURATION));
    }

    /// Start of the pending countdown, if armed.
    pub fn started(&self) -> Option<Duration> {
        self.deadline.map(|_| self.started)
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true if the timer would fire at `now`.
    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Fires once if the deadline has been reached, returning the deadline.
    ///
    /// Callers re-arm from the returned deadline rather than from `now` so that
    /// chained timers keep their cadence when the clock jumps.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        if self.is_due(now) {
            self.deadline.take()
        } else {
            None
        }
    }
}
