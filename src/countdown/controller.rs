//! The countdown state machine, independent of any runtime.
//!
//! [`Controller`] owns the configured duration, the remaining seconds and the
//! status. It never schedules anything itself: [`Controller::start`] hands out
//! a [`TickToken`] for the tick process it wants, and the caller delivers
//! ticks back through [`Controller::tick`] with that token. Cancelling a
//! process advances the token generation, so ticks that were already in
//! flight come back as [`Tick::Stale`] and change nothing.

use super::types::Status;
use crate::clock::{format_clock, parse_duration};

/// Identifies one tick process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(pub(crate) u64);

impl TickToken {
    /// The raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The token does not belong to the live process. Nothing changed.
    Stale,
    /// One second was taken off; the process should fire again.
    Continue(TickToken),
    /// The countdown reached zero and the process was cancelled.
    Finished,
}

/// Countdown state machine.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    duration: Option<u64>,
    remaining: u64,
    status: Status,
    generation: u64,
    ticking: bool,
}

impl Controller {
    /// An idle controller with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duration from user input.
    ///
    /// Input that is not a positive whole number of seconds is ignored and
    /// `false` is returned.
    pub fn set(&mut self, input: &str) -> bool {
        match parse_duration(input) {
            Ok(secs) => self.set_seconds(secs),
            Err(_) => false,
        }
    }

    /// Sets the duration in seconds. `0` is ignored.
    ///
    /// On success the remaining time becomes the duration, the status goes
    /// back to [`Status::Idle`] and any tick process is cancelled.
    pub fn set_seconds(&mut self, secs: u64) -> bool {
        if secs == 0 {
            return false;
        }
        self.cancel();
        self.duration = Some(secs);
        self.remaining = secs;
        self.status = Status::Idle;
        true
    }

    /// Starts or resumes the countdown.
    ///
    /// Returns the token of a newly scheduled tick process. Returns `None`
    /// when there is no time left, or when a process is already live (no
    /// second process is ever created).
    pub fn start(&mut self) -> Option<TickToken> {
        if self.remaining == 0 || self.ticking {
            return None;
        }
        self.status = Status::Running;
        self.ticking = true;
        Some(self.token())
    }

    /// Pauses a running countdown, including one that has just finished.
    /// Returns `false` unless the status is [`Status::Running`].
    pub fn pause(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        self.status = Status::Paused;
        self.cancel();
        true
    }

    /// Returns to [`Status::Idle`] with the full duration (or zero if no
    /// duration was ever set) and cancels any tick process.
    pub fn reset(&mut self) {
        self.cancel();
        self.status = Status::Idle;
        self.remaining = self.duration.unwrap_or(0);
    }

    /// Delivers one tick of the process identified by `token`.
    pub fn tick(&mut self, token: TickToken) -> Tick {
        if !self.ticking || token != self.token() {
            return Tick::Stale;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.cancel();
            return Tick::Finished;
        }
        self.remaining -= 1;
        Tick::Continue(token)
    }

    /// The last successfully set duration.
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True while a tick process is live.
    pub fn is_running(&self) -> bool {
        self.status == Status::Running && self.ticking
    }

    /// True once a started countdown has reached zero.
    pub fn is_finished(&self) -> bool {
        self.status == Status::Running && !self.ticking && self.remaining == 0
    }

    /// Whether [`start`](Self::start) would do anything.
    pub fn can_start(&self) -> bool {
        self.remaining > 0 && !self.ticking
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }

    fn token(&self) -> TickToken {
        TickToken(self.generation)
    }

    // Safe to call with no live process.
    fn cancel(&mut self) {
        if self.ticking {
            self.ticking = false;
            self.generation = self.generation.wrapping_add(1);
        }
    }
}
