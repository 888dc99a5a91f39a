//! Countdown timer with lazy expiry
//!
//! A `CountdownTimer` never ticks on its own. Remaining time is derived from
//! the instant it was armed and the current clock reading, and the timer only
//! notices it has run out when someone asks. The render loop asks every frame,
//! which is what moves expired timers back to idle.

use chrono::{DateTime, Utc};

use super::clock::Clock;
use crate::error::OverlayError;

/// Arming data, present only while the timer counts down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    at: DateTime<Utc>,
    duration_secs: u32,
}

/// One ability's cooldown timer
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    label: String,
    armed: Option<Armed>,
}

impl CountdownTimer {
    /// Create an idle timer with the given display label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            armed: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the timer is counting down, as last observed
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Instant the current countdown started
    pub fn armed_at(&self) -> Option<DateTime<Utc>> {
        self.armed.map(|a| a.at)
    }

    /// Duration of the current countdown
    pub fn duration_secs(&self) -> Option<u32> {
        self.armed.map(|a| a.duration_secs)
    }

    /// Arm the timer for `duration_secs`.
    ///
    /// Returns `Ok(true)` if the timer was idle and is now armed, `Ok(false)`
    /// if it was already armed (the running countdown is left untouched).
    /// A zero duration is rejected.
    pub fn start(&mut self, clock: &dyn Clock, duration_secs: u32) -> Result<bool, OverlayError> {
        if duration_secs == 0 {
            return Err(OverlayError::InvalidArgument(format!(
                "{} timer duration must be positive",
                self.label
            )));
        }
        if self.armed.is_some() {
            return Ok(false);
        }

        self.armed = Some(Armed {
            at: clock.now(),
            duration_secs,
        });
        Ok(true)
    }

    /// Whole seconds left on the countdown.
    ///
    /// Idle timers report 0. An armed timer whose time has run out flips to
    /// idle here and reports 0.
    pub fn remaining(&mut self, clock: &dyn Clock) -> u64 {
        let Some(armed) = self.armed else {
            return 0;
        };

        // A clock that went backwards counts as no time elapsed
        let elapsed_secs = (clock.now() - armed.at).num_milliseconds().max(0) / 1000;
        let remaining = i64::from(armed.duration_secs) - elapsed_secs;
        if remaining <= 0 {
            self.armed = None;
            return 0;
        }
        remaining as u64
    }

    /// Force the timer back to idle
    pub fn reset(&mut self) {
        self.armed = None;
    }

    /// Text shown for this timer.
    ///
    /// The frame on which expiry is first observed still reads `"{label}: 0s"`;
    /// every later frame reads `"{label} is up!"`.
    pub fn display(&mut self, clock: &dyn Clock) -> String {
        if self.is_armed() {
            let remaining = self.remaining(clock);
            format!("{}: {}s", self.label, remaining)
        } else {
            format!("{} is up!", self.label)
        }
    }
}
