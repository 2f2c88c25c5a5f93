//! Owned, polled timers.
//!
//! A [`Timer`] is a plain value: a deadline and an optional period. Nothing
//! runs in the background; the event loop calls [`Timer::poll`] with the
//! current instant. Cancelling a timer is dropping it, so a controller that
//! owns its timers cannot be called back after it is disposed.

use std::time::{Duration, Instant};

/// Shortest period a repeating timer will accept.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    started: Instant,
    deadline: Instant,
    period: Option<Duration>,
}

impl Timer {
    /// Fires once, `delay` after `now`.
    pub fn once(now: Instant, delay: Duration) -> Self {
        Self {
            started: now,
            deadline: now + delay,
            period: None,
        }
    }

    /// Fires every `period`, first at `now + period`.
    pub fn repeating(now: Instant, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            started: now,
            deadline: now + period,
            period: Some(period),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_repeating(&self) -> bool {
        self.period.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the next firing (zero when due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Fraction of the way from scheduling to the deadline, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.deadline.saturating_duration_since(self.started);
        if total.is_zero() {
            return 1.0;
        }
        let done = now.saturating_duration_since(self.started);
        (done.as_secs_f64() / total.as_secs_f64()).min(1.0)
    }

    /// How many times the timer fired up to `now`.
    ///
    /// Repeating timers are rescheduled past `now`. A due one-shot keeps
    /// reporting 1 until its owner drops it; see [`take_due`].
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.deadline {
            return 0;
        }
        match self.period {
            None => 1,
            Some(period) => {
                let late = now.duration_since(self.deadline).as_nanos();
                let fired = late / period.as_nanos() + 1;
                let fired = u32::try_from(fired).unwrap_or(u32::MAX);
                self.deadline += period * fired;
                fired
            }
        }
    }
}

/// Fire a pending one-shot timer, clearing the slot. Returns whether it fired.
pub fn take_due(slot: &mut Option<Timer>, now: Instant) -> bool {
    match slot {
        Some(t) if t.is_due(now) => {
            *slot = None;
            true
        }
        _ => false,
    }
}
