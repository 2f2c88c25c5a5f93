//! Generation session: the scramble-then-settle state machine.
//!
//! ```text
//!   Idle ──generate──▶ Animating ──duration elapsed──▶ Settled
//!                        ▲                               │
//!                        └───────────generate────────────┘
//! ```
//!
//! While animating, a repeating tick replaces the displayed value with a
//! decoy drawn from the whole globe, whatever the active mode. When the
//! one-shot settle timer fires, the tick is stopped first, then exactly one
//! real sample is taken in the caller's mode and committed.
//!
//! Both timers are owned by the session. [`GenerationSession::dispose`] (or
//! dropping the session) cancels them.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::ThreadRng;

use crate::config::{DEFAULT_DURATION_MS, DEFAULT_TICK_MS};
use crate::coordinate::Coordinate;
use crate::sampler::{RandomSource, SamplingMode, sample};
use crate::timer::{Timer, take_due};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Animating,
    Settled,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Animating => "generating",
            Self::Settled => "settled",
        }
    }
}

/// Animation cadence. Tunable, not part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Interval between decoy frames.
    pub tick: Duration,
    /// Time from `generate` to the committed result.
    pub duration: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
        }
    }
}

/// What a call to [`GenerationSession::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing was due.
    Unchanged,
    /// A new decoy frame is displayed.
    Decoy(Coordinate),
    /// The final coordinate was committed.
    Settled(Coordinate),
}

pub struct GenerationSession<R = ThreadRng> {
    rng: R,
    timings: SessionTimings,
    phase: Phase,
    displayed: Coordinate,
    committed: Coordinate,
    ticker: Option<Timer>,
    settle: Option<Timer>,
    generations: u64,
    disposed: bool,
}

impl GenerationSession<ThreadRng> {
    /// Session backed by the thread-local RNG.
    pub fn new(timings: SessionTimings) -> Self {
        Self::with_rng(timings, rand::rng())
    }
}

impl<R: RandomSource> GenerationSession<R> {
    pub fn with_rng(timings: SessionTimings, rng: R) -> Self {
        Self {
            rng,
            timings,
            phase: Phase::Idle,
            displayed: Coordinate::ORIGIN,
            committed: Coordinate::ORIGIN,
            ticker: None,
            settle: None,
            generations: 0,
            disposed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timings(&self) -> SessionTimings {
        self.timings
    }

    /// Value currently on screen; a decoy while animating.
    pub fn displayed(&self) -> Coordinate {
        self.displayed
    }

    /// Last real result, `ORIGIN` until the first settlement.
    pub fn committed(&self) -> Coordinate {
        self.committed
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Whether copy and map actions should be offered.
    ///
    /// False before the first settlement, and also when the committed value
    /// is exactly `{0, 0}`.
    pub fn has_coordinates(&self) -> bool {
        self.phase == Phase::Settled && !self.committed.is_origin()
    }

    /// Number of completed generations.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Timers currently scheduled (0 or 2).
    pub fn pending_timers(&self) -> usize {
        usize::from(self.ticker.is_some()) + usize::from(self.settle.is_some())
    }

    /// Fraction of the animation elapsed, while animating.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        self.settle.as_ref().map(|t| t.progress(now))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Start a generation. Ignored while one is already running or after
    /// disposal; returns whether a new generation started.
    pub fn generate(&mut self, now: Instant) -> bool {
        if self.disposed || self.phase == Phase::Animating {
            return false;
        }
        self.ticker = Some(Timer::repeating(now, self.timings.tick));
        self.settle = Some(Timer::once(now, self.timings.duration));
        self.phase = Phase::Animating;
        debug!(
            "generation #{} started (tick {:?}, duration {:?})",
            self.generations + 1,
            self.timings.tick,
            self.timings.duration
        );
        true
    }

    /// Fire whatever timers are due at `now`. `mode` is only read when the
    /// generation settles.
    pub fn advance(&mut self, now: Instant, mode: SamplingMode) -> Step {
        if self.disposed || self.phase != Phase::Animating {
            return Step::Unchanged;
        }

        if take_due(&mut self.settle, now) {
            // Stop the tick before committing so no decoy lands afterwards.
            self.ticker = None;
            let result = sample(mode, &mut self.rng);
            self.committed = result;
            self.displayed = result;
            self.phase = Phase::Settled;
            self.generations += 1;
            debug!("generation #{} settled at {result} ({mode})", self.generations);
            return Step::Settled(result);
        }

        let fired = self.ticker.as_mut().map_or(0, |t| t.poll(now));
        if fired == 0 {
            return Step::Unchanged;
        }
        // Only the last frame would be visible, so draw one regardless of
        // how many ticks were missed.
        let decoy = sample(SamplingMode::Unrestricted, &mut self.rng);
        self.displayed = decoy;
        Step::Decoy(decoy)
    }

    /// Cancel all timers. The session ignores every later call.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.ticker = None;
        self.settle = None;
        self.disposed = true;
        debug!("generation session disposed in phase {}", self.phase.label());
    }
}
