//! Simulation time model.
//!
//! # Design
//!
//! The truck advances in fixed steps.  Each `Tick` represents
//! `tick_interval_secs` of simulated time, independent of how often the
//! device loop fires in wall-clock terms (by default one 60 s tick every
//! 5 real seconds, i.e. the simulation runs 12× faster than real time).
//!
//! Task timers inside the truck state machine are kept in `f64` seconds
//! because route segment durations are fractional; the integer tick counter
//! here is only used for logging and reporting.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Counts ticks and converts them to elapsed simulated time.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 60.
    pub tick_interval_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_secs: u32) -> Self {
        Self {
            tick_interval_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Simulated seconds covered by one tick, as used by the state machine.
    #[inline]
    pub fn interval_secs(&self) -> f64 {
        f64::from(self.tick_interval_secs)
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * u64::from(self.tick_interval_secs)
    }

    /// Break elapsed time into (day, hour, minute) components from sim start.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}
