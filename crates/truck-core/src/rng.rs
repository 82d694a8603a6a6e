//! Deterministic simulation RNG and the `Dice` abstraction.
//!
//! # Determinism strategy
//!
//! The simulation never touches a thread-local or OS random source.  All
//! stochastic draws (thermal drift, fan failure) go through a [`Dice`] passed
//! into the tick function, so:
//!
//! - A run is fully reproducible from `SimConfig::seed`.
//! - Tests can script exact draws with a hand-written `Dice` and hit edge
//!   cases (fan failure, melting) without searching for a lucky seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── Dice ──────────────────────────────────────────────────────────────────────

/// Source of uniform draws for the simulation.
pub trait Dice {
    /// A uniform sample in `[0, max)`.
    fn roll(&mut self, max: f64) -> f64;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Owned by whichever task drives the tick loop; never shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for SimRng {
    #[inline]
    fn roll(&mut self, max: f64) -> f64 {
        self.0.r#gen::<f64>() * max
    }
}
