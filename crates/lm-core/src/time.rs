//! Simulation step counter and run configuration.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of completed decision passes.
///
/// A tick only advances when a pass actually ran; paused, cancelled, or
/// still-in-transit calls leave it untouched.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application crate (the demo fills it from command-line flags)
/// and handed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and scenario always produce identical
    /// runs.
    pub seed: u64,

    /// `Sim::run` stops after this many decision passes even if some agents
    /// are still active.
    pub max_ticks: u64,

    /// Consecutive trapped exploration picks tolerated before an agent's
    /// visited-cell memory is wiped.  The wipe happens on the pick that takes
    /// the counter above this value.
    pub trapped_move_limit: u32,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    pub const DEFAULT_TRAPPED_MOVE_LIMIT: u32 = 20;

    /// Config with the given seed and tick bound and default tuning.
    pub fn new(seed: u64, max_ticks: u64) -> Self {
        Self {
            seed,
            max_ticks,
            trapped_move_limit:    Self::DEFAULT_TRAPPED_MOVE_LIMIT,
            output_interval_ticks: 0,
        }
    }

    /// The tick at which `Sim::run` gives up (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(0, 10_000)
    }
}
