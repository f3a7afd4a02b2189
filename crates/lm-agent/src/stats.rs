//! Diagnostic counters kept per agent.

use std::fmt;
use std::time::{Duration, Instant};

// ── Stopwatch ─────────────────────────────────────────────────────────────────

/// Accumulates wall time between paired `start`/`stop` calls.
///
/// A second `start` without an intervening `stop` restarts the current lap;
/// a `stop` while not running is ignored.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    total:   Duration,
}

impl Stopwatch {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(t) = self.started.take() {
            self.total += t.elapsed();
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Sum of completed laps; a running lap is not included.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn reset(&mut self) {
        self.started = None;
        self.total = Duration::ZERO;
    }
}

// ── AgentStatistics ───────────────────────────────────────────────────────────

/// Behavior counters plus time spent in transit.
#[derive(Clone, Debug, Default)]
pub struct AgentStatistics {
    /// Peers whose knowledge was merged in (one per encounter).
    pub knowledge_transfers: u32,
    /// Distinct `(category, cell)` pairs added, first-hand or merged.
    pub knowledge_points:    u32,
    pub random_moves:        u32,
    pub astar_moves:         u32,
    pub targets_found:       u32,
    /// Ticks where the agent wanted to move but could not.
    pub blocked_moves:       u32,
    pub stopwatch:           Stopwatch,
}

impl AgentStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and the stopwatch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accumulated moving time in whole milliseconds.
    pub fn time_on_the_move_ms(&self) -> u64 {
        self.stopwatch.total().as_millis() as u64
    }
}

impl fmt::Display for AgentStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AgentStatistics [knowledge_transfers={}, knowledge_points={}, random_moves={}, \
             astar_moves={}, targets_found={}, blocked_moves={}, time_on_the_move={}ms]",
            self.knowledge_transfers,
            self.knowledge_points,
            self.random_moves,
            self.astar_moves,
            self.targets_found,
            self.blocked_moves,
            self.time_on_the_move_ms(),
        )
    }
}
