//! Per-agent RNG storage.
//!
//! RNGs live outside `Agent` so the decision pass can hold `&mut Agent` and
//! `&mut AgentRng` for the same agent without borrowing one through the other.

use lm_core::{AgentId, AgentRng};

/// Deterministic RNG state for every agent, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    /// Re-seed every RNG, as at construction.  Used by a full reset so a
    /// reset run replays the first one exactly.
    pub fn reseed(&mut self, global_seed: u64) {
        *self = Self::new(self.inner.len(), global_seed);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
