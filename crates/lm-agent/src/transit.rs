//! Per-agent movement state.

use lm_core::{GridPos, Tick};

/// The move an agent has committed to.
///
/// Occupancy changes the instant a move executes; the agent then stays
/// **in transit** until the simulation settles it, which is when it looks
/// around its new cell.  Renderers interpolate between `from` and `to`
/// while `in_transit` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transit {
    pub in_transit: bool,

    /// Cell the agent left.  Equals `to` when stationary.
    pub from: GridPos,

    /// Cell the agent now occupies.
    pub to: GridPos,

    /// Tick of the decision pass that started the move.
    pub departed: Tick,
}

impl Transit {
    /// Not moving, standing in `pos`.
    #[inline]
    pub fn stationary(pos: GridPos) -> Self {
        Self { in_transit: false, from: pos, to: pos, departed: Tick::ZERO }
    }

    pub fn begin(&mut self, from: GridPos, to: GridPos, tick: Tick) {
        *self = Self { in_transit: true, from, to, departed: tick };
    }

    /// End the move.  Returns `false` if the agent was not in transit.
    pub fn complete(&mut self) -> bool {
        let was = self.in_transit;
        self.in_transit = false;
        self.from = self.to;
        was
    }
}
