//! Read-only simulation state passed to every decision.

use lm_core::Tick;
use lm_grid::Grid;

/// Snapshot handed to [`BehaviorModel::decide`][crate::BehaviorModel::decide].
///
/// Rebuilt for every agent during a pass, so each decision sees the
/// occupancy left by the agents processed before it.
pub struct DecisionContext<'a> {
    pub tick: Tick,

    pub grid: &'a Grid,

    /// Consecutive trapped exploration picks tolerated before the visited
    /// memory is wiped.
    pub trapped_move_limit: u32,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(tick: Tick, grid: &'a Grid, trapped_move_limit: u32) -> Self {
        Self { tick, grid, trapped_move_limit }
    }
}
