//! What an agent decided to do this tick.

use lm_core::Direction;

/// Why a move was chosen.  Only affects which statistic counts it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Random exploratory step.
    Explore,
    /// First step of a shortest path toward a known landmark.
    Navigate,
}

/// The single action an agent requests during a decision.
///
/// Produced by [`BehaviorModel::decide`][crate::BehaviorModel::decide] and
/// applied immediately, before the next agent decides, by
/// [`apply_intent`][crate::apply_intent].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Step one cell in `direction`.
    Move {
        direction: Direction,
        kind:      MoveKind,
    },

    /// Do nothing this tick.
    Stay,

    /// Home reached after homing: leave the grid for good.
    Deactivate,
}
