//! Applying an intent to the grid.
//!
//! This is the only place agent decisions turn into occupancy changes.
//! Each intent is applied right after its agent decides, so later agents in
//! the same pass see the result.

use lm_agent::Agent;
use lm_core::{Direction, Tick};
use lm_grid::{Grid, Occupant};
use tracing::info;

use crate::{BehaviorResult, Intent, MoveKind};

/// What applying one intent did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent now occupies a new cell and is in transit.
    Moved,
    /// The destination was occupied when the move executed; nothing changed.
    Blocked,
    /// The agent did nothing.
    Stayed,
    /// The agent left the grid.
    Deactivated,
}

/// Apply `intent` for `agent`, updating statistics to match.
pub fn apply_intent(
    agent:  &mut Agent,
    grid:   &mut Grid,
    intent: Intent,
    tick:   Tick,
) -> BehaviorResult<MoveOutcome> {
    match intent {
        Intent::Stay => Ok(MoveOutcome::Stayed),
        Intent::Deactivate => {
            deactivate(agent, grid)?;
            info!(agent = %agent.name, %tick, statistics = %agent.statistics, "finished");
            Ok(MoveOutcome::Deactivated)
        }
        Intent::Move { direction, kind } => {
            let outcome = execute_move(agent, grid, direction, tick)?;
            match (outcome, kind) {
                (MoveOutcome::Moved, MoveKind::Navigate) => agent.statistics.astar_moves += 1,
                (MoveOutcome::Moved, MoveKind::Explore) => agent.statistics.random_moves += 1,
                (MoveOutcome::Blocked, _) => agent.statistics.blocked_moves += 1,
                _ => {}
            }
            Ok(outcome)
        }
    }
}

/// Move `agent` one cell in `direction` if that cell is free.
///
/// On success the old cell is vacated unless a building stands in it (the
/// home cell keeps its building), the new cell records the agent, the cell
/// is added to the visited memory and the path trace, and the agent enters
/// transit with its stopwatch running.
///
/// # Errors
///
/// `OutOfBounds` if `direction` leads off the grid.
pub fn execute_move(
    agent:     &mut Agent,
    grid:      &mut Grid,
    direction: Direction,
    tick:      Tick,
) -> BehaviorResult<MoveOutcome> {
    let from = agent.position;
    let to = grid.cell_in_direction(from, direction)?;
    if grid.is_occupied(to) {
        return Ok(MoveOutcome::Blocked);
    }

    if !matches!(grid.occupant(from), Occupant::Building(_)) {
        grid.clear(from)?;
    }
    grid.set_occupant(to, Occupant::Agent(agent.id))?;

    agent.position = to;
    agent.visited.insert(to);
    agent.path.push(to);
    agent.transit.begin(from, to, tick);
    agent.statistics.stopwatch.start();
    Ok(MoveOutcome::Moved)
}

/// Take `agent` off the grid: inactive, not in transit, cell vacated.
///
/// The cell is only cleared if it records this agent, so a home building is
/// never erased.
pub fn deactivate(agent: &mut Agent, grid: &mut Grid) -> BehaviorResult<()> {
    agent.active = false;
    if agent.transit.complete() {
        agent.statistics.stopwatch.stop();
    }
    if grid.occupant(agent.position) == Occupant::Agent(agent.id) {
        grid.clear(agent.position)?;
    }
    Ok(())
}

/// End the agent's transit, stopping its stopwatch.  Returns `false` if it
/// was not moving.
pub fn settle(agent: &mut Agent) -> bool {
    let was_moving = agent.transit.complete();
    if was_moving {
        agent.statistics.stopwatch.stop();
    }
    was_moving
}
