//! Random exploratory step.

use lm_agent::Agent;
use lm_core::{AgentRng, GridPos};
use lm_grid::Grid;
use tracing::debug;

use crate::{BehaviorResult, Intent, MoveKind};

/// Pick a random empty neighbor, preferring cells not yet visited.
///
/// - No empty neighbor: one blocked move is counted and the agent stays.
/// - Every empty neighbor already visited: the pick is *trapped*.  The
///   trapped counter goes up and all empty neighbors become candidates.  The
///   pick that takes the counter above `trapped_move_limit` also wipes the
///   visited memory and zeroes the counter.
/// - Any unvisited empty neighbor resets the counter; only unvisited cells
///   are candidates.
///
/// Candidates keep neighbor order (left, right, up, down) and one is drawn
/// uniformly with the agent's RNG.  The random-move counter is bumped when
/// the move executes, not here.
pub fn explore(
    agent:              &mut Agent,
    grid:               &Grid,
    trapped_move_limit: u32,
    rng:                &mut AgentRng,
) -> BehaviorResult<Intent> {
    let empty: Vec<GridPos> = grid.neighbors_empty(agent.position).collect();
    if empty.is_empty() {
        agent.statistics.blocked_moves += 1;
        return Ok(Intent::Stay);
    }

    let fresh: Vec<GridPos> = empty
        .iter()
        .copied()
        .filter(|p| !agent.visited.contains(p))
        .collect();

    let candidates = if fresh.is_empty() {
        agent.trapped_moves += 1;
        if agent.trapped_moves > trapped_move_limit {
            debug!(agent = %agent.name, "memory cleared");
            agent.visited.clear();
            agent.trapped_moves = 0;
        }
        &empty
    } else {
        agent.trapped_moves = 0;
        &fresh
    };

    let Some(&next) = rng.choose(candidates) else {
        return Ok(Intent::Stay);
    };
    Ok(Intent::Move {
        direction: grid.move_direction_for(agent.position, next)?,
        kind:      MoveKind::Explore,
    })
}
