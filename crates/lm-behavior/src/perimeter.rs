//! Looking around after a move: landmarks and peers.

use lm_agent::Agent;
use lm_core::AgentId;
use lm_grid::{Grid, Occupant};
use tracing::debug;

/// What one inspection taught the agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Discoveries {
    /// New `(category, cell)` pairs, first-hand or merged.
    pub points:    usize,
    /// Peers whose knowledge was merged.
    pub transfers: usize,
}

/// Inspect every neighbor of agent `who` (occupied or not).
///
/// - An important building adds `(identity, agent's own cell)` to its
///   knowledge.
/// - Another agent has its whole knowledge merged in, one transfer per peer.
///   The peer learns nothing back.
///
/// Skipped while `who` is still on its home cell.
///
/// # Panics
///
/// If `who` or an agent id recorded in the grid is not an index of `agents`.
pub fn inspect_perimeter(agents: &mut [Agent], who: AgentId, grid: &Grid) -> Discoveries {
    let me = who.index();
    let mut found = Discoveries::default();
    if agents[me].is_at_home() {
        return found;
    }
    let pos = agents[me].position;

    for neighbor in grid.neighbors_all(pos) {
        match grid.occupant(neighbor) {
            Occupant::Empty => {}
            Occupant::Building(id) => {
                let building = grid.building(id);
                if building.important && agents[me].knowledge.learn(building.identity, pos) {
                    found.points += 1;
                    debug!(
                        agent = %agents[me].name,
                        category = %building.identity,
                        cell = %pos,
                        "landmark spotted",
                    );
                }
            }
            Occupant::Agent(peer) if peer != who => {
                let (agent, other) = pair_mut(agents, me, peer.index());
                found.points += agent.knowledge.merge_from(&other.knowledge);
                found.transfers += 1;
            }
            Occupant::Agent(_) => {}
        }
    }

    let stats = &mut agents[me].statistics;
    stats.knowledge_points += found.points as u32;
    stats.knowledge_transfers += found.transfers as u32;
    found
}

/// `&mut agents[a]` alongside `&agents[b]`, for `a != b`.
fn pair_mut(agents: &mut [Agent], a: usize, b: usize) -> (&mut Agent, &Agent) {
    if a < b {
        let (left, right) = agents.split_at_mut(b);
        (&mut left[a], &right[0])
    } else {
        let (left, right) = agents.split_at_mut(a);
        (&mut right[0], &left[b])
    }
}
