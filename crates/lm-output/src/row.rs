//! Plain data row types written by output backends.

use lm_agent::Agent;
use lm_core::Tick;

/// Summary of one decision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub moved_agents:  u64,
    pub active_agents: u64,
}

/// Where one agent stood at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:       u64,
    pub agent_id:   u32,
    pub x:          u32,
    pub y:          u32,
    pub in_transit: bool,
    pub active:     bool,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: Tick, agent: &Agent) -> Self {
        Self {
            tick:       tick.0,
            agent_id:   agent.id.0,
            x:          agent.position.x,
            y:          agent.position.y,
            in_transit: agent.transit.in_transit,
            active:     agent.active,
        }
    }
}

/// An agent's statistics at the tick it finished, or at simulation end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatisticsRow {
    pub tick:                u64,
    pub agent_id:            u32,
    pub name:                String,
    /// `true` if the agent reached home after completing its plan.
    pub finished:            bool,
    pub knowledge_transfers: u32,
    pub knowledge_points:    u32,
    pub random_moves:        u32,
    pub astar_moves:         u32,
    pub targets_found:       u32,
    pub blocked_moves:       u32,
    pub time_on_the_move_ms: u64,
}

impl AgentStatisticsRow {
    pub fn from_agent(tick: Tick, agent: &Agent, finished: bool) -> Self {
        let s = &agent.statistics;
        Self {
            tick:                tick.0,
            agent_id:            agent.id.0,
            name:                agent.name.clone(),
            finished,
            knowledge_transfers: s.knowledge_transfers,
            knowledge_points:    s.knowledge_points,
            random_moves:        s.random_moves,
            astar_moves:         s.astar_moves,
            targets_found:       s.targets_found,
            blocked_moves:       s.blocked_moves,
            time_on_the_move_ms: s.time_on_the_move_ms(),
        }
    }
}
