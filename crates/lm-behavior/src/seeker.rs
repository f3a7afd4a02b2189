//! `LandmarkSeeker` — the default decision state machine.

use lm_agent::Agent;
use lm_core::AgentRng;
use lm_grid::{AstarNavigator, Navigator, SearchOutcome};
use tracing::{info, warn};

use crate::{explore, BehaviorModel, BehaviorResult, DecisionContext, Intent, MoveKind};

/// Seeks each queued landmark category in turn, then returns home.
///
/// Per decision:
///
/// 1. Still on the home cell: random step.
/// 2. Front target's category is known:
///    - standing on one of its cells: count the find and pop it.  If the
///      agent was already homing it deactivates.  If the queue is now empty
///      homing starts (home category queued, `finished` set).  Either way
///      the new front is re-evaluated in the same decision.
///    - otherwise: one A* step toward the nearest known cell, or a random
///      step (plus a blocked move) when none is reachable.
/// 3. Queue empty or front unknown: random step.
///
/// Each re-evaluation consumes one target, so a decision loops at most
/// `targets.len() + 1` times.
pub struct LandmarkSeeker<N: Navigator = AstarNavigator> {
    navigator: N,
}

impl LandmarkSeeker<AstarNavigator> {
    pub fn new() -> Self {
        Self { navigator: AstarNavigator::new() }
    }
}

impl Default for LandmarkSeeker<AstarNavigator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Navigator> LandmarkSeeker<N> {
    pub fn with_navigator(navigator: N) -> Self {
        Self { navigator }
    }

    fn begin_homing(agent: &mut Agent) {
        let home = agent.home_category();
        agent.targets.push_back(home);
        agent.finished = true;
        info!(agent = %agent.name, category = %home, "plan complete, heading home");
        if !agent.knowledge.knows(home) {
            warn!(
                agent = %agent.name,
                category = %home,
                "home category unknown when homing begins; exploring until it is found",
            );
        }
    }

    fn navigate(
        &mut self,
        agent:    &mut Agent,
        category: char,
        ctx:      &DecisionContext<'_>,
        rng:      &mut AgentRng,
    ) -> BehaviorResult<Intent> {
        agent.trapped_moves = 0;
        let outcome = match agent.knowledge.cells(category) {
            Some(goals) => self.navigator.next_move(ctx.grid, agent.position, goals)?,
            None => SearchOutcome::NoPath,
        };
        match outcome {
            SearchOutcome::Step { direction, .. } => {
                Ok(Intent::Move { direction, kind: MoveKind::Navigate })
            }
            SearchOutcome::Arrived => Ok(Intent::Stay),
            SearchOutcome::NoPath => {
                agent.statistics.blocked_moves += 1;
                explore(agent, ctx.grid, ctx.trapped_move_limit, rng)
            }
        }
    }
}

impl<N: Navigator> BehaviorModel for LandmarkSeeker<N> {
    fn decide(
        &mut self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<Intent> {
        if !agent.can_decide() {
            return Ok(Intent::Stay);
        }
        if agent.is_at_home() {
            return explore(agent, ctx.grid, ctx.trapped_move_limit, rng);
        }

        let passes = agent.targets.len() + 1;
        for _ in 0..passes {
            let Some(category) = agent.current_target() else { break };
            let Some(goals) = agent.knowledge.cells(category) else { break };

            if !goals.contains(&agent.position) {
                return self.navigate(agent, category, ctx, rng);
            }

            agent.statistics.targets_found += 1;
            agent.targets.pop_front();
            if agent.finished {
                return Ok(Intent::Deactivate);
            }
            if agent.targets.is_empty() {
                Self::begin_homing(agent);
            }
        }

        explore(agent, ctx.grid, ctx.trapped_move_limit, rng)
    }
}
