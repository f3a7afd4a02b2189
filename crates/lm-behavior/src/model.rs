//! The `BehaviorModel` trait.

use lm_agent::Agent;
use lm_core::AgentRng;

use crate::{BehaviorResult, DecisionContext, Intent};

/// Pluggable agent decision logic.
///
/// Called once per eligible agent per decision pass, in agent order.  A
/// decision may update the agent's own bookkeeping (target queue, visited
/// memory, counters) but never the grid: the returned [`Intent`] is applied
/// by the caller, and that is the only way occupancy changes.
pub trait BehaviorModel {
    fn decide(
        &mut self,
        agent: &mut Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<Intent>;
}
