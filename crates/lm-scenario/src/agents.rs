//! Agent definition file parser.
//!
//! ```text
//! 1
//! A
//! B
//! 12
//! B
//! ```
//!
//! A line holding an integer starts a new agent with that number.  Every
//! other non-blank line adds its first non-whitespace character to the
//! current agent's target list.

use std::collections::BTreeSet;

use lm_agent::AgentPlan;

use crate::{ScenarioError, ScenarioResult};

/// Parse a complete agent definition file into plans, in file order.
pub fn parse_agents(text: &str) -> ScenarioResult<Vec<AgentPlan>> {
    let mut plans: Vec<AgentPlan> = Vec::new();
    let mut numbers = BTreeSet::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        let Some(target) = line.chars().next() else {
            continue;
        };
        if let Ok(number) = line.parse::<u32>() {
            if !numbers.insert(number) {
                return Err(ScenarioError::DuplicateAgent(number));
            }
            plans.push(AgentPlan::new(number, std::iter::empty()));
            continue;
        }
        match plans.last_mut() {
            Some(plan) => plan.targets.push(target),
            None => return Err(ScenarioError::TargetBeforeAgent { line: i + 1, target }),
        }
    }

    Ok(plans)
}
