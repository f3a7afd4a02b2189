//! A loaded map plus its agents.

use std::path::Path;

use lm_agent::AgentPlan;
use lm_grid::Grid;
use tracing::debug;

use crate::{ScenarioResult, parse_agents, parse_map};

/// Everything `SimBuilder` needs besides the config.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid:   Grid,
    pub agents: Vec<AgentPlan>,
}

impl Scenario {
    /// Parse a map and an agent file already in memory.
    pub fn parse(map: &str, agents: &str) -> ScenarioResult<Self> {
        let grid = parse_map(map)?;
        let agents = parse_agents(agents)?;
        debug!(
            columns   = grid.columns(),
            rows      = grid.rows(),
            buildings = grid.buildings().len(),
            agents    = agents.len(),
            "scenario loaded",
        );
        Ok(Self { grid, agents })
    }

    /// Read and parse both files.
    pub fn load(map_path: &Path, agents_path: &Path) -> ScenarioResult<Self> {
        let map = std::fs::read_to_string(map_path)?;
        let agents = std::fs::read_to_string(agents_path)?;
        Self::parse(&map, &agents)
    }
}
