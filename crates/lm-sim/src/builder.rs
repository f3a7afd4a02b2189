//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeSet;

use lm_agent::{Agent, AgentPlan, AgentRngs};
use lm_behavior::{BehaviorModel, LandmarkSeeker};
use lm_core::{AgentId, SimConfig, Tick};
use lm_grid::Grid;
use tracing::debug;

use crate::{Controls, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, tick bound, trapped-move limit, …
/// - [`Grid`] — the map, with homes and landmarks placed
/// - `Vec<AgentPlan>` — one per agent, in processing order
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.behavior(b)`  | `LandmarkSeeker` with A*   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, scenario.grid, scenario.agents).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel = LandmarkSeeker> {
    config:   SimConfig,
    grid:     Grid,
    plans:    Vec<AgentPlan>,
    behavior: B,
}

impl SimBuilder<LandmarkSeeker> {
    /// Create a builder with all required inputs and the default behavior.
    pub fn new(config: SimConfig, grid: Grid, plans: Vec<AgentPlan>) -> Self {
        Self { config, grid, plans, behavior: LandmarkSeeker::new() }
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Replace the decision logic.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> SimBuilder<B2> {
        SimBuilder {
            config: self.config,
            grid:   self.grid,
            plans:  self.plans,
            behavior,
        }
    }

    /// Validate inputs, place agents on their homes, and return a
    /// ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::DuplicateAgent`] if two plans share a number.
    /// - [`SimError::MissingHome`] if an agent's last digit has no home
    ///   building.
    /// - [`SimError::UnknownTarget`] if a target names a category no
    ///   landmark on the map carries.
    pub fn build(self) -> SimResult<Sim<B>> {
        // ── Validate plans against the map ────────────────────────────────
        let mut numbers = BTreeSet::new();
        for plan in &self.plans {
            if !numbers.insert(plan.number) {
                return Err(SimError::DuplicateAgent(plan.number));
            }
            if let Some(&category) = plan.targets.iter().find(|&&t| !self.grid.has_landmark(t)) {
                return Err(SimError::UnknownTarget { number: plan.number, category });
            }
        }

        // ── Place agents on their homes ───────────────────────────────────
        //
        // Home cells keep their building as occupant: several agents may
        // share one home, and the landmark must stay visible to neighbors.
        let agents = self
            .plans
            .iter()
            .enumerate()
            .map(|(i, plan)| {
                let digit = plan.home_category();
                let home = self
                    .grid
                    .home(digit)
                    .ok_or(SimError::MissingHome { number: plan.number, digit })?;
                Ok(Agent::new(AgentId(i as u32), plan, home))
            })
            .collect::<SimResult<Vec<_>>>()?;

        debug!(
            agents  = agents.len(),
            columns = self.grid.columns(),
            rows    = self.grid.rows(),
            "simulation built",
        );

        Ok(Sim {
            rngs:     AgentRngs::new(agents.len(), self.config.seed),
            tick:     Tick::ZERO,
            config:   self.config,
            grid:     self.grid,
            agents,
            plans:    self.plans,
            behavior: self.behavior,
            controls: Controls::new(),
        })
    }
}
