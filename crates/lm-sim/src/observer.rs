//! Simulation observer trait for progress reporting and data collection.

use lm_agent::Agent;
use lm_core::Tick;
use lm_grid::Grid;

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_agent_finished(&mut self, tick: Tick, agent: &Agent) {
///         println!("{tick}: {} {}", agent.name, agent.statistics);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a decision pass runs.  Not called for gated ticks.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the pass and settling.  `moved` agents changed cell;
    /// `active` agents remain.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize, _active: usize) {}

    /// Called when an agent reaches home after homing and leaves the grid.
    fn on_agent_finished(&mut self, _tick: Tick, _agent: &Agent) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// passes).
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent], _grid: &Grid) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.
    fn on_sim_end(&mut self, _final_tick: Tick, _agents: &[Agent]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
