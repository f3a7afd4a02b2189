//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use lm_agent::Agent;
use lm_core::Tick;
use lm_grid::Grid;
use lm_sim::SimObserver;

use crate::row::{AgentSnapshotRow, AgentStatisticsRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, position snapshots, and
/// per-agent statistics to any [`OutputWriter`].
///
/// Each agent gets exactly one statistics row: when it finishes, or at
/// simulation end if it never did.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Indexed by `AgentId`; grows on demand.
    reported:   Vec<bool>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, reported: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn mark_reported(&mut self, agent: &Agent) -> bool {
        let i = agent.id.index();
        if self.reported.len() <= i {
            self.reported.resize(i + 1, false);
        }
        !std::mem::replace(&mut self.reported[i], true)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, moved: usize, active: usize) {
        let row = TickSummaryRow {
            tick:          tick.0,
            moved_agents:  moved as u64,
            active_agents: active as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_agent_finished(&mut self, tick: Tick, agent: &Agent) {
        if self.mark_reported(agent) {
            let result = self.writer.write_statistics(&AgentStatisticsRow::from_agent(tick, agent, true));
            self.store_err(result);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent], _grid: &Grid) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow::from_agent(tick, a))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, agents: &[Agent]) {
        for agent in agents {
            if self.mark_reported(agent) {
                let row = AgentStatisticsRow::from_agent(final_tick, agent, false);
                let result = self.writer.write_statistics(&row);
                self.store_err(result);
            }
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
