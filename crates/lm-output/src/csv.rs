//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `agent_positions.csv`
//! - `agent_statistics.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, AgentStatisticsRow, OutputError, OutputResult, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries:  Writer<File>,
    positions:  Writer<File>,
    statistics: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    ///
    /// `dir` must exist; existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDirectory(dir.to_path_buf()));
        }
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "moved_agents", "active_agents"])?;

        let mut positions = Writer::from_path(dir.join("agent_positions.csv"))?;
        positions.write_record(["tick", "agent_id", "x", "y", "in_transit", "active"])?;

        let mut statistics = Writer::from_path(dir.join("agent_statistics.csv"))?;
        statistics.write_record([
            "tick",
            "agent_id",
            "name",
            "finished",
            "knowledge_transfers",
            "knowledge_points",
            "random_moves",
            "astar_moves",
            "targets_found",
            "blocked_moves",
            "time_on_the_move_ms",
        ])?;

        Ok(Self {
            summaries,
            positions,
            statistics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moved_agents.to_string(),
            row.active_agents.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.in_transit as u8).to_string(),
                (row.active as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_statistics(&mut self, row: &AgentStatisticsRow) -> OutputResult<()> {
        self.statistics.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            row.name.clone(),
            (row.finished as u8).to_string(),
            row.knowledge_transfers.to_string(),
            row.knowledge_points.to_string(),
            row.random_moves.to_string(),
            row.astar_moves.to_string(),
            row.targets_found.to_string(),
            row.blocked_moves.to_string(),
            row.time_on_the_move_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.positions.flush()?;
        self.statistics.flush()?;
        Ok(())
    }
}
