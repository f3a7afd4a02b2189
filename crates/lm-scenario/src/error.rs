use thiserror::Error;

use lm_grid::GridError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("map has no `M` line")]
    MissingMap,

    #[error("map row {row} has {found} columns, expected {expected}")]
    NonRectangular { row: u32, expected: u32, found: u32 },

    #[error("map character {ch:?} at ({column},{row}) has no `~` description")]
    UndescribedBuilding { ch: char, column: u32, row: u32 },

    #[error("line {line}: target {target:?} appears before any agent number")]
    TargetBeforeAgent { line: usize, target: char },

    #[error("agent number {0} is defined twice")]
    DuplicateAgent(u32),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
