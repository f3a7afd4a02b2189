//! Grid-subsystem error type.

use thiserror::Error;

use lm_core::{GridPos, LmError};

/// Errors produced by `lm-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutsideGrid(GridPos),

    #[error("cell {pos} already holds a building")]
    AlreadyBuilt { pos: GridPos },

    #[error("home {0} appears more than once on the map")]
    DuplicateHome(char),

    #[error("grid must have at least one row and one column")]
    Empty,

    #[error(transparent)]
    Core(#[from] LmError),
}

pub type GridResult<T> = Result<T, GridError>;
