use lm_core::LmError;
use lm_grid::GridError;
use thiserror::Error;

/// Failures inside a decision or its execution.
///
/// None of these occur when the grid and agent positions agree; each one
/// means a caller broke the occupancy bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    #[error(transparent)]
    Core(#[from] LmError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
