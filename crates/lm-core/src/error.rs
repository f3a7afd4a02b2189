//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `LmError` as one variant
//! via `#[from]`, so move-vocabulary failures propagate with `?`.

use thiserror::Error;

use crate::{Direction, GridPos};

/// The top-level error type for `lm-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LmError {
    /// Zero-length or diagonal move request.  Always a caller bug.
    #[error("invalid move from {from} to {to}: moves are exactly one cell along one axis")]
    InvalidMove { from: GridPos, to: GridPos },

    /// The cell one step from `from` in `direction` lies outside the grid.
    #[error("moving {direction} from {from} leaves the {columns}x{rows} grid")]
    OutOfBounds {
        from:      GridPos,
        direction: Direction,
        columns:   u32,
        rows:      u32,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lm-*` crates.
pub type LmResult<T> = Result<T, LmError>;
