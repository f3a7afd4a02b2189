//! `lm-grid` — the spatial model and goal-directed navigation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`building`] | `Building` (static occupant: landmark or plain obstacle)   |
//! | [`cell`]     | `Cell`, `Occupant`                                         |
//! | [`grid`]     | `Grid` (flat cell arena + occupancy), `GridBuilder`        |
//! | [`search`]   | `Navigator` trait, `SearchOutcome`, `AstarNavigator`       |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! # Ownership
//!
//! The `Grid` owns every `Cell` in one row-major `Vec`.  Cells refer to their
//! occupant by id (`BuildingId` into the grid's building table, or
//! `AgentId` into the simulation's agent list); agents and buildings refer
//! back to cells only by `GridPos`.  Nothing holds a reference into the
//! arena across a tick.

pub mod building;
pub mod cell;
pub mod error;
pub mod grid;
pub mod search;

#[cfg(test)]
mod tests;

pub use building::Building;
pub use cell::{Cell, Occupant};
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder};
pub use search::{AstarNavigator, Navigator, SearchOutcome};
