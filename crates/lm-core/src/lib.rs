//! `lm-core` — foundational types for the landmark-seeking agent simulation.
//!
//! This crate is a dependency of every other `lm-*` crate.  It has no `lm-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BuildingId`                               |
//! | [`pos`]         | `GridPos`, Manhattan distance                         |
//! | [`direction`]   | `Direction` and point-delta conversion                |
//! | [`rng`]         | `AgentRng` (per-agent, seedable)                      |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`error`]       | `LmError`, `LmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LmError, LmResult};
pub use ids::{AgentId, BuildingId};
pub use pos::GridPos;
pub use rng::AgentRng;
pub use time::{SimConfig, Tick};
