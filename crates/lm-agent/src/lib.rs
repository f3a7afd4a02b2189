//! `lm-agent` — per-agent state for the landmark-seeking agent simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`agent`]     | `Agent` (position, targets, knowledge, visited memory, …)  |
//! | [`knowledge`] | `Knowledge` — category → known landmark-adjacent cells     |
//! | [`stats`]     | `AgentStatistics`, `Stopwatch`                             |
//! | [`transit`]   | `Transit` — the move an agent is committed to this tick    |
//! | [`plan`]      | `AgentPlan` — agent number and ordered target categories   |
//! | [`store`]     | `AgentRngs` (per-agent RNG)                                |
//!
//! # Ownership
//!
//! Agents refer to the grid only by `GridPos`.  Occupancy lives in the
//! `Grid`; keeping an agent's `position` and the grid's occupant for that
//! cell in agreement is the job of the behavior layer's move execution.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `AgentPlan`.          |

pub mod agent;
pub mod knowledge;
pub mod plan;
pub mod stats;
pub mod store;
pub mod transit;


pub use agent::Agent;
pub use knowledge::Knowledge;
pub use plan::AgentPlan;
pub use stats::{AgentStatistics, Stopwatch};
pub use store::AgentRngs;
pub use transit::Transit;
