//! `lm-scenario` — text map and agent-definition loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`map`]      | `parse_map` — `~` descriptions and the `M` grid  |
//! | [`agents`]   | `parse_agents` — agent numbers and target lines  |
//! | [`scenario`] | `Scenario` — both files loaded together          |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`             |
//!
//! Cross-checks between the two files (every agent has a home, every
//! target exists on the map) happen in `lm_sim::SimBuilder::build`.

pub mod agents;
pub mod error;
pub mod map;
pub mod scenario;


pub use agents::parse_agents;
pub use error::{ScenarioError, ScenarioResult};
pub use map::parse_map;
pub use scenario::Scenario;
