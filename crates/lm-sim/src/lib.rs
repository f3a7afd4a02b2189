//! `lm-sim` — tick driver for the landmark-seeking agent simulation.
//!
//! # Tick
//!
//! ```text
//! if controls running and no active agent in transit:
//!   ① Decide  — for each active agent in AgentId order:
//!                 intent = BehaviorModel::decide(agent, grid, rng)
//!                 apply_intent(agent, grid, intent)   // visible to the next agent
//!   ② Settle  — for each agent that moved, in AgentId order:
//!                 stop stopwatch, inspect perimeter (landmarks, peers)
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`sim`]      | `Sim` (decide / settle / tick / run), `PassReport`      |
//! | [`builder`]  | `SimBuilder` — load-time validation and agent placement |
//! | [`controls`] | `Controls` — speed, pause, cancel                       |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`                     |
//! | [`error`]    | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lm_core::SimConfig;
//! use lm_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(42, 5_000), grid, plans).build()?;
//! let final_tick = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controls;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use controls::Controls;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{PassReport, Sim};
