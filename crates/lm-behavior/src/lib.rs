//! `lm-behavior` — how agents decide, move, and learn.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`intent`]    | `Intent` (`Move`, `Stay`, `Deactivate`), `MoveKind`           |
//! | [`context`]   | `DecisionContext<'a>` — read-only view for one decision       |
//! | [`model`]     | `BehaviorModel` trait                                         |
//! | [`seeker`]    | `LandmarkSeeker` — explore / navigate / home / finish         |
//! | [`explore`]   | random exploratory step with visited-memory bias              |
//! | [`movement`]  | `apply_intent`, `execute_move`, `settle`, `MoveOutcome`       |
//! | [`perimeter`] | `inspect_perimeter` — landmark discovery and knowledge merge  |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Decision pass
//!
//! The simulation drives agents strictly one after another:
//!
//! 1. **Decide**: `BehaviorModel::decide` reads the grid and updates the
//!    agent's own bookkeeping, returning one `Intent`.
//! 2. **Apply**: `apply_intent` executes it against the grid immediately, so
//!    the next agent decides against the updated occupancy.  Earlier agents
//!    therefore win contested cells.
//!
//! After the pass every moved agent is settled and inspects its perimeter,
//! again in agent order.

pub mod context;
pub mod error;
pub mod explore;
pub mod intent;
pub mod model;
pub mod movement;
pub mod perimeter;
pub mod seeker;


pub use context::DecisionContext;
pub use error::{BehaviorError, BehaviorResult};
pub use explore::explore;
pub use intent::{Intent, MoveKind};
pub use model::BehaviorModel;
pub use movement::{apply_intent, deactivate, execute_move, settle, MoveOutcome};
pub use perimeter::{inspect_perimeter, Discoveries};
pub use seeker::LandmarkSeeker;
