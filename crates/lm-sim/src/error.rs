use lm_behavior::BehaviorError;
use lm_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {number} has no home: no building for digit '{digit}'")]
    MissingHome { number: u32, digit: char },

    #[error("agent number {0} is defined more than once")]
    DuplicateAgent(u32),

    #[error("agent {number} targets category '{category}', which no landmark on the map has")]
    UnknownTarget { number: u32, category: char },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
