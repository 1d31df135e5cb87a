use ep_core::{AgentId, EpError, Vec2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} at {position} lies outside the movable area")]
    OutOfBounds {
        agent:    AgentId,
        position: Vec2,
    },

    #[error(transparent)]
    Core(#[from] EpError),
}

pub type SimResult<T> = Result<T, SimError>;
