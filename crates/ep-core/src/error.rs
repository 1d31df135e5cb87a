//! Framework error type.
//!
//! The tick loop itself has no failure modes; errors only come from
//! configuration validation and name lookups at the edges.

use thiserror::Error;

/// The top-level error type for `ep-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpError {
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ep-*` crates.
pub type EpResult<T> = Result<T, EpError>;
