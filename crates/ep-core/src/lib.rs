//! `ep-core`: foundational types for the `rust_epi` epidemic simulator.
//!
//! This crate is a dependency of every other `ep-*` crate.  It has no `ep-*`
//! dependencies and few external ones (`rand`, `thiserror`, `tracing`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                |
//! | [`geo`]         | `Vec2`, `Arena` (bounds + control-panel strip)           |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                          |
//! | [`rng`]         | `UniformSource`, `AgentRng` (per-agent)                  |
//! | [`params`]      | `ParamId`, `Params`, `ParameterStore` (bounded setter)   |
//! | [`status`]      | `HealthStatus`, `StatusCounts`                           |
//! | [`event`]       | `InfectionEvent`                                         |
//! | [`error`]       | `EpError`, `EpResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod event;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpError, EpResult};
pub use event::InfectionEvent;
pub use geo::{Arena, Vec2};
pub use ids::AgentId;
pub use params::{Direction, ParamId, ParamSpec, ParameterStore, Params};
pub use rng::{AgentRng, UniformSource};
pub use status::{HealthStatus, StatusCounts};
pub use time::{SimClock, SimConfig, Tick};
