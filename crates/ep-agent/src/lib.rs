//! `ep-agent`: agents and population storage for the `rust_epi` simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`agent`]   | `Agent`: motion, wall bounce, status machine, infection trial |
//! | [`store`]   | `Population` (agent list), `AgentRngs` (per-agent RNG)         |
//! | [`builder`] | `PopulationBuilder` (random spawn, initial infections)         |
//!
//! # Status machine
//!
//! ```text
//!            attempt_infect (roll < chance)
//!   Healthy ─────────────────────────────▶ Infected
//!      ▲                                      │ infection_timer ≥ max(1, infection_duration)
//!      │ immunity_timer ≥ immunity_duration   ▼
//!      └──────────────────────────────────  Immune   (skipped when immunity_duration == 0
//!                                                     or recovery does not grant immunity)
//! ```

pub mod agent;
pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Transition};
pub use builder::PopulationBuilder;
pub use store::{AgentRngs, Population};
