//! `ep-sim`: tick driver for the `rust_epi` epidemic simulator.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Motion    every agent: advance (wall bounce), then update_status
//!   ② Detect    ProximityDetector::close_pairs over post-move positions
//!   ③ Spread    TransmissionModel::resolve over those pairs → InfectionEvents
//!   ④ Report    StatusCounts + new events returned as a TickReport
//! ```
//!
//! The phases are strictly sequential: detection sees post-move positions
//! and transmission sees post-aging statuses.  A tick always completes
//! before the next begins; there is no cancellation inside a tick.
//!
//! Aging and pruning of infection events for display is the consumer's
//! job (see `ep_output::FlashQueue`); the core only stamps and emits them.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the proximity scan on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust
//! use ep_core::SimConfig;
//! use ep_proximity::BruteForceDetector;
//! use ep_sim::{NoopObserver, SimBuilder};
//! use ep_transmission::ProximityTransmission;
//!
//! let config = SimConfig { total_ticks: 100, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config, BruteForceDetector, ProximityTransmission)
//!     .build()
//!     .unwrap();
//! sim.run(&mut NoopObserver);
//! assert_eq!(sim.counts().total(), 150);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::TickReport;
pub use sim::Sim;
