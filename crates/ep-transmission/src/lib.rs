//! `ep-transmission`: turning close pairs into infections.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                        |
//! |-----------|-----------------------------------------------------------------|
//! | [`model`] | `TransmissionModel` trait, `ProximityTransmission` (default)    |
//! | [`noop`]  | `NoTransmission`: never infects anyone                         |
//!
//! # Design notes
//!
//! Resolution is strictly sequential.  Even when the proximity scan runs in
//! parallel, exactly one thread mutates agent statuses, so two pairs sharing
//! an agent can never race.

pub mod model;
pub mod noop;


pub use model::{ProximityTransmission, TransmissionModel};
pub use noop::NoTransmission;
