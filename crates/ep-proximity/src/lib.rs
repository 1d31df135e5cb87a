//! `ep-proximity`: which agents are close enough to transmit this tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`detector`] | `ProximityDetector` trait, `ClosePair`, `BruteForceDetector` |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `BruteForceDetector` scans rows on Rayon's thread pool.   |
//!
//! Detection only reads positions.  Whatever the detector does internally,
//! the pairs it returns are resolved sequentially by the transmission model,
//! so parallel detection never races on an agent's status.

pub mod detector;


pub use detector::{BruteForceDetector, ClosePair, ProximityDetector};
