//! `ep-output`: run output and display helpers for the rust_epi simulator.
//!
//! Two writer backends, selected with Cargo features:
//!
//! | Feature   | Backend | Files created                                                         |
//! |-----------|---------|-----------------------------------------------------------------------|
//! | *(none)*  | CSV     | `tick_summaries.csv`, `infection_events.csv`, `agent_snapshots.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                                                           |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `ep_sim::SimObserver`.
//!
//! [`FlashQueue`] is the renderer-side store of recent infection events: it
//! ages them once per tick and drops them after a fixed lifetime.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ep_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod flash;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use flash::{Flash, FlashQueue, FLASH_LIFETIME_TICKS};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, InfectionEventRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
