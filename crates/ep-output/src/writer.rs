//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these errors mid-run; it keeps the first
/// one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the infection events of one tick.
    fn write_events(&mut self, rows: &[InfectionEventRow]) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Calling it twice is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
