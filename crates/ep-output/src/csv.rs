//! CSV output backend.
//!
//! Creates three files in the output directory:
//! - `tick_summaries.csv`
//! - `infection_events.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, TickSummaryRow};

pub const TICK_SUMMARY_HEADER: [&str; 5] = ["tick", "healthy", "infected", "immune", "new_infections"];
pub const EVENT_HEADER: [&str; 4] = ["tick", "x", "y", "agent_id"];
pub const SNAPSHOT_HEADER: [&str; 7] =
    ["agent_id", "tick", "x", "y", "status", "infection_timer", "immunity_timer"];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write their
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADER)?;

        let mut events = Writer::from_path(dir.join("infection_events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { summaries, events, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.healthy.to_string(),
            row.infected.to_string(),
            row.immune.to_string(),
            row.new_infections.to_string(),
        ])?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[InfectionEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.agent_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.status.to_owned(),
                row.infection_timer.to_string(),
                row.immunity_timer.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
