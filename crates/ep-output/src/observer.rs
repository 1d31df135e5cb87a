//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ep_agent::Population;
use ep_core::{StatusCounts, Tick};
use ep_sim::{SimObserver, TickReport};
use tracing::warn;

use crate::row::{AgentSnapshotRow, InfectionEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, infection events and agent
/// snapshots to any [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is stored and every
/// later one is logged and dropped.  Check [`take_error`][Self::take_error]
/// after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            } else {
                warn!(error = %e, "dropping output error after the first");
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);

        if !report.new_events.is_empty() {
            let rows: Vec<InfectionEventRow> =
                report.new_events.iter().map(InfectionEventRow::from).collect();
            let result = self.writer.write_events(&rows);
            self.store_err(result);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .agent_ids()
            .zip(population.agents())
            .map(|(id, agent)| AgentSnapshotRow::new(id, tick, agent))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _counts: StatusCounts) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
