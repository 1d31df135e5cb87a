//! Simulation observer trait for progress reporting and data collection.

use ep_agent::Population;
use ep_core::{StatusCounts, Tick};

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access; the
/// only way to change a running simulation is through
/// [`Sim::set_parameter`][crate::Sim::set_parameter].
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {}", report.tick, report.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with everything that happened in it,
    /// including newly emitted infection events.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with the full post-tick population.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _counts: StatusCounts) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
