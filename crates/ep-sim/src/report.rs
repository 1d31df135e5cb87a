//! Per-tick result handed to the host loop and observers.

use ep_core::{InfectionEvent, StatusCounts, Tick};

/// What happened during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,

    /// Population status counts after the tick.
    pub counts: StatusCounts,

    /// Healthy → Infected transitions this tick, in resolution order.
    pub new_events: Vec<InfectionEvent>,

    /// Agents that left `Infected` this tick.
    pub recovered: usize,

    /// Agents whose immunity ran out this tick.
    pub waned: usize,

    /// Close pairs the detector reported.
    pub close_pairs: usize,
}

impl TickReport {
    /// Number of new infections this tick.
    #[inline]
    pub fn new_infections(&self) -> usize {
        self.new_events.len()
    }
}
