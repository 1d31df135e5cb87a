//! Transient infection events.

use crate::{AgentId, Tick, Vec2};

/// A Healthy → Infected transition, recorded where and when it happened.
///
/// Events are emitted by the transmission model and handed to observers.
/// Nothing in the simulation reads them back; aging and pruning for display
/// is the consumer's concern (see `ep_output::FlashQueue`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionEvent {
    /// The newly infected agent.
    pub agent:        AgentId,
    /// The agent's position at the moment of infection.
    pub location:     Vec2,
    /// Tick during which the infection occurred.
    pub tick_emitted: Tick,
}

impl InfectionEvent {
    /// Ticks since this event was emitted, as seen at `now`.
    #[inline]
    pub fn age(&self, now: Tick) -> u64 {
        now.since(self.tick_emitted)
    }
}
