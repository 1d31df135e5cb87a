//! The `TransmissionModel` trait and the default proximity rule.

use ep_agent::{AgentRngs, Population};
use ep_core::{AgentId, HealthStatus, InfectionEvent, Params, Tick};
use ep_proximity::ClosePair;
use tracing::trace;

/// Pluggable infection rule.
///
/// Called once per tick with every close pair the detector found.  The model
/// may flip `Healthy` agents to `Infected` and must return one
/// [`InfectionEvent`] per such flip.
///
/// # Determinism
///
/// Random draws must come from `rngs`, so a fixed seed and a fixed pair list
/// always produce the same outcome.
pub trait TransmissionModel: Send + Sync + 'static {
    fn resolve(
        &self,
        pairs:      &[ClosePair],
        population: &mut Population,
        rngs:       &mut AgentRngs,
        params:     &Params,
        now:        Tick,
    ) -> Vec<InfectionEvent>;
}

// ── ProximityTransmission ─────────────────────────────────────────────────────

/// One infection trial per close Infected–Healthy pair.
///
/// Pairs are visited in the order given and each one reads the current
/// statuses, so an agent infected by an earlier pair can already infect a
/// later one in the same tick.  Infected–Infected pairs and pairs involving
/// an `Immune` agent never roll.
///
/// The roll is drawn from the healthy agent's own RNG stream.  A healthy
/// agent that is close to several infected agents gets one trial per pair
/// until one of them succeeds.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProximityTransmission;

impl ProximityTransmission {
    /// The member of `(a, b)` that may be infected, if the pair is eligible.
    fn susceptible_member(population: &Population, pair: ClosePair) -> Option<AgentId> {
        let a = population.get(pair.a)?.status();
        let b = population.get(pair.b)?.status();
        match (a, b) {
            (HealthStatus::Infected, HealthStatus::Healthy) => Some(pair.b),
            (HealthStatus::Healthy, HealthStatus::Infected) => Some(pair.a),
            _ => None,
        }
    }
}

impl TransmissionModel for ProximityTransmission {
    fn resolve(
        &self,
        pairs:      &[ClosePair],
        population: &mut Population,
        rngs:       &mut AgentRngs,
        params:     &Params,
        now:        Tick,
    ) -> Vec<InfectionEvent> {
        let mut events = Vec::new();
        for &pair in pairs {
            let Some(target) = Self::susceptible_member(population, pair) else {
                continue;
            };
            let Some(agent) = population.get_mut(target) else {
                continue;
            };
            if agent.attempt_infect(params, rngs.get_mut(target)) {
                let event = InfectionEvent {
                    agent:        target,
                    location:     agent.position(),
                    tick_emitted: now,
                };
                trace!(agent = %target, location = %event.location, tick = %now, "infection");
                events.push(event);
            }
        }
        events
    }
}
