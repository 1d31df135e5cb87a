//! A transmission model that never infects.

use ep_agent::{AgentRngs, Population};
use ep_core::{InfectionEvent, Params, Tick};
use ep_proximity::ClosePair;

use crate::TransmissionModel;

/// A [`TransmissionModel`] that ignores every pair.
///
/// Useful for isolating motion and status aging in tests, or for a
/// "no spread" baseline run.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTransmission;

impl TransmissionModel for NoTransmission {
    fn resolve(
        &self,
        _pairs:      &[ClosePair],
        _population: &mut Population,
        _rngs:       &mut AgentRngs,
        _params:     &Params,
        _now:        Tick,
    ) -> Vec<InfectionEvent> {
        Vec::new()
    }
}
