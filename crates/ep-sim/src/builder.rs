//! Fluent builder for constructing a [`Sim`].

use ep_agent::{AgentRngs, Population, PopulationBuilder};
use ep_core::{AgentId, ParameterStore, SimConfig};
use ep_proximity::ProximityDetector;
use ep_transmission::TransmissionModel;
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D, T>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: population, arena, radii, seed, initial parameters, …
/// - `D: ProximityDetector`: e.g. [`ep_proximity::BruteForceDetector`]
/// - `T: TransmissionModel`: e.g. [`ep_transmission::ProximityTransmission`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                              |
/// |-------------------|------------------------------------------------------|
/// | `.population(p)`  | Random spawn via [`PopulationBuilder`] from `config` |
/// | `.rngs(r)`        | `AgentRngs::new(len, config.seed)`                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, BruteForceDetector, ProximityTransmission)
///     .population(Population::from_agents(hand_placed))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<D: ProximityDetector, T: TransmissionModel> {
    config:       SimConfig,
    population:   Option<Population>,
    rngs:         Option<AgentRngs>,
    detector:     D,
    transmission: T,
}

impl<D: ProximityDetector, T: TransmissionModel> SimBuilder<D, T> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, detector: D, transmission: T) -> Self {
        Self {
            config,
            population: None,
            rngs: None,
            detector,
            transmission,
        }
    }

    /// Supply a hand-placed population instead of a random spawn.
    ///
    /// `config.population` is updated to match.  Every agent must lie inside
    /// the movable area; their speed is reset to the configured `move_speed`.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Supply the per-agent RNGs (must be the population's length).
    pub fn rngs(mut self, rngs: AgentRngs) -> Self {
        self.rngs = Some(rngs);
        self
    }

    /// Validate inputs, spawn or check the population, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<D, T>> {
        let params = ParameterStore::new(self.config.params.clone());
        self.config.params = params.params().clone();

        let factor = self.config.transmission_radius_factor;
        if factor.is_nan() || factor < 0.0 {
            return Err(SimError::Config(format!(
                "transmission_radius_factor must be non-negative, got {factor}"
            )));
        }

        // ── Population: supplied or spawned ───────────────────────────────
        let (mut population, spawned_rngs) = match self.population {
            Some(p) => {
                let arena = self.config.arena;
                for (i, agent) in p.agents().iter().enumerate() {
                    if !arena.contains(agent.position(), agent.radius()) {
                        return Err(SimError::OutOfBounds {
                            agent:    AgentId(i as u32),
                            position: agent.position(),
                        });
                    }
                }
                self.config.population = p.len();
                self.config.initial_infected = p.counts().infected;
                (p, None)
            }
            None => {
                let (p, r) = PopulationBuilder::new(self.config.population, self.config.seed)
                    .radius(self.config.agent_radius)
                    .speed(params.params().move_speed)
                    .initial_infected(self.config.initial_infected)
                    .build(&self.config.arena)?;
                (p, Some(r))
            }
        };
        population.apply_speed(params.params().move_speed);

        let count = population.len();
        let rngs = match (self.rngs, spawned_rngs) {
            (Some(r), _) => {
                if r.len() != count {
                    return Err(SimError::AgentCountMismatch {
                        expected: count,
                        got:      r.len(),
                        what:     "agent rngs",
                    });
                }
                r
            }
            (None, Some(r)) => r,
            (None, None) => AgentRngs::new(count, self.config.seed),
        };

        info!(
            population = count,
            initial_infected = self.config.initial_infected,
            seed = self.config.seed,
            transmission_radius = self.config.transmission_radius(),
            "simulation built"
        );

        Ok(Sim {
            clock:        self.config.make_clock(),
            config:       self.config,
            detector:     self.detector,
            transmission: self.transmission,
            population,
            rngs,
            params,
        })
    }
}
