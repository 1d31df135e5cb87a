//! Fluent builder for constructing `Population` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use ep_agent::PopulationBuilder;
//! use ep_core::{Arena, HealthStatus};
//!
//! let (population, rngs) = PopulationBuilder::new(150, /*seed=*/ 42)
//!     .radius(6.0)
//!     .speed(1.2)
//!     .initial_infected(4)
//!     .build(&Arena::default())
//!     .unwrap();
//!
//! assert_eq!(population.len(), 150);
//! assert_eq!(rngs.len(), 150);
//! assert_eq!(population.count(HealthStatus::Infected), 4);
//! ```

use std::f64::consts::TAU;

use ep_core::{AgentId, Arena, EpError, EpResult, HealthStatus, Vec2};
use tracing::debug;

use crate::{Agent, AgentRngs, Population};

/// Fluent builder for [`Population`] + [`AgentRngs`].
///
/// Each agent spawns at a uniformly random point of the radius-inset movable
/// area with a uniformly random heading, both drawn from its own
/// [`AgentRng`](ep_core::AgentRng).  The first `initial_infected` agents
/// start `Infected`; the rest start `Healthy`.
pub struct PopulationBuilder {
    count:            usize,
    seed:             u64,
    radius:           f64,
    speed:            f64,
    initial_infected: usize,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            radius:           6.0,
            speed:            1.2,
            initial_infected: 0,
        }
    }

    /// Disc radius shared by every agent.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Initial scalar speed.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// How many agents start infected.
    pub fn initial_infected(mut self, n: usize) -> Self {
        self.initial_infected = n;
        self
    }

    /// Spawn the agents inside `arena`.
    ///
    /// # Errors
    ///
    /// `EpError::Config` if `initial_infected > count`, if the radius is not
    /// positive, or if the arena is too small to hold a single agent.
    pub fn build(self, arena: &Arena) -> EpResult<(Population, AgentRngs)> {
        if self.initial_infected > self.count {
            return Err(EpError::Config(format!(
                "initial_infected ({}) exceeds population ({})",
                self.initial_infected, self.count
            )));
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(EpError::Config(format!("agent radius must be positive, got {}", self.radius)));
        }
        let (lo, hi) = arena.inset_bounds(self.radius);
        if lo.x > hi.x || lo.y > hi.y {
            return Err(EpError::Config(format!(
                "arena {}x{} (movable height {}) cannot hold an agent of radius {}",
                arena.width,
                arena.height,
                arena.movable_height(),
                self.radius
            )));
        }
        u32::try_from(self.count)
            .map_err(|_| EpError::Config(format!("population {} exceeds u32 range", self.count)))?;

        let mut rngs = AgentRngs::new(self.count, self.seed);
        let agents = (0..self.count)
            .map(|i| {
                let rng = rngs.get_mut(AgentId(i as u32));
                let position = Vec2::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y));
                let heading = rng.gen_range(0.0..TAU);
                let status = if i < self.initial_infected {
                    HealthStatus::Infected
                } else {
                    HealthStatus::Healthy
                };
                Agent::new(position, heading, self.speed, self.radius, status)
            })
            .collect();

        debug!(
            count = self.count,
            initial_infected = self.initial_infected,
            seed = self.seed,
            "population spawned"
        );
        Ok((Population::from_agents(agents), rngs))
    }
}
