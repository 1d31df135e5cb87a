//! Population storage: `Population` (agents) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Transmission needs `&mut Population` (to flip a status) and `&mut
//! AgentRngs` (to draw the infection roll from the target agent's stream) at
//! the same time, while proximity detection only reads the population.
//! Keeping the RNGs outside the agent list lets the tick driver hand out
//! those borrows independently:
//!
//! ```ignore
//! let pairs = detector.close_pairs(sim.population.agents(), radius);
//! transmission.resolve(&pairs, &mut sim.population, &mut sim.rngs, params, now);
//! ```

use ep_core::{AgentId, AgentRng, HealthStatus, StatusCounts, Vec2};

use crate::Agent;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// The fixed-size list of agents.
///
/// Agents are created once and never removed; the `AgentId` value is the
/// index into the list for the life of the simulation.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Wrap an explicit agent list (tests and hand-placed scenarios).
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Read-only view of every agent, indexed by `AgentId`.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view of every agent.  The slice cannot grow or shrink.
    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// Current position of every agent, indexed by `AgentId`.
    pub fn positions(&self) -> Vec<Vec2> {
        self.agents.iter().map(Agent::position).collect()
    }

    /// Tally agents by status.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.agents.iter().map(Agent::status))
    }

    /// Number of agents currently in `status`.
    pub fn count(&self, status: HealthStatus) -> usize {
        self.agents.iter().filter(|a| a.status() == status).count()
    }

    /// Recompute every agent's velocity from its heading and `speed`.
    pub fn apply_speed(&mut self, speed: f64) {
        for agent in &mut self.agents {
            agent.set_speed(speed);
        }
    }
}
