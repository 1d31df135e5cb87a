//! Deterministic per-agent RNG and the injectable uniform source.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! with the 64-bit golden-ratio constant as multiplier.  Spawn point,
//! heading and every infection trial against an agent draw from that agent's
//! stream.  How many draws one agent consumes never shifts another's.
//!
//! Code that only needs "a uniform sample in `[0, 1)`" takes
//! `&mut impl UniformSource`, which lets tests substitute a scripted
//! sequence for the real generator.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A source of uniformly distributed samples in `[0, 1)`.
pub trait UniformSource {
    /// Draw one sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's private random stream.
///
/// Lives in `ep_agent::AgentRngs`, indexed by the same `AgentId` as the
/// agent it belongs to.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let mixed = (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(global_seed ^ mixed))
    }

    /// Any `Standard`-distributed value (`u64`, `bool`, unit `f64`, ...).
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform sample from `range`; both `a..b` and `a..=b` are accepted.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl UniformSource for AgentRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
