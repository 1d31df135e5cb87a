//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! discrete simulation step; the host loop decides how often to call it.
//! `SimClock` only records the nominal rate (`ticks_per_second`, 60 by
//! default) so that tick durations can be presented in seconds:
//!
//!   elapsed_secs = tick / ticks_per_second
//!
//! Using an integer tick as the canonical unit keeps every status-timer
//! comparison exact.

use std::fmt;

use crate::{Arena, Params};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the nominal tick rate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Nominal ticks per wall-clock second.  Default: 60.
    pub ticks_per_second: u32,
    /// The current tick, advanced by `SimClock::advance()` after each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.ticks_to_secs(self.current_tick.0)
    }

    /// Convert a tick count to nominal seconds.
    #[inline]
    pub fn ticks_to_secs(&self, ticks: u64) -> f64 {
        ticks as f64 / self.ticks_per_second as f64
    }

    /// How many ticks span `secs` whole seconds.
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs * self.ticks_per_second as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// `Default` reproduces the stock scenario: 150 agents of radius 6 in a
/// 900 × 750 window (100-pixel control strip), four of them initially
/// infected, transmission at three radii.  Applications may load it from a
/// JSON file (with the `serde` feature) and override individual fields.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of agents.  Constant for the life of the run.
    pub population: usize,

    /// How many agents start `Infected`; the rest start `Healthy`.
    pub initial_infected: usize,

    /// World bounds.
    pub arena: Arena,

    /// Radius of every agent's disc.
    pub agent_radius: f64,

    /// Transmission radius as a multiple of `agent_radius`.
    pub transmission_radius_factor: f64,

    /// Nominal host-loop rate, used only for presenting durations.
    pub ticks_per_second: u32,

    /// Total ticks `Sim::run` executes.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a full agent snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Initial values of the live-tunable parameters.
    pub params: Params,
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Maximum centre distance at which infection may be attempted.
    #[inline]
    pub fn transmission_radius(&self) -> f64 {
        self.agent_radius * self.transmission_radius_factor
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.ticks_per_second)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population:                 150,
            initial_infected:           4,
            arena:                      Arena::default(),
            agent_radius:               6.0,
            transmission_radius_factor: 3.0,
            ticks_per_second:           60,
            total_ticks:                3_600,
            seed:                       42,
            snapshot_interval_ticks:    0,
            params:                     Params::default(),
        }
    }
}
