//! The `Sim` struct and its tick loop.

use ep_agent::{AgentRngs, Population};
use ep_core::{Direction, HealthStatus, ParamId, ParameterStore, Params, SimClock, SimConfig, StatusCounts, Tick};
use ep_proximity::ProximityDetector;
use ep_transmission::TransmissionModel;
use tracing::{debug, info};

use crate::{SimObserver, SimResult, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<D, T>` owns all simulation state and drives the tick loop described
/// in the [crate docs](crate).  Collaborators read the population through
/// [`population`][Self::population] and change parameters only through
/// [`set_parameter`][Self::set_parameter] / [`nudge_parameter`][Self::nudge_parameter].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: ProximityDetector, T: TransmissionModel> {
    /// Run configuration (arena, radii, seed, total ticks, …).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick.
    pub clock: SimClock,

    /// Close-pair enumeration strategy.
    pub detector: D,

    /// Infection rule applied to close pairs.
    pub transmission: T,

    pub(crate) population: Population,
    pub(crate) rngs:       AgentRngs,
    pub(crate) params:     ParameterStore,
}

impl<D: ProximityDetector, T: TransmissionModel> Sim<D, T> {
    // ── Read access ───────────────────────────────────────────────────────

    /// Every agent, indexed by `AgentId`.
    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Current parameter values.
    #[inline]
    pub fn params(&self) -> &Params {
        self.params.params()
    }

    /// The tick the next [`step`][Self::step] will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Status counts for the current population.
    pub fn counts(&self) -> StatusCounts {
        self.population.counts()
    }

    // ── Parameter writes ──────────────────────────────────────────────────

    /// Write `proposed` to `id`, clamped into range, and return the applied
    /// value.
    ///
    /// Changing `move_speed` immediately recomputes every agent's velocity
    /// from its stored heading.  Duration and chance changes take effect on
    /// the next tick for every agent.
    pub fn set_parameter(&mut self, id: ParamId, proposed: f64) -> f64 {
        let applied = self.params.set(id, proposed);
        self.after_parameter_write(id, applied);
        applied
    }

    /// [`set_parameter`][Self::set_parameter] addressed by the parameter's
    /// snake_case name.
    ///
    /// # Errors
    ///
    /// `EpError::UnknownParameter` if `name` is not a parameter.
    pub fn set_parameter_by_name(&mut self, name: &str, proposed: f64) -> SimResult<f64> {
        let id: ParamId = name.parse()?;
        Ok(self.set_parameter(id, proposed))
    }

    /// Move `id` one control-panel step in `direction`.  Returns the applied
    /// value.
    pub fn nudge_parameter(&mut self, id: ParamId, direction: Direction) -> f64 {
        let applied = self.params.nudge(id, direction);
        self.after_parameter_write(id, applied);
        applied
    }

    /// Enable or disable the immune phase after recovery.
    pub fn set_recovery_grants_immunity(&mut self, enabled: bool) {
        self.params.set_recovery_grants_immunity(enabled);
    }

    fn after_parameter_write(&mut self, id: ParamId, applied: f64) {
        if id == ParamId::MoveSpeed {
            self.population.apply_speed(applied);
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Process the current tick and advance the clock.
    pub fn step(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let report = self.process_tick(now);
        self.clock.advance();
        report
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        let remaining = end.since(self.clock.current_tick);
        self.run_ticks(remaining, observer);

        let counts = self.counts();
        info!(tick = %self.clock.current_tick, %counts, "simulation finished");
        observer.on_sim_end(self.clock.current_tick, counts);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and host loops that pace ticks themselves.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let report = self.step();
            observer.on_tick_end(&report);
            if interval > 0 && now.0 % interval == 0 {
                observer.on_snapshot(now, &self.population);
            }
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> TickReport {
        let params = self.params.params();
        let arena = self.config.arena;

        // ── Phase 1: motion and status aging ──────────────────────────────
        let mut recovered = 0;
        let mut waned = 0;
        for agent in self.population.agents_mut() {
            agent.advance(&arena);
            if let Some(t) = agent.update_status(params) {
                match t.from {
                    HealthStatus::Infected => recovered += 1,
                    HealthStatus::Immune => waned += 1,
                    HealthStatus::Healthy => {}
                }
            }
        }

        // ── Phase 2: proximity over post-move positions ───────────────────
        let positions = self.population.positions();
        let pairs = self
            .detector
            .close_pairs(&positions, self.config.transmission_radius());

        // ── Phase 3: transmission, single-threaded ────────────────────────
        let new_events = self.transmission.resolve(
            &pairs,
            &mut self.population,
            &mut self.rngs,
            params,
            now,
        );

        let counts = self.population.counts();
        debug!(
            tick = %now,
            %counts,
            new_infections = new_events.len(),
            recovered,
            waned,
            close_pairs = pairs.len(),
            "tick"
        );

        TickReport {
            tick: now,
            counts,
            new_events,
            recovered,
            waned,
            close_pairs: pairs.len(),
        }
    }
}
