//! Integration tests for ep-sim.

use ep_agent::{Agent, Population};
use ep_core::{Arena, HealthStatus, ParamId, Params, SimConfig, Vec2};
use ep_proximity::BruteForceDetector;
use ep_transmission::{NoTransmission, ProximityTransmission};

use crate::{Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64, params: Params) -> SimConfig {
    SimConfig {
        population: 40,
        initial_infected: 3,
        total_ticks,
        seed: 42,
        params,
        ..SimConfig::default()
    }
}

fn spawned(total_ticks: u64) -> Sim<BruteForceDetector, ProximityTransmission> {
    SimBuilder::new(test_config(total_ticks, Params::default()), BruteForceDetector, ProximityTransmission)
        .build()
        .unwrap()
}

/// Two agents, one infected, placed `gap` apart in the middle of `arena`.
fn pair_sim(
    arena: Arena,
    gap:   f64,
    params: Params,
) -> Sim<BruteForceDetector, ProximityTransmission> {
    let cx = arena.width / 2.0;
    let cy = arena.movable_height() / 2.0;
    let agents = vec![
        Agent::new(Vec2::new(cx - gap / 2.0, cy), 0.3, 0.0, 6.0, HealthStatus::Infected),
        Agent::new(Vec2::new(cx + gap / 2.0, cy), 2.1, 0.0, 6.0, HealthStatus::Healthy),
    ];
    let config = SimConfig { arena, ..test_config(1_000, params) };
    SimBuilder::new(config, BruteForceDetector, ProximityTransmission)
        .population(Population::from_agents(agents))
        .build()
        .unwrap()
}

/// A box so small two radius-6 agents can never be 18 apart.
fn cramped() -> Arena {
    Arena::new(14.0, 114.0, 100.0)
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ep_agent::AgentRngs;
    use ep_core::EpError;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = spawned(10);
        assert_eq!(sim.population().len(), 40);
        assert_eq!(sim.counts().infected, 3);
        assert_eq!(sim.current_tick().0, 0);
    }

    #[test]
    fn initial_params_are_clamped() {
        let params = Params { move_speed: 9.0, infection_duration: 1, ..Params::default() };
        let sim = SimBuilder::new(test_config(10, params), BruteForceDetector, ProximityTransmission)
            .build()
            .unwrap();
        assert_eq!(sim.params().move_speed, 5.0);
        assert_eq!(sim.params().infection_duration, 30);
        assert_eq!(sim.config.params.move_speed, 5.0);
        assert!(sim.population().agents().iter().all(|a| a.speed() == 5.0));
    }

    #[test]
    fn too_many_infected_errors() {
        let config = SimConfig { population: 2, initial_infected: 3, ..SimConfig::default() };
        let result = SimBuilder::new(config, BruteForceDetector, ProximityTransmission).build();
        assert!(matches!(result, Err(SimError::Core(EpError::Config(_)))));
    }

    #[test]
    fn out_of_bounds_agent_errors() {
        let agents = vec![Agent::new(Vec2::new(1.0, 1.0), 0.0, 1.0, 6.0, HealthStatus::Healthy)];
        let result = SimBuilder::new(SimConfig::default(), BruteForceDetector, ProximityTransmission)
            .population(Population::from_agents(agents))
            .build();
        assert!(matches!(result, Err(SimError::OutOfBounds { .. })));
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let agents = vec![Agent::new(Vec2::new(50.0, 50.0), 0.0, 1.0, 6.0, HealthStatus::Healthy)];
        let result = SimBuilder::new(SimConfig::default(), BruteForceDetector, ProximityTransmission)
            .population(Population::from_agents(agents))
            .rngs(AgentRngs::new(2, 0))
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 1, got: 2, .. })));
    }

    #[test]
    fn negative_radius_factor_errors() {
        let config = SimConfig { transmission_radius_factor: -1.0, ..SimConfig::default() };
        let result = SimBuilder::new(config, BruteForceDetector, ProximityTransmission).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn hand_placed_population_updates_config() {
        let sim = pair_sim(Arena::default(), 5.0, Params::default());
        assert_eq!(sim.config.population, 2);
        assert_eq!(sim.config.initial_infected, 1);
        // Speed is reset to the configured move_speed.
        assert!(sim.population().agents().iter().all(|a| a.speed() == 1.2));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use ep_core::{StatusCounts, Tick};

    use super::*;
    use crate::{NoopObserver, SimObserver, TickReport};

    #[test]
    fn runs_to_end_tick() {
        let mut sim = spawned(10);
        sim.run(&mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(10));
        // A second run is a no-op.
        sim.run(&mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = spawned(100);
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(8));
    }

    #[test]
    fn step_reports_processed_tick() {
        let mut sim = spawned(100);
        assert_eq!(sim.step().tick, Tick(0));
        assert_eq!(sim.step().tick, Tick(1));
        assert_eq!(sim.current_tick(), Tick(2));
    }

    #[derive(Default)]
    struct Recorder {
        starts:    usize,
        reports:   Vec<TickReport>,
        snapshots: Vec<Tick>,
        ended:     Option<(Tick, StatusCounts)>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, report: &TickReport) {
            self.reports.push(report.clone());
        }
        fn on_snapshot(&mut self, tick: Tick, population: &Population) {
            assert_eq!(population.len(), 40);
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, final_tick: Tick, counts: StatusCounts) {
            self.ended = Some((final_tick, counts));
        }
    }

    #[test]
    fn observer_sees_every_tick_and_snapshot_interval() {
        let config = SimConfig { snapshot_interval_ticks: 3, ..test_config(7, Params::default()) };
        let mut sim = SimBuilder::new(config, BruteForceDetector, ProximityTransmission)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);

        assert_eq!(obs.starts, 7);
        assert_eq!(obs.reports.len(), 7);
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(3), Tick(6)]);
        let (final_tick, counts) = obs.ended.unwrap();
        assert_eq!(final_tick, Tick(7));
        assert_eq!(counts, sim.counts());
    }

    #[test]
    fn report_events_match_infection_delta() {
        let mut sim = spawned(300);
        for _ in 0..300 {
            let before = sim.counts();
            let report = sim.step();
            let delta = report.counts.infected as i64 - before.infected as i64;
            assert_eq!(delta, report.new_infections() as i64 - report.recovered as i64);
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let mut a = spawned(500);
        let mut b = spawned(500);
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);
        assert_eq!(a.population().agents(), b.population().agents());
    }

    #[test]
    fn without_transmission_nobody_new_is_infected() {
        let mut sim = SimBuilder::new(test_config(2_000, Params::default()), BruteForceDetector, NoTransmission)
            .build()
            .unwrap();
        for _ in 0..2_000 {
            let report = sim.step();
            assert!(report.new_events.is_empty());
        }
        // 700-tick illness + 600-tick immunity: everyone is healthy again.
        assert_eq!(sim.counts().healthy, 40);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use ep_core::{AgentId, Tick};

    use super::*;

    #[test]
    fn certain_infection_in_one_tick() {
        let params = Params { infection_chance: 1.0, ..Params::default() };
        let mut sim = pair_sim(Arena::default(), 5.0, params);
        let before = sim.population().get(AgentId(1)).unwrap().position();

        let report = sim.step();

        let target = sim.population().get(AgentId(1)).unwrap();
        assert_eq!(target.status(), HealthStatus::Infected);
        assert_eq!(target.infection_timer(), 0);
        assert_eq!(report.new_events.len(), 1);

        let event = report.new_events[0];
        assert_eq!(event.agent, AgentId(1));
        assert_eq!(event.tick_emitted, Tick(0));
        assert_eq!(event.location, target.position());
        assert!(event.location.distance(before) <= sim.params().move_speed + 1e-9);
    }

    #[test]
    fn zero_chance_never_converts() {
        let params = Params { infection_chance: 0.0, infection_duration: 3000, ..Params::default() };
        let mut sim = pair_sim(cramped(), 1.0, params);
        for _ in 0..1_000 {
            let report = sim.step();
            assert_eq!(report.close_pairs, 1);
            assert!(report.new_events.is_empty());
        }
        assert_eq!(sim.population().get(AgentId(1)).unwrap().status(), HealthStatus::Healthy);
    }

    #[test]
    fn infection_lasts_exactly_its_duration() {
        let params = Params {
            infection_chance:         1.0,
            infection_duration:       30,
            recovery_grants_immunity: false,
            ..Params::default()
        };
        let mut sim = pair_sim(Arena::default(), 5.0, params);

        // Infected during tick T = 0.
        sim.step();
        sim.set_parameter(ParamId::InfectionChance, 0.0);
        let status = |sim: &Sim<_, _>| sim.population().get(AgentId(1)).unwrap().status();
        assert_eq!(status(&sim), HealthStatus::Infected);

        for t in 1..30 {
            let report = sim.step();
            assert_eq!(report.tick, Tick(t));
            assert_eq!(status(&sim), HealthStatus::Infected, "recovered early at tick {t}");
        }
        let report = sim.step();
        assert_eq!(report.tick, Tick(30));
        assert_eq!(status(&sim), HealthStatus::Healthy);
    }

    #[test]
    fn zero_immunity_is_never_observed() {
        let params = Params {
            infection_chance:   0.0,
            infection_duration: 30,
            immunity_duration:  0,
            ..Params::default()
        };
        let mut sim = pair_sim(Arena::default(), 100.0, params);
        let mut recovered = 0;
        for _ in 0..100 {
            let report = sim.step();
            assert_eq!(report.counts.immune, 0);
            recovered += report.recovered;
        }
        assert_eq!(recovered, 1);
        assert_eq!(sim.counts().healthy, 2);
    }

    #[test]
    fn speed_change_recomputes_every_velocity() {
        let mut sim = spawned(10);
        sim.run_ticks(50, &mut crate::NoopObserver);
        let headings: Vec<f64> = sim.population().agents().iter().map(|a| a.heading()).collect();

        assert_eq!(sim.set_parameter(ParamId::MoveSpeed, 100.0), 5.0);
        for (a, h) in sim.population().agents().iter().zip(headings) {
            assert_eq!(a.heading(), h);
            assert_eq!(a.speed(), 5.0);
            assert!((a.velocity().x.hypot(a.velocity().y) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn set_by_name_clamps_and_rejects_unknown() {
        let mut sim = spawned(10);
        assert_eq!(sim.set_parameter_by_name("infection_duration", -5.0).unwrap(), 30.0);
        assert_eq!(sim.params().infection_duration, 30);
        assert!(sim.set_parameter_by_name("gravity", 1.0).is_err());
    }

    #[test]
    fn nudge_speed_updates_agents() {
        let mut sim = spawned(10);
        let applied = sim.nudge_parameter(ParamId::MoveSpeed, ep_core::Direction::Increase);
        assert!((applied - 1.3).abs() < 1e-12);
        assert!(sim.population().agents().iter().all(|a| a.speed() == applied));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn population_conserved_and_contained(
            seed      in any::<u64>(),
            count     in 2usize..60,
            speed     in 0.1f64..5.0,
            chance    in 0.0f64..=1.0,
            infection in 30u32..200,
            immunity  in 0u32..200,
            grants    in any::<bool>(),
        ) {
            let params = Params {
                move_speed:               speed,
                infection_chance:         chance,
                infection_duration:       infection,
                immunity_duration:        immunity,
                recovery_grants_immunity: grants,
            };
            let config = SimConfig {
                population: count,
                initial_infected: 1,
                seed,
                params,
                ..SimConfig::default()
            };
            let mut sim = SimBuilder::new(config, BruteForceDetector, ProximityTransmission)
                .build()
                .unwrap();
            let arena = sim.config.arena;

            for _ in 0..300 {
                let report = sim.step();
                prop_assert_eq!(report.counts.total(), count);
                for agent in sim.population().agents() {
                    prop_assert!(arena.contains(agent.position(), agent.radius()));
                    if agent.status() != HealthStatus::Infected {
                        prop_assert_eq!(agent.infection_timer(), 0);
                    }
                    if agent.status() != HealthStatus::Immune {
                        prop_assert_eq!(agent.immunity_timer(), 0);
                    }
                }
                for event in &report.new_events {
                    let agent = sim.population().get(event.agent).unwrap();
                    prop_assert_eq!(agent.status(), HealthStatus::Infected);
                    prop_assert_eq!(agent.infection_timer(), 0);
                }
            }
        }
    }
}
