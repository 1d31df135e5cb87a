//! Unit tests for ep-agent.

#[cfg(test)]
mod support {
    use ep_core::UniformSource;

    /// Replays a fixed list of samples, then repeats the last one.
    pub struct Scripted {
        samples: Vec<f64>,
        pub draws: usize,
    }

    impl Scripted {
        pub fn new(samples: &[f64]) -> Self {
            Self { samples: samples.to_vec(), draws: 0 }
        }
    }

    impl UniformSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let i = self.draws.min(self.samples.len() - 1);
            self.draws += 1;
            self.samples[i]
        }
    }
}

#[cfg(test)]
mod motion {
    use std::f64::consts::{FRAC_PI_4, PI};

    use ep_core::{Arena, HealthStatus, Vec2};

    use crate::Agent;

    fn arena() -> Arena {
        // Movable area 100 x 80.
        Arena::new(100.0, 100.0, 20.0)
    }

    fn agent_at(x: f64, y: f64, heading: f64, speed: f64) -> Agent {
        Agent::new(Vec2::new(x, y), heading, speed, 5.0, HealthStatus::Healthy)
    }

    #[test]
    fn moves_by_velocity_without_bounce() {
        let mut a = agent_at(50.0, 40.0, 0.0, 2.0);
        assert!(!a.advance(&arena()));
        assert_eq!(a.position(), Vec2::new(52.0, 40.0));
        assert_eq!(a.heading(), 0.0);
    }

    #[test]
    fn right_wall_reflects_x() {
        let mut a = agent_at(94.0, 40.0, 0.0, 3.0);
        assert!(a.advance(&arena()));
        assert_eq!(a.position().x, 95.0);
        assert!(a.velocity().x < 0.0);
        assert!((a.heading().abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn left_and_top_walls_point_inward() {
        let mut a = agent_at(6.0, 6.0, -3.0 * FRAC_PI_4, 2.0);
        assert!(a.advance(&arena()));
        assert_eq!(a.position(), Vec2::new(5.0, 5.0));
        assert!(a.velocity().x > 0.0);
        assert!(a.velocity().y > 0.0);
        assert!((a.heading() - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn control_strip_is_the_floor() {
        // Movable height is 80, so the lowest centre is y = 75.
        let mut a = agent_at(50.0, 74.5, PI / 2.0, 1.0);
        assert!(a.advance(&arena()));
        assert_eq!(a.position().y, 75.0);
        assert!(a.velocity().y < 0.0);
    }

    #[test]
    fn heading_follows_bounce_on_later_speed_change() {
        let mut a = agent_at(94.0, 40.0, 0.0, 3.0);
        a.advance(&arena());
        a.set_speed(1.0);
        assert!((a.velocity().x + 1.0).abs() < 1e-12);
        assert!(a.velocity().y.abs() < 1e-12);
    }

    #[test]
    fn landing_exactly_on_wall_bounces() {
        // 92 + 3 puts the centre exactly on the right bound at x = 95.
        let mut a = agent_at(92.0, 40.0, 0.0, 3.0);
        assert!(a.advance(&arena()));
        assert_eq!(a.position().x, 95.0);
        assert!(a.velocity().x < 0.0);
        assert!((a.heading().abs() - PI).abs() < 1e-12);

        a.advance(&arena());
        assert_eq!(a.position().x, 92.0);
    }

    #[test]
    fn zero_velocity_is_idempotent() {
        // Resting in the bottom-left corner touches two walls every tick.
        let mut a = agent_at(5.0, 75.0, 1.0, 0.0);
        let before = a.clone();
        for _ in 0..10 {
            a.advance(&arena());
            assert_eq!(a, before);
        }
        let mut b = agent_at(50.0, 40.0, 1.0, 0.0);
        let before = b.clone();
        assert!(!b.advance(&arena()));
        assert_eq!(b, before);
    }

    #[test]
    fn stays_inside_over_many_ticks() {
        let arena = arena();
        let mut a = agent_at(50.0, 40.0, 0.7, 4.9);
        for _ in 0..10_000 {
            a.advance(&arena);
            assert!(arena.contains(a.position(), a.radius()), "escaped to {}", a.position());
        }
    }
}

#[cfg(test)]
mod status {
    use ep_core::{HealthStatus, Params, Tick, Vec2};

    use super::support::Scripted;
    use crate::{Agent, Transition};

    fn infected() -> Agent {
        Agent::new(Vec2::new(10.0, 10.0), 0.0, 1.0, 6.0, HealthStatus::Infected)
    }

    fn params(infection: u32, immunity: u32, grants: bool) -> Params {
        Params {
            infection_duration:       infection,
            immunity_duration:        immunity,
            recovery_grants_immunity: grants,
            ..Params::default()
        }
    }

    #[test]
    fn healthy_is_inert() {
        let mut a = Agent::new(Vec2::ZERO, 0.0, 1.0, 6.0, HealthStatus::Healthy);
        assert_eq!(a.update_status(&Params::default()), None);
        assert_eq!(a.infection_timer(), 0);
        assert_eq!(a.immunity_timer(), 0);
    }

    #[test]
    fn infected_recovers_to_immune_then_healthy() {
        let p = params(3, 2, true);
        let mut a = infected();
        assert_eq!(a.update_status(&p), None);
        assert_eq!(a.update_status(&p), None);
        assert_eq!(a.infection_timer(), 2);
        assert_eq!(
            a.update_status(&p),
            Some(Transition { from: HealthStatus::Infected, to: HealthStatus::Immune })
        );
        assert_eq!(a.infection_timer(), 0);
        assert_eq!(a.immunity_timer(), 0);

        assert_eq!(a.update_status(&p), None);
        assert_eq!(a.immunity_timer(), 1);
        assert_eq!(
            a.update_status(&p),
            Some(Transition { from: HealthStatus::Immune, to: HealthStatus::Healthy })
        );
        assert_eq!(a.immunity_timer(), 0);
    }

    #[test]
    fn no_immunity_rule_goes_straight_to_healthy() {
        let p = params(30, 600, false);
        let mut a = infected();
        for _ in 0..29 {
            assert_eq!(a.update_status(&p), None);
        }
        assert_eq!(a.update_status(&p).map(|t| t.to), Some(HealthStatus::Healthy));
    }

    #[test]
    fn zero_immunity_never_rests_in_immune() {
        let p = params(5, 0, true);
        let mut a = infected();
        for _ in 0..4 {
            a.update_status(&p);
            assert_eq!(a.status(), HealthStatus::Infected);
        }
        let t = a.update_status(&p).unwrap();
        assert_eq!(t, Transition { from: HealthStatus::Infected, to: HealthStatus::Healthy });
    }

    #[test]
    fn already_immune_with_zero_duration_leaves_immediately() {
        let mut a = infected();
        a.update_status(&params(1, 100, true));
        assert_eq!(a.status(), HealthStatus::Immune);
        a.update_status(&params(1, 0, true));
        assert_eq!(a.status(), HealthStatus::Healthy);
        assert_eq!(a.immunity_timer(), 0);
    }

    #[test]
    fn zero_infection_duration_floors_to_one_tick() {
        let mut a = infected();
        let t = a.update_status(&params(0, 10, true));
        assert_eq!(t.map(|t| t.to), Some(HealthStatus::Immune));
    }

    #[test]
    fn live_duration_change_applies_to_running_timers() {
        let mut a = infected();
        for _ in 0..50 {
            a.update_status(&params(700, 600, true));
        }
        assert_eq!(a.status(), HealthStatus::Infected);
        // Shortened below the elapsed time: recovers on the very next tick.
        a.update_status(&params(30, 600, true));
        assert_eq!(a.status(), HealthStatus::Immune);
    }

    #[test]
    fn attempt_infect_resets_timers_on_success() {
        let p = Params { infection_chance: 0.5, ..Params::default() };
        let mut a = Agent::new(Vec2::ZERO, 0.0, 1.0, 6.0, HealthStatus::Healthy);
        let mut rng = Scripted::new(&[0.49]);
        assert!(a.attempt_infect(&p, &mut rng));
        assert_eq!(a.status(), HealthStatus::Infected);
        assert_eq!(a.infection_timer(), 0);
        assert_eq!(a.immunity_timer(), 0);
    }

    #[test]
    fn attempt_infect_failure_has_no_effect() {
        let p = Params { infection_chance: 0.5, ..Params::default() };
        let mut a = Agent::new(Vec2::ZERO, 0.0, 1.0, 6.0, HealthStatus::Healthy);
        let before = a.clone();
        let mut rng = Scripted::new(&[0.5]);
        assert!(!a.attempt_infect(&p, &mut rng));
        assert_eq!(a, before);
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn attempt_infect_ignores_non_healthy_without_drawing() {
        let p = Params { infection_chance: 1.0, ..Params::default() };
        let mut rng = Scripted::new(&[0.0]);

        let mut sick = infected();
        sick.update_status(&p);
        let before = sick.clone();
        assert!(!sick.attempt_infect(&p, &mut rng));
        assert_eq!(sick, before);

        let mut immune = infected();
        immune.update_status(&params(1, 100, true));
        assert!(!immune.attempt_infect(&p, &mut rng));
        assert_eq!(immune.status(), HealthStatus::Immune);

        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn display_radius_pulses_only_when_infected() {
        let healthy = Agent::new(Vec2::ZERO, 0.0, 1.0, 6.0, HealthStatus::Healthy);
        let sick = infected();
        for t in 0..100 {
            assert_eq!(healthy.display_radius(Tick(t)), 6.0);
            let r = sick.display_radius(Tick(t));
            assert!((6.0..=8.0).contains(&r), "tick {t}: {r}");
        }
        assert_eq!(sick.display_radius(Tick(0)), 7.0);
    }
}

#[cfg(test)]
mod builder {
    use ep_core::{Arena, EpError, HealthStatus};

    use crate::PopulationBuilder;

    #[test]
    fn spawns_inside_movable_area() {
        let arena = Arena::default();
        let (pop, rngs) = PopulationBuilder::new(500, 7).radius(6.0).build(&arena).unwrap();
        assert_eq!(pop.len(), 500);
        assert_eq!(rngs.len(), 500);
        for a in pop.agents() {
            assert!(arena.contains(a.position(), 6.0));
            assert!((a.speed() - 1.2).abs() < 1e-12);
        }
    }

    #[test]
    fn first_agents_start_infected() {
        let (pop, _) = PopulationBuilder::new(10, 1)
            .initial_infected(3)
            .build(&Arena::default())
            .unwrap();
        let statuses: Vec<_> = pop.agents().iter().map(|a| a.status()).collect();
        assert!(statuses[..3].iter().all(|&s| s == HealthStatus::Infected));
        assert!(statuses[3..].iter().all(|&s| s == HealthStatus::Healthy));
        assert_eq!(pop.counts().total(), 10);
    }

    #[test]
    fn same_seed_same_population() {
        let arena = Arena::default();
        let (a, _) = PopulationBuilder::new(20, 99).build(&arena).unwrap();
        let (b, _) = PopulationBuilder::new(20, 99).build(&arena).unwrap();
        let (c, _) = PopulationBuilder::new(20, 100).build(&arena).unwrap();
        assert_eq!(a.agents(), b.agents());
        assert_ne!(a.agents(), c.agents());
    }

    #[test]
    fn too_many_initial_infected_errors() {
        let result = PopulationBuilder::new(3, 1).initial_infected(4).build(&Arena::default());
        assert!(matches!(result, Err(EpError::Config(_))));
    }

    #[test]
    fn arena_too_small_errors() {
        let result = PopulationBuilder::new(3, 1).radius(50.0).build(&Arena::new(60.0, 200.0, 20.0));
        assert!(matches!(result, Err(EpError::Config(_))));
    }
}

#[cfg(test)]
mod population {
    use ep_core::{Arena, HealthStatus};

    use crate::PopulationBuilder;

    #[test]
    fn apply_speed_keeps_headings() {
        let (mut pop, _) = PopulationBuilder::new(30, 5).build(&Arena::default()).unwrap();
        let headings: Vec<f64> = pop.agents().iter().map(|a| a.heading()).collect();
        pop.apply_speed(3.0);
        for (a, h) in pop.agents().iter().zip(headings) {
            assert_eq!(a.heading(), h);
            assert!((a.velocity().x.hypot(a.velocity().y) - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn counts_match_count() {
        let (pop, _) = PopulationBuilder::new(12, 5)
            .initial_infected(5)
            .build(&Arena::default())
            .unwrap();
        let counts = pop.counts();
        assert_eq!(counts.infected, pop.count(HealthStatus::Infected));
        assert_eq!(counts.healthy, 7);
        assert_eq!(pop.agent_ids().count(), 12);
        assert_eq!(pop.positions().len(), 12);
    }
}
