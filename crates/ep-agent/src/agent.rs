//! A single mobile agent.
//!
//! # Direction and velocity
//!
//! `velocity` always equals `from_polar(heading, speed)`.  [`Agent::set_speed`]
//! rebuilds it from the stored heading; a wall bounce reflects it and then
//! re-derives `heading` from the result.

use ep_core::{Arena, HealthStatus, Params, Tick, UniformSource, Vec2};

/// Peak extra radius of the infected pulse.
const PULSE_AMPLITUDE: f64 = 2.0;
/// Angular rate of the infected pulse, radians per tick.
const PULSE_RATE: f64 = 0.1;

/// A status change reported by [`Agent::update_status`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: HealthStatus,
    pub to:   HealthStatus,
}

/// One point agent: a disc of fixed radius moving in a straight line and
/// bouncing off the arena walls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    position:        Vec2,
    heading:         f64,
    speed:           f64,
    velocity:        Vec2,
    radius:          f64,
    status:          HealthStatus,
    infection_timer: u32,
    immunity_timer:  u32,
}

impl Agent {
    /// Create an agent at `position` moving along `heading` (radians) at
    /// `speed`.  Both timers start at zero.
    pub fn new(position: Vec2, heading: f64, speed: f64, radius: f64, status: HealthStatus) -> Self {
        Self {
            position,
            heading,
            speed,
            velocity: Vec2::from_polar(heading, speed),
            radius,
            status,
            infection_timer: 0,
            immunity_timer: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    /// Ticks spent infected so far.  Zero unless `Infected`.
    #[inline]
    pub fn infection_timer(&self) -> u32 {
        self.infection_timer
    }

    /// Ticks spent immune so far.  Zero unless `Immune`.
    #[inline]
    pub fn immunity_timer(&self) -> u32 {
        self.immunity_timer
    }

    /// Drawn radius at `tick`: pulses between `radius` and `radius + 2`
    /// while infected, constant otherwise.
    pub fn display_radius(&self, tick: Tick) -> f64 {
        match self.status {
            HealthStatus::Infected => {
                let pulse = ((tick.0 as f64 * PULSE_RATE).sin() + 1.0) / 2.0;
                self.radius + pulse * PULSE_AMPLITUDE
            }
            HealthStatus::Healthy | HealthStatus::Immune => self.radius,
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Change scalar speed, keeping the current heading.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        self.velocity = Vec2::from_polar(self.heading, speed);
    }

    /// Advance one tick along `velocity`, bouncing off the arena walls.
    ///
    /// A wall is hit when the position reaches or crosses the radius-inset
    /// bound.  The position is clamped onto the bound and the matching
    /// velocity component is pointed back inward.  `heading` is re-derived
    /// only when that changed the velocity, so a resting agent keeps its
    /// heading.  The bottom wall is the top edge of the control strip.
    /// Returns `true` if a wall was hit.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.position = self.position + self.velocity;

        let (lo, hi) = arena.inset_bounds(self.radius);
        let before = self.velocity;
        let mut bounced = false;

        if self.position.x <= lo.x {
            self.position.x = lo.x;
            self.velocity.x = self.velocity.x.abs();
            bounced = true;
        } else if self.position.x >= hi.x {
            self.position.x = hi.x;
            self.velocity.x = -self.velocity.x.abs();
            bounced = true;
        }

        if self.position.y <= lo.y {
            self.position.y = lo.y;
            self.velocity.y = self.velocity.y.abs();
            bounced = true;
        } else if self.position.y >= hi.y {
            self.position.y = hi.y;
            self.velocity.y = -self.velocity.y.abs();
            bounced = true;
        }

        if self.velocity != before {
            self.heading = self.velocity.heading();
        }
        bounced
    }

    // ── Health ────────────────────────────────────────────────────────────

    /// Age the status timers by one tick and apply any due transition.
    ///
    /// Thresholds are read from `params` on every call, so a live parameter
    /// change applies to every agent on the next tick.  When recovery would
    /// enter an immunity phase of zero length the agent goes straight to
    /// `Healthy` in this same call.
    pub fn update_status(&mut self, params: &Params) -> Option<Transition> {
        let from = self.status;
        match self.status {
            HealthStatus::Healthy => {}
            HealthStatus::Infected => {
                self.infection_timer += 1;
                if self.infection_timer >= params.effective_infection_duration() {
                    self.infection_timer = 0;
                    if params.recovery_grants_immunity && params.immunity_duration > 0 {
                        self.status = HealthStatus::Immune;
                        self.immunity_timer = 0;
                    } else {
                        self.status = HealthStatus::Healthy;
                    }
                }
            }
            HealthStatus::Immune => {
                if params.immunity_duration == 0 {
                    self.status = HealthStatus::Healthy;
                    self.immunity_timer = 0;
                } else {
                    self.immunity_timer += 1;
                    if self.immunity_timer >= params.immunity_duration {
                        self.status = HealthStatus::Healthy;
                        self.immunity_timer = 0;
                    }
                }
            }
        }
        (self.status != from).then_some(Transition { from, to: self.status })
    }

    /// One infection trial for this exposure.
    ///
    /// Only a `Healthy` agent can be infected; for any other status this
    /// returns `false` without drawing from `rng`.  Otherwise one sample in
    /// `[0, 1)` is drawn and compared against `infection_chance`; on success
    /// the agent becomes `Infected` with both timers reset.
    pub fn attempt_infect<U: UniformSource>(&mut self, params: &Params, rng: &mut U) -> bool {
        if self.status != HealthStatus::Healthy {
            return false;
        }
        if rng.next_unit() < params.infection_chance {
            self.status = HealthStatus::Infected;
            self.infection_timer = 0;
            self.immunity_timer = 0;
            return true;
        }
        false
    }
}
