//! Live-tunable parameters and the bounded write path.
//!
//! There is exactly one `ParameterStore` per simulation.  It is owned by the
//! tick driver and lent by shared reference to every component that reads
//! parameters.  The only way to change a value is [`ParameterStore::set`] (or
//! its stepping variant [`ParameterStore::nudge`]), which clamps the proposed
//! value into the parameter's admissible range and returns what was applied.
//! Out-of-range writes are never rejected.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::EpError;

// ── ParamId ───────────────────────────────────────────────────────────────────

/// Identifier of a tunable parameter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamId {
    /// Scalar agent speed, arena units per tick.
    MoveSpeed,
    /// Probability in `[0, 1]` that one exposure converts a healthy agent.
    InfectionChance,
    /// Ticks an agent stays infected.
    InfectionDuration,
    /// Ticks an agent stays immune after recovery.  0 skips immunity.
    ImmunityDuration,
}

impl ParamId {
    /// Every parameter, in control-panel order.
    pub const ALL: [ParamId; 4] = [
        ParamId::MoveSpeed,
        ParamId::InfectionChance,
        ParamId::InfectionDuration,
        ParamId::ImmunityDuration,
    ];

    /// The snake_case identifier exposed to collaborators.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::MoveSpeed         => "move_speed",
            ParamId::InfectionChance   => "infection_chance",
            ParamId::InfectionDuration => "infection_duration",
            ParamId::ImmunityDuration  => "immunity_duration",
        }
    }

    /// Admissible range and step size.
    pub fn spec(self) -> ParamSpec {
        match self {
            ParamId::MoveSpeed         => ParamSpec { min: 0.1, max: 5.0,    step: 0.1,  integral: false },
            ParamId::InfectionChance   => ParamSpec { min: 0.0, max: 1.0,    step: 0.05, integral: false },
            ParamId::InfectionDuration => ParamSpec { min: 30.0, max: 3000.0, step: 30.0, integral: true },
            ParamId::ImmunityDuration  => ParamSpec { min: 0.0, max: 6000.0, step: 60.0, integral: true },
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = EpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EpError::UnknownParameter(s.to_owned()))
    }
}

// ── ParamSpec ─────────────────────────────────────────────────────────────────

/// Bounds and control-panel step for one parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParamSpec {
    pub min: f64,
    pub max: f64,
    /// Increment applied by one [`ParameterStore::nudge`].
    pub step: f64,
    /// Whole-tick parameters are rounded to an integer before clamping.
    pub integral: bool,
}

impl ParamSpec {
    /// Clamp `value` into `[min, max]`.  NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let value = if self.integral { value.round() } else { value };
        value.clamp(self.min, self.max)
    }
}

/// Which way a [`ParameterStore::nudge`] moves the value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Decrease,
    Increase,
}

// ── Params ────────────────────────────────────────────────────────────────────

/// Plain parameter values.
///
/// Used to seed a [`ParameterStore`] (which clamps every field on
/// construction) and as the read view handed to simulation components.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    pub move_speed:               f64,
    pub infection_chance:         f64,
    pub infection_duration:       u32,
    pub immunity_duration:        u32,
    /// When `false`, recovering agents go straight back to `Healthy`.
    pub recovery_grants_immunity: bool,
}

impl Params {
    /// Current value of `id` as `f64`.
    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::MoveSpeed         => self.move_speed,
            ParamId::InfectionChance   => self.infection_chance,
            ParamId::InfectionDuration => self.infection_duration as f64,
            ParamId::ImmunityDuration  => self.immunity_duration as f64,
        }
    }

    /// Infection duration used as a transition threshold.  Never below one
    /// tick, so the infected state always makes forward progress.
    #[inline]
    pub fn effective_infection_duration(&self) -> u32 {
        self.infection_duration.max(1)
    }

    fn put(&mut self, id: ParamId, value: f64) {
        match id {
            ParamId::MoveSpeed         => self.move_speed = value,
            ParamId::InfectionChance   => self.infection_chance = value,
            ParamId::InfectionDuration => self.infection_duration = value as u32,
            ParamId::ImmunityDuration  => self.immunity_duration = value as u32,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            move_speed:               1.2,
            infection_chance:         0.50,
            infection_duration:       700,
            immunity_duration:        600,
            recovery_grants_immunity: true,
        }
    }
}

// ── ParameterStore ────────────────────────────────────────────────────────────

/// The single source of truth for tunable parameters.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    params: Params,
}

impl ParameterStore {
    /// Build a store from `initial`, clamping every field into range.
    pub fn new(initial: Params) -> Self {
        let mut params = initial;
        for id in ParamId::ALL {
            let clamped = id.spec().clamp(params.get(id));
            params.put(id, clamped);
        }
        Self { params }
    }

    /// Read view of all parameters.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Current value of `id`.
    #[inline]
    pub fn get(&self, id: ParamId) -> f64 {
        self.params.get(id)
    }

    /// Write `proposed` to `id`, clamped into range.  Returns the applied
    /// value.
    pub fn set(&mut self, id: ParamId, proposed: f64) -> f64 {
        let applied = id.spec().clamp(proposed);
        self.params.put(id, applied);
        debug!(param = %id, proposed, applied, "parameter set");
        applied
    }

    /// Move `id` one step in `direction`, the way a control-panel button
    /// does.  Chances are rounded to two decimals and durations snapped to a
    /// whole number of steps.  Returns the applied value.
    pub fn nudge(&mut self, id: ParamId, direction: Direction) -> f64 {
        let spec = id.spec();
        let delta = match direction {
            Direction::Decrease => -spec.step,
            Direction::Increase => spec.step,
        };
        let mut value = (self.get(id) + delta).clamp(spec.min, spec.max);
        match id {
            ParamId::InfectionChance => value = (value * 100.0).round() / 100.0,
            ParamId::InfectionDuration | ParamId::ImmunityDuration => {
                value = ((value / spec.step).round() * spec.step).max(0.0);
            }
            ParamId::MoveSpeed => {}
        }
        self.set(id, value)
    }

    /// Toggle the immunity-on-recovery rule.  Not bounded; not part of the
    /// control panel.
    pub fn set_recovery_grants_immunity(&mut self, enabled: bool) {
        self.params.recovery_grants_immunity = enabled;
        debug!(enabled, "recovery_grants_immunity set");
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(Params::default())
    }
}
