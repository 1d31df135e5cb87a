//! Health status and population counts.

use std::fmt;

/// Where an agent is in the healthy → infected → immune → healthy cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    /// Susceptible.  The only status transmission can change.
    #[default]
    Healthy,
    /// Infectious; counts `infection_timer` up to the infection duration.
    Infected,
    /// Temporarily protected; counts `immunity_timer` up to the immunity
    /// duration.
    Immune,
}

impl HealthStatus {
    /// Lower-case label, used for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy  => "healthy",
            HealthStatus::Infected => "infected",
            HealthStatus::Immune   => "immune",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StatusCounts ──────────────────────────────────────────────────────────────

/// Number of agents in each status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub healthy:  usize,
    pub infected: usize,
    pub immune:   usize,
}

impl StatusCounts {
    /// Tally an iterator of statuses.
    pub fn tally<I: IntoIterator<Item = HealthStatus>>(statuses: I) -> Self {
        let mut counts = StatusCounts::default();
        for status in statuses {
            counts.record(status);
        }
        counts
    }

    #[inline]
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Healthy  => self.healthy += 1,
            HealthStatus::Infected => self.infected += 1,
            HealthStatus::Immune   => self.immune += 1,
        }
    }

    #[inline]
    pub fn get(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Healthy  => self.healthy,
            HealthStatus::Infected => self.infected,
            HealthStatus::Immune   => self.immune,
        }
    }

    /// Sum over all statuses.  Always equals the population size.
    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.immune
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "healthy={} infected={} immune={}",
            self.healthy, self.infected, self.immune
        )
    }
}
