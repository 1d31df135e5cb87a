//! Flat row types shared by every backend.

use ep_agent::Agent;
use ep_core::{AgentId, InfectionEvent, Tick};
use ep_sim::TickReport;

/// One row per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub healthy:        u64,
    pub infected:       u64,
    pub immune:         u64,
    pub new_infections: u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        Self {
            tick:           report.tick.0,
            healthy:        report.counts.healthy as u64,
            infected:       report.counts.infected as u64,
            immune:         report.counts.immune as u64,
            new_infections: report.new_infections() as u64,
        }
    }
}

/// One row per successful transmission.
#[derive(Clone, Debug, PartialEq)]
pub struct InfectionEventRow {
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub agent_id: u32,
}

impl From<&InfectionEvent> for InfectionEventRow {
    fn from(event: &InfectionEvent) -> Self {
        Self {
            tick:     event.tick_emitted.0,
            x:        event.location.x,
            y:        event.location.y,
            agent_id: event.agent.0,
        }
    }
}

/// One row per agent per snapshot tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:        u32,
    pub tick:            u64,
    pub x:               f64,
    pub y:               f64,
    pub status:          &'static str,
    pub infection_timer: u32,
    pub immunity_timer:  u32,
}

impl AgentSnapshotRow {
    pub fn new(id: AgentId, tick: Tick, agent: &Agent) -> Self {
        let p = agent.position();
        Self {
            agent_id:        id.0,
            tick:            tick.0,
            x:               p.x,
            y:               p.y,
            status:          agent.status().as_str(),
            infection_timer: agent.infection_timer(),
            immunity_timer:  agent.immunity_timer(),
        }
    }
}
