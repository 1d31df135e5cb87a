//! arena: headless run of the epidemic arena.
//!
//! Spawns the default 150 agents (4 infected) in the 900×750 arena and runs
//! one simulated minute at 60 ticks per second.  A short script stands in for
//! the control panel, changing parameters mid-run.  Output goes to
//! `output/arena/` as CSV, plus the final population as JSON.
//!
//! Usage: `arena [config.json]`.  Any `SimConfig` field may be given in the
//! file; missing fields keep their defaults.  Set `RUST_LOG=debug` for
//! per-tick logs.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ep_agent::Population;
use ep_core::{Direction, ParamId, SimConfig, StatusCounts, Tick};
use ep_output::{CsvWriter, FlashQueue, OutputWriter, SimOutputObserver};
use ep_proximity::{BruteForceDetector, ProximityDetector};
use ep_sim::{Sim, SimBuilder, SimObserver, TickReport};
use ep_transmission::{ProximityTransmission, TransmissionModel};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:              &str = "output/arena";
const SNAPSHOT_INTERVAL_TICKS: u64  = 60; // once per simulated second

// ── Control-panel script ──────────────────────────────────────────────────────

enum Control {
    Nudge(ParamId, Direction),
    Set(&'static str, f64),
    RecoveryGrantsImmunity(bool),
}

/// `(tick, action)` pairs, in tick order.
const SCRIPT: &[(u64, Control)] = &[
    (900,  Control::Nudge(ParamId::InfectionChance, Direction::Decrease)),
    (900,  Control::Nudge(ParamId::InfectionChance, Direction::Decrease)),
    (1500, Control::Set("move_speed", 2.5)),
    (2100, Control::Nudge(ParamId::ImmunityDuration, Direction::Decrease)),
    (2700, Control::RecoveryGrantsImmunity(false)),
    (3000, Control::Set("infection_duration", 10.0)), // clamps to 30
];

fn apply<D, T>(sim: &mut Sim<D, T>, control: &Control) -> Result<()>
where
    D: ProximityDetector,
    T: TransmissionModel,
{
    let tick = sim.current_tick();
    match *control {
        Control::Nudge(id, dir) => {
            let v = sim.nudge_parameter(id, dir);
            info!(%tick, param = %id, value = v, "nudge");
        }
        Control::Set(name, proposed) => {
            let v = sim.set_parameter_by_name(name, proposed)?;
            info!(%tick, param = name, proposed, value = v, "set");
        }
        Control::RecoveryGrantsImmunity(enabled) => {
            sim.set_recovery_grants_immunity(enabled);
            info!(%tick, enabled, "recovery grants immunity");
        }
    }
    Ok(())
}

// ── Observer: output + display bookkeeping ────────────────────────────────────

struct ArenaObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    flashes:      FlashQueue,
    max_flashes:  usize,
    peak:         (Tick, usize),
    total_events: usize,
    final_counts: StatusCounts,
}

impl<W: OutputWriter> ArenaObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            flashes:      FlashQueue::new(),
            max_flashes:  0,
            peak:         (Tick::ZERO, 0),
            total_events: 0,
            final_counts: StatusCounts::default(),
        }
    }
}

impl<W: OutputWriter> SimObserver for ArenaObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        self.flashes.tick(&report.new_events);
        self.max_flashes = self.max_flashes.max(self.flashes.len());
        self.total_events += report.new_infections();

        if report.counts.infected > self.peak.1 {
            self.peak = (report.tick, report.counts.infected);
        }
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        self.inner.on_snapshot(tick, population);
    }

    fn on_sim_end(&mut self, final_tick: Tick, counts: StatusCounts) {
        self.final_counts = counts;
        self.inner.on_sim_end(final_tick, counts);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<SimConfig> {
    let mut config = match path {
        Some(p) => {
            let file = File::open(&p).with_context(|| format!("opening config {p}"))?;
            serde_json::from_reader(file).with_context(|| format!("parsing config {p}"))?
        }
        None => SimConfig::default(),
    };
    if config.snapshot_interval_ticks == 0 {
        config.snapshot_interval_ticks = SNAPSHOT_INTERVAL_TICKS;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(std::env::args().nth(1))?;
    println!("=== arena — rust_epi epidemic simulator ===");
    println!(
        "Agents: {} ({} infected)  |  Ticks: {} at {}/s  |  Seed: {}",
        config.population,
        config.initial_infected,
        config.total_ticks,
        config.ticks_per_second,
        config.seed,
    );
    println!("Transmission radius: {:.1}", config.transmission_radius());
    println!();

    let mut sim = SimBuilder::new(config, BruteForceDetector, ProximityTransmission).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ArenaObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    let end = sim.config.end_tick();
    for (tick, control) in SCRIPT {
        if Tick(*tick) >= end {
            break;
        }
        let remaining = Tick(*tick).since(sim.current_tick());
        sim.run_ticks(remaining, &mut obs);
        apply(&mut sim, control)?;
    }
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let out = BufWriter::new(File::create(Path::new(OUTPUT_DIR).join("final_population.json"))?);
    serde_json::to_writer_pretty(out, sim.population())?;

    // ── Summary ───────────────────────────────────────────────────────────
    let (peak_tick, peak_infected) = obs.peak;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  simulated time  : {:.1} s", sim.clock.elapsed_secs());
    println!("  final counts    : {}", obs.final_counts);
    println!(
        "  peak infected   : {} at {} ({:.1} s)",
        peak_infected,
        peak_tick,
        sim.clock.ticks_to_secs(peak_tick.0),
    );
    println!("  infection events: {}", obs.total_events);
    println!("  max live flashes: {}", obs.max_flashes);
    println!("  final params    : {:?}", sim.params());
    println!("Output written to {OUTPUT_DIR}/");

    Ok(())
}
