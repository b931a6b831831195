//! CLI entry point for the charging-track simulator.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chargesim_app::console;
use chargesim_app::game_loop::{self, LoopConfig};
use chargesim_app::render::{self, JsonLinesSink};
use chargesim_app::state::shared_snapshot;
use chargesim_app::AppResult;
use chargesim_core::commands::OperatorCommand;
use chargesim_core::constants::BASE_TICK_MS;
use chargesim_core::enums::VehicleStatus;
use chargesim_sim::{Scenario, ScenarioId, SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(
    name = "chargesim",
    about = "Vehicles on a circular track competing for chargers",
    version
)]
struct Cli {
    /// Scenario JSON file (default: the built-in scenario)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Built-in scenario when no file is given: reference, pinned
    #[arg(long, default_value = "reference")]
    builtin: ScenarioId,

    /// RNG seed for initial placement
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Stop after this many ticks (0 runs until quit)
    #[arg(short, long, default_value = "360")]
    ticks: u64,

    /// Base tick cadence in milliseconds at 1x speed
    #[arg(long, default_value_t = BASE_TICK_MS)]
    tick_ms: u64,

    /// Ignore stdin; no operator console
    #[arg(long)]
    headless: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let scenario = match &cli.scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::build(cli.builtin),
    };
    let engine = SimulationEngine::new(SimConfig::default().with_seed(cli.seed), &scenario)?;
    tracing::info!(seed = cli.seed, "track built\n{}", engine.track());

    let (snapshot_tx, render_handle) = render::spawn_render_thread(JsonLinesSink::new(io::stdout()))?;
    let latest = shared_snapshot();
    let config = LoopConfig {
        base_tick: Duration::from_millis(cli.tick_ms),
        tick_limit: (cli.ticks > 0).then_some(cli.ticks),
    };
    let (command_tx, loop_handle) = game_loop::spawn_game_loop(engine, config, snapshot_tx, latest.clone())?;

    if cli.headless {
        drop(command_tx);
    } else {
        eprintln!("{}", OperatorCommand::HELP);
        // Detached: blocks on stdin and exits with the process.
        console::spawn_console(BufReader::new(io::stdin()), io::stderr(), command_tx)?;
    }

    let ticks = game_loop::join(loop_handle)?;
    render::join(render_handle)?;

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            let flat = snapshot
                .vehicles()
                .filter(|v| v.status == VehicleStatus::Flat)
                .count();
            tracing::info!(ticks, sim_tick = snapshot.time.tick, flat, "run finished");
        }
    }
    Ok(())
}
