//! Game loop thread: the tick source.
//!
//! Owns the simulation engine, ticks it at the base cadence divided by the
//! engine's time scale, and hands every finished snapshot to the render
//! thread. Commands arrive via `mpsc` channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use chargesim_core::commands::OperatorCommand;
use chargesim_core::constants::BASE_TICK_MS;
use chargesim_core::state::TickSnapshot;
use chargesim_sim::SimulationEngine;

use crate::error::{AppError, AppResult};
use crate::state::{CommandSender, GameLoopCommand, SharedSnapshot};

#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Duration of one tick at 1x speed. Zero runs flat out.
    pub base_tick: Duration,
    /// Stop after this many ticks.
    pub tick_limit: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            base_tick: Duration::from_millis(BASE_TICK_MS),
            tick_limit: None,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the console to use, and a handle that
/// yields the number of ticks run.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    config: LoopConfig,
    snapshots: mpsc::Sender<TickSnapshot>,
    latest_snapshot: SharedSnapshot,
) -> AppResult<(CommandSender, JoinHandle<u64>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("chargesim-game-loop".into())
        .spawn(move || run_game_loop(engine, config, &cmd_rx, &snapshots, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// Join the game loop, surfacing a panic as an error.
pub fn join(handle: JoinHandle<u64>) -> AppResult<u64> {
    handle.join().map_err(|_| AppError::ThreadPanicked("game loop"))
}

/// The game loop. Runs until quit, shutdown, the tick limit, or the render
/// side hanging up.
fn run_game_loop(
    mut engine: SimulationEngine,
    config: LoopConfig,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    snapshots: &mpsc::Sender<TickSnapshot>,
    latest_snapshot: &SharedSnapshot,
) -> u64 {
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Operator(OperatorCommand::Quit)) | Ok(GameLoopCommand::Shutdown) => {
                    tracing::info!(ticks, "game loop stopping on request");
                    return ticks;
                }
                Ok(GameLoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Err(mpsc::TryRecvError::Empty) | Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }

        if config.tick_limit.is_some_and(|limit| ticks >= limit) {
            tracing::info!(ticks, "tick limit reached");
            return ticks;
        }

        // 2. Advance one tick (engine handles pause internally)
        let snapshot = engine.tick();
        ticks += 1;

        // 3. Store latest snapshot, then publish
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        if snapshots.send(snapshot).is_err() {
            tracing::warn!(ticks, "render sink gone, stopping");
            return ticks;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let tick_duration = config.base_tick.div_f64(engine.time_scale());
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset rather than burst to catch up
            next_tick_time = now;
        }
    }
}
