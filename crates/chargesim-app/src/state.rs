//! State shared between the main thread, the console and the game loop.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use chargesim_core::commands::OperatorCommand;
use chargesim_core::state::TickSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An operator command to forward to the simulation engine.
    Operator(OperatorCommand),
    /// Stop the game loop.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<TickSnapshot>>>;

pub type CommandSender = mpsc::Sender<GameLoopCommand>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
