//! Operator commands sent from the console to the simulation.
//!
//! Commands are queued for processing at the next tick boundary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Print the command reference (handled by the console).
    Help,
    /// Stop the run (handled by the game loop).
    Quit,
    /// Double the tick cadence.
    Faster,
    /// Halve the tick cadence.
    Slower,
    /// Freeze simulated time.
    Pause,
    /// Resume simulated time.
    Resume,
}

impl OperatorCommand {
    /// One-line reference shown by the help command.
    pub const HELP: &'static str = "h: help, q: quit, f: faster, s: slower, p: pause, r: resume";
}

impl FromStr for OperatorCommand {
    type Err = String;

    /// Parse a console line. Accepts the single-letter key or the full word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "help" => Ok(OperatorCommand::Help),
            "q" | "quit" => Ok(OperatorCommand::Quit),
            "f" | "faster" => Ok(OperatorCommand::Faster),
            "s" | "slower" => Ok(OperatorCommand::Slower),
            "p" | "pause" => Ok(OperatorCommand::Pause),
            "r" | "resume" => Ok(OperatorCommand::Resume),
            other => Err(format!("unknown command: {other:?}")),
        }
    }
}
