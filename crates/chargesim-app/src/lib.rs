//! Charging-track simulator application.
//!
//! Wires the simulation engine to a tick-source thread, an operator console
//! on stdin and a JSON-lines render sink on stdout.

pub mod console;
pub mod error;
pub mod game_loop;
pub mod render;
pub mod state;

pub use chargesim_core as core;
pub use error::{AppError, AppResult};
