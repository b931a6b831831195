//! Core types and definitions for the charging-track simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! points, hints, commands, tick snapshots, events, and constants.
//! It has no dependency on any runtime or I/O layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod hint;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
