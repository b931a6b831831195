//! Simulation engine for the charging track.
//!
//! Owns the circular track and its vehicles and chargers, runs one ordered
//! step per tick, and produces TickSnapshots for the render sink.

pub mod charger;
pub mod engine;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod scenario;
pub mod systems;
pub mod track;
pub mod vehicle;
pub mod world_setup;

pub use chargesim_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, ScenarioId};
