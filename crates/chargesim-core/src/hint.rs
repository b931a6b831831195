//! Navigation hints handed to vehicles each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Steering};
use crate::types::EntityId;

/// One vehicle's view of one charger, recomputed from scratch every tick.
///
/// A vehicle's hints are ordered nearest charger first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    /// Charger this hint points at.
    pub charger: EntityId,
    /// Full circumference of the track.
    pub track_length: f64,
    /// Arc length to the charger along the shorter way round.
    pub dist: f64,
    /// Which way to travel to reach the charger along the shorter arc.
    pub vector: Direction,
    /// Whether the vehicle's current velocity already heads that way.
    pub steering: Steering,
    /// The vehicle's range at the time the hint was computed.
    pub range: f64,
    /// Reachable on this pass.
    pub in_range: bool,
    /// Reachable after one extra full lap.
    pub next_range: bool,
}

impl Hint {
    /// Whether a vehicle moving with `velocity` must turn around to follow
    /// this hint.
    pub fn needs_reverse(&self, velocity: f64) -> bool {
        Direction::of(velocity) != self.vector
    }
}
