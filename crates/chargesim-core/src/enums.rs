//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vehicle lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// Moving around the track under its own power.
    #[default]
    Drive,
    /// Stopped by an operator, not routed.
    Parked,
    /// Waiting in a charger queue.
    Queued,
    /// At the head of a charger queue, accruing charge.
    Charging,
    /// Out of charge. Absorbing: nothing in the simulation recovers it.
    Flat,
}

/// Charger availability as reported to viewers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargerStatus {
    #[default]
    Online,
    Offline,
}

/// Kind discriminator carried by every render record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Vehicle,
    Charger,
}

/// Direction of travel around the circular track.
///
/// Angles grow anticlockwise, so a positive velocity or a positive
/// angular offset is anticlockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Anticlockwise,
    Clockwise,
}

/// What a vehicle must do to head toward a charger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Steering {
    /// Already travelling toward the charger.
    Continue,
    /// Travelling away from the charger; negate velocity.
    Reverse,
}

/// Engine run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Drive => "drive",
            VehicleStatus::Parked => "parked",
            VehicleStatus::Queued => "queued",
            VehicleStatus::Charging => "charging",
            VehicleStatus::Flat => "flat",
        }
    }

    /// Whether the vehicle is held by a charger queue.
    pub fn is_at_charger(self) -> bool {
        matches!(self, VehicleStatus::Queued | VehicleStatus::Charging)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChargerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargerStatus::Online => f.write_str("online"),
            ChargerStatus::Offline => f.write_str("offline"),
        }
    }
}

impl Direction {
    /// Direction implied by the sign of a signed quantity (angle offset or
    /// velocity). Uses the sign bit, so `-0.0` is clockwise.
    pub fn of(value: f64) -> Self {
        if value.is_sign_negative() {
            Direction::Clockwise
        } else {
            Direction::Anticlockwise
        }
    }

    /// +1 anticlockwise, -1 clockwise.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Anticlockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}
