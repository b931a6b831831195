//! Errors raised while building a track from a scenario.
//!
//! Ticking never fails; everything here happens before the first tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("track radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    #[error("vehicle {name:?}: initial charge {charge} outside [0, 100]")]
    ChargeOutOfRange { name: String, charge: f64 },

    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("duplicate entity name {0:?}")]
    DuplicateName(String),

    #[error("invalid initial speed range [{min}, {max})")]
    InvalidSpeedRange { min: f64, max: f64 },

    #[error("speed {speed} covers a whole lap of radius {radius} in one tick")]
    LapPerTick { speed: f64, radius: f64 },

    #[error("{name:?}: angle {angle} is not finite")]
    InvalidAngle { name: String, angle: f64 },

    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
