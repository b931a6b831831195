//! Scenario definitions: declarative descriptions of a run.
//!
//! A scenario names the track, the vehicles and the chargers. Angles and
//! vehicle speeds left unset are drawn from the seeded RNG at setup time.
//! Two scenarios are built in; custom ones load from JSON.

use std::collections::HashSet;
use std::f64::consts::PI;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use chargesim_core::constants::{CHARGE_MAX, INITIAL_SPEED_MAX, INITIAL_SPEED_MIN, TWO_PI};
use chargesim_core::enums::{ChargerStatus, Direction};
use chargesim_core::types::Point;

use crate::error::{ScenarioError, ScenarioResult};
use crate::geometry::angular_step;

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    /// Four vehicles, three chargers, everything placed at random.
    #[default]
    Reference,
    /// One clockwise vehicle and three chargers at fixed angles.
    Pinned,
}

impl FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(ScenarioId::Reference),
            "pinned" => Ok(ScenarioId::Pinned),
            other => Err(format!("unknown scenario: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub track: TrackSpec,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
    #[serde(default)]
    pub chargers: Vec<ChargerSpec>,
    /// Initial speed magnitude is drawn from `[min, max)`.
    #[serde(default)]
    pub speed: SpeedRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub name: String,
    #[serde(default)]
    pub origin: Point,
    /// Must be large enough that no initial speed moves a vehicle a whole
    /// lap (`2π` radians) in one tick.
    pub radius: f64,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            name: "T".to_string(),
            origin: Point::default(),
            radius: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub name: String,
    pub model: String,
    pub charge: f64,
    /// Fixed starting angle in radians. Random when unset.
    #[serde(default)]
    pub angle: Option<f64>,
    /// Fixed direction of travel. Anticlockwise when unset.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Fixed speed magnitude. Drawn from the speed range when unset.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Start parked instead of driving.
    #[serde(default)]
    pub parked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargerSpec {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub status: ChargerStatus,
    /// Fixed angle in radians. Random when unset.
    #[serde(default)]
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            min: INITIAL_SPEED_MIN,
            max: INITIAL_SPEED_MAX,
        }
    }
}

impl VehicleSpec {
    pub fn new(name: &str, model: &str, charge: f64) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            charge,
            angle: None,
            direction: None,
            speed: None,
            parked: false,
        }
    }
}

impl ChargerSpec {
    pub fn new(name: &str, model: &str) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            status: ChargerStatus::Online,
            angle: None,
        }
    }

    fn at(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::build(ScenarioId::Reference)
    }
}

impl Scenario {
    /// Build one of the built-in scenarios.
    pub fn build(id: ScenarioId) -> Self {
        match id {
            ScenarioId::Reference => build_reference(),
            ScenarioId::Pinned => build_pinned(),
        }
    }

    /// Parse and validate a JSON scenario.
    pub fn from_json_str(json: &str) -> ScenarioResult<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a JSON scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> ScenarioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check everything a track needs before it is built: a positive radius,
    /// charges within `[0, 100]`, non-empty unique names, finite angles and a
    /// usable speed range that stays under one lap per tick.
    pub fn validate(&self) -> ScenarioResult<()> {
        let radius = self.track.radius;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ScenarioError::InvalidRadius(radius));
        }

        let SpeedRange { min, max } = self.speed;
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min < max) {
            return Err(ScenarioError::InvalidSpeedRange { min, max });
        }
        // Drawn speeds stay below `max`.
        if angular_step(max, radius) > TWO_PI {
            return Err(ScenarioError::LapPerTick { speed: max, radius });
        }

        let mut names = HashSet::new();
        for v in &self.vehicles {
            check_name("vehicle", &v.name, &mut names)?;
            if !(0.0..=CHARGE_MAX).contains(&v.charge) {
                return Err(ScenarioError::ChargeOutOfRange {
                    name: v.name.clone(),
                    charge: v.charge,
                });
            }
            check_angle(&v.name, v.angle)?;
            if let Some(speed) = v.speed {
                if !(speed.is_finite() && speed >= 0.0) {
                    return Err(ScenarioError::InvalidSpeedRange {
                        min: speed,
                        max: speed,
                    });
                }
                if angular_step(speed, radius) >= TWO_PI {
                    return Err(ScenarioError::LapPerTick { speed, radius });
                }
            }
        }
        for c in &self.chargers {
            check_name("charger", &c.name, &mut names)?;
            check_angle(&c.name, c.angle)?;
        }
        Ok(())
    }
}

fn check_name<'a>(kind: &'static str, name: &'a str, seen: &mut HashSet<&'a str>) -> ScenarioResult<()> {
    if name.trim().is_empty() {
        return Err(ScenarioError::EmptyName { kind });
    }
    if !seen.insert(name) {
        return Err(ScenarioError::DuplicateName(name.to_string()));
    }
    Ok(())
}

fn check_angle(name: &str, angle: Option<f64>) -> ScenarioResult<()> {
    match angle {
        Some(a) if !a.is_finite() => Err(ScenarioError::InvalidAngle {
            name: name.to_string(),
            angle: a,
        }),
        _ => Ok(()),
    }
}

/// Reference fleet: four vehicles with mixed charge, three online chargers.
fn build_reference() -> Scenario {
    Scenario {
        track: TrackSpec::default(),
        vehicles: vec![
            VehicleSpec::new("AAA", "Model X", 15.0),
            VehicleSpec::new("BBB", "Model X", 35.0),
            VehicleSpec::new("CCC", "Model S", 25.0),
            VehicleSpec::new("ZZZ", "Leaf", 70.0),
        ],
        chargers: vec![
            ChargerSpec::new("A", "t1"),
            ChargerSpec::new("B", "t1"),
            ChargerSpec::new("C", "t2"),
        ],
        speed: SpeedRange::default(),
    }
}

/// A single clockwise vehicle starting on the zero line at unit speed,
/// chargers at π/3, 3π/2 and π.
fn build_pinned() -> Scenario {
    let mut vehicle = VehicleSpec::new("AAA", "Model X", 30.0);
    vehicle.angle = Some(0.0);
    vehicle.direction = Some(Direction::Clockwise);
    vehicle.speed = Some(1.0);

    Scenario {
        track: TrackSpec::default(),
        vehicles: vec![vehicle],
        chargers: vec![
            ChargerSpec::new("A", "t1").at(PI / 3.0),
            ChargerSpec::new("B", "t1").at(3.0 * PI / 2.0),
            ChargerSpec::new("C", "t2").at(PI),
        ],
        speed: SpeedRange::default(),
    }
}
