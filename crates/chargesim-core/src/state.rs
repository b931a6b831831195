//! Tick snapshot — the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::hint::Hint;
use crate::types::{EntityId, Point, SimTime};

/// Complete simulation state handed to the render sink after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub time_scale: f64,
    /// The track first, then every entity in track order.
    pub entities: Vec<EntityView>,
    pub events: Vec<SimEvent>,
}

/// One self-describing render record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityView {
    Track(TrackView),
    Vehicle(VehicleView),
    Charger(ChargerView),
}

/// The circular track itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackView {
    pub id: EntityId,
    pub name: String,
    pub color: String,
    pub origin: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: EntityId,
    pub name: String,
    pub model: String,
    pub color: String,
    pub points: Point,
    pub charge: f64,
    pub status: VehicleStatus,
    pub velocity: f64,
    pub range: f64,
    pub hints: Vec<Hint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargerView {
    pub id: EntityId,
    pub name: String,
    pub model: String,
    pub color: String,
    pub points: Point,
    pub status: ChargerStatus,
    pub queue_length: usize,
}

impl EntityView {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityView::Track(_) => EntityKind::Track,
            EntityView::Vehicle(_) => EntityKind::Vehicle,
            EntityView::Charger(_) => EntityKind::Charger,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            EntityView::Track(t) => t.id,
            EntityView::Vehicle(v) => v.id,
            EntityView::Charger(c) => c.id,
        }
    }
}

impl TickSnapshot {
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleView> {
        self.entities.iter().filter_map(|e| match e {
            EntityView::Vehicle(v) => Some(v),
            _ => None,
        })
    }

    pub fn chargers(&self) -> impl Iterator<Item = &ChargerView> {
        self.entities.iter().filter_map(|e| match e {
            EntityView::Charger(c) => Some(c),
            _ => None,
        })
    }

    pub fn vehicle(&self, name: &str) -> Option<&VehicleView> {
        self.vehicles().find(|v| v.name == name)
    }

    pub fn charger(&self, name: &str) -> Option<&ChargerView> {
        self.chargers().find(|c| c.name == name)
    }
}
