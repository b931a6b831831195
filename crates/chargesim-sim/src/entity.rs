//! The fixed set of things that live on a track.

use chargesim_core::enums::EntityKind;
use chargesim_core::state::{ChargerView, EntityView, VehicleView};
use chargesim_core::types::{EntityId, Point};

use crate::charger::Charger;
use crate::vehicle::Vehicle;

#[derive(Debug, Clone)]
pub enum Entity {
    Vehicle(Vehicle),
    Charger(Charger),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Vehicle(v) => v.id(),
            Entity::Charger(c) => c.id(),
        }
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        match self {
            Entity::Vehicle(v) => v.set_id(id),
            Entity::Charger(c) => c.set_id(id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Vehicle(v) => v.name(),
            Entity::Charger(c) => c.name(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Vehicle(_) => EntityKind::Vehicle,
            Entity::Charger(_) => EntityKind::Charger,
        }
    }

    pub fn points(&self) -> Point {
        match self {
            Entity::Vehicle(v) => v.points(),
            Entity::Charger(c) => c.points(),
        }
    }

    pub fn set_points(&mut self, p: Point) {
        match self {
            Entity::Vehicle(v) => v.set_points(p),
            Entity::Charger(c) => c.set_points(p),
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            Entity::Vehicle(v) => Some(v),
            Entity::Charger(_) => None,
        }
    }

    pub fn as_vehicle_mut(&mut self) -> Option<&mut Vehicle> {
        match self {
            Entity::Vehicle(v) => Some(v),
            Entity::Charger(_) => None,
        }
    }

    pub fn as_charger(&self) -> Option<&Charger> {
        match self {
            Entity::Charger(c) => Some(c),
            Entity::Vehicle(_) => None,
        }
    }

    /// Self-describing render record.
    pub fn view(&self) -> EntityView {
        match self {
            Entity::Vehicle(v) => EntityView::Vehicle(VehicleView {
                id: v.id(),
                name: v.name().to_string(),
                model: v.model().to_string(),
                color: v.color().to_string(),
                points: v.points(),
                charge: v.charge(),
                status: v.status(),
                velocity: v.velocity(),
                range: v.calc_range(),
                hints: v.hints().to_vec(),
            }),
            Entity::Charger(c) => EntityView::Charger(ChargerView {
                id: c.id(),
                name: c.name().to_string(),
                model: c.model().to_string(),
                color: c.color().to_string(),
                points: c.points(),
                status: c.status(),
                queue_length: c.queue_len(),
            }),
        }
    }
}

impl From<Vehicle> for Entity {
    fn from(v: Vehicle) -> Self {
        Entity::Vehicle(v)
    }
}

impl From<Charger> for Entity {
    fn from(c: Charger) -> Self {
        Entity::Charger(c)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Vehicle(v) => std::fmt::Display::fmt(v, f),
            Entity::Charger(c) => std::fmt::Display::fmt(c, f),
        }
    }
}
