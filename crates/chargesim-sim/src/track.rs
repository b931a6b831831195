//! The circular track: owns every entity and their angular positions, and
//! drives one simulation step.
//!
//! Entities and angles are parallel vectors indexed by insertion order.
//! A tick runs strictly in this order:
//!
//! 1. every entity's own tick, in insertion order (vehicles route and drive,
//!    chargers service their queue head),
//! 2. vehicle angles advance by `velocity / radius`,
//! 3. plane coordinates are recomputed from the angles,
//! 4. hints are recomputed for every vehicle.
//!
//! Hints are also refreshed mid-step whenever a charger releases a vehicle.

use chargesim_core::enums::{EntityKind, VehicleStatus};
use chargesim_core::events::SimEvent;
use chargesim_core::state::{EntityView, TrackView};
use chargesim_core::types::{EntityId, Point};

use crate::charger::{Admission, Charger, Service};
use crate::entity::Entity;
use crate::error::{ScenarioError, ScenarioResult};
use crate::geometry::{coordinates, normalize_angle};
use crate::systems;
use crate::vehicle::{Route, Vehicle};

/// The track's own id. Entities are numbered from 1.
pub const TRACK_ID: EntityId = 0;

#[derive(Debug, Clone)]
pub struct Track {
    name: String,
    color: String,
    origin: Point,
    radius: f64,
    entities: Vec<Entity>,
    angles: Vec<f64>,
    next_id: EntityId,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        origin: Point,
        radius: f64,
        color: impl Into<String>,
    ) -> ScenarioResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ScenarioError::InvalidRadius(radius));
        }
        Ok(Self {
            name: name.into(),
            color: color.into(),
            origin,
            radius,
            entities: Vec::new(),
            angles: Vec::new(),
            next_id: TRACK_ID + 1,
        })
    }

    /// Place an entity at `angle` (normalized into `[0, 2π)`) and return the
    /// id assigned to it. Hints are not refreshed; call
    /// [`Track::recompute_hints`] once setup is done.
    pub fn add(&mut self, entity: impl Into<Entity>, angle: f64) -> EntityId {
        let mut entity = entity.into();
        let id = self.next_id;
        self.next_id += 1;

        let angle = normalize_angle(angle);
        entity.set_id(id);
        entity.set_points(coordinates(self.origin, self.radius, angle));
        self.entities.push(entity);
        self.angles.push(angle);
        id
    }

    /// Advance the whole track one step, appending what happened to `events`.
    pub fn tick(&mut self, events: &mut Vec<SimEvent>) {
        for index in 0..self.entities.len() {
            match self.entities[index].kind() {
                EntityKind::Vehicle => self.tick_vehicle(index, events),
                EntityKind::Charger => self.tick_charger(index, events),
                EntityKind::Track => {}
            }
        }
        systems::movement::run(&self.entities, &mut self.angles, self.radius);
        systems::movement::update_points(&mut self.entities, &self.angles, self.origin, self.radius);
        self.recompute_hints();
    }

    /// Refresh every vehicle's hint list from the current angles.
    pub fn recompute_hints(&mut self) {
        systems::hints::run(&mut self.entities, &self.angles, self.radius);
    }

    fn tick_vehicle(&mut self, index: usize, events: &mut Vec<SimEvent>) {
        let Entity::Vehicle(vehicle) = &mut self.entities[index] else {
            return;
        };
        let vehicle_id = vehicle.id();
        match vehicle.route_to_charger() {
            Route::Stay => {}
            Route::Heading { charger, reversed } => {
                if reversed {
                    events.push(SimEvent::DirectionReversed {
                        vehicle: vehicle_id,
                        charger,
                        now: vehicle.direction(),
                    });
                }
            }
            Route::Arrived { charger, reversed } => {
                if reversed {
                    events.push(SimEvent::DirectionReversed {
                        vehicle: vehicle_id,
                        charger,
                        now: vehicle.direction(),
                    });
                }
                self.enqueue(index, charger, events);
            }
        }

        let Entity::Vehicle(vehicle) = &mut self.entities[index] else {
            return;
        };
        let was_flat = vehicle.status() == VehicleStatus::Flat;
        vehicle.tick();
        if !was_flat && vehicle.status() == VehicleStatus::Flat {
            tracing::warn!(vehicle = %vehicle.name(), "vehicle ran flat");
            events.push(SimEvent::VehicleFlat { vehicle: vehicle_id });
        }
    }

    /// Ask charger `charger_id` to admit the vehicle at `vehicle_index`.
    fn enqueue(&mut self, vehicle_index: usize, charger_id: EntityId, events: &mut Vec<SimEvent>) {
        let Some(charger_index) = self.index_of(charger_id) else {
            tracing::warn!(charger = charger_id, "hint points at unknown charger");
            return;
        };
        let (Entity::Vehicle(vehicle), Entity::Charger(charger)) =
            pair_mut(&mut self.entities, vehicle_index, charger_index)
        else {
            return;
        };
        match charger.add(vehicle) {
            Admission::Admitted { queue_len } => events.push(SimEvent::VehicleQueued {
                vehicle: vehicle.id(),
                charger: charger_id,
                queue_len,
            }),
            Admission::Rejected => events.push(SimEvent::QueueRejected {
                vehicle: vehicle.id(),
                charger: charger_id,
            }),
            Admission::AlreadyQueued => {}
        }
    }

    fn tick_charger(&mut self, index: usize, events: &mut Vec<SimEvent>) {
        let Entity::Charger(charger) = &mut self.entities[index] else {
            return;
        };
        let Some(head) = charger.head() else {
            tracing::trace!(charger = %charger.name(), "nothing queued");
            return;
        };
        let Some(head_index) = self.index_of(head) else {
            if let Entity::Charger(charger) = &mut self.entities[index] {
                tracing::warn!(charger = %charger.name(), vehicle = head, "dropping unknown queue head");
                charger.discard_head();
            }
            return;
        };
        let (Entity::Charger(charger), Entity::Vehicle(vehicle)) =
            pair_mut(&mut self.entities, index, head_index)
        else {
            return;
        };
        let charger_id = charger.id();
        match charger.process_queue(vehicle) {
            Service::Idle | Service::Charging { started: false, .. } => {}
            Service::Charging {
                vehicle,
                started: true,
            } => events.push(SimEvent::ChargingStarted {
                vehicle,
                charger: charger_id,
            }),
            Service::Released { vehicle } => {
                events.push(SimEvent::VehicleReleased {
                    vehicle,
                    charger: charger_id,
                });
                // Its hints still carry the zero range it had while stalled.
                self.recompute_hints();
            }
        }
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    pub fn id(&self) -> EntityId {
        TRACK_ID
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Angular positions, parallel to [`Track::entities`].
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn angle_of(&self, id: EntityId) -> Option<f64> {
        self.index_of(id).map(|i| self.angles[i])
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.entities
            .iter()
            .filter_map(Entity::as_vehicle)
            .find(|v| v.name() == name)
    }

    pub fn vehicle_mut(&mut self, name: &str) -> Option<&mut Vehicle> {
        self.entities
            .iter_mut()
            .filter_map(Entity::as_vehicle_mut)
            .find(|v| v.name() == name)
    }

    pub fn charger(&self, name: &str) -> Option<&Charger> {
        self.entities
            .iter()
            .filter_map(Entity::as_charger)
            .find(|c| c.name() == name)
    }

    pub fn view(&self) -> TrackView {
        TrackView {
            id: TRACK_ID,
            name: self.name.clone(),
            color: self.color.clone(),
            origin: self.origin,
            radius: self.radius,
        }
    }

    /// Render records for the track itself followed by every entity.
    pub fn render(&self) -> Vec<EntityView> {
        let mut out = Vec::with_capacity(self.entities.len() + 1);
        out.push(EntityView::Track(self.view()));
        out.extend(self.entities.iter().map(Entity::view));
        out
    }
}

/// Two distinct elements of `entities` borrowed mutably at once.
fn pair_mut(entities: &mut [Entity], a: usize, b: usize) -> (&mut Entity, &mut Entity) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = entities.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = entities.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

impl std::fmt::Display for Track {
    /// Tree listing: the track path, then one line per entity under it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "/{}", self.name)?;
        for entity in &self.entities {
            writeln!(f, "/{} {}", self.name, entity)?;
        }
        Ok(())
    }
}
