//! Charger with a bounded FIFO queue.
//!
//! The charger owns its queue of vehicle ids. Vehicles ask to join through
//! [`Charger::add`]; a full queue turns them away without telling them.
//! Each tick the charger services only the vehicle at the head.

use std::collections::VecDeque;

use chargesim_core::constants::{CHARGER_COLOR, CHARGER_QUEUE_CAPACITY};
use chargesim_core::enums::{ChargerStatus, VehicleStatus};
use chargesim_core::types::{EntityId, Point};

use crate::vehicle::Vehicle;

#[derive(Debug, Clone)]
pub struct Charger {
    id: EntityId,
    name: String,
    model: String,
    color: String,
    status: ChargerStatus,
    points: Point,
    queue: VecDeque<EntityId>,
    capacity: usize,
}

/// Result of an enqueue request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted { queue_len: usize },
    /// Queue full. The vehicle is left untouched.
    Rejected,
    /// The vehicle is already in this queue.
    AlreadyQueued,
}

/// What servicing the head of the queue did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Nothing queued.
    Idle,
    /// The head took on charge and stays at the head.
    Charging { vehicle: EntityId, started: bool },
    /// The head is full, has been sent driving, and left the queue.
    Released { vehicle: EntityId },
}

impl Charger {
    pub fn new(name: impl Into<String>, model: impl Into<String>, status: ChargerStatus) -> Self {
        Self {
            id: 0,
            name: name.into(),
            model: model.into(),
            color: CHARGER_COLOR.to_string(),
            status,
            points: Point::default(),
            queue: VecDeque::with_capacity(CHARGER_QUEUE_CAPACITY),
            capacity: CHARGER_QUEUE_CAPACITY,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn status(&self) -> ChargerStatus {
        self.status
    }

    pub fn points(&self) -> Point {
        self.points
    }

    pub fn set_points(&mut self, p: Point) {
        self.points = p;
    }

    pub fn queue(&self) -> &VecDeque<EntityId> {
        &self.queue
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    pub fn head(&self) -> Option<EntityId> {
        self.queue.front().copied()
    }

    /// Admit a vehicle at the back of the queue and stop it there.
    /// A full queue is a silent no-op.
    pub fn add(&mut self, vehicle: &mut Vehicle) -> Admission {
        if self.queue.contains(&vehicle.id()) {
            return Admission::AlreadyQueued;
        }
        if self.is_full() {
            tracing::debug!(
                charger = %self.name,
                vehicle = %vehicle.name(),
                "queue full, vehicle turned away"
            );
            return Admission::Rejected;
        }
        self.queue.push_back(vehicle.id());
        vehicle.queue();
        tracing::info!(
            charger = %self.name,
            vehicle = %vehicle.name(),
            queue_len = self.queue.len(),
            "vehicle queued"
        );
        Admission::Admitted {
            queue_len: self.queue.len(),
        }
    }

    /// Service the head of the queue. `head` must be the vehicle whose id
    /// [`Charger::head`] returned.
    ///
    /// Below full charge the head charges in place; once it reaches full
    /// charge it is sent driving and popped. No reordering, no preemption.
    pub fn process_queue(&mut self, head: &mut Vehicle) -> Service {
        if self.head() != Some(head.id()) {
            return Service::Idle;
        }
        if !head.is_full() {
            let started = head.status() == VehicleStatus::Queued;
            head.charging();
            if !head.is_full() {
                return Service::Charging {
                    vehicle: head.id(),
                    started,
                };
            }
        }
        head.drive();
        self.queue.pop_front();
        tracing::info!(charger = %self.name, vehicle = %head.name(), "vehicle charged and released");
        Service::Released { vehicle: head.id() }
    }

    /// Drop a queued id whose vehicle no longer exists.
    pub(crate) fn discard_head(&mut self) -> Option<EntityId> {
        self.queue.pop_front()
    }
}

impl std::fmt::Display for Charger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Charger: {} {} status={} queue={}/{}>",
            self.name,
            self.model,
            self.status,
            self.queue.len(),
            self.capacity
        )
    }
}
