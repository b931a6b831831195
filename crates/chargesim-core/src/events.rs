//! Events emitted by the simulation for viewers and logs.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::types::EntityId;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A diverting vehicle turned around to reach its charger.
    DirectionReversed {
        vehicle: EntityId,
        charger: EntityId,
        now: Direction,
    },
    /// A charger admitted a vehicle into its queue.
    VehicleQueued {
        vehicle: EntityId,
        charger: EntityId,
        queue_len: usize,
    },
    /// A full charger turned a vehicle away.
    QueueRejected { vehicle: EntityId, charger: EntityId },
    /// The vehicle at the head of a queue began accruing charge.
    ChargingStarted { vehicle: EntityId, charger: EntityId },
    /// A fully charged vehicle left the charger.
    VehicleReleased { vehicle: EntityId, charger: EntityId },
    /// A vehicle ran out of charge.
    VehicleFlat { vehicle: EntityId },
}
