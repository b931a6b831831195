//! Hint engine: tells every vehicle where the chargers are.
//!
//! For each vehicle, every charger gets one [`Hint`] carrying the shorter-arc
//! distance, the direction to travel, and whether the vehicle's range covers
//! it this pass or after one more lap. Hints come out nearest first.
//!
//! This is a linear scan, O(vehicles x chargers) per tick.

use chargesim_core::constants::TWO_PI;
use chargesim_core::enums::{Direction, Steering};
use chargesim_core::hint::Hint;
use chargesim_core::types::EntityId;

use crate::entity::Entity;
use crate::geometry::{arc_length, shortest_offset};

/// Recompute and replace the hints of every vehicle.
pub fn run(entities: &mut [Entity], angles: &[f64], radius: f64) {
    let chargers: Vec<(EntityId, f64)> = entities
        .iter()
        .zip(angles)
        .filter_map(|(entity, &angle)| entity.as_charger().map(|c| (c.id(), angle)))
        .collect();

    for (entity, &angle) in entities.iter_mut().zip(angles) {
        if let Entity::Vehicle(vehicle) = entity {
            let hints = hints_for(angle, vehicle.velocity(), vehicle.calc_range(), &chargers, radius);
            vehicle.set_hints(hints);
        }
    }
}

/// Hints for one vehicle at `vehicle_angle` against `(id, angle)` chargers,
/// sorted by arc distance ascending. Equal distances keep charger order.
pub fn hints_for(
    vehicle_angle: f64,
    velocity: f64,
    range: f64,
    chargers: &[(EntityId, f64)],
    radius: f64,
) -> Vec<Hint> {
    let mut offsets: Vec<(EntityId, f64)> = chargers
        .iter()
        .map(|&(id, angle)| (id, shortest_offset(vehicle_angle, angle)))
        .collect();
    offsets.sort_by(|a, b| a.1.abs().total_cmp(&b.1.abs()));

    let track_length = arc_length(TWO_PI, radius);
    offsets
        .into_iter()
        .map(|(charger, theta)| {
            let dist = arc_length(theta, radius);
            let (vector, steering) = resolve_direction(theta, velocity);
            Hint {
                charger,
                track_length,
                dist,
                vector,
                steering,
                range,
                in_range: dist < range,
                next_range: track_length + dist < range,
            }
        })
        .collect()
}

/// Travel direction toward a charger at signed offset `theta`, and whether a
/// vehicle moving at `velocity` keeps going or turns back to get there.
pub fn resolve_direction(theta: f64, velocity: f64) -> (Direction, Steering) {
    match (Direction::of(theta), Direction::of(velocity)) {
        // Charger clockwise of us, already going clockwise.
        (Direction::Clockwise, Direction::Clockwise) => (Direction::Clockwise, Steering::Continue),
        // Charger clockwise of us, going anticlockwise: gone past it.
        (Direction::Clockwise, Direction::Anticlockwise) => (Direction::Clockwise, Steering::Reverse),
        // Charger anticlockwise of us, going clockwise: gone past it.
        (Direction::Anticlockwise, Direction::Clockwise) => {
            (Direction::Anticlockwise, Steering::Reverse)
        }
        (Direction::Anticlockwise, Direction::Anticlockwise) => {
            (Direction::Anticlockwise, Steering::Continue)
        }
    }
}
