//! Kinematic integration around the circular track.
//!
//! Advances each vehicle's angle by `velocity / radius` per tick and
//! recomputes every entity's plane coordinates from its angle.

use chargesim_core::types::Point;

use crate::entity::Entity;
use crate::geometry::{angular_step, coordinates, normalize_angle};

/// Advance vehicle angles one tick. Chargers are static.
pub fn run(entities: &[Entity], angles: &mut [f64], radius: f64) {
    for (entity, angle) in entities.iter().zip(angles.iter_mut()) {
        if let Entity::Vehicle(vehicle) = entity {
            *angle = normalize_angle(*angle + angular_step(vehicle.velocity(), radius));
        }
    }
}

/// Recompute plane coordinates for every entity from its angle.
pub fn update_points(entities: &mut [Entity], angles: &[f64], origin: Point, radius: f64) {
    for (entity, &angle) in entities.iter_mut().zip(angles) {
        entity.set_points(coordinates(origin, radius, angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charger::Charger;
    use crate::vehicle::Vehicle;
    use chargesim_core::constants::TWO_PI;
    use chargesim_core::enums::ChargerStatus;

    #[test]
    fn vehicles_move_chargers_stay() {
        let entities = vec![
            Entity::from(Vehicle::new("a", "m", 50.0, 2.0)),
            Entity::from(Charger::new("c", "t1", ChargerStatus::Online)),
            Entity::from(Vehicle::new("b", "m", 50.0, -2.0)),
        ];
        let mut angles = vec![TWO_PI - 0.05, 1.0, 0.05];
        run(&entities, &mut angles, 20.0);

        assert!((angles[0] - 0.05).abs() < 1e-9, "wrapped forward: {}", angles[0]);
        assert_eq!(angles[1], 1.0);
        assert!((angles[2] - (TWO_PI - 0.05)).abs() < 1e-9, "wrapped back: {}", angles[2]);
    }

    #[test]
    fn update_points_sets_entity_coordinates() {
        let mut entities = vec![Entity::from(Charger::new("c", "t1", ChargerStatus::Online))];
        update_points(&mut entities, &[std::f64::consts::FRAC_PI_2], Point::new(5.0, 5.0), 10.0);
        let p = entities[0].points();
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 15.0).abs() < 1e-9);
    }
}
