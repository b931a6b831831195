//! Entity factories: turn a validated scenario into a populated track.
//!
//! Every random draw goes through the caller's seeded RNG, in a fixed
//! order (track color, then per vehicle color/angle/speed, then per charger
//! angle), so the same seed always builds the same track.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chargesim_core::constants::TWO_PI;
use chargesim_core::enums::Direction;

use crate::charger::Charger;
use crate::error::ScenarioResult;
use crate::scenario::{ChargerSpec, Scenario, SpeedRange, VehicleSpec};
use crate::track::Track;
use crate::vehicle::Vehicle;

/// Validate `scenario` and build its track. Vehicles are added first, then
/// chargers, each in scenario order. Hints are ready before the first tick.
pub fn build_track(scenario: &Scenario, rng: &mut ChaCha8Rng) -> ScenarioResult<Track> {
    scenario.validate()?;

    let spec = &scenario.track;
    let mut track = Track::new(spec.name.clone(), spec.origin, spec.radius, random_color(rng))?;

    for vehicle in &scenario.vehicles {
        spawn_vehicle(&mut track, rng, vehicle, scenario.speed);
    }
    for charger in &scenario.chargers {
        spawn_charger(&mut track, rng, charger);
    }
    track.recompute_hints();

    tracing::info!(
        track = %track.name(),
        vehicles = scenario.vehicles.len(),
        chargers = scenario.chargers.len(),
        "track ready"
    );
    Ok(track)
}

/// Add one vehicle, drawing whatever the entry leaves open.
pub fn spawn_vehicle(track: &mut Track, rng: &mut ChaCha8Rng, spec: &VehicleSpec, speed: SpeedRange) {
    let color = random_color(rng);
    let angle = spec.angle.unwrap_or_else(|| random_angle(rng));
    let magnitude = spec.speed.unwrap_or_else(|| rng.gen_range(speed.min..speed.max));
    let direction = spec.direction.unwrap_or(Direction::Anticlockwise);

    let mut vehicle =
        Vehicle::new(spec.name.clone(), spec.model.clone(), spec.charge, magnitude * direction.sign())
            .with_color(color);
    if spec.parked {
        vehicle.park();
    }
    let id = track.add(vehicle, angle);
    tracing::debug!(id, name = %spec.name, angle, "vehicle placed");
}

/// Add one charger, drawing its angle when the entry leaves it open.
pub fn spawn_charger(track: &mut Track, rng: &mut ChaCha8Rng, spec: &ChargerSpec) {
    let angle = spec.angle.unwrap_or_else(|| random_angle(rng));
    let id = track.add(Charger::new(spec.name.clone(), spec.model.clone(), spec.status), angle);
    tracing::debug!(id, name = %spec.name, angle, "charger placed");
}

fn random_angle(rng: &mut ChaCha8Rng) -> f64 {
    rng.gen::<f64>() * TWO_PI
}

/// A `#rrggbb` display color.
fn random_color(rng: &mut ChaCha8Rng) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xff_ffffu32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioId;
    use chargesim_core::constants::{CHARGER_COLOR, INITIAL_SPEED_MAX, INITIAL_SPEED_MIN};
    use chargesim_core::enums::VehicleStatus;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn reference_track_layout() {
        let track = build_track(&Scenario::default(), &mut rng(42)).unwrap();
        assert_eq!(track.len(), 7);
        let names: Vec<&str> = track.entities().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["AAA", "BBB", "CCC", "ZZZ", "A", "B", "C"]);

        for e in track.entities() {
            if let Some(v) = e.as_vehicle() {
                let speed = v.velocity().abs();
                assert!((INITIAL_SPEED_MIN..INITIAL_SPEED_MAX).contains(&speed), "{speed}");
                assert_eq!(v.color().len(), 7);
                assert!(v.color().starts_with('#'));
                // Hints are ready before the first tick.
                assert_eq!(v.hints().len(), 3);
            }
            if let Some(c) = e.as_charger() {
                assert_eq!(c.color(), CHARGER_COLOR);
            }
        }
        assert!(track.angles().iter().all(|a| (0.0..TWO_PI).contains(a)));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = build_track(&Scenario::default(), &mut rng(7)).unwrap();
        let b = build_track(&Scenario::default(), &mut rng(7)).unwrap();
        let c = build_track(&Scenario::default(), &mut rng(8)).unwrap();
        assert_eq!(a.angles(), b.angles());
        assert_eq!(a.color(), b.color());
        assert_ne!(a.angles(), c.angles());
    }

    #[test]
    fn pinned_values_are_kept() {
        let track = build_track(&Scenario::build(ScenarioId::Pinned), &mut rng(1)).unwrap();
        let aaa = track.vehicle("AAA").unwrap();
        assert_eq!(aaa.velocity(), -1.0);
        assert_eq!(track.angle_of(aaa.id()), Some(0.0));
        let b = track.charger("B").unwrap();
        assert!((track.angle_of(b.id()).unwrap() - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn parked_vehicle_starts_stopped() {
        let mut scenario = Scenario::default();
        scenario.vehicles[2].parked = true;
        let track = build_track(&scenario, &mut rng(3)).unwrap();
        let ccc = track.vehicle("CCC").unwrap();
        assert_eq!(ccc.status(), VehicleStatus::Parked);
        assert_eq!(ccc.velocity(), 0.0);
    }

    #[test]
    fn invalid_scenario_is_rejected() {
        let mut scenario = Scenario::default();
        scenario.track.radius = 0.0;
        assert!(build_track(&scenario, &mut rng(3)).is_err());
    }
}
