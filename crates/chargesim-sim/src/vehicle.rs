//! Vehicle state machine.
//!
//! A vehicle drives around the track burning charge, reads the hints the
//! track computed for it last tick, and decides when to divert to a charger.
//! Queueing and charging are driven by the owning charger, not the vehicle.

use chargesim_core::constants::*;
use chargesim_core::enums::{Direction, VehicleStatus};
use chargesim_core::hint::Hint;
use chargesim_core::types::{EntityId, Point};

/// A vehicle on the track.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: EntityId,
    name: String,
    model: String,
    color: String,
    charge: f64,
    /// Signed: positive is anticlockwise. A stopped vehicle keeps its heading
    /// in the sign of zero.
    velocity: f64,
    status: VehicleStatus,
    points: Point,
    hints: Vec<Hint>,
}

/// Outcome of [`Vehicle::route_to_charger`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    /// Safe to skip the nearest charger; stay on course.
    Stay,
    /// Heading for a charger that is still out of reach.
    Heading { charger: EntityId, reversed: bool },
    /// Close enough to join the charger's queue now.
    Arrived { charger: EntityId, reversed: bool },
}

impl Vehicle {
    /// A driving vehicle with the given initial charge (clamped to
    /// `[0, CHARGE_MAX]`) and velocity.
    pub fn new(name: impl Into<String>, model: impl Into<String>, charge: f64, velocity: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            model: model.into(),
            color: String::from("#ffffff"),
            charge: charge.clamp(0.0, CHARGE_MAX),
            velocity,
            status: VehicleStatus::Drive,
            points: Point::default(),
            hints: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
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

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.velocity)
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn points(&self) -> Point {
        self.points
    }

    pub fn set_points(&mut self, p: Point) {
        self.points = p;
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Replace the hint list wholesale.
    pub fn set_hints(&mut self, hints: Vec<Hint>) {
        self.hints = hints;
    }

    /// Per-tick behavior after routing. Only a driving vehicle acts on its
    /// own; queued and charging vehicles are advanced by their charger.
    pub fn tick(&mut self) {
        match self.status {
            VehicleStatus::Drive => self.drive(),
            VehicleStatus::Parked
            | VehicleStatus::Queued
            | VehicleStatus::Charging
            | VehicleStatus::Flat => {}
        }
    }

    /// Decide whether to divert to the nearest charger.
    ///
    /// Stays on course when the charger after the nearest one is reachable,
    /// or, with a single charger, when it is reachable after another lap.
    /// Otherwise turns toward the nearest charger and reports arrival once it
    /// is within [`ARRIVAL_DISTANCE`].
    pub fn route_to_charger(&mut self) -> Route {
        if self.status != VehicleStatus::Drive {
            return Route::Stay;
        }
        let skip = match self.hints.as_slice() {
            [] => true,
            [only] => only.next_range,
            [_, second, ..] => second.in_range,
        };
        if skip {
            return Route::Stay;
        }

        let nearest = &self.hints[0];
        let charger = nearest.charger;
        let arrived = nearest.dist < ARRIVAL_DISTANCE;
        let reversed = nearest.needs_reverse(self.velocity);
        if reversed {
            self.velocity = -self.velocity;
            tracing::debug!(
                vehicle = %self.name,
                charger,
                direction = ?self.direction(),
                "turning back toward charger"
            );
        }

        if arrived {
            Route::Arrived { charger, reversed }
        } else {
            Route::Heading { charger, reversed }
        }
    }

    /// Drive one tick: conserve speed when the nearest charger is out of
    /// range, creep faster when it is comfortably in range, then burn charge.
    pub fn drive(&mut self) {
        self.status = VehicleStatus::Drive;
        match self.hints.first() {
            Some(nearest) if !nearest.in_range => self.eco_mode(),
            Some(_) => self.velocity *= CRUISE_ACCEL,
            None => {}
        }
        self.consume();
    }

    /// Clamp speed into the economical band. Direction is untouched.
    pub fn eco_mode(&mut self) {
        let speed = self.velocity.abs();
        if speed < ECO_FLOOR {
            self.velocity = ECO_FLOOR.copysign(self.velocity);
        } else if speed > ECO_CEILING {
            self.velocity *= ECO_DECAY;
        }
    }

    /// Burn charge for one tick of travel; going below the flat threshold
    /// strands the vehicle.
    pub fn consume(&mut self) {
        self.charge -= self.consumption();
        if self.charge < FLAT_THRESHOLD {
            self.flat();
        }
    }

    /// Ticks of travel left at the current speed. Zero when stalled or empty.
    pub fn calc_range(&self) -> f64 {
        if self.charge < FLAT_THRESHOLD || self.velocity.abs() < STALL_SPEED {
            return 0.0;
        }
        self.charge / self.consumption()
    }

    fn consumption(&self) -> f64 {
        self.velocity.abs() / CONSUMPTION_DIVISOR
    }

    /// Accrue one tick of charge while at the head of a charger queue.
    pub fn charging(&mut self) {
        self.status = VehicleStatus::Charging;
        self.charge = (self.charge + CHARGE_RATE).min(CHARGE_MAX);
    }

    /// Stop and wait in a charger queue.
    pub fn queue(&mut self) {
        self.status = VehicleStatus::Queued;
        self.velocity = 0.0_f64.copysign(self.velocity);
    }

    pub fn park(&mut self) {
        self.status = VehicleStatus::Parked;
        self.velocity = 0.0_f64.copysign(self.velocity);
    }

    /// Out of charge. Nothing in the simulation leaves this state.
    pub fn flat(&mut self) {
        self.status = VehicleStatus::Flat;
        self.velocity = 0.0;
        self.charge = 0.0;
    }

    pub fn is_full(&self) -> bool {
        self.charge >= CHARGE_MAX
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Vehicle: {} {} charge={:.2} velocity={:.3} range={:.1} status={}>",
            self.name,
            self.model,
            self.charge,
            self.velocity,
            self.calc_range(),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargesim_core::enums::Steering;

    fn hint(charger: EntityId, dist: f64, vector: Direction, in_range: bool, next_range: bool) -> Hint {
        Hint {
            charger,
            track_length: 125.0,
            dist,
            vector,
            steering: Steering::Continue,
            range: 0.0,
            in_range,
            next_range,
        }
    }

    #[test]
    fn new_clamps_charge() {
        assert_eq!(Vehicle::new("a", "m", 140.0, 1.0).charge(), CHARGE_MAX);
        assert_eq!(Vehicle::new("a", "m", -3.0, 1.0).charge(), 0.0);
    }

    #[test]
    fn range_is_ticks_at_current_speed() {
        let v = Vehicle::new("a", "m", 50.0, -1.0);
        assert!((v.calc_range() - 250.0).abs() < 1e-9);

        let stalled = Vehicle::new("a", "m", 50.0, 0.05);
        assert_eq!(stalled.calc_range(), 0.0);

        let empty = Vehicle::new("a", "m", 0.05, 1.0);
        assert_eq!(empty.calc_range(), 0.0);
    }

    #[test]
    fn eco_mode_floors_and_decays_keeping_sign() {
        let mut v = Vehicle::new("a", "m", 50.0, -0.2);
        v.eco_mode();
        assert_eq!(v.velocity(), -ECO_FLOOR);

        let mut v = Vehicle::new("a", "m", 50.0, 1.2);
        v.eco_mode();
        assert!((v.velocity() - 1.08).abs() < 1e-12);

        let mut v = Vehicle::new("a", "m", 50.0, -0.8);
        v.eco_mode();
        assert_eq!(v.velocity(), -0.8);
    }

    #[test]
    fn drive_accelerates_when_nearest_in_range() {
        let mut v = Vehicle::new("a", "m", 50.0, 1.0);
        v.set_hints(vec![hint(9, 5.0, Direction::Anticlockwise, true, true)]);
        v.drive();
        assert!((v.velocity() - CRUISE_ACCEL).abs() < 1e-12);
        assert!((v.charge() - (50.0 - CRUISE_ACCEL / CONSUMPTION_DIVISOR)).abs() < 1e-12);
    }

    #[test]
    fn drive_without_hints_keeps_speed() {
        let mut v = Vehicle::new("a", "m", 50.0, 1.3);
        v.drive();
        assert_eq!(v.velocity(), 1.3);
        assert!((v.charge() - (50.0 - 1.3 / CONSUMPTION_DIVISOR)).abs() < 1e-12);
    }

    #[test]
    fn consume_to_flat() {
        let mut v = Vehicle::new("a", "m", 0.25, 1.0);
        v.consume();
        assert_eq!(v.status(), VehicleStatus::Flat);
        assert_eq!(v.charge(), 0.0);
        assert_eq!(v.velocity(), 0.0);
    }

    #[test]
    fn route_skips_when_second_charger_in_range() {
        let mut v = Vehicle::new("a", "m", 50.0, 1.0);
        v.set_hints(vec![
            hint(1, 0.5, Direction::Clockwise, true, false),
            hint(2, 30.0, Direction::Anticlockwise, true, false),
        ]);
        assert_eq!(v.route_to_charger(), Route::Stay);
        assert_eq!(v.velocity(), 1.0);
    }

    #[test]
    fn route_skips_single_charger_reachable_next_lap() {
        let mut v = Vehicle::new("a", "m", 50.0, 1.0);
        v.set_hints(vec![hint(1, 0.5, Direction::Clockwise, true, true)]);
        assert_eq!(v.route_to_charger(), Route::Stay);
    }

    #[test]
    fn route_skips_without_chargers() {
        let mut v = Vehicle::new("a", "m", 1.0, 1.0);
        assert_eq!(v.route_to_charger(), Route::Stay);
    }

    #[test]
    fn route_reverses_toward_nearest() {
        let mut v = Vehicle::new("a", "m", 5.0, 1.0);
        v.set_hints(vec![
            hint(1, 4.0, Direction::Clockwise, true, false),
            hint(2, 40.0, Direction::Anticlockwise, false, false),
        ]);
        assert_eq!(
            v.route_to_charger(),
            Route::Heading {
                charger: 1,
                reversed: true
            }
        );
        assert_eq!(v.velocity(), -1.0);
    }

    #[test]
    fn route_arrives_within_arrival_distance() {
        let mut v = Vehicle::new("a", "m", 5.0, -1.0);
        v.set_hints(vec![hint(3, 0.6, Direction::Clockwise, true, false)]);
        assert_eq!(
            v.route_to_charger(),
            Route::Arrived {
                charger: 3,
                reversed: false
            }
        );
        assert_eq!(v.velocity(), -1.0);
    }

    #[test]
    fn route_ignored_unless_driving() {
        let mut v = Vehicle::new("a", "m", 5.0, 1.0);
        v.set_hints(vec![hint(3, 0.6, Direction::Clockwise, true, false)]);
        v.park();
        assert_eq!(v.route_to_charger(), Route::Stay);
        assert_eq!(v.status(), VehicleStatus::Parked);
    }

    #[test]
    fn queue_stops_but_remembers_heading() {
        let mut v = Vehicle::new("a", "m", 5.0, -1.2);
        v.queue();
        assert_eq!(v.status(), VehicleStatus::Queued);
        assert_eq!(v.velocity(), 0.0);
        assert_eq!(v.direction(), Direction::Clockwise);

        // Leaving the charger, eco mode restores the floor speed the same way.
        v.set_hints(vec![hint(3, 0.2, Direction::Clockwise, false, false)]);
        v.drive();
        assert_eq!(v.velocity(), -ECO_FLOOR);
    }

    #[test]
    fn charging_clamps_at_full() {
        let mut v = Vehicle::new("a", "m", 99.5, 1.0);
        v.charging();
        assert_eq!(v.status(), VehicleStatus::Charging);
        assert_eq!(v.charge(), CHARGE_MAX);
        assert!(v.is_full());
    }

    #[test]
    fn tick_is_noop_unless_driving() {
        for prepare in [Vehicle::park as fn(&mut Vehicle), Vehicle::queue, Vehicle::flat] {
            let mut v = Vehicle::new("a", "m", 40.0, 1.0);
            prepare(&mut v);
            let before = (v.charge(), v.velocity(), v.status());
            v.tick();
            assert_eq!(before, (v.charge(), v.velocity(), v.status()));
        }
    }
}
