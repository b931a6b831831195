#[cfg(test)]
mod tests {
    use crate::commands::OperatorCommand;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::hint::Hint;
    use crate::state::{ChargerView, EntityView, TickSnapshot, TrackView, VehicleView};
    use crate::types::{Point, SimTime};

    fn sample_hint(vector: Direction) -> Hint {
        Hint {
            charger: 7,
            track_length: 125.66,
            dist: 3.5,
            vector,
            steering: Steering::Continue,
            range: 40.0,
            in_range: true,
            next_range: false,
        }
    }

    fn sample_vehicle() -> VehicleView {
        VehicleView {
            id: 1,
            name: "AAA".into(),
            model: "Model X".into(),
            color: "#12ab34".into(),
            points: Point::new(20.0, 0.0),
            charge: 15.0,
            status: VehicleStatus::Drive,
            velocity: -0.8,
            range: 93.75,
            hints: vec![sample_hint(Direction::Clockwise)],
        }
    }

    #[test]
    fn test_vehicle_status_wire_names() {
        let json = serde_json::to_string(&VehicleStatus::Charging).unwrap();
        assert_eq!(json, "\"charging\"");
        let back: VehicleStatus = serde_json::from_str("\"flat\"").unwrap();
        assert_eq!(back, VehicleStatus::Flat);
        assert_eq!(VehicleStatus::Queued.to_string(), "queued");
    }

    #[test]
    fn test_status_at_charger() {
        assert!(VehicleStatus::Queued.is_at_charger());
        assert!(VehicleStatus::Charging.is_at_charger());
        assert!(!VehicleStatus::Drive.is_at_charger());
        assert!(!VehicleStatus::Flat.is_at_charger());
    }

    #[test]
    fn test_direction_of_sign() {
        assert_eq!(Direction::of(0.7), Direction::Anticlockwise);
        assert_eq!(Direction::of(-0.7), Direction::Clockwise);
        assert_eq!(Direction::of(0.0), Direction::Anticlockwise);
        // A stopped vehicle keeps its heading in the sign bit.
        assert_eq!(Direction::of(-0.0), Direction::Clockwise);
        assert_eq!(Direction::Clockwise.sign(), -1.0);
    }

    #[test]
    fn test_hint_needs_reverse() {
        let hint = sample_hint(Direction::Clockwise);
        assert!(hint.needs_reverse(1.0));
        assert!(!hint.needs_reverse(-1.0));

        let hint = sample_hint(Direction::Anticlockwise);
        assert!(!hint.needs_reverse(0.5));
        assert!(hint.needs_reverse(-0.0));
    }

    #[test]
    fn test_operator_command_parsing() {
        assert_eq!("h".parse::<OperatorCommand>(), Ok(OperatorCommand::Help));
        assert_eq!("quit".parse::<OperatorCommand>(), Ok(OperatorCommand::Quit));
        assert_eq!(" F \n".parse::<OperatorCommand>(), Ok(OperatorCommand::Faster));
        assert_eq!("slower".parse::<OperatorCommand>(), Ok(OperatorCommand::Slower));
        assert_eq!("p".parse::<OperatorCommand>(), Ok(OperatorCommand::Pause));
        assert_eq!("r".parse::<OperatorCommand>(), Ok(OperatorCommand::Resume));
        assert!("x".parse::<OperatorCommand>().is_err());
    }

    /// Every render record carries a kind discriminator.
    #[test]
    fn test_entity_view_kind_tag() {
        let view = EntityView::Vehicle(sample_vehicle());
        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "vehicle");
        assert_eq!(json["name"], "AAA");
        assert_eq!(json["status"], "drive");
        assert_eq!(json["hints"][0]["vector"], "clockwise");
        assert_eq!(json["hints"][0]["in_range"], true);

        let charger = EntityView::Charger(ChargerView {
            id: 5,
            name: "A".into(),
            model: "t1".into(),
            color: "#00ff00".into(),
            points: Point::new(0.0, 20.0),
            status: ChargerStatus::Online,
            queue_length: 2,
        });
        let json: serde_json::Value = serde_json::to_value(&charger).unwrap();
        assert_eq!(json["kind"], "charger");
        assert_eq!(json["queue_length"], 2);
        assert_eq!(json["status"], "online");
    }

    #[test]
    fn test_snapshot_accessors() {
        let snapshot = TickSnapshot {
            time: SimTime { tick: 3 },
            phase: SimPhase::Running,
            time_scale: 1.0,
            entities: vec![
                EntityView::Track(TrackView {
                    id: 0,
                    name: "T".into(),
                    color: "#ffffff".into(),
                    origin: Point::default(),
                    radius: 20.0,
                }),
                EntityView::Vehicle(sample_vehicle()),
            ],
            events: vec![SimEvent::VehicleFlat { vehicle: 1 }],
        };

        assert_eq!(snapshot.entities[0].kind(), EntityKind::Track);
        assert_eq!(snapshot.vehicles().count(), 1);
        assert_eq!(snapshot.chargers().count(), 0);
        assert_eq!(snapshot.vehicle("AAA").map(|v| v.id), Some(1));
        assert!(snapshot.charger("A").is_none());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TickSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.tick, 3);
        assert_eq!(back.entities.len(), 2);
        assert_eq!(back.events, snapshot.events);
    }

    #[test]
    fn test_point_dvec2_conversion() {
        assert_eq!(Point::new(3.0, 4.0).as_dvec2(), glam::DVec2::new(3.0, 4.0));
        let from_vec: Point = glam::DVec2::new(1.5, -2.0).into();
        assert_eq!(from_vec, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
    }
}
