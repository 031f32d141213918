//! Unit tests for ix-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CrossingId, PointId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = RoadId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoadId::try_from(42usize).unwrap(), id);
        assert_eq!(RoadId::from_index(42), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(PointId::default(), PointId::INVALID);
        assert_eq!(CrossingId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(RoadId(7).to_string(), "RoadId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(45.0, 10.0);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(45.0, 9.99);
        let b = GeoPoint::new(45.002, 10.0);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn bearing_in_range() {
        let axis = GeoPoint::new(45.0, 10.0);
        for other in [
            GeoPoint::new(45.01, 10.0),
            GeoPoint::new(44.99, 10.0),
            GeoPoint::new(45.0, 10.01),
            GeoPoint::new(45.0, 9.99),
        ] {
            let b = axis.bearing_deg(other);
            assert!((0.0..=360.0).contains(&b), "bearing {b} out of range");
        }
    }

    #[test]
    fn sweeps_in_opposite_order_complete_a_turn() {
        let axis = GeoPoint::new(45.0, 10.0);
        let a = GeoPoint::new(45.002, 10.0);
        let b = GeoPoint::new(45.0, 10.002);
        let there = axis.sweep_deg(a, b);
        let back = axis.sweep_deg(b, a);
        assert!((there + back - 360.0).abs() < 1e-9, "{there} + {back}");
    }

    #[test]
    fn sweep_to_same_direction_is_zero() {
        let axis = GeoPoint::new(45.0, 10.0);
        let a = GeoPoint::new(45.002, 10.001);
        assert_eq!(axis.sweep_deg(a, a), 0.0);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, TrafficHand};

    #[test]
    fn codes_use_first_character() {
        assert_eq!(Direction::from_code("F"), Some(Direction::Forward));
        assert_eq!(Direction::from_code("T"), Some(Direction::Reverse));
        assert_eq!(Direction::from_code("Both"), Some(Direction::Both));
        assert_eq!(Direction::from_code(" B"), Some(Direction::Both));
        assert_eq!(Direction::from_code("X"), None);
        assert_eq!(Direction::from_code(""), None);
        assert_eq!(Direction::from_code("f"), None);
    }

    #[test]
    fn traffic_hand_parses_short_and_long() {
        assert_eq!("r".parse::<TrafficHand>().unwrap(), TrafficHand::Right);
        assert_eq!("Left".parse::<TrafficHand>().unwrap(), TrafficHand::Left);
        assert!("x".parse::<TrafficHand>().is_err());
        assert_eq!(TrafficHand::default(), TrafficHand::Right);
    }
}

#[cfg(test)]
mod config {
    use crate::{AnalysisConfig, SearchBounds, TrafficHand};

    #[test]
    fn defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.traffic, TrafficHand::Right);
        assert_eq!(cfg.search.max_depth, 6);
        assert_eq!(cfg.search.direction_changes, 2);
        assert_eq!(cfg.search.length_cap_m, 10_000.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn admits_depth_or_length() {
        let b = SearchBounds::new(3, 300.0);
        assert!(b.admits(3, 5_000.0));      // depth keeps it alive
        assert!(!b.admits(3, 10_000.0));    // but not past the cap
        assert!(b.admits(9, 299.0));        // length keeps it alive
        assert!(!b.admits(4, 300.0));
    }

    #[test]
    fn rejects_bad_bounds() {
        let mut cfg = AnalysisConfig::default();
        cfg.search.max_length_m = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = AnalysisConfig::default();
        cfg.search.max_length_m = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = AnalysisConfig::default();
        cfg.search.length_cap_m = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn any_depth_is_accepted() {
        for depth in [0, 1, 2] {
            let cfg = AnalysisConfig::new(TrafficHand::Right, SearchBounds::new(depth, 900.0));
            assert!(cfg.validate().is_ok(), "depth {depth}");
        }
        // Depth 1 with a length budget still admits short branches.
        let b = SearchBounds::new(1, 900.0);
        assert!(b.admits(2, 600.0));
        assert!(!b.admits(2, 900.0));
    }
}
