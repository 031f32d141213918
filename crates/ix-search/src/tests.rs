//! Unit tests for ix-search.

use ix_core::{Direction, GeoPoint, NoProgress, RoadId, SearchBounds};
use ix_network::{NetworkBuilder, RoadNetwork};

// ── Helpers ───────────────────────────────────────────────────────────────────

const W: (f64, f64) = (45.0, 9.998);
const E: (f64, f64) = (45.0, 10.002);
const X: (f64, f64) = (45.0, 10.004);
const R: (f64, f64) = (44.996, 10.0);
const S: (f64, f64) = (44.998, 10.0);
const N: (f64, f64) = (45.002, 10.0);

/// An overpass W → E → X on layer 1 above S → N on layer 0, with a single
/// ramp E → S.  Roads: 0 = W→E, 1 = E→X, 2 = R→S, 3 = S→N, 4 = E→S.
fn single_ramp() -> RoadNetwork {
    let mut b = NetworkBuilder::new();
    let mut add = |coords: &[(f64, f64)], layer: i32| {
        let pts: Vec<GeoPoint> = coords.iter().map(|&(a, o)| GeoPoint::new(a, o)).collect();
        b.add_polyline(&pts, Direction::Forward, layer).unwrap();
    };
    add(&[W, E, X], 1);
    add(&[R, S, N], 0);
    add(&[E, S], 0);
    b.build()
}

/// Forward polylines with their layers, in ingestion order.
fn network(lines: &[(&[(f64, f64)], i32)]) -> RoadNetwork {
    let mut b = NetworkBuilder::new();
    for &(coords, layer) in lines {
        let pts: Vec<GeoPoint> = coords.iter().map(|&(a, o)| GeoPoint::new(a, o)).collect();
        b.add_polyline(&pts, Direction::Forward, layer).unwrap();
    }
    b.build()
}

fn with_turns(direction_changes: u8) -> SearchBounds {
    SearchBounds { direction_changes, ..SearchBounds::new(3, 300.0) }
}

fn point_of(net: &RoadNetwork, (lat, lon): (f64, f64)) -> ix_core::PointId {
    net.points.find(lat, lon).expect("point exists")
}

#[cfg(test)]
mod finder_tests {
    use super::*;
    use crate::{BoundedSearch, ConnectionFinder};

    #[test]
    fn fixture_shape() {
        let net = single_ramp();
        assert_eq!(net.roads.len(), 5);
        assert_eq!(net.crossings.len(), 1);
        assert_eq!(net.crossings[0].top, RoadId(0));
        assert_eq!(net.crossings[0].bottom, RoadId(3));
    }

    #[test]
    fn ramp_links_bottom_to_top() {
        let net = single_ramp();
        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &SearchBounds::new(3, 300.0));

        assert!(outcome.found());
        assert_eq!(outcome.paths, vec![vec![RoadId(3), RoadId(4), RoadId(0)]]);
        assert_eq!(outcome.connecting_roads, vec![RoadId(0), RoadId(4)]);
    }

    #[test]
    fn bounds_cut_the_ramp() {
        let net = single_ramp();
        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &SearchBounds::new(2, 100.0));
        assert!(!outcome.found());
        assert!(outcome.connecting_roads.is_empty());
    }

    #[test]
    fn friend_reverses_the_walk() {
        // Both roads end at Q, so the top road is only reachable by turning
        // onto it against its direction.
        const Q: (f64, f64) = (44.998, 10.004);
        let net = network(&[(&[W, E, Q], 1), (&[S, N, (45.002, 10.004), Q], 0)]);
        assert_eq!(net.roads[1].friends, vec![RoadId(0)]);

        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(2));
        assert_eq!(outcome.paths, vec![vec![RoadId(1), RoadId(0)]]);
        assert_eq!(outcome.connecting_roads, vec![RoadId(0)]);

        assert!(BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(1)).found());
        assert!(!BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(0)).found());
    }

    #[test]
    fn sibling_reverses_the_walk() {
        // Both roads start at Q; found while walking the seed backward.
        const Q: (f64, f64) = (44.998, 10.004);
        let net = network(&[(&[Q, E, W], 1), (&[Q, (45.002, 10.004), N, S], 0)]);
        assert_eq!(net.roads[1].siblings, vec![RoadId(0)]);

        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(2));
        assert_eq!(outcome.paths, vec![vec![RoadId(1), RoadId(0)]]);

        assert!(!BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(0)).found());
    }

    #[test]
    fn each_reversal_costs_one_turn() {
        // seed → friend F (backward) → F's sibling, the top road (forward).
        const P: (f64, f64) = (45.0, 10.006);
        const Q: (f64, f64) = (45.002, 10.004);
        let net = network(&[(&[P, (45.0, 9.998)], 1), (&[S, N, Q], 0), (&[P, Q], 0)]);
        assert_eq!((net.crossings[0].top, net.crossings[0].bottom), (RoadId(0), RoadId(1)));

        assert!(!BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(1)).found());

        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &with_turns(2));
        assert_eq!(outcome.paths, vec![vec![RoadId(1), RoadId(2), RoadId(0)]]);
        assert_eq!(outcome.connecting_roads, vec![RoadId(0), RoadId(2)]);
    }

    #[test]
    fn length_alone_admits_long_branches() {
        let net = single_ramp();
        // Depth 2 is too shallow, but the whole path is well under 1 km.
        let outcome = BoundedSearch.find(&net, ix_core::CrossingId(0), &SearchBounds::new(2, 1_000.0));
        assert!(outcome.found());
    }
}

#[cfg(test)]
mod path_tests {
    use super::*;
    use crate::merge_path;

    #[test]
    fn merges_reversed_pieces() {
        let net = single_ramp();
        let merged = merge_path(&net, &[RoadId(3), RoadId(4), RoadId(0)]);
        let expected: Vec<_> = [N, S, E, W].iter().map(|&p| point_of(&net, p)).collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn single_road_is_its_polyline() {
        let net = single_ramp();
        assert_eq!(merge_path(&net, &[RoadId(4)]), net.road(RoadId(4)).polyline);
        assert!(merge_path(&net, &[]).is_empty());
    }

    #[test]
    fn stops_at_first_gap() {
        let net = single_ramp();
        // Road 1 (E→X) does not touch road 2 (R→S).
        let merged = merge_path(&net, &[RoadId(0), RoadId(1), RoadId(2)]);
        let expected: Vec<_> = [W, E, X].iter().map(|&p| point_of(&net, p)).collect();
        assert_eq!(merged, expected);
    }
}

#[cfg(test)]
mod connect_tests {
    use super::*;
    use crate::{BoundedSearch, clear_connections, connect_all};

    #[test]
    fn records_results_on_the_crossing() {
        let mut net = single_ramp();
        let connected = connect_all(&mut net, &BoundedSearch, &SearchBounds::new(3, 300.0), &mut NoProgress);
        assert_eq!(connected, 1);

        let c = &net.crossings[0];
        assert!(c.connection_exists);
        assert_eq!(c.connecting_roads, vec![RoadId(0), RoadId(4), RoadId(3)]);
        assert_eq!(c.connections.len(), 1);
        assert_eq!(c.connections[0].len(), 4);
    }

    #[test]
    fn clear_then_rerun_is_identical() {
        let mut net = single_ramp();
        let bounds = SearchBounds::new(3, 300.0);
        connect_all(&mut net, &BoundedSearch, &bounds, &mut NoProgress);
        let first = net.crossings[0].clone();

        clear_connections(&mut net);
        assert!(!net.crossings[0].connection_exists);
        assert!(net.crossings[0].connecting_roads.is_empty());

        connect_all(&mut net, &BoundedSearch, &bounds, &mut NoProgress);
        assert_eq!(net.crossings[0].connecting_roads, first.connecting_roads);
        assert_eq!(net.crossings[0].connections, first.connections);
    }

    #[test]
    fn tighter_bounds_disconnect() {
        let mut net = single_ramp();
        let connected = connect_all(&mut net, &BoundedSearch, &SearchBounds::new(2, 100.0), &mut NoProgress);
        assert_eq!(connected, 0);
        assert!(!net.crossings[0].connection_exists);
        assert!(net.crossings[0].connecting_roads.is_empty());
    }
}
