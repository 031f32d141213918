//! Unit tests for ix-spatial.

#[cfg(test)]
mod bucket_tests {
    use ix_core::GeoPoint;

    use crate::{BucketKey, cell_index, cells_along, first_shared};

    fn key(lat: i32, lon: i32) -> BucketKey {
        BucketKey { lat, lon }
    }

    #[test]
    fn cell_edges_join_the_cell_below() {
        assert_eq!(cell_index(45.0), 4500);
        assert_eq!(cell_index(44.998), 4500);
        assert_eq!(cell_index(45.002), 4501);
        assert_eq!(cell_index(0.0), 0);
        assert_eq!(cell_index(-0.005), 0);
        assert_eq!(cell_index(-0.015), -1);
    }

    #[test]
    fn walk_visits_crossed_cells_only() {
        let cells = cells_along(GeoPoint::new(45.005, 10.005), GeoPoint::new(45.025, 10.015));
        assert_eq!(cells, vec![key(4501, 1001), key(4502, 1001), key(4502, 1002), key(4503, 1002)]);
    }

    #[test]
    fn walk_direction_does_not_matter() {
        let a = GeoPoint::new(45.005, 10.005);
        let b = GeoPoint::new(45.025, 10.015);
        assert_eq!(cells_along(a, b), cells_along(b, a));
    }

    #[test]
    fn long_diagonal_stays_near_the_line() {
        // The bounding rectangle would be 1001 x 1001 cells.
        let cells = cells_along(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0));
        assert!(cells.len() <= 3 * 1001, "got {} cells", cells.len());
        assert_eq!(cells.first(), Some(&key(0, 0)));
        assert_eq!(cells.last(), Some(&key(1000, 1000)));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
        assert!(cells.iter().all(|k| (k.lat - k.lon).abs() <= 1));
    }

    #[test]
    fn horizontal_and_vertical_runs() {
        let along_lon = cells_along(GeoPoint::new(45.0, 10.0), GeoPoint::new(45.0, 10.025));
        assert_eq!(along_lon, vec![key(4500, 1000), key(4500, 1001), key(4500, 1002), key(4500, 1003)]);
        let along_lat = cells_along(GeoPoint::new(45.025, 10.005), GeoPoint::new(45.0, 10.005));
        assert_eq!(along_lat, vec![key(4500, 1001), key(4501, 1001), key(4502, 1001), key(4503, 1001)]);
    }

    #[test]
    fn first_shared_cell() {
        let a = [key(0, 0), key(1, 0), key(1, 1), key(2, 1)];
        let b = [key(0, 3), key(1, 1), key(2, 1)];
        let c = [key(0, 1), key(3, 3)];
        assert_eq!(first_shared(&a, &b), Some(key(1, 1)));
        assert_eq!(first_shared(&a, &c), None);
        assert_eq!(first_shared(&a, &[]), None);
    }
}

#[cfg(test)]
mod point_tests {
    use crate::PointStore;

    #[test]
    fn same_coordinates_same_point() {
        let mut store = PointStore::new();
        let a = store.get_or_create(45.0, 10.0);
        let b = store.get_or_create(45.0, 10.0);
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_cell_different_coordinates() {
        let mut store = PointStore::new();
        let a = store.get_or_create(45.0, 10.0);
        let b = store.get_or_create(44.995, 9.995);
        assert_ne!(a, b);
        assert_eq!(store.get(a).bucket, store.get(b).bucket);
        assert_eq!(store.bucket(store.get(a).bucket), &[a, b]);
    }

    #[test]
    fn find_does_not_create() {
        let mut store = PointStore::new();
        assert_eq!(store.find(1.0, 2.0), None);
        let a = store.get_or_create(1.0, 2.0);
        assert_eq!(store.find(1.0, 2.0), Some(a));
        assert_eq!(store.len(), 1);
    }
}

#[cfg(test)]
mod segment_tests {
    use crate::{BucketKey, PointStore, SegmentGraph, intersection};

    fn graph_with(lines: &[((f64, f64), (f64, f64), i32)]) -> (PointStore, SegmentGraph) {
        let mut points = PointStore::new();
        let mut graph = SegmentGraph::new();
        for &((alat, alon), (blat, blon), layer) in lines {
            let a = points.get_or_create(alat, alon);
            let b = points.get_or_create(blat, blon);
            graph.add(&mut points, a, b, false, layer);
        }
        (points, graph)
    }

    #[test]
    fn add_links_endpoints_and_measures() {
        let (points, graph) = graph_with(&[((45.0, 10.0), (45.001, 10.0), 0)]);
        let seg = graph.get(ix_core::SegmentId(0));
        assert_eq!(points.get(seg.start).segments.len(), 1);
        assert_eq!(points.get(seg.end).segments.len(), 1);
        assert!((seg.length_m - 111.19).abs() < 0.1, "got {}", seg.length_m);
    }

    #[test]
    fn registered_in_crossed_cells() {
        let (_, graph) = graph_with(&[((45.005, 10.005), (45.025, 10.015), 0)]);
        assert_eq!(graph.bucket_count(), 4);
        let keys: Vec<BucketKey> = graph.buckets().map(|(k, _)| k).collect();
        assert_eq!(keys.first(), Some(&BucketKey { lat: 4501, lon: 1001 }));
        assert_eq!(keys.last(), Some(&BucketKey { lat: 4503, lon: 1002 }));
        assert_eq!(graph.get(ix_core::SegmentId(0)).cells, keys);
    }

    #[test]
    fn diagonal_crossing() {
        let (points, graph) = graph_with(&[((0.0, 0.0), (1.0, 1.0), 0), ((0.0, 1.0), (1.0, 0.0), 1)]);
        let a = graph.get(ix_core::SegmentId(0));
        let b = graph.get(ix_core::SegmentId(1));
        let x = intersection(&points, a, b).expect("segments cross");
        assert_eq!((x.lat, x.lon), (0.5, 0.5));
    }

    #[test]
    fn parallel_and_touching_do_not_cross() {
        let (points, graph) = graph_with(&[
            ((0.0, 0.0), (1.0, 1.0), 0),
            ((0.0, 0.1), (1.0, 1.1), 1),
            ((1.0, 1.0), (2.0, 0.0), 1),
        ]);
        let a = graph.get(ix_core::SegmentId(0));
        assert!(intersection(&points, a, graph.get(ix_core::SegmentId(1))).is_none());
        assert!(intersection(&points, a, graph.get(ix_core::SegmentId(2))).is_none());
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        let (points, graph) = graph_with(&[((0.0, 0.0), (1.0, 0.0), 0), ((2.0, -1.0), (2.0, 1.0), 1)]);
        let a = graph.get(ix_core::SegmentId(0));
        let b = graph.get(ix_core::SegmentId(1));
        assert!(intersection(&points, a, b).is_none());
    }
}
