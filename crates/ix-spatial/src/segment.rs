//! Raw input segments and the cell index used to find crossings.

use std::collections::BTreeMap;

use ix_core::{GeoPoint, PointId, RoadId, SegmentId};

use crate::{BucketKey, PointStore, cells_along};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One straight piece of an input polyline.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Start of travel.  Both-way segments may be flipped during aggregation
    /// so that they run in polyline order.
    pub start: PointId,
    pub end: PointId,
    pub both_way: bool,
    pub layer: i32,
    /// Great-circle length in metres.
    pub length_m: f64,
    /// Cells this segment is registered in, ascending.
    pub cells: Vec<BucketKey>,
    /// Consumed by a road.
    pub aggregated: bool,
    /// Topologically inconsistent; excluded from roads and crossings.
    pub corrupted: bool,
    pub road: Option<RoadId>,
}

impl Segment {
    /// Whether the two segments share any endpoint.
    #[inline]
    pub fn touches(&self, other: &Segment) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Swap the endpoints.
    #[inline]
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}

// ── SegmentGraph ──────────────────────────────────────────────────────────────

/// All segments in ingestion order, plus a cell → segments index.
///
/// The index is a `BTreeMap` so that bucket iteration, and with it crossing
/// discovery order, is the same on every run.
#[derive(Default)]
pub struct SegmentGraph {
    segments: Vec<Segment>,
    buckets:  BTreeMap<BucketKey, Vec<SegmentId>>,
}

impl SegmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment running `start → end` and link it to both endpoints.
    pub fn add(
        &mut self,
        points:   &mut PointStore,
        start:    PointId,
        end:      PointId,
        both_way: bool,
        layer:    i32,
    ) -> SegmentId {
        let id = SegmentId::from_index(self.segments.len());
        let cells = cells_along(points.pos(start), points.pos(end));
        let length_m = points.pos(start).distance_m(points.pos(end));
        for &key in &cells {
            self.buckets.entry(key).or_default().push(id);
        }

        self.segments.push(Segment {
            start,
            end,
            both_way,
            layer,
            length_m,
            cells,
            aggregated: false,
            corrupted:  false,
            road:       None,
        });
        points.get_mut(start).segments.push(id);
        points.get_mut(end).segments.push(id);
        id
    }

    #[inline]
    pub fn get(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.index()]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + use<> {
        (0..self.segments.len()).map(SegmentId::from_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Non-empty cells in ascending key order.
    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &[SegmentId])> {
        self.buckets.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

// ── Intersection ──────────────────────────────────────────────────────────────

/// Crossing coordinate of two segments, treating `(lat, lon)` as a plane.
///
/// Returns `None` for parallel segments, for segments that share an
/// endpoint, and when the intersection of the supporting lines lies outside
/// either segment.  Endpoint-touching (parameter exactly 0 or 1) counts as a
/// crossing.
pub fn intersection(points: &PointStore, a: &Segment, b: &Segment) -> Option<GeoPoint> {
    let a0 = points.pos(a.start);
    let b0 = points.pos(b.start);
    let (ax, ay) = (points.pos(a.end).lat - a0.lat, points.pos(a.end).lon - a0.lon);
    let (bx, by) = (points.pos(b.end).lat - b0.lat, points.pos(b.end).lon - b0.lon);

    let det = -bx * ay + ax * by;
    if det == 0.0 {
        return None;
    }

    let s = (-ay * (a0.lat - b0.lat) + ax * (a0.lon - b0.lon)) / det;
    let t = (bx * (a0.lon - b0.lon) - by * (a0.lat - b0.lat)) / det;

    if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&t) || a.touches(b) {
        return None;
    }
    Some(GeoPoint::new(a0.lat + t * ax, a0.lon + t * ay))
}
