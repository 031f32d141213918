//! Canonical points.

use rustc_hash::FxHashMap;

use ix_core::{GeoPoint, PointId, RoadId, SegmentId};

use crate::BucketKey;

/// One canonical coordinate and everything incident to it.
#[derive(Clone, Debug)]
pub struct Point {
    pub pos: GeoPoint,
    pub bucket: BucketKey,
    /// Incident segments in ingestion order.
    pub segments: Vec<SegmentId>,
    /// Roads ending here, in aggregation order.
    pub incoming: Vec<RoadId>,
    /// Roads starting here, in aggregation order.
    pub outgoing: Vec<RoadId>,
}

/// Arena of unique points, indexed by [`PointId`] and bucketed by grid cell.
///
/// Points are never removed.
#[derive(Default)]
pub struct PointStore {
    points:  Vec<Point>,
    buckets: FxHashMap<BucketKey, Vec<PointId>>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The point at exactly `(lat, lon)`, created if absent.
    pub fn get_or_create(&mut self, lat: f64, lon: f64) -> PointId {
        let pos = GeoPoint::new(lat, lon);
        let bucket = BucketKey::of(pos);
        if let Some(id) = self.find_in(bucket, pos) {
            return id;
        }

        let id = PointId::from_index(self.points.len());
        self.points.push(Point {
            pos,
            bucket,
            segments: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });
        self.buckets.entry(bucket).or_default().push(id);
        id
    }

    /// The point at exactly `(lat, lon)`, if one was created.
    pub fn find(&self, lat: f64, lon: f64) -> Option<PointId> {
        let pos = GeoPoint::new(lat, lon);
        self.find_in(BucketKey::of(pos), pos)
    }

    fn find_in(&self, bucket: BucketKey, pos: GeoPoint) -> Option<PointId> {
        self.buckets
            .get(&bucket)?
            .iter()
            .copied()
            .find(|id| self.points[id.index()].pos == pos)
    }

    /// Points registered in one cell, in creation order.
    pub fn bucket(&self, key: BucketKey) -> &[PointId] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn get(&self, id: PointId) -> &Point {
        &self.points[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PointId) -> &mut Point {
        &mut self.points[id.index()]
    }

    #[inline]
    pub fn pos(&self, id: PointId) -> GeoPoint {
        self.points[id.index()].pos
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
