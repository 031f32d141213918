//! The road network and its builder.

use log::{debug, info};

use ix_core::{CrossingId, Direction, GeoPoint, NoProgress, PointId, Progress, RoadId};
use ix_spatial::{PointStore, SegmentGraph};

use crate::{CrossingPoint, CrossingRef, NetworkError, NetworkResult, Road};
use crate::{aggregate, detect, split};

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Points, segments, roads and crossing points of one dataset.
///
/// All fields are `pub` for direct indexed access by the search and junction
/// stages.  Do not construct directly; use [`NetworkBuilder`].
pub struct RoadNetwork {
    pub points: PointStore,
    pub segments: SegmentGraph,
    /// Aggregated roads first, shadow copies after them.
    pub roads: Vec<Road>,
    /// Detected crossings first, mirrored crossings after them.
    pub crossings: Vec<CrossingPoint>,
}

impl RoadNetwork {
    fn from_parts(points: PointStore, segments: SegmentGraph) -> Self {
        Self { points, segments, roads: Vec::new(), crossings: Vec::new() }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id.index()]
    }

    #[inline]
    pub fn road_mut(&mut self, id: RoadId) -> &mut Road {
        &mut self.roads[id.index()]
    }

    #[inline]
    pub fn crossing(&self, id: CrossingId) -> &CrossingPoint {
        &self.crossings[id.index()]
    }

    #[inline]
    pub fn crossing_mut(&mut self, id: CrossingId) -> &mut CrossingPoint {
        &mut self.crossings[id.index()]
    }

    #[inline]
    pub fn pos(&self, id: PointId) -> GeoPoint {
        self.points.pos(id)
    }

    pub fn road_ids(&self) -> impl Iterator<Item = RoadId> + use<> {
        (0..self.roads.len()).map(RoadId::from_index)
    }

    pub fn crossing_ids(&self) -> impl Iterator<Item = CrossingId> + use<> {
        (0..self.crossings.len()).map(CrossingId::from_index)
    }

    /// Great-circle length of a vertex sequence.
    pub fn polyline_length_m(&self, polyline: &[PointId]) -> f64 {
        polyline
            .windows(2)
            .map(|w| self.pos(w[0]).distance_m(self.pos(w[1])))
            .sum()
    }

    /// Roads as aggregated, without shadow copies.
    pub fn original_roads(&self) -> impl Iterator<Item = (RoadId, &Road)> {
        self.roads
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_copy)
            .map(|(i, r)| (RoadId::from_index(i), r))
    }

    /// The aggregated road carrying `number`.
    pub fn original_by_number(&self, number: u32) -> Option<RoadId> {
        self.original_roads().find(|(_, r)| r.number == number).map(|(id, _)| id)
    }

    /// Crossing points that a connection search has confirmed.
    pub fn connected_crossings(&self) -> impl Iterator<Item = (CrossingId, &CrossingPoint)> {
        self.crossings
            .iter()
            .enumerate()
            .filter(|(_, c)| c.connection_exists)
            .map(|(i, c)| (CrossingId::from_index(i), c))
    }

    // ── Mutation used by the build stages ─────────────────────────────────

    pub(crate) fn push_road(&mut self, road: Road) -> RoadId {
        let id = RoadId::from_index(self.roads.len());
        self.roads.push(road);
        id
    }

    /// Append a crossing point and attach it to both of its roads.
    pub(crate) fn push_crossing(&mut self, crossing: CrossingPoint) -> CrossingId {
        let id = CrossingId::from_index(self.crossings.len());
        let (top, bottom) = (crossing.top, crossing.bottom);
        self.crossings.push(crossing);
        self.roads[top.index()].crossings.push(CrossingRef { crossing: id, is_top: true });
        self.roads[bottom.index()].crossings.push(CrossingRef { crossing: id, is_top: false });
        id
    }

    /// Relate `road` to the roads already leaving or entering its start
    /// point, then register it as leaving that point.
    pub(crate) fn link_start(&mut self, road: RoadId) {
        let p = self.roads[road.index()].start();

        for &other in &self.points.get(p).outgoing {
            self.roads[road.index()].siblings.push(other);
            self.roads[other.index()].siblings.push(road);
        }
        for &other in &self.points.get(p).incoming {
            self.roads[road.index()].parents.push(other);
            self.roads[other.index()].children.push(road);
        }
        self.points.get_mut(p).outgoing.push(road);
    }

    /// Relate `road` to the roads already leaving or entering its end point,
    /// then register it as entering that point.
    pub(crate) fn link_end(&mut self, road: RoadId) {
        let p = self.roads[road.index()].end();

        for &other in &self.points.get(p).outgoing {
            self.roads[road.index()].children.push(other);
            self.roads[other.index()].parents.push(road);
        }
        for &other in &self.points.get(p).incoming {
            self.roads[road.index()].friends.push(other);
            self.roads[other.index()].friends.push(road);
        }
        self.points.get_mut(p).incoming.push(road);
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Collect input polylines, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ix_core::{Direction, GeoPoint};
/// use ix_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_polyline(
///     &[GeoPoint::new(45.0, 10.0), GeoPoint::new(45.001, 10.0), GeoPoint::new(45.002, 10.0)],
///     Direction::Forward,
///     0,
/// ).unwrap();
/// let net = b.build();
/// assert_eq!(net.roads.len(), 1);
/// assert_eq!(net.roads[0].polyline.len(), 3);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    points:   PointStore,
    segments: SegmentGraph,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one input polyline as consecutive segments.
    ///
    /// `Reverse` polylines produce segments running from each vertex to its
    /// predecessor.  Consecutive duplicate vertices are dropped.  Coordinates
    /// must be finite degrees within [-90, 90] x [-180, 180].  Returns the
    /// number of segments added.
    pub fn add_polyline(
        &mut self,
        coords:    &[GeoPoint],
        direction: Direction,
        layer:     i32,
    ) -> NetworkResult<usize> {
        if coords.len() < 2 {
            return Err(NetworkError::TooFewPoints(coords.len()));
        }
        if let Some(bad) = coords.iter().find(|c| !c.lat.is_finite() || !c.lon.is_finite()) {
            return Err(NetworkError::NonFiniteCoordinate { lat: bad.lat, lon: bad.lon });
        }
        if let Some(bad) = coords.iter().find(|c| c.lat.abs() > 90.0 || c.lon.abs() > 180.0) {
            return Err(NetworkError::OutOfRange { lat: bad.lat, lon: bad.lon });
        }

        let ids: Vec<PointId> = coords
            .iter()
            .map(|c| self.points.get_or_create(c.lat, c.lon))
            .collect();

        let mut added = 0;
        for pair in ids.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                debug!("dropping zero-length segment at {}", self.points.pos(a));
                continue;
            }
            let (start, end) = match direction {
                Direction::Reverse => (b, a),
                Direction::Forward | Direction::Both => (a, b),
            };
            self.segments.add(&mut self.points, start, end, direction.is_both_way(), layer);
            added += 1;
        }
        Ok(added)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Run all build stages without progress callbacks.
    pub fn build(self) -> RoadNetwork {
        self.build_observed(&mut NoProgress)
    }

    /// Aggregate roads, detect crossings, split both-way roads and order
    /// crossing attachments, reporting each stage to `progress`.
    pub fn build_observed<P: Progress + ?Sized>(self, progress: &mut P) -> RoadNetwork {
        let mut net = RoadNetwork::from_parts(self.points, self.segments);

        let roads = aggregate::build_roads(&mut net, progress);
        let crossings = detect::find_crossings(&mut net, progress);
        let shadows = split::split_both_way_roads(&mut net, progress);
        split::sort_crossing_refs(&mut net);

        info!(
            "network: {} points, {} segments, {roads} roads (+{shadows} shadows), {crossings} crossings",
            net.points.len(),
            net.segments.len(),
        );
        net
    }
}
