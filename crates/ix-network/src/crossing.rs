//! Grade-separated crossing points.

use ix_core::{JunctionId, PointId, RoadId};

/// Two roads on different layers passing over the same coordinate.
///
/// Crossing points have no structural equality: a both-way road produces a
/// mirrored crossing at the same point for its shadow.
#[derive(Clone, Debug)]
pub struct CrossingPoint {
    pub point: PointId,
    /// Road of the first segment of the detected pair.
    pub top: RoadId,
    /// Road of the second segment of the detected pair.  Connection search
    /// starts here.
    pub bottom: RoadId,
    /// Distance along `top` from its start to `point`.
    pub top_distance_m: f64,
    /// Distance along `bottom` from its start to `point`.
    pub bottom_distance_m: f64,

    /// A drivable path links `bottom` to `top`.
    pub connection_exists: bool,
    /// Roads on at least one connecting path, first insertion wins.
    pub connecting_roads: Vec<RoadId>,
    /// Each connecting path merged into one polyline.
    pub connections: Vec<Vec<PointId>>,
    pub junction: Option<JunctionId>,
}

impl CrossingPoint {
    pub fn new(
        point:             PointId,
        top:               RoadId,
        bottom:            RoadId,
        top_distance_m:    f64,
        bottom_distance_m: f64,
    ) -> Self {
        Self {
            point,
            top,
            bottom,
            top_distance_m,
            bottom_distance_m,
            connection_exists: false,
            connecting_roads:  Vec::new(),
            connections:       Vec::new(),
            junction:          None,
        }
    }

    /// The road on the given side.
    #[inline]
    pub fn road(&self, is_top: bool) -> RoadId {
        if is_top { self.top } else { self.bottom }
    }

    /// The road on the opposite side.
    #[inline]
    pub fn other_road(&self, is_top: bool) -> RoadId {
        self.road(!is_top)
    }

    /// Distance from the start of the road on the given side.
    #[inline]
    pub fn distance_m(&self, is_top: bool) -> f64 {
        if is_top { self.top_distance_m } else { self.bottom_distance_m }
    }

    pub fn add_connecting_road(&mut self, road: RoadId) {
        if !self.connecting_roads.contains(&road) {
            self.connecting_roads.push(road);
        }
    }

    /// Forget search results and junction membership.
    pub fn clear_connection(&mut self) {
        self.connection_exists = false;
        self.connecting_roads.clear();
        self.connections.clear();
        self.junction = None;
    }
}
