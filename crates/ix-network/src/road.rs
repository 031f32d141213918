//! Aggregated roads.

use ix_core::{CrossingId, PointId, RoadId, SegmentId};

/// One crossing point seen from a road: which crossing, and whether this
/// road is its top (first-detected) side.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CrossingRef {
    pub crossing: CrossingId,
    pub is_top: bool,
}

/// A maximal chain of segments with consistent direction and no branch
/// point in its interior.
///
/// A both-way road is kept once as aggregated and once as a shadow copy
/// running the other way; both share `number`.
#[derive(Clone, Debug)]
pub struct Road {
    /// External road number, sequential from 1 in discovery order.
    pub number: u32,
    /// Vertices in travel order; always at least two.
    pub polyline: Vec<PointId>,
    /// Owned segments in travel order.  Empty for shadow copies.
    pub segments: Vec<SegmentId>,
    pub length_m: f64,
    /// Distinct layers in first-seen order.
    pub layers: Vec<i32>,
    pub both_way: bool,
    pub is_copy: bool,

    /// Roads starting where this one ends.
    pub children: Vec<RoadId>,
    /// Roads ending where this one starts.
    pub parents: Vec<RoadId>,
    /// Roads ending where this one ends.
    pub friends: Vec<RoadId>,
    /// Roads starting where this one starts.
    pub siblings: Vec<RoadId>,

    /// Crossing attachments, ordered by distance from `start()` once the
    /// network is built.
    pub crossings: Vec<CrossingRef>,
}

impl Road {
    pub(crate) fn new(number: u32, polyline: Vec<PointId>, both_way: bool) -> Self {
        Self {
            number,
            polyline,
            segments:  Vec::new(),
            length_m:  0.0,
            layers:    Vec::new(),
            both_way,
            is_copy:   false,
            children:  Vec::new(),
            parents:   Vec::new(),
            friends:   Vec::new(),
            siblings:  Vec::new(),
            crossings: Vec::new(),
        }
    }

    #[inline]
    pub fn start(&self) -> PointId {
        self.polyline[0]
    }

    #[inline]
    pub fn end(&self) -> PointId {
        self.polyline[self.polyline.len() - 1]
    }

    /// Vertex right after the start; gives the road's leaving direction.
    #[inline]
    pub fn first_step(&self) -> PointId {
        self.polyline[1]
    }

    /// Vertex right before the end; gives the road's arriving direction.
    #[inline]
    pub fn last_step(&self) -> PointId {
        self.polyline[self.polyline.len() - 2]
    }

    /// `B` for both-way roads, `F` otherwise.
    pub fn direction_code(&self) -> char {
        if self.both_way { 'B' } else { 'F' }
    }

    pub(crate) fn add_layer(&mut self, layer: i32) {
        if !self.layers.contains(&layer) {
            self.layers.push(layer);
        }
    }
}
