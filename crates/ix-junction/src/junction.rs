//! Junctions and their metrics.

use ix_core::{CrossingId, JunctionId, PointId, RoadId};

use crate::PointType;

/// Counts describing one junction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JunctionMetrics {
    pub crossing_points: usize,
    /// Roads entering or leaving the junction, paired: `min(starts, ends)`
    /// where a START_END point counts on both sides.
    pub sides: usize,
    /// Distinct layers over member roads.
    pub levels: usize,
    /// Roads that join at their start and split at their end, or one-way
    /// roads with SPLIT_JOIN at both ends.
    pub conflict_roads: usize,
    pub intersection_points: usize,
}

/// A connected group of linked crossing points and the roads joining them.
#[derive(Clone, Debug)]
pub struct Junction {
    pub id: JunctionId,
    /// External number, sequential from 1.
    pub number: u32,
    pub crossings: Vec<CrossingId>,
    /// Member roads in insertion order.
    pub roads: Vec<RoadId>,
    /// Classified road ends in first-visit order.
    pub point_types: Vec<(PointId, PointType)>,
    pub metrics: JunctionMetrics,
}

impl Junction {
    pub(crate) fn new(id: JunctionId) -> Self {
        Self {
            id,
            number:      id.0 + 1,
            crossings:   Vec::new(),
            roads:       Vec::new(),
            point_types: Vec::new(),
            metrics:     JunctionMetrics::default(),
        }
    }

    pub(crate) fn add_road(&mut self, road: RoadId) -> bool {
        if self.roads.contains(&road) {
            return false;
        }
        self.roads.push(road);
        true
    }

    pub fn point_type(&self, point: PointId) -> Option<PointType> {
        self.point_types.iter().find(|(p, _)| *p == point).map(|&(_, t)| t)
    }
}
