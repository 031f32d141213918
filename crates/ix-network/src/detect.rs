//! Grade-separated crossing detection.
//!
//! Every pair of segments sharing a grid cell is tested once, in the first
//! cell (key order) the two have in common.  Pairs on the same layer, or
//! involving a corrupted segment, are skipped.  When several pairs cross at
//! the same point, the pair that comes first in ingestion order creates the
//! crossing point there and the others are ignored.

use log::debug;
use rustc_hash::FxHashSet;

use ix_core::{GeoPoint, PointId, Progress, RoadId, SegmentId, Stage};
use ix_spatial::{BucketKey, Segment, first_shared, intersection};

use crate::{CrossingPoint, RoadNetwork};

/// A crossing found geometrically but not yet registered.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    first:  SegmentId,
    second: SegmentId,
    pos:    GeoPoint,
}

/// Find all crossings and attach them to their roads.  Returns the number
/// of crossing points created.
pub fn find_crossings<P: Progress + ?Sized>(net: &mut RoadNetwork, progress: &mut P) -> usize {
    let cells: Vec<(BucketKey, &[SegmentId])> = net.segments.buckets().collect();
    progress.on_stage_start(Stage::DetectCrossings, cells.len());

    let mut candidates = collect_candidates(net, &cells);
    // Segment ids follow ingestion order, and the sort is stable.
    candidates.sort_by_key(|c| (c.first, c.second));
    progress.on_progress(Stage::DetectCrossings, cells.len(), cells.len());

    let mut registered: FxHashSet<PointId> = FxHashSet::default();
    let mut created = 0usize;

    for c in candidates {
        let point = net.points.get_or_create(c.pos.lat, c.pos.lon);
        if !registered.insert(point) {
            debug!("crossing at {} already registered; pair {}/{} ignored", c.pos, c.first, c.second);
            continue;
        }
        let (Some(top), Some(bottom)) = (net.segments.get(c.first).road, net.segments.get(c.second).road) else {
            continue;
        };
        let top_distance_m = distance_from_start(net, top, c.first, c.pos);
        let bottom_distance_m = distance_from_start(net, bottom, c.second, c.pos);
        net.push_crossing(CrossingPoint::new(point, top, bottom, top_distance_m, bottom_distance_m));
        created += 1;
    }

    progress.on_stage_end(Stage::DetectCrossings, created);
    created
}

#[cfg(not(feature = "parallel"))]
fn collect_candidates(net: &RoadNetwork, cells: &[(BucketKey, &[SegmentId])]) -> Vec<Candidate> {
    cells
        .iter()
        .flat_map(|&(key, ids)| cell_candidates(net, key, ids))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_candidates(net: &RoadNetwork, cells: &[(BucketKey, &[SegmentId])]) -> Vec<Candidate> {
    use rayon::prelude::*;

    // `collect` on an indexed parallel iterator keeps cell order.
    let per_cell: Vec<Vec<Candidate>> = cells
        .par_iter()
        .map(|&(key, ids)| cell_candidates(net, key, ids))
        .collect();
    per_cell.into_iter().flatten().collect()
}

/// Candidate crossings in one cell, in pair order.
fn cell_candidates(net: &RoadNetwork, key: BucketKey, ids: &[SegmentId]) -> Vec<Candidate> {
    let mut out = Vec::new();
    for (i, &first) in ids.iter().enumerate() {
        let a = net.segments.get(first);
        if !usable(a) {
            continue;
        }
        for &second in &ids[i + 1..] {
            let b = net.segments.get(second);
            if !usable(b) || a.layer == b.layer || first_shared(&a.cells, &b.cells) != Some(key) {
                continue;
            }
            if let Some(pos) = intersection(&net.points, a, b) {
                out.push(Candidate { first, second, pos });
            }
        }
    }
    out
}

#[inline]
fn usable(seg: &Segment) -> bool {
    !seg.corrupted && seg.road.is_some()
}

/// Length along `road` from its start to `pos`, which lies on `seg`.
fn distance_from_start(net: &RoadNetwork, road: RoadId, seg: SegmentId, pos: GeoPoint) -> f64 {
    let mut distance = 0.0;
    for &s in &net.road(road).segments {
        let s_ref = net.segments.get(s);
        if s == seg {
            return distance + net.points.pos(s_ref.start).distance_m(pos);
        }
        distance += s_ref.length_m;
    }
    distance
}
