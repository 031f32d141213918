//! Segment chains → roads.
//!
//! For every segment not yet consumed, walk backward to the start of its
//! chain, then forward to the end, collecting segments into one road.  A
//! chain ends at any point that does not have exactly two incident segments
//! agreeing on direction.

use log::warn;

use ix_core::{PointId, Progress, RoadId, SegmentId, Stage};

use crate::{Road, RoadNetwork};

const PROGRESS_EVERY: usize = 10_000;

/// Outcome of stepping through a point while following a chain.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Step {
    /// The point ends the road.
    EndOfRoad,
    /// The walk came back to its protection point.
    Cycle,
    /// Continue with this segment.
    Next(SegmentId),
    /// The point's two segments do not include the one being walked.
    Detached,
}

/// Whether `p` terminates a road.
///
/// True unless `p` has exactly two incident segments that are both both-way,
/// or both one-way with one ending and the other starting at `p`.
pub fn is_end_of_road(net: &RoadNetwork, p: PointId) -> bool {
    let [a, b] = net.points.get(p).segments[..] else {
        return true;
    };
    let (a, b) = (net.segments.get(a), net.segments.get(b));
    if a.both_way != b.both_way {
        return true;
    }
    !a.both_way && (a.end == b.end || a.start == b.start)
}

fn step(net: &RoadNetwork, p: PointId, current: SegmentId, protection: PointId) -> Step {
    if is_end_of_road(net, p) {
        return Step::EndOfRoad;
    }
    if p == protection {
        return Step::Cycle;
    }
    match net.points.get(p).segments[..] {
        [a, b] if a == current => Step::Next(b),
        [a, b] if b == current => Step::Next(a),
        _ => Step::Detached,
    }
}

/// Build roads from every usable segment in ingestion order.  Returns the
/// number of roads created.
pub fn build_roads<P: Progress + ?Sized>(net: &mut RoadNetwork, progress: &mut P) -> usize {
    let total = net.segments.len();
    progress.on_stage_start(Stage::Aggregate, total);

    let mut next_number = 1u32;
    let mut corrupted = 0usize;

    for (done, origin) in net.segments.ids().enumerate() {
        if done % PROGRESS_EVERY == 0 {
            progress.on_progress(Stage::Aggregate, done, total);
        }
        let seg = net.segments.get(origin);
        if seg.aggregated || seg.corrupted {
            continue;
        }

        match find_road_start(net, origin) {
            Ok((start, first)) => {
                let id = grow_road(net, start, first, next_number);
                net.link_start(id);
                net.link_end(id);
                next_number += 1;
            }
            Err(kind) => {
                let seg = net.segments.get_mut(origin);
                seg.corrupted = true;
                corrupted += 1;
                warn!(
                    "segment {origin} ({:?}): {} while looking for its road start; skipped",
                    seg.start,
                    match kind {
                        Step::Cycle => "closed loop without a branch point",
                        _ => "detached from its neighbours",
                    },
                );
            }
        }
    }

    if corrupted > 0 {
        warn!("{corrupted} segments marked corrupted during aggregation");
    }
    let created = net.roads.len();
    progress.on_stage_end(Stage::Aggregate, created);
    created
}

/// Walk backward from `origin` to the point where its road starts.
///
/// Returns that point and the first segment of the road, or the failing
/// step (`Cycle` or `Detached`).
fn find_road_start(net: &RoadNetwork, origin: SegmentId) -> Result<(PointId, SegmentId), Step> {
    let protection = net.segments.get(origin).end;
    let mut previous = protection;
    let mut current = origin;

    loop {
        let seg = net.segments.get(current);
        let next = if seg.both_way && seg.end != previous { seg.end } else { seg.start };

        match step(net, next, current, protection) {
            Step::EndOfRoad => return Ok((next, current)),
            Step::Next(seg) => {
                previous = next;
                current = seg;
            }
            failed => return Err(failed),
        }
    }
}

/// Walk forward from `start` along `first`, consuming segments into a new
/// road numbered `number`.
fn grow_road(net: &mut RoadNetwork, start: PointId, first: SegmentId, number: u32) -> RoadId {
    let id = RoadId::from_index(net.roads.len());
    let mut road = Road::new(number, vec![start], net.segments.get(first).both_way);
    let mut current = first;

    loop {
        let tail = road.polyline[road.polyline.len() - 1];
        let seg = net.segments.get_mut(current);
        if seg.both_way && seg.start != tail {
            seg.flip();
        }
        seg.aggregated = true;
        seg.road = Some(id);

        let end = seg.end;
        road.polyline.push(end);
        road.segments.push(current);
        road.length_m += seg.length_m;
        road.add_layer(seg.layer);

        match step(net, end, current, start) {
            Step::Next(next) if !net.segments.get(next).aggregated => current = next,
            Step::Detached => {
                warn!("segment {current} ends at a detached point {end}; road {number} cut there");
                net.segments.get_mut(current).corrupted = true;
                break;
            }
            _ => break,
        }
    }

    net.push_road(road)
}
