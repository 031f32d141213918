//! Terminal-point classification and junction metrics.
//!
//! Every start and end point of a junction's member roads gets a
//! [`PointType`] from the roads entering and leaving it, split into those
//! inside the junction and those outside.  Where two members meet two
//! members, the turn angles around the point and the traffic hand decide
//! between a weaving point and a plain crossing of streams.

use log::trace;
use rustc_hash::FxHashSet;

use ix_core::{PointId, Progress, RoadId, Stage, TrafficHand};
use ix_network::RoadNetwork;

use crate::{Junction, JunctionMetrics};

/// Role of a road end within a junction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointType {
    /// Traffic enters the junction here.
    Start,
    /// Traffic leaves the junction here.
    End,
    /// Traffic both enters and leaves here.
    StartEnd,
    /// One member road divides into several.
    Split,
    /// Several member roads merge into one.
    Join,
    /// Streams merge and divide again at the same point.
    SplitJoin,
    /// Streams cross at grade.
    Intersection,
}

impl PointType {
    pub fn as_str(self) -> &'static str {
        match self {
            PointType::Start => "START",
            PointType::End => "END",
            PointType::StartEnd => "START_END",
            PointType::Split => "SPLIT",
            PointType::Join => "JOIN",
            PointType::SplitJoin => "SPLIT_JOIN",
            PointType::Intersection => "INTERSECTION",
        }
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Point classification ──────────────────────────────────────────────────────

/// The roads meeting at one point, split by membership.
struct Incidence<'a> {
    net: &'a RoadNetwork,
    axis: PointId,
    hand: TrafficHand,
    incoming: &'a [RoadId],
    outgoing: &'a [RoadId],
    member_in: Vec<RoadId>,
    member_out: Vec<RoadId>,
}

impl Incidence<'_> {
    fn number(&self, road: RoadId) -> u32 {
        self.net.road(road).number
    }

    fn both_way(&self, road: RoadId) -> bool {
        self.net.road(road).both_way
    }

    /// Leaving direction of an outgoing road.
    fn leaving(&self, road: RoadId) -> PointId {
        self.net.road(road).first_step()
    }

    /// Arriving direction of an incoming road.
    fn arriving(&self, road: RoadId) -> PointId {
        self.net.road(road).last_step()
    }

    /// Sweep around the axis from the direction of `a` to that of `b`.
    fn sweep(&self, a: PointId, b: PointId) -> f64 {
        if a == b {
            return 0.0;
        }
        let axis = self.net.pos(self.axis);
        axis.sweep_deg(self.net.pos(a), self.net.pos(b))
    }

    /// Type from the raw incidence counts, used when the angles do not
    /// indicate weaving.
    fn by_counts(&self) -> PointType {
        match (self.incoming.len(), self.outgoing.len()) {
            (2, 2) => PointType::Intersection,
            (2, _) => PointType::End,
            (_, 2) => PointType::Start,
            _ => PointType::StartEnd,
        }
    }

    /// Weaving when `cond` holds under right-hand traffic, or fails to hold
    /// under left-hand traffic; otherwise decided by counts.
    fn weave_or_counts(&self, cond: bool) -> PointType {
        if cond == self.hand.is_right() { PointType::SplitJoin } else { self.by_counts() }
    }

    /// Weaving or intersection, by the same handedness rule.
    fn weave_or_cross(&self, cond: bool) -> PointType {
        if cond == self.hand.is_right() { PointType::SplitJoin } else { PointType::Intersection }
    }

    fn classify(&self) -> PointType {
        let (ni, no) = (self.incoming.len(), self.outgoing.len());
        let (fi, fo) = (self.member_in.len(), self.member_out.len());

        match (fi, fo) {
            (2, 2) => self.two_by_two(),
            (fi, fo) if fi >= 2 && fo >= 2 => {
                let extra_in = ni > fi;
                let extra_out = no > fo;
                match (extra_in, extra_out) {
                    (true, true) => PointType::StartEnd,
                    (true, false) => PointType::Start,
                    (false, true) => PointType::End,
                    (false, false) => PointType::Intersection,
                }
            }
            (0, _) => PointType::Start,
            (_, 0) => PointType::End,
            (1, 1) => self.one_by_one(),
            (1, _) => self.one_in_many_out(),
            _ => self.many_in_one_out(),
        }
    }

    fn two_by_two(&self) -> PointType {
        let (ni, no) = (self.incoming.len(), self.outgoing.len());
        let [o0, o1] = [self.member_out[0], self.member_out[1]];
        let [i0, i1] = [self.member_in[0], self.member_in[1]];
        let (n_o0, n_o1) = (self.number(o0), self.number(o1));
        let (n_i0, n_i1) = (self.number(i0), self.number(i1));

        let a_oo = self.sweep(self.leaving(o0), self.leaving(o1));
        let a_i0 = self.sweep(self.leaving(o0), self.arriving(i0));
        let a_i1 = self.sweep(self.leaving(o0), self.arriving(i1));

        if self.both_way(o0) && (n_o0 == n_i0 || n_o0 == n_i1) {
            if self.both_way(o1) && (n_o1 == n_i1 || n_o1 == n_i0) {
                return if no == 2 {
                    PointType::Start
                } else if ni == 2 {
                    PointType::End
                } else {
                    PointType::StartEnd
                };
            }
            // o0 leaves along the way i0 or i1 arrived; compare the other one
            return if a_i0 == 0.0 {
                self.weave_or_counts(a_i1 < a_oo)
            } else {
                self.weave_or_counts(a_i0 < a_oo)
            };
        }
        if n_o1 == n_i1 || n_o1 == n_i0 {
            return if a_oo == a_i1 {
                self.weave_or_counts(a_i0 > a_oo)
            } else {
                self.weave_or_counts(a_i1 > a_oo)
            };
        }
        if ni > 2 {
            return if no > 2 { PointType::StartEnd } else { PointType::Start };
        }
        if no > 2 {
            return PointType::End;
        }
        // both arrivals on the same side of the leaving pair: streams do not cross
        if (a_oo < a_i0 && a_oo < a_i1) || (a_oo > a_i0 && a_oo > a_i1) {
            PointType::Intersection
        } else {
            PointType::SplitJoin
        }
    }

    fn one_by_one(&self) -> PointType {
        let (ni, no) = (self.incoming.len(), self.outgoing.len());
        let (road_in, road_out) = (self.member_in[0], self.member_out[0]);

        if no == 1 {
            return if ni == 1 { PointType::StartEnd } else { PointType::Start };
        }
        if ni == 1 {
            return PointType::End;
        }
        if self.number(road_out) == self.number(road_in) {
            return PointType::StartEnd;
        }
        match (ni, no) {
            (2, 2) if self.both_way(road_out) => PointType::End,
            (2, 2) if self.both_way(road_in) => PointType::Start,
            (2, 2) => PointType::StartEnd,
            (2, _) if self.both_way(road_out) => PointType::End,
            (_, 2) if self.both_way(road_in) => PointType::Start,
            _ => PointType::StartEnd,
        }
    }

    fn one_in_many_out(&self) -> PointType {
        let (ni, no) = (self.incoming.len(), self.outgoing.len());
        let fo = self.member_out.len();

        if ni == 1 {
            return PointType::Split;
        }
        if no > 2 {
            return if no == fo { PointType::Intersection } else { PointType::StartEnd };
        }
        if ni != 2 {
            return PointType::Start;
        }

        let i0 = self.member_in[0];
        let other_in = if self.incoming[0] == i0 { self.incoming[1] } else { self.incoming[0] };
        let [o0, o1] = [self.member_out[0], self.member_out[1]];
        let n_i0 = self.number(i0);
        if n_i0 == self.number(o0) || n_i0 == self.number(o1) {
            return PointType::Start;
        }

        let a_in = self.sweep(self.leaving(o0), self.arriving(i0));
        let a_out = self.sweep(self.leaving(o0), self.leaving(o1));
        let n_other = self.number(other_in);
        if n_other == self.number(o0) {
            self.weave_or_cross(a_in < a_out)
        } else if n_other == self.number(o1) {
            self.weave_or_cross(a_in > a_out)
        } else {
            PointType::Start
        }
    }

    fn many_in_one_out(&self) -> PointType {
        let (ni, no) = (self.incoming.len(), self.outgoing.len());
        let fi = self.member_in.len();

        if no == 1 {
            return PointType::Join;
        }
        if ni > 2 {
            return if ni == fi { PointType::Intersection } else { PointType::StartEnd };
        }
        if no != 2 {
            return PointType::End;
        }

        let o0 = self.member_out[0];
        let other_out = if self.outgoing[0] == o0 { self.outgoing[1] } else { self.outgoing[0] };
        let [i0, i1] = [self.member_in[0], self.member_in[1]];
        let (n_o0, n_other) = (self.number(o0), self.number(other_out));
        let a_other = self.sweep(self.leaving(o0), self.leaving(other_out));

        if self.number(i0) == n_o0 {
            PointType::End
        } else if self.number(i0) == n_other {
            self.weave_or_cross(self.sweep(self.leaving(o0), self.arriving(i1)) > a_other)
        } else if self.number(i1) == n_o0 {
            PointType::End
        } else if self.number(i1) == n_other {
            self.weave_or_cross(self.sweep(self.leaving(o0), self.arriving(i0)) > a_other)
        } else {
            PointType::End
        }
    }
}

/// Classify `point` against the member roads of one junction.
///
/// Incoming and outgoing roads are taken from the point's adjacency in
/// registration order; `members` decides which of them belong to the
/// junction.
pub fn classify_point(
    net:     &RoadNetwork,
    point:   PointId,
    members: &FxHashSet<RoadId>,
    hand:    TrafficHand,
) -> PointType {
    let p = net.points.get(point);
    let incidence = Incidence {
        net,
        axis: point,
        hand,
        incoming: &p.incoming,
        outgoing: &p.outgoing,
        member_in: p.incoming.iter().copied().filter(|r| members.contains(r)).collect(),
        member_out: p.outgoing.iter().copied().filter(|r| members.contains(r)).collect(),
    };
    incidence.classify()
}

// ── Junction analysis ─────────────────────────────────────────────────────────

/// Fill in point types and metrics of one junction.
///
/// Each road end is classified once, the first time it is reached while
/// walking member roads in order.
pub fn classify_junction(net: &RoadNetwork, junction: &mut Junction, hand: TrafficHand) {
    let members: FxHashSet<RoadId> = junction.roads.iter().copied().collect();
    let mut layers: Vec<i32> = Vec::new();
    junction.point_types.clear();

    for &road in &junction.roads {
        let r = net.road(road);
        for &layer in &r.layers {
            if !layers.contains(&layer) {
                layers.push(layer);
            }
        }
        for p in [r.start(), r.end()] {
            if junction.point_types.iter().any(|(q, _)| *q == p) {
                continue;
            }
            let t = classify_point(net, p, &members, hand);
            trace!("junction {}: {} is {t}", junction.number, net.pos(p));
            junction.point_types.push((p, t));
        }
    }

    let (mut starts, mut ends, mut intersections) = (0, 0, 0);
    for &(_, t) in &junction.point_types {
        match t {
            PointType::Start => starts += 1,
            PointType::End => ends += 1,
            PointType::StartEnd => {
                starts += 1;
                ends += 1;
            }
            PointType::Intersection => intersections += 1,
            _ => {}
        }
    }

    let conflict_roads = junction
        .roads
        .iter()
        .filter(|&&road| {
            let r = net.road(road);
            let at_start = junction.point_type(r.start());
            let at_end = junction.point_type(r.end());
            (at_start == Some(PointType::Join) && at_end == Some(PointType::Split))
                || (!r.both_way
                    && at_start == Some(PointType::SplitJoin)
                    && at_end == Some(PointType::SplitJoin))
        })
        .count();

    junction.metrics = JunctionMetrics {
        crossing_points: junction.crossings.len(),
        sides: starts.min(ends),
        levels: layers.len(),
        conflict_roads,
        intersection_points: intersections,
    };
}

/// Classify every junction, reporting progress per junction.
pub fn classify_junctions<P: Progress + ?Sized>(
    net:       &RoadNetwork,
    junctions: &mut [Junction],
    hand:      TrafficHand,
    progress:  &mut P,
) {
    let total = junctions.len();
    progress.on_stage_start(Stage::ClassifyJunctions, total);
    for (i, junction) in junctions.iter_mut().enumerate() {
        classify_junction(net, junction, hand);
        progress.on_progress(Stage::ClassifyJunctions, i + 1, total);
    }
    progress.on_stage_end(Stage::ClassifyJunctions, total);
}
