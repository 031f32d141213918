//! Directed shadows for both-way roads.
//!
//! After crossing detection every both-way road gets a shadow copy with the
//! reversed polyline, so that the connection search only ever follows roads
//! in their direction of travel.  Each crossing attachment of the original
//! is mirrored onto the shadow with its distance measured from the other
//! end.

use ix_core::{Progress, RoadId, Stage};

use crate::{CrossingPoint, Road, RoadNetwork};

/// Create shadow roads and mirrored crossings.  Returns the number of
/// shadows created.
pub fn split_both_way_roads<P: Progress + ?Sized>(net: &mut RoadNetwork, progress: &mut P) -> usize {
    let originals = net.roads.len();
    progress.on_stage_start(Stage::SplitBothWay, originals);

    let mut created = 0usize;
    for original in (0..originals).map(RoadId::from_index) {
        if !net.road(original).both_way {
            continue;
        }
        let shadow = net.push_road(shadow_of(net.road(original)));
        created += 1;

        // Attachments as they stand now, including mirrors added by earlier
        // splits of roads crossing this one.
        let length = net.road(original).length_m;
        let attachments = net.road(original).crossings.clone();
        for a in attachments {
            let c = net.crossing(a.crossing);
            let mirrored = if a.is_top {
                CrossingPoint::new(c.point, shadow, c.bottom, length - c.top_distance_m, c.bottom_distance_m)
            } else {
                CrossingPoint::new(c.point, c.top, shadow, c.top_distance_m, length - c.bottom_distance_m)
            };
            net.push_crossing(mirrored);
        }

        net.link_start(shadow);
        net.link_end(shadow);
    }

    progress.on_stage_end(Stage::SplitBothWay, created);
    created
}

fn shadow_of(road: &Road) -> Road {
    let mut polyline = road.polyline.clone();
    polyline.reverse();

    let mut shadow = Road::new(road.number, polyline, true);
    shadow.length_m = road.length_m;
    shadow.layers = road.layers.clone();
    shadow.is_copy = true;
    shadow
}

/// Order every road's crossing attachments by distance from its start.
/// Ties keep attachment order.
pub fn sort_crossing_refs(net: &mut RoadNetwork) {
    let crossings = &net.crossings;
    for road in &mut net.roads {
        road.crossings.sort_by(|x, y| {
            let dx = crossings[x.crossing.index()].distance_m(x.is_top);
            let dy = crossings[y.crossing.index()].distance_m(y.is_top);
            dx.total_cmp(&dy)
        });
    }
}
