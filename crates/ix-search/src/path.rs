//! Road sequence → polyline.

use ix_core::{PointId, RoadId};
use ix_network::RoadNetwork;

/// Join the polylines of `roads` into one vertex sequence.
///
/// The first road is reversed when its start touches the second road.  Each
/// following road is appended forward or reversed, whichever continues from
/// the last vertex; merging stops at the first road that does not touch.
pub fn merge_path(net: &RoadNetwork, roads: &[RoadId]) -> Vec<PointId> {
    let (first, second) = match roads {
        [] => return Vec::new(),
        [only] => return net.road(*only).polyline.clone(),
        [first, second, ..] => (net.road(*first), net.road(*second)),
    };

    let mut out = first.polyline.clone();
    if first.start() == second.start() || first.start() == second.end() {
        out.reverse();
    }

    for &id in &roads[1..] {
        let road = net.road(id);
        let tail = out[out.len() - 1];
        if tail == road.start() {
            out.pop();
            out.extend_from_slice(&road.polyline);
        } else if tail == road.end() {
            out.pop();
            out.extend(road.polyline.iter().rev());
        } else {
            break;
        }
    }
    out
}
