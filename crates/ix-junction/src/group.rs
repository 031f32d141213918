//! Connected components of linked crossing points.

use log::debug;

use ix_core::{JunctionId, Progress, RoadId, Stage};
use ix_network::RoadNetwork;

use crate::Junction;

/// Group connected crossing points into junctions.
///
/// Each connected crossing point not yet in a junction seeds a new one.  The
/// junction then absorbs every connecting road of its crossings and, through
/// those roads' attachments, every further connected crossing point, until
/// nothing new is reachable.  Sets `CrossingPoint::junction` as it goes.
pub fn group_junctions<P: Progress + ?Sized>(net: &mut RoadNetwork, progress: &mut P) -> Vec<Junction> {
    progress.on_stage_start(Stage::GroupJunctions, net.crossings.len());
    let mut junctions = Vec::new();

    for seed in net.crossing_ids() {
        let c = net.crossing(seed);
        if !c.connection_exists || c.junction.is_some() {
            continue;
        }

        let mut junction = Junction::new(JunctionId::from_index(junctions.len()));
        junction.crossings.push(seed);
        let roads = {
            let c = net.crossing_mut(seed);
            c.junction = Some(junction.id);
            c.connecting_roads.clone()
        };
        for road in roads {
            absorb(net, &mut junction, road);
        }

        debug!(
            "junction {}: {} crossings, {} roads",
            junction.number,
            junction.crossings.len(),
            junction.roads.len()
        );
        junctions.push(junction);
    }

    progress.on_stage_end(Stage::GroupJunctions, junctions.len());
    junctions
}

/// Add `road` to the junction and claim the unassigned connected crossing
/// points along it.
fn absorb(net: &mut RoadNetwork, junction: &mut Junction, road: RoadId) {
    junction.add_road(road);

    for i in 0..net.road(road).crossings.len() {
        let id = net.road(road).crossings[i].crossing;
        let c = net.crossing_mut(id);
        if !c.connection_exists || c.junction.is_some() {
            continue;
        }
        c.junction = Some(junction.id);
        junction.crossings.push(id);

        let roads = c.connecting_roads.clone();
        for next in roads {
            absorb(net, junction, next);
        }
    }
}
