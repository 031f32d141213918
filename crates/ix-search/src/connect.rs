//! Run the search over every crossing point and record the results.

use log::{debug, info};

use ix_core::{CrossingId, Progress, SearchBounds, Stage};
use ix_network::RoadNetwork;

use crate::{ConnectionFinder, SearchOutcome, merge_path};

const PROGRESS_EVERY: usize = 1_000;

/// Search every crossing point with `finder` and store connecting roads,
/// merged paths and the `connection_exists` flag.  Returns the number of
/// connected crossing points.
///
/// Crossings are processed in arena order.  With the `parallel` feature the
/// searches run concurrently and are applied in that same order afterwards.
pub fn connect_all<F, P>(
    net:      &mut RoadNetwork,
    finder:   &F,
    bounds:   &SearchBounds,
    progress: &mut P,
) -> usize
where
    F: ConnectionFinder + ?Sized,
    P: Progress + ?Sized,
{
    let total = net.crossings.len();
    progress.on_stage_start(Stage::SearchConnections, total);

    let outcomes = search_all(net, finder, bounds, progress);

    let mut connected = 0usize;
    for (id, outcome) in net.crossing_ids().zip(outcomes) {
        if apply(net, id, outcome) {
            connected += 1;
        }
    }

    info!("{connected} of {total} crossing points are connected");
    progress.on_stage_end(Stage::SearchConnections, connected);
    connected
}

#[cfg(not(feature = "parallel"))]
fn search_all<F, P>(net: &RoadNetwork, finder: &F, bounds: &SearchBounds, progress: &mut P) -> Vec<SearchOutcome>
where
    F: ConnectionFinder + ?Sized,
    P: Progress + ?Sized,
{
    let total = net.crossings.len();
    net.crossing_ids()
        .enumerate()
        .map(|(done, id)| {
            if done % PROGRESS_EVERY == 0 {
                progress.on_progress(Stage::SearchConnections, done, total);
            }
            finder.find(net, id, bounds)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn search_all<F, P>(net: &RoadNetwork, finder: &F, bounds: &SearchBounds, progress: &mut P) -> Vec<SearchOutcome>
where
    F: ConnectionFinder + ?Sized,
    P: Progress + ?Sized,
{
    use rayon::prelude::*;

    let total = net.crossings.len();
    let ids: Vec<CrossingId> = net.crossing_ids().collect();
    let mut outcomes = Vec::with_capacity(total);
    for chunk in ids.chunks(PROGRESS_EVERY) {
        progress.on_progress(Stage::SearchConnections, outcomes.len(), total);
        outcomes.par_extend(chunk.par_iter().map(|&id| finder.find(net, id, bounds)));
    }
    outcomes
}

/// Store one outcome.  Returns whether the crossing is connected.
fn apply(net: &mut RoadNetwork, id: CrossingId, outcome: SearchOutcome) -> bool {
    let found = outcome.found();
    let polylines: Vec<_> = outcome.paths.iter().map(|p| merge_path(net, p)).collect();

    let c = net.crossing_mut(id);
    c.connections = polylines;
    for road in outcome.connecting_roads {
        c.add_connecting_road(road);
    }
    if found {
        c.connection_exists = true;
        let seed = c.bottom;
        c.add_connecting_road(seed);
        debug!("{id}: {} paths, {} connecting roads", outcome.paths.len(), c.connecting_roads.len());
    }
    found
}

/// Reset every crossing point's search results and junction membership so
/// that [`connect_all`] can run again with different bounds.
pub fn clear_connections(net: &mut RoadNetwork) {
    for c in &mut net.crossings {
        c.clear_connection();
    }
}
