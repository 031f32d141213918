//! The connection search.

use ix_core::{CrossingId, PointId, RoadId, SearchBounds};
use ix_network::RoadNetwork;

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// Result of searching one crossing point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    /// Every road sequence from the seed to the target, in discovery order.
    pub paths: Vec<Vec<RoadId>>,
    /// Roads whose subtree reached the target, first insertion wins.  The
    /// seed itself is not included.
    pub connecting_roads: Vec<RoadId>,
}

impl SearchOutcome {
    #[inline]
    pub fn found(&self) -> bool {
        !self.paths.is_empty()
    }
}

// ── ConnectionFinder trait ────────────────────────────────────────────────────

/// Pluggable connection search.
///
/// Implementations must be `Send + Sync` so one finder can serve all Rayon
/// workers when the `parallel` feature is on.
pub trait ConnectionFinder: Send + Sync {
    /// Search from the bottom road of `crossing` to its top road.
    fn find(&self, net: &RoadNetwork, crossing: CrossingId, bounds: &SearchBounds) -> SearchOutcome;
}

// ── BoundedSearch ─────────────────────────────────────────────────────────────

/// Exhaustive depth-first search limited by depth, length and direction
/// changes.
///
/// From the seed it runs twice, once walking forward and once walking
/// backward.  Forward it tries children, then (budget permitting) friends;
/// backward it tries parents, then (budget permitting) siblings.  A road is
/// not entered when the point it would add to the walk (its end when walking
/// forward, its start when walking backward) is already on the walk.
pub struct BoundedSearch;

impl ConnectionFinder for BoundedSearch {
    fn find(&self, net: &RoadNetwork, crossing: CrossingId, bounds: &SearchBounds) -> SearchOutcome {
        let c = net.crossing(crossing);
        let seed = net.road(c.bottom);

        let mut walk = Walk {
            net,
            bounds,
            target:     c.top,
            roads:      Vec::new(),
            visited:    vec![seed.start(), seed.end()],
            paths:      Vec::new(),
            connecting: Vec::new(),
        };
        walk.enter(c.bottom, true, bounds.direction_changes, 0.0);

        walk.visited = vec![seed.end(), seed.start()];
        walk.enter(c.bottom, false, bounds.direction_changes, 0.0);

        SearchOutcome { paths: walk.paths, connecting_roads: walk.connecting }
    }
}

// ── Walk state ────────────────────────────────────────────────────────────────

struct Walk<'a> {
    net:        &'a RoadNetwork,
    bounds:     &'a SearchBounds,
    target:     RoadId,
    /// Roads on the current branch, seed first.
    roads:      Vec<RoadId>,
    /// Points on the current branch; guards against loops.
    visited:    Vec<PointId>,
    paths:      Vec<Vec<RoadId>>,
    connecting: Vec<RoadId>,
}

impl Walk<'_> {
    /// Put `road` on the branch and explore from it.  Returns whether the
    /// target was reached through it.
    fn enter(&mut self, road: RoadId, forward: bool, budget: u8, length_m: f64) -> bool {
        self.roads.push(road);
        if !self.bounds.admits(self.roads.len(), length_m) {
            self.roads.pop();
            return false;
        }
        if road == self.target {
            self.paths.push(self.roads.clone());
            self.roads.pop();
            return true;
        }

        let net = self.net;
        let r = net.road(road);
        let mut found = false;

        if forward {
            for &next in &r.children {
                found |= self.step(next, net.road(next).end(), true, budget, length_m);
            }
            if budget > 0 {
                for &next in &r.friends {
                    found |= self.step(next, net.road(next).start(), false, budget - 1, length_m);
                }
            }
        } else {
            for &next in &r.parents {
                found |= self.step(next, net.road(next).start(), false, budget, length_m);
            }
            if budget > 0 {
                for &next in &r.siblings {
                    found |= self.step(next, net.road(next).end(), true, budget - 1, length_m);
                }
            }
        }

        self.roads.pop();
        found
    }

    fn step(&mut self, next: RoadId, guard: PointId, forward: bool, budget: u8, length_m: f64) -> bool {
        if self.visited.contains(&guard) {
            return false;
        }
        self.visited.push(guard);
        let found = self.enter(next, forward, budget, length_m + self.net.road(next).length_m);
        if found && !self.connecting.contains(&next) {
            self.connecting.push(next);
        }
        self.visited.pop();
        found
    }
}
