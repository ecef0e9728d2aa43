//! Nearest-zone search over the [`WorldGraph`].
//!
//! [`PathFinder`] answers one question: starting from a zone, which is the
//! closest zone (in hops) satisfying a predicate, and which neighbour of the
//! origin leads there? The search expands one hop layer at a time and stops
//! at the first layer holding a match. Within that layer the first zone in
//! enqueue order wins, which follows adjacency-list order.
//!
//! Search bookkeeping (visited marks and parent links) lives in buffers owned
//! by the finder, indexed by zone id and cleared at the start of every call,
//! so a search never observes state left over from a previous one.

use crate::state::{WorldGraph, Zone, ZoneId};

/// Outcome of a successful search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathHit {
    /// The nearest zone satisfying the predicate.
    pub target: ZoneId,
    /// Neighbour of the origin on the discovered shortest path.
    ///
    /// Equal to `target` at distance 1 and to the origin at distance 0.
    pub first_step: ZoneId,
    /// Minimal hop count from the origin to `target`.
    pub distance: u32,
}

/// Reusable layered breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    visited: Vec<bool>,
    parent: Vec<Option<ZoneId>>,
    layer: Vec<ZoneId>,
    next: Vec<ZoneId>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the nearest zone satisfying `predicate`, or `None` if no
    /// reachable zone does.
    ///
    /// The origin itself is tested first (distance 0). When the origin is
    /// contested, neighbours held by another player are removed from the
    /// frontier: a unit may not fall back through enemy ground.
    pub fn find_nearest<F>(
        &mut self,
        graph: &WorldGraph,
        origin: ZoneId,
        predicate: F,
    ) -> Option<PathHit>
    where
        F: Fn(&Zone) -> bool,
    {
        self.reset(graph.zone_count());

        let start = graph.zone(origin);
        if predicate(start) {
            return Some(PathHit {
                target: origin,
                first_step: origin,
                distance: 0,
            });
        }

        self.visited[origin.index()] = true;
        if start.is_contested() {
            for &neighbour in graph.neighbours(origin) {
                if graph.zone(neighbour).is_hostile() {
                    self.visited[neighbour.index()] = true;
                }
            }
        }
        self.layer.push(origin);

        let mut distance = 0;
        while !self.layer.is_empty() {
            distance += 1;
            self.next.clear();

            for i in 0..self.layer.len() {
                let current = self.layer[i];
                for &neighbour in graph.neighbours(current) {
                    if self.visited[neighbour.index()] {
                        continue;
                    }
                    self.visited[neighbour.index()] = true;
                    self.parent[neighbour.index()] = Some(current);

                    if predicate(graph.zone(neighbour)) {
                        return Some(PathHit {
                            target: neighbour,
                            first_step: self.first_step(origin, neighbour),
                            distance,
                        });
                    }
                    self.next.push(neighbour);
                }
            }

            std::mem::swap(&mut self.layer, &mut self.next);
        }

        None
    }

    fn reset(&mut self, zone_count: usize) {
        self.visited.clear();
        self.visited.resize(zone_count, false);
        self.parent.clear();
        self.parent.resize(zone_count, None);
        self.layer.clear();
        self.next.clear();
    }

    /// Walks parent links back from `target` to the zone adjacent to `origin`.
    fn first_step(&self, origin: ZoneId, target: ZoneId) -> ZoneId {
        let mut step = target;
        while let Some(parent) = self.parent[step.index()] {
            if parent == origin {
                break;
            }
            step = parent;
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Garrison, Owner, PlayerId, ZoneObservation, ZoneSpec};

    fn graph(zone_count: u32, links: &[(u32, u32)]) -> WorldGraph {
        let specs: Vec<_> = (0..zone_count)
            .map(|i| ZoneSpec {
                id: ZoneId(i),
                platinum: 0,
            })
            .collect();
        let links: Vec<_> = links.iter().map(|&(a, b)| (ZoneId(a), ZoneId(b))).collect();
        WorldGraph::build(PlayerId(0), 2, &specs, &links).unwrap()
    }

    /// Reference distances by plain breadth-first search.
    fn distances(graph: &WorldGraph, origin: ZoneId) -> Vec<Option<u32>> {
        let mut dist = vec![None; graph.zone_count()];
        dist[origin.index()] = Some(0);
        let mut queue = std::collections::VecDeque::from([origin]);
        while let Some(id) = queue.pop_front() {
            let d = dist[id.index()].unwrap();
            for &n in graph.neighbours(id) {
                if dist[n.index()].is_none() {
                    dist[n.index()] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    #[test]
    fn returns_minimal_distance_match() {
        // 0 - 1 - 2 - 3
        //  \         /
        //   4 ----- 5
        let graph = graph(6, &[(0, 1), (1, 2), (2, 3), (0, 4), (4, 5), (5, 3)]);
        let mut finder = PathFinder::new();
        let reference = distances(&graph, ZoneId(0));

        for target in 1..6 {
            let hit = finder
                .find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(target))
                .unwrap();
            assert_eq!(hit.target, ZoneId(target));
            assert_eq!(Some(hit.distance), reference[target as usize]);
            assert!(graph.neighbours(ZoneId(0)).contains(&hit.first_step));
        }
    }

    #[test]
    fn picks_any_match_in_the_nearest_layer() {
        let graph = graph(5, &[(0, 1), (1, 2), (0, 3), (3, 4)]);
        let mut finder = PathFinder::new();
        let hit = finder
            .find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(2) || z.id == ZoneId(4))
            .unwrap();
        assert_eq!(hit.distance, 2);
        assert!(hit.target == ZoneId(2) || hit.target == ZoneId(4));
    }

    #[test]
    fn first_step_leads_towards_target() {
        let graph = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut finder = PathFinder::new();
        let hit = finder
            .find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(3))
            .unwrap();
        assert_eq!(hit.distance, 3);
        assert_eq!(hit.first_step, ZoneId(1));
    }

    #[test]
    fn origin_match_has_zero_distance() {
        let graph = graph(2, &[(0, 1)]);
        let mut finder = PathFinder::new();
        let hit = finder.find_nearest(&graph, ZoneId(1), |_| true).unwrap();
        assert_eq!(
            hit,
            PathHit {
                target: ZoneId(1),
                first_step: ZoneId(1),
                distance: 0
            }
        );
    }

    #[test]
    fn unreachable_match_is_absent() {
        let graph = graph(4, &[(0, 1), (2, 3)]);
        let mut finder = PathFinder::new();
        assert_eq!(
            finder.find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(3)),
            None
        );
        assert_eq!(finder.find_nearest(&graph, ZoneId(0), |_| false), None);
    }

    #[test]
    fn contested_origin_cannot_retreat_through_enemy_zones() {
        // 1 is hostile and adjacent to the contested origin 0; 2 is reachable
        // both through 1 and through the longer 0 - 3 - 4 - 2 route.
        let mut graph = graph(5, &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 2)]);
        let mut observations: Vec<_> = (0..5)
            .map(|i| ZoneObservation {
                id: ZoneId(i),
                owner: Owner::Neutral,
                garrison: Garrison::EMPTY,
            })
            .collect();
        observations[0].owner = Owner::Player(PlayerId(0));
        observations[0].garrison = Garrison::new(0, [2, 0, 0]);
        observations[1].owner = Owner::Player(PlayerId(1));
        graph.observe(&observations).unwrap();

        let mut finder = PathFinder::new();

        let hostile = finder.find_nearest(&graph, ZoneId(0), |z| z.is_hostile());
        assert_eq!(hostile, None);

        let hit = finder
            .find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(2))
            .unwrap();
        assert_eq!(hit.distance, 3);
        assert_eq!(hit.first_step, ZoneId(3));
    }

    #[test]
    fn searches_do_not_leak_state() {
        let graph = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut finder = PathFinder::new();
        let far = finder
            .find_nearest(&graph, ZoneId(0), |z| z.id == ZoneId(3))
            .unwrap();
        let near = finder
            .find_nearest(&graph, ZoneId(3), |z| z.id == ZoneId(0))
            .unwrap();
        assert_eq!(far.first_step, ZoneId(1));
        assert_eq!(near.first_step, ZoneId(2));
        assert_eq!(near.distance, 3);
    }
}
