//! Per-continent coordination.

use rift_core::{ContinentId, WorldGraph};

/// Keeps one continent's ownership flags and mood applicability current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlord {
    continent: ContinentId,
    /// Share of the world value, in percent.
    ratio: u32,
}

impl Overlord {
    pub fn new(continent: ContinentId) -> Self {
        Self {
            continent,
            ratio: 0,
        }
    }

    pub fn continent(&self) -> ContinentId {
        self.continent
    }

    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    /// Rescans the continent: mood applicability, ownership and loss flags,
    /// and whether every platinum zone is already mine.
    pub fn feedback(&self, graph: &mut WorldGraph) {
        let (zones, continent) = graph.split_continent_mut(self.continent);

        continent.moods.clear_applicable();

        let mut peaceful = 0;
        let mut hostile = 0;
        let mut platinum_zones_occupied = true;

        for &id in &continent.zones {
            let zone = &zones[id.index()];
            if zone.has_platinum() && !zone.is_mine() {
                platinum_zones_occupied = false;
            }
            continent.moods.tally(zone);
            if zone.is_peaceful() {
                peaceful += 1;
            }
            if zone.is_hostile() {
                hostile += 1;
            }
        }

        let size = continent.size();
        continent.is_owned = peaceful == size;
        continent.is_lost = hostile == size;
        continent.platinum_zones_occupied = platinum_zones_occupied;
    }

    /// Updates this continent's share of `world_value`; zero when the world
    /// is worth nothing.
    pub fn compute_ratio(&mut self, graph: &WorldGraph, world_value: u32) -> u32 {
        let value = graph.continent(self.continent).value;
        self.ratio = (value * 100).checked_div(world_value).unwrap_or(0);
        self.ratio
    }

    /// Owned or lost: nothing left for this overlord to decide.
    pub fn is_done(&self, graph: &WorldGraph) -> bool {
        graph.continent(self.continent).is_ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_core::{Garrison, MoodKind, Owner, PlayerId, ZoneId, ZoneObservation, ZoneSpec};

    fn island(observed: &[(u32, Owner, Garrison)]) -> WorldGraph {
        let specs: Vec<_> = observed
            .iter()
            .enumerate()
            .map(|(i, &(platinum, _, _))| ZoneSpec {
                id: ZoneId(i as u32),
                platinum,
            })
            .collect();
        let links: Vec<_> = (1..observed.len())
            .map(|i| (ZoneId(i as u32 - 1), ZoneId(i as u32)))
            .collect();
        let mut graph = WorldGraph::build(PlayerId(0), 2, &specs, &links).unwrap();
        let observations: Vec<_> = observed
            .iter()
            .enumerate()
            .map(|(i, &(_, owner, garrison))| ZoneObservation {
                id: ZoneId(i as u32),
                owner,
                garrison,
            })
            .collect();
        graph.observe(&observations).unwrap();
        graph
    }

    const MINE: Owner = Owner::Player(PlayerId(0));
    const THEIRS: Owner = Owner::Player(PlayerId(1));

    #[test]
    fn fully_held_continent_is_owned() {
        let mut graph = island(&[
            (1, MINE, Garrison::new(1, [0; 3])),
            (0, MINE, Garrison::EMPTY),
        ]);
        let overlord = Overlord::new(ContinentId(0));
        overlord.feedback(&mut graph);

        let continent = graph.continent(ContinentId(0));
        assert!(continent.is_owned);
        assert!(!continent.is_lost);
        assert!(continent.platinum_zones_occupied);
        assert!(overlord.is_done(&graph));
    }

    #[test]
    fn contested_zone_breaks_ownership() {
        let mut graph = island(&[
            (1, MINE, Garrison::new(0, [1, 0, 0])),
            (0, MINE, Garrison::EMPTY),
        ]);
        let overlord = Overlord::new(ContinentId(0));
        overlord.feedback(&mut graph);

        assert!(!graph.continent(ContinentId(0)).is_owned);
        assert!(!overlord.is_done(&graph));
    }

    #[test]
    fn fully_hostile_continent_is_lost() {
        let mut graph = island(&[(0, THEIRS, Garrison::EMPTY), (2, THEIRS, Garrison::EMPTY)]);
        let overlord = Overlord::new(ContinentId(0));
        overlord.feedback(&mut graph);

        let continent = graph.continent(ContinentId(0));
        assert!(continent.is_lost);
        assert!(!continent.platinum_zones_occupied);
    }

    #[test]
    fn feedback_recounts_mood_applicability() {
        let mut graph = island(&[
            (0, MINE, Garrison::new(1, [0; 3])),
            (0, Owner::Neutral, Garrison::EMPTY),
            (0, Owner::Neutral, Garrison::EMPTY),
        ]);
        let overlord = Overlord::new(ContinentId(0));
        overlord.feedback(&mut graph);
        overlord.feedback(&mut graph);

        let moods = &graph.continent(ContinentId(0)).moods;
        assert_eq!(moods.get(MoodKind::Default).unwrap().applicable(), 2);
        assert!(moods.get(MoodKind::Conquest).unwrap().is_disabled());
    }

    #[test]
    fn ratio_is_a_percentage_of_world_value() {
        let graph = island(&[(2, Owner::Neutral, Garrison::EMPTY)]);
        let mut overlord = Overlord::new(ContinentId(0));
        let value = graph.continent(ContinentId(0)).value;

        assert_eq!(overlord.compute_ratio(&graph, value * 4), 25);
        assert_eq!(overlord.compute_ratio(&graph, 0), 0);
    }
}
