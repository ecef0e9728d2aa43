//! Authoritative world representation.
//!
//! [`WorldGraph`] owns every zone and continent of the match. It is built once
//! from the match setup, then refreshed in place from each turn observation.
//! Continents only hold zone ids; the graph is the sole owner of zone data.
mod partition;
pub mod types;

pub use types::{
    Continent, ContinentId, Garrison, Links, Owner, PlayerId, Zone, ZoneId,
};

use crate::config::EngineConfig;
use crate::error::GraphError;

/// Static description of a zone, as announced before the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub id: ZoneId,
    pub platinum: u32,
}

/// Per-turn state of one zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneObservation {
    pub id: ZoneId,
    pub owner: Owner,
    pub garrison: Garrison,
}

/// The zone graph with its derived continents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldGraph {
    me: PlayerId,
    player_count: u8,
    zones: Vec<Zone>,
    continents: Vec<Continent>,
}

impl WorldGraph {
    /// Builds the graph and partitions it into continents.
    ///
    /// Zone specs must be listed in id order (`specs[i].id == i`). Links are
    /// undirected; a repeated link is ignored.
    pub fn build(
        me: PlayerId,
        player_count: u8,
        specs: &[ZoneSpec],
        links: &[(ZoneId, ZoneId)],
    ) -> Result<Self, GraphError> {
        let mut zones = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            if spec.id.index() != index {
                return Err(if spec.id.index() < index {
                    GraphError::DuplicateZone(spec.id)
                } else {
                    GraphError::MisplacedZone { index, id: spec.id }
                });
            }
            zones.push(Zone::new(spec.id, spec.platinum, me));
        }

        for &(a, b) in links {
            if a.index() >= zones.len() {
                return Err(GraphError::UnknownZone(a));
            }
            if b.index() >= zones.len() {
                return Err(GraphError::UnknownZone(b));
            }
            if a == b {
                return Err(GraphError::SelfLink(a));
            }
            if zones[a.index()].links.contains(&b) {
                continue;
            }
            link(&mut zones, a, b)?;
            link(&mut zones, b, a)?;
        }

        let continents = partition::flood_fill(&mut zones);

        Ok(Self {
            me,
            player_count,
            zones,
            continents,
        })
    }

    pub fn me(&self) -> PlayerId {
        self.me
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Returns the zone with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a zone of this graph; ids handed out by the graph
    /// itself are always valid.
    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.index()]
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.index()]
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut [Zone] {
        &mut self.zones
    }

    pub fn neighbours(&self, id: ZoneId) -> &[ZoneId] {
        &self.zones[id.index()].links
    }

    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    pub fn continent(&self, id: ContinentId) -> &Continent {
        &self.continents[id.index()]
    }

    pub fn continent_mut(&mut self, id: ContinentId) -> &mut Continent {
        &mut self.continents[id.index()]
    }

    /// Continent the given zone belongs to.
    pub fn continent_of(&self, zone: ZoneId) -> &Continent {
        self.continent(self.zone(zone).continent)
    }

    /// Borrows all zones immutably alongside one continent mutably.
    pub fn split_continent_mut(&mut self, id: ContinentId) -> (&[Zone], &mut Continent) {
        (&self.zones, &mut self.continents[id.index()])
    }

    /// Sum of every continent's static value.
    pub fn world_value(&self) -> u32 {
        self.continents.iter().map(|c| c.value).sum()
    }

    /// Applies a turn observation and rebuilds the continent garrison aggregates.
    ///
    /// The observation must describe every zone exactly once.
    pub fn observe(&mut self, observations: &[ZoneObservation]) -> Result<(), GraphError> {
        if observations.len() != self.zones.len() {
            return Err(GraphError::ObservationCount {
                expected: self.zones.len(),
                actual: observations.len(),
            });
        }

        for continent in &mut self.continents {
            continent.garrison = Garrison::EMPTY;
        }

        let mut seen = vec![false; self.zones.len()];
        for observation in observations {
            let zone = self
                .zones
                .get_mut(observation.id.index())
                .ok_or(GraphError::UnknownZone(observation.id))?;
            if std::mem::replace(&mut seen[observation.id.index()], true) {
                return Err(GraphError::DuplicateZone(observation.id));
            }
            if let Owner::Player(player) = observation.owner {
                if player.0 >= self.player_count.max(1) {
                    return Err(GraphError::UnknownOwner {
                        zone: observation.id,
                        owner: i32::from(player.0),
                    });
                }
            }
            zone.owner = observation.owner;
            zone.garrison = observation.garrison;
            self.continents[zone.continent.index()]
                .garrison
                .absorb(&observation.garrison);
        }

        Ok(())
    }

    /// Clears every per-turn counter: zone intends and continent aggregates.
    pub fn reset_turn(&mut self) {
        for zone in &mut self.zones {
            zone.intend = 0;
        }
        for continent in &mut self.continents {
            continent.reset_turn();
        }
    }
}

fn link(zones: &mut [Zone], from: ZoneId, to: ZoneId) -> Result<(), GraphError> {
    zones[from.index()]
        .links
        .try_push(to)
        .map_err(|_| GraphError::TooManyLinks {
            zone: from,
            max: EngineConfig::MAX_NEIGHBOURS,
        })
}
