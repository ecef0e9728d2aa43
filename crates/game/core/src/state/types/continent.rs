use super::{ContinentId, Garrison, ZoneId};
use crate::config::EngineConfig;
use crate::mood::MoodCatalog;

/// Display names handed out in discovery order; every later continent reuses the last.
const CONTINENT_NAMES: [&str; 5] = [
    "North_America",
    "South_Am.Africa",
    "Enrasia",
    "Oceania",
    "Japan",
];

/// A connected component of the zone graph.
///
/// Membership is fixed when the graph is built. Ownership flags and the mood
/// applicability counters are refreshed by the continent's Overlord every
/// turn; garrison aggregates and `intends` are per-turn and reset with the
/// rest of the transient state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Continent {
    pub id: ContinentId,
    pub name: String,
    /// Member zones, in flood-fill order. Zones themselves live in the graph.
    pub zones: Vec<ZoneId>,
    pub platinum: u32,
    pub wealth_concentration: u32,
    /// Static strategic weight: wealth concentration plus size.
    pub value: u32,
    /// Every zone is mine and free of enemy units.
    pub is_owned: bool,
    /// Every zone belongs to another player.
    pub is_lost: bool,
    /// Every platinum-bearing zone is already mine.
    pub platinum_zones_occupied: bool,
    /// Units summed over the member zones this turn.
    pub garrison: Garrison,
    /// Purchases ordered onto this continent this turn.
    pub intends: u32,
    pub moods: MoodCatalog,
}

impl Continent {
    pub fn new(id: ContinentId) -> Self {
        let name = CONTINENT_NAMES[id.index().min(CONTINENT_NAMES.len() - 1)].to_string();
        Self {
            id,
            name,
            zones: Vec::new(),
            platinum: 0,
            wealth_concentration: 0,
            value: 0,
            is_owned: false,
            is_lost: false,
            platinum_zones_occupied: false,
            garrison: Garrison::EMPTY,
            intends: 0,
            moods: MoodCatalog::standard(),
        }
    }

    pub fn size(&self) -> usize {
        self.zones.len()
    }

    /// Derives wealth concentration and value from the member platinum.
    ///
    /// Called once after the flood fill completes.
    pub fn compute_value(&mut self) {
        let size = self.size() as u32;
        self.wealth_concentration = if size == 0 {
            0
        } else {
            self.platinum * EngineConfig::WEALTH_CONCENTRATION_FACTOR / size
        };
        self.value = self.wealth_concentration + size;
    }

    /// Strongest single enemy aggregate on the continent.
    pub fn max_enemy(&self) -> u32 {
        self.garrison.max_enemy()
    }

    /// Owned or lost: nothing left to decide here.
    pub fn is_ignored(&self) -> bool {
        self.is_owned || self.is_lost
    }

    /// No unit of mine here and none ordered here this turn.
    pub fn has_no_friendly_pod(&self) -> bool {
        self.garrison.mine == 0 && self.intends == 0
    }

    /// Clears the per-turn aggregates.
    pub fn reset_turn(&mut self) {
        self.garrison = Garrison::EMPTY;
        self.intends = 0;
    }
}
