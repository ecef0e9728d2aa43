//! Zone valuation.
//!
//! Every turn each zone receives a threat estimate (`pod_danger`) and a
//! strategic `value`. Danger is derived first because the value formula and
//! the supremacy predicates both read it.
//!
//! # Value Formula
//!
//! ```text
//! hostile, ignored continent, or continent platinum all mine → 0
//!
//! base (first turn) = FIRST_TURN_BONUS      if platinum == 2
//!                   = 10 × platinum         if linear fallback enabled
//!                   = 0                     otherwise
//! base (later)      = 5 × platinum (if losing supremacy or neutral)
//!                   - intend
//!                   + vacancy bonus (20 with > 2 players, else 10)
//!
//! value = base + 6 (if neutral) - mine + max_enemy + danger
//!       + Σ neighbour platinum + hostile neighbours
//!       + continent max_enemy
//! ```

use rift_core::{EngineConfig, WorldGraph, ZoneId};

const FIRST_TURN_LINEAR_FACTOR: i32 = 10;
const PLATINUM_FACTOR: i32 = 5;
const NEUTRAL_BONUS: i32 = 6;
const VACANCY_BONUS_CROWDED: i32 = 20;
const VACANCY_BONUS_DUEL: i32 = 10;

/// Computes danger and value for every zone of the graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValuationEngine {
    first_turn_linear_fallback: bool,
}

impl ValuationEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            first_turn_linear_fallback: config.first_turn_linear_fallback,
        }
    }

    /// Writes `pod_danger` on every zone: the enemy units each neighbour has
    /// beyond my own defenders there.
    pub fn compute_danger(graph: &mut WorldGraph) {
        let dangers: Vec<u32> = graph
            .zones()
            .iter()
            .map(|zone| {
                zone.links
                    .iter()
                    .map(|&neighbour| graph.zone(neighbour).unopposed_enemies())
                    .sum()
            })
            .collect();

        for (zone, danger) in graph.zones_mut().iter_mut().zip(dangers) {
            zone.pod_danger = danger;
        }
    }

    /// Strategic value of one zone. Reads danger, so call
    /// [`compute_danger`](Self::compute_danger) first.
    pub fn compute_value(&self, graph: &WorldGraph, id: ZoneId, first_turn: bool) -> i32 {
        let zone = graph.zone(id);
        let continent = graph.continent(zone.continent);

        if zone.is_hostile() || continent.is_ignored() || continent.platinum_zones_occupied {
            return 0;
        }

        let platinum = zone.platinum as i32;
        let mut value = 0;

        if first_turn {
            if zone.platinum == 2 {
                value = EngineConfig::FIRST_TURN_BONUS;
            } else if self.first_turn_linear_fallback {
                value = FIRST_TURN_LINEAR_FACTOR * platinum;
            }
        } else {
            if zone.will_lose_supremacy() || zone.is_neutral() {
                value = PLATINUM_FACTOR * platinum;
            }
            value -= zone.intend;
            if continent.has_no_friendly_pod() {
                value += if graph.player_count() > 2 {
                    VACANCY_BONUS_CROWDED
                } else {
                    VACANCY_BONUS_DUEL
                };
            }
        }

        if zone.is_neutral() {
            value += NEUTRAL_BONUS;
        }
        value -= zone.garrison.mine as i32;
        value += zone.max_enemy() as i32;
        value += zone.pod_danger as i32;

        for &neighbour in &zone.links {
            let neighbour = graph.zone(neighbour);
            value += neighbour.platinum as i32;
            if neighbour.is_hostile() {
                value += 1;
            }
        }

        value + continent.max_enemy() as i32
    }

    /// Danger first, then every zone's value.
    pub fn score_all(&self, graph: &mut WorldGraph, first_turn: bool) {
        Self::compute_danger(graph);

        let values: Vec<i32> = (0..graph.zone_count())
            .map(|index| self.compute_value(graph, ZoneId(index as u32), first_turn))
            .collect();

        for (zone, value) in graph.zones_mut().iter_mut().zip(values) {
            zone.value = value;
        }
    }
}
