//! World-level coordination: the purchase budget and overlord lifecycle.

use rift_core::{
    CommandBuffer, ContinentId, EngineConfig, PurchaseError, RiftError, WorldGraph, ZoneId,
};

use crate::overlord::Overlord;

/// Owns the balance and one [`Overlord`] per continent still in play.
#[derive(Clone, Debug)]
pub struct Overmind {
    pod_price: u32,
    balance: u32,
    first_turn: bool,
    world_value: u32,
    overlords: Vec<Overlord>,
    /// Purchase ordering, rebuilt in zone order every turn and re-sorted
    /// between iterations.
    ordering: Vec<ZoneId>,
}

impl Overmind {
    /// Spawns an overlord for every continent of the graph.
    pub fn new(graph: &WorldGraph, config: &EngineConfig) -> Self {
        let overlords: Vec<_> = graph
            .continents()
            .iter()
            .map(|continent| Overlord::new(continent.id))
            .collect();

        Self {
            pod_price: config.pod_price,
            balance: 0,
            first_turn: true,
            world_value: graph.world_value(),
            overlords,
            ordering: Vec::with_capacity(graph.zone_count()),
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: u32) {
        self.balance = balance;
    }

    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    pub fn world_value(&self) -> u32 {
        self.world_value
    }

    pub fn overlords(&self) -> &[Overlord] {
        &self.overlords
    }

    /// Runs every active overlord's feedback and refreshes its ratio.
    pub fn feedback(&mut self, graph: &mut WorldGraph) {
        for overlord in &mut self.overlords {
            overlord.compute_ratio(graph, self.world_value);
            overlord.feedback(graph);
            tracing::debug!(
                continent = %graph.continent(overlord.continent()).name,
                ratio = overlord.ratio(),
                "overlord feedback"
            );
        }
    }

    /// Most iterations the purchase loop may run with the current balance.
    pub fn purchase_budget(&self) -> u32 {
        self.balance.checked_div(self.pod_price).unwrap_or(0)
    }

    /// Spends the balance one unit at a time on the most valuable zone.
    ///
    /// Returns the number of units bought.
    pub fn purchase(&mut self, graph: &mut WorldGraph, commands: &mut CommandBuffer) -> u32 {
        let budget = self.purchase_budget();
        let mut bought = 0;

        self.ordering.clear();
        self.ordering
            .extend(graph.zones().iter().map(|zone| zone.id));

        for _ in 0..budget {
            if self.balance < self.pod_price {
                break;
            }

            self.ordering
                .sort_by(|a, b| graph.zone(*b).value.cmp(&graph.zone(*a).value));
            let Some(&zone) = self.ordering.first() else {
                break;
            };

            match self.try_purchase(graph, commands, zone) {
                Ok(()) => bought += 1,
                Err(err) => tracing::warn!(
                    code = err.error_code(),
                    severity = %err.severity(),
                    zone = %zone,
                    "purchase skipped: {}",
                    err
                ),
            }

            self.apply_dampers(graph, zone);
        }

        bought
    }

    /// Buys one unit on `zone` if it is not hostile and the balance allows it.
    pub fn try_purchase(
        &mut self,
        graph: &mut WorldGraph,
        commands: &mut CommandBuffer,
        zone: ZoneId,
    ) -> Result<(), PurchaseError> {
        if graph.zone(zone).is_hostile() {
            return Err(PurchaseError::HostileZone(zone));
        }
        if self.balance < self.pod_price {
            return Err(PurchaseError::InsufficientFunds {
                balance: self.balance,
                price: self.pod_price,
            });
        }

        self.balance -= self.pod_price;
        commands.add_purchase(graph, zone);
        tracing::info!(
            zone = %zone,
            value = graph.zone(zone).value,
            balance = self.balance,
            "purchased unit"
        );
        Ok(())
    }

    /// Zeroes the value of a zone that already received enough units.
    fn apply_dampers(&self, graph: &mut WorldGraph, id: ZoneId) {
        let players = graph.player_count();
        let zone = graph.zone_mut(id);
        let intend = zone.intend;

        let saturated = if self.first_turn {
            intend >= zone.links.len() as i32
                || (players > 2 && intend > 1)
                || (players > 3 && intend > 0)
        } else {
            false
        };

        if saturated || intend > 2 {
            zone.value = 0;
        }
    }

    /// Drops overlords whose continent is owned or lost and removes their
    /// value from the world value.
    pub fn retire(&mut self, graph: &WorldGraph) -> Vec<ContinentId> {
        let mut retired = Vec::new();
        let world_value = &mut self.world_value;

        self.overlords.retain(|overlord| {
            if !overlord.is_done(graph) {
                return true;
            }
            let continent = graph.continent(overlord.continent());
            *world_value = world_value.saturating_sub(continent.value);
            if continent.is_owned {
                tracing::info!(continent = %continent.name, "continent secured");
            } else {
                tracing::info!(continent = %continent.name, "continent lost");
            }
            retired.push(continent.id);
            false
        });

        retired
    }

    /// Clears the first-turn flag.
    pub fn end_turn(&mut self) {
        self.first_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_core::{Garrison, Owner, PlayerId, ZoneObservation, ZoneSpec};

    fn ring(players: u8, owners: &[Owner]) -> WorldGraph {
        let specs: Vec<_> = (0..owners.len())
            .map(|i| ZoneSpec {
                id: ZoneId(i as u32),
                platinum: 1,
            })
            .collect();
        let links: Vec<_> = (0..owners.len())
            .map(|i| (ZoneId(i as u32), ZoneId(((i + 1) % owners.len()) as u32)))
            .collect();
        let mut graph = WorldGraph::build(PlayerId(0), players, &specs, &links).unwrap();
        let observations: Vec<_> = owners
            .iter()
            .enumerate()
            .map(|(i, &owner)| ZoneObservation {
                id: ZoneId(i as u32),
                owner,
                garrison: Garrison::EMPTY,
            })
            .collect();
        graph.observe(&observations).unwrap();
        graph
    }

    #[test]
    fn balance_below_price_buys_nothing() {
        let mut graph = ring(2, &[Owner::Neutral; 4]);
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        let mut commands = CommandBuffer::new();

        overmind.set_balance(19);
        assert_eq!(overmind.purchase_budget(), 0);
        assert_eq!(overmind.purchase(&mut graph, &mut commands), 0);
        assert!(commands.is_empty());
        assert_eq!(overmind.balance(), 19);
    }

    #[test]
    fn purchases_stay_within_budget() {
        let mut graph = ring(2, &[Owner::Neutral; 4]);
        graph.zone_mut(ZoneId(2)).value = 50;
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        overmind.end_turn();
        let mut commands = CommandBuffer::new();

        overmind.set_balance(75);
        let bought = overmind.purchase(&mut graph, &mut commands);

        assert_eq!(bought, 3);
        assert_eq!(overmind.balance(), 15);
        assert_eq!(commands.purchases().len(), 3);
        assert!(commands.purchases().iter().all(|p| p.zone == ZoneId(2)));
    }

    #[test]
    fn equal_values_resolve_in_zone_order_every_turn() {
        let mut graph = ring(2, &[Owner::Neutral; 4]);
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        overmind.end_turn();

        for zone in 0..3 {
            graph.zone_mut(ZoneId(zone)).value = 10;
        }
        graph.zone_mut(ZoneId(3)).value = 50;
        let mut commands = CommandBuffer::new();
        overmind.set_balance(20);
        overmind.purchase(&mut graph, &mut commands);
        assert_eq!(commands.purchases()[0].zone, ZoneId(3));

        graph.reset_turn();
        for zone in 0..4 {
            graph.zone_mut(ZoneId(zone)).value = 10;
        }
        let mut commands = CommandBuffer::new();
        overmind.set_balance(20);
        overmind.purchase(&mut graph, &mut commands);
        assert_eq!(commands.purchases()[0].zone, ZoneId(0));
    }

    #[test]
    fn saturated_zone_loses_its_value() {
        let mut graph = ring(2, &[Owner::Neutral; 4]);
        graph.zone_mut(ZoneId(2)).value = 50;
        graph.zone_mut(ZoneId(3)).value = 40;
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        overmind.end_turn();
        let mut commands = CommandBuffer::new();

        overmind.set_balance(100);
        overmind.purchase(&mut graph, &mut commands);

        assert_eq!(graph.zone(ZoneId(2)).intend, 3);
        assert_eq!(graph.zone(ZoneId(2)).value, 0);
        assert_eq!(graph.zone(ZoneId(3)).intend, 2);
    }

    #[test]
    fn first_turn_spreads_purchases_in_crowded_matches() {
        let mut graph = ring(4, &[Owner::Neutral; 4]);
        graph.zone_mut(ZoneId(0)).value = 30;
        graph.zone_mut(ZoneId(1)).value = 20;
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        let mut commands = CommandBuffer::new();

        overmind.set_balance(40);
        overmind.purchase(&mut graph, &mut commands);

        let zones: Vec<_> = commands.purchases().iter().map(|p| p.zone).collect();
        assert_eq!(zones, vec![ZoneId(0), ZoneId(1)]);
    }

    #[test]
    fn hostile_zone_purchase_is_rejected() {
        let mut graph = ring(2, &[Owner::Player(PlayerId(1)), Owner::Neutral]);
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        let mut commands = CommandBuffer::new();
        overmind.set_balance(40);

        assert_eq!(
            overmind.try_purchase(&mut graph, &mut commands, ZoneId(0)),
            Err(PurchaseError::HostileZone(ZoneId(0)))
        );
        assert_eq!(overmind.balance(), 40);
        assert!(commands.is_empty());
    }

    #[test]
    fn retiring_owned_continent_reduces_world_value() {
        let mut graph = ring(2, &[Owner::Player(PlayerId(0)); 3]);
        let mut overmind = Overmind::new(&graph, &EngineConfig::default());
        let before = overmind.world_value();

        overmind.feedback(&mut graph);
        let retired = overmind.retire(&graph);

        assert_eq!(retired, vec![ContinentId(0)]);
        assert!(overmind.overlords().is_empty());
        assert_eq!(overmind.world_value(), before - graph.continent(ContinentId(0)).value);
    }
}
