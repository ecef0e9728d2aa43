//! Move and purchase orders for the current turn.
//!
//! Recording an order also updates the `intend` counters on the graph, so
//! later decisions in the same turn see units already committed elsewhere.
//! Orders are never revised once recorded.

use std::fmt;

use crate::state::{WorldGraph, ZoneId};

/// Token emitted for an empty command line.
pub const WAIT: &str = "WAIT";

/// Move `count` units from one zone to an adjacent one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    pub count: u32,
    pub from: ZoneId,
    pub to: ZoneId,
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.count, self.from.0, self.to.0)
    }
}

/// Buy `count` units on a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseCommand {
    pub count: u32,
    pub zone: ZoneId,
}

impl fmt::Display for PurchaseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.zone.0)
    }
}

/// Orders accumulated during one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandBuffer {
    moves: Vec<MoveCommand>,
    purchases: Vec<PurchaseCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a one-unit move and shifts the intend counters accordingly.
    pub fn add_move(&mut self, graph: &mut WorldGraph, from: ZoneId, to: ZoneId) {
        graph.zone_mut(from).intend -= 1;
        graph.zone_mut(to).intend += 1;
        self.moves.push(MoveCommand { count: 1, from, to });
    }

    /// Records a one-unit purchase on `zone`.
    pub fn add_purchase(&mut self, graph: &mut WorldGraph, zone: ZoneId) {
        graph.zone_mut(zone).intend += 1;
        let continent = graph.zone(zone).continent;
        graph.continent_mut(continent).intends += 1;
        self.purchases.push(PurchaseCommand { count: 1, zone });
    }

    pub fn moves(&self) -> &[MoveCommand] {
        &self.moves
    }

    pub fn purchases(&self) -> &[PurchaseCommand] {
        &self.purchases
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.purchases.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.purchases.clear();
    }

    /// Move line: space-separated `count from to` triples, or `WAIT`.
    pub fn move_line(&self) -> String {
        join_or_wait(&self.moves)
    }

    /// Purchase line: space-separated `count zone` pairs, or `WAIT`.
    pub fn purchase_line(&self) -> String {
        join_or_wait(&self.purchases)
    }
}

fn join_or_wait<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return WAIT.to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
