//! Per-turn diagnostics.

use serde::Serialize;

use rift_core::{MoveCommand, PurchaseCommand, WorldGraph, ZoneId};

/// Valuation snapshot of one zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneReport {
    pub id: ZoneId,
    pub value: i32,
    pub danger: u32,
    pub intend: i32,
}

/// Summary of one played turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub balance_before: u32,
    pub balance_after: u32,
    pub purchases: Vec<PurchaseCommand>,
    pub moves: Vec<MoveCommand>,
    /// Continents whose overlord retired this turn.
    pub retired: Vec<String>,
    pub world_value: u32,
    pub zones: Vec<ZoneReport>,
    pub elapsed_ms: u64,
}

impl TurnReport {
    /// Snapshots every zone's value, danger and intend counter.
    pub fn zones_of(graph: &WorldGraph) -> Vec<ZoneReport> {
        graph
            .zones()
            .iter()
            .map(|zone| ZoneReport {
                id: zone.id,
                value: zone.value,
                danger: zone.pod_danger,
                intend: zone.intend,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
