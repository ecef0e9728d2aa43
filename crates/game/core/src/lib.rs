//! Zone graph, pathfinding and mood rules for the Platinum Rift decision engine.
//!
//! `rift-core` holds the pure half of the engine: the [`WorldGraph`] built from
//! the match setup, the layered [`PathFinder`], the [`MoodCatalog`] each
//! continent scores its units with, and the [`CommandBuffer`] orders are
//! collected in. Nothing here performs I/O; the runtime drives these types
//! turn by turn.
pub mod command;
pub mod config;
pub mod error;
pub mod mood;
pub mod pathfinding;
pub mod state;

pub use command::{CommandBuffer, MoveCommand, PurchaseCommand, WAIT};
pub use config::{AttritionRule, EngineConfig};
pub use error::{ErrorSeverity, GraphError, PurchaseError, RiftError};
pub use mood::{HoldRule, Mood, MoodCatalog, MoodKind, ZoneIntend, ZoneRule};
pub use pathfinding::{PathFinder, PathHit};
pub use state::{
    Continent, ContinentId, Garrison, Links, Owner, PlayerId, WorldGraph, Zone, ZoneId,
    ZoneObservation, ZoneSpec,
};
