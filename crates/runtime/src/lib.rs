//! Turn orchestration for the Platinum Rift decision engine.
//!
//! This crate drives the pure types of `rift-core` through one match. Consumers
//! read the setup with [`ProtocolReader`], build a [`Runtime`], and feed it one
//! [`TurnObservation`] per turn.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`valuation`] scores zones every turn
//! - [`overlord`] and [`overmind`] coordinate continents and the purchase budget
//! - [`pod`] resolves unit intents
//! - [`protocol`] reads and writes the match streams
//! - [`report`] carries per-turn diagnostics
pub mod error;
pub mod overlord;
pub mod overmind;
pub mod pod;
pub mod protocol;
pub mod report;
pub mod runtime;
pub mod valuation;

pub use error::{ProtocolError, Result, RuntimeError};
pub use overlord::Overlord;
pub use overmind::Overmind;
pub use pod::{IntentResolver, Pod, PodAction};
pub use protocol::{MatchSetup, ProtocolReader, TurnObservation, write_commands};
pub use report::{TurnReport, ZoneReport};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TurnOutcome};
pub use valuation::ValuationEngine;
