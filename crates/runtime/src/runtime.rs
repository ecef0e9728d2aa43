//! High-level turn orchestrator.
//!
//! The runtime owns the match: the world graph, the search buffers, the
//! Overmind and the command buffer. Each call to [`Runtime::play_turn`] runs
//! the full pipeline and hands back the orders for the turn.
//!
//! ```text
//! observe → danger → values → feedback → purchases → retire → pods → reset
//! ```

use std::time::Instant;

use rift_core::{CommandBuffer, EngineConfig, PathFinder, WorldGraph};

use crate::error::{Result, RuntimeError};
use crate::overmind::Overmind;
use crate::pod::{Pod, PodAction};
use crate::protocol::{MatchSetup, TurnObservation};
use crate::report::TurnReport;
use crate::valuation::ValuationEngine;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Build a [`TurnReport`] for every turn.
    pub report_turns: bool,
}

/// Orders and diagnostics produced by one turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub commands: CommandBuffer,
    pub report: Option<TurnReport>,
}

/// Drives one match, turn by turn.
pub struct Runtime {
    config: RuntimeConfig,
    graph: WorldGraph,
    finder: PathFinder,
    valuation: ValuationEngine,
    overmind: Overmind,
    commands: CommandBuffer,
    turn: u32,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    pub fn overmind(&self) -> &Overmind {
        &self.overmind
    }

    /// Orders recorded but not yet handed out; empty between turns.
    pub fn pending_commands(&self) -> &CommandBuffer {
        &self.commands
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Plays one turn against the given observation.
    pub fn play_turn(&mut self, observation: &TurnObservation) -> Result<TurnOutcome> {
        let started = Instant::now();
        self.turn += 1;

        self.graph.observe(&observation.zones)?;
        self.overmind.set_balance(observation.platinum);
        let balance_before = observation.platinum;

        self.valuation
            .score_all(&mut self.graph, self.overmind.is_first_turn());
        self.overmind.feedback(&mut self.graph);

        let bought = self.overmind.purchase(&mut self.graph, &mut self.commands);
        let retired = self.overmind.retire(&self.graph);

        let mut pods = Pod::muster(&self.graph);
        let mut moved = 0;
        for pod in &mut pods {
            let action = pod.update(
                &mut self.graph,
                &mut self.finder,
                &mut self.commands,
                self.config.engine.attrition,
            );
            if matches!(action, PodAction::Move { .. }) {
                moved += 1;
            }
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            turn = self.turn,
            bought,
            pods = pods.len(),
            moved,
            elapsed_ms,
            "turn played"
        );
        if elapsed_ms > self.config.engine.turn_budget_ms {
            tracing::warn!(
                elapsed_ms,
                budget_ms = self.config.engine.turn_budget_ms,
                "turn exceeded its time budget"
            );
        }

        let report = self.config.report_turns.then(|| TurnReport {
            turn: self.turn,
            balance_before,
            balance_after: self.overmind.balance(),
            purchases: self.commands.purchases().to_vec(),
            moves: self.commands.moves().to_vec(),
            retired: retired
                .iter()
                .map(|&id| self.graph.continent(id).name.clone())
                .collect(),
            world_value: self.overmind.world_value(),
            zones: TurnReport::zones_of(&self.graph),
            elapsed_ms,
        });

        let commands = std::mem::take(&mut self.commands);
        self.end_turn();

        Ok(TurnOutcome { commands, report })
    }

    /// Clears every per-turn counter.
    fn end_turn(&mut self) {
        self.graph.reset_turn();
        self.commands.clear();
        self.overmind.end_turn();
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    setup: Option<MatchSetup>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            setup: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the match topology
    pub fn setup(mut self, setup: MatchSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Build the graph, discover continents and spawn the overlords.
    pub fn build(self) -> Result<Runtime> {
        let setup = self.setup.ok_or(RuntimeError::MissingSetup)?;

        let graph = WorldGraph::build(setup.me, setup.player_count, &setup.zones, &setup.links)?;

        tracing::info!(
            players = setup.player_count,
            me = %setup.me,
            zones = graph.zone_count(),
            continents = graph.continents().len(),
            "match setup"
        );
        for continent in graph.continents() {
            tracing::info!(
                continent = %continent.name,
                size = continent.size(),
                platinum = continent.platinum,
                value = continent.value,
                "continent discovered"
            );
        }

        let overmind = Overmind::new(&graph, &self.config.engine);
        let valuation = ValuationEngine::new(&self.config.engine);

        Ok(Runtime {
            config: self.config,
            graph,
            finder: PathFinder::new(),
            valuation,
            overmind,
            commands: CommandBuffer::new(),
            turn: 0,
        })
    }
}
