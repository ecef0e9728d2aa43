//! Unit-level decisions.
//!
//! Units carry no identity across turns: every turn the runtime musters one
//! [`Pod`] per unit of mine from the observed garrisons, lets each pick the
//! heaviest intent among its continent's moods, and drops them at the end of
//! the turn.

use rift_core::{
    AttritionRule, CommandBuffer, MoodCatalog, MoodKind, PathFinder, WorldGraph, ZoneId,
    ZoneIntend,
};

/// Selects the best mood intent for a unit.
pub struct IntentResolver;

impl IntentResolver {
    /// Evaluates every mood of `catalog` in order and keeps the strictly
    /// heaviest intent. Ties keep the earlier mood.
    ///
    /// Returns `None` when no mood beats the sentinel weight.
    pub fn select(
        catalog: &MoodCatalog,
        graph: &WorldGraph,
        finder: &mut PathFinder,
        current: ZoneId,
    ) -> Option<(MoodKind, ZoneIntend)> {
        let mut best: Option<(MoodKind, ZoneIntend)> = None;
        let mut best_weight = ZoneIntend::sentinel().weight;

        for mood in catalog.iter() {
            let intend = mood.evaluate(graph, finder, current);

            tracing::debug!(
                "  Mood {} on {}: weight={} target={:?} distance={}",
                mood.kind(),
                current,
                intend.weight,
                intend.target,
                intend.distance
            );

            if intend.weight > best_weight {
                best_weight = intend.weight;
                best = Some((mood.kind(), intend));
            }
        }

        best
    }
}

/// What a unit did this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PodAction {
    /// Stood on a contested zone and fought.
    Fight,
    /// Stayed put.
    Hold,
    /// Moved one hop.
    Move { to: ZoneId },
}

/// One unit of mine for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pod {
    zone: ZoneId,
    mood: Option<MoodKind>,
    intend: Option<ZoneIntend>,
}

impl Pod {
    pub fn new(zone: ZoneId) -> Self {
        Self {
            zone,
            mood: None,
            intend: None,
        }
    }

    /// One pod per unit of mine, in zone order.
    pub fn muster(graph: &WorldGraph) -> Vec<Pod> {
        graph
            .zones()
            .iter()
            .flat_map(|zone| (0..zone.garrison.mine).map(move |_| Pod::new(zone.id)))
            .collect()
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    /// Mood that won this turn's evaluation, if any.
    pub fn mood(&self) -> Option<MoodKind> {
        self.mood
    }

    /// Winning intent, kept for diagnostics.
    pub fn intend(&self) -> Option<ZoneIntend> {
        self.intend
    }

    /// Decides this unit's action and records any move in `commands`.
    pub fn update(
        &mut self,
        graph: &mut WorldGraph,
        finder: &mut PathFinder,
        commands: &mut CommandBuffer,
        attrition: AttritionRule,
    ) -> PodAction {
        if graph.zone(self.zone).is_contested() {
            attrition.apply(&mut graph.zone_mut(self.zone).garrison.enemies);
            tracing::debug!(zone = %self.zone, "pod fighting on contested zone");
            return PodAction::Fight;
        }

        let choice = IntentResolver::select(
            &graph.continent_of(self.zone).moods,
            graph,
            finder,
            self.zone,
        );
        let Some((kind, intend)) = choice else {
            return PodAction::Hold;
        };

        self.mood = Some(kind);
        self.intend = Some(intend);

        match intend.step {
            Some(step) if step != self.zone => {
                commands.add_move(graph, self.zone, step);
                tracing::debug!(
                    "pod on {} chose {}, heading to {} via {}",
                    self.zone,
                    kind,
                    intend.target.unwrap_or(step),
                    step
                );
                PodAction::Move { to: step }
            }
            _ => PodAction::Hold,
        }
    }
}
