//! Mood-based intent scoring.
//!
//! A mood is a named heuristic: "go where zones look like this". Evaluating a
//! mood for a unit produces a [`ZoneIntend`]: the nearest matching zone, the
//! neighbour to step on to get there, and a weight. The unit follows the
//! heaviest intent across its continent's moods.
//!
//! # Weight Formula
//!
//! ```text
//! hold rule matches current zone  → hold weight, stay put
//! no zone on the continent matches → MIN_WEIGHT (disabled)
//! nearest match at distance d     → base_weight - d
//! no reachable match              → MIN_WEIGHT
//! ```
//!
//! Closer targets score higher; the base weight sets how far a mood is willing
//! to reach before a less important but nearer mood wins.

mod catalog;
mod rule;

pub use catalog::MoodCatalog;
pub use rule::ZoneRule;

use crate::config::EngineConfig;
use crate::pathfinding::PathFinder;
use crate::state::{WorldGraph, ZoneId};

/// Named moods, in evaluation (priority) order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoodKind {
    Defend,
    Greedy,
    SlowExpand,
    Conquest,
    Default,
}

/// Result of one mood evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneIntend {
    /// Zone the mood wants to reach, if any.
    pub target: Option<ZoneId>,
    /// Neighbour of the current zone to move onto (the current zone when holding).
    pub step: Option<ZoneId>,
    pub distance: u32,
    pub weight: i32,
}

impl ZoneIntend {
    /// Intent with no usable target; loses against any real intent.
    pub const fn sentinel() -> Self {
        Self {
            target: None,
            step: None,
            distance: 0,
            weight: EngineConfig::MIN_WEIGHT,
        }
    }

    /// Intent to stay on `zone` with the given weight.
    pub const fn hold(zone: ZoneId, weight: i32) -> Self {
        Self {
            target: Some(zone),
            step: Some(zone),
            distance: 0,
            weight,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.target.is_none()
    }
}

/// Immobility override: when the current zone matches, holding is worth `weight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldRule {
    pub rule: ZoneRule,
    pub weight: i32,
}

/// A named scoring rule scoped to one continent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mood {
    kind: MoodKind,
    base_weight: i32,
    initial_weight: i32,
    target: ZoneRule,
    hold: Option<HoldRule>,
    /// Zones of the continent matching `target` this turn.
    applicable: u32,
}

impl Mood {
    pub fn new(kind: MoodKind, base_weight: i32, target: ZoneRule) -> Self {
        Self {
            kind,
            base_weight,
            initial_weight: base_weight,
            target,
            hold: None,
            applicable: 0,
        }
    }

    /// Adds an immobility override (builder pattern).
    #[must_use]
    pub fn with_hold(mut self, rule: ZoneRule, weight: i32) -> Self {
        self.hold = Some(HoldRule { rule, weight });
        self
    }

    pub fn kind(&self) -> MoodKind {
        self.kind
    }

    pub fn base_weight(&self) -> i32 {
        self.base_weight
    }

    pub fn target(&self) -> ZoneRule {
        self.target
    }

    pub fn hold(&self) -> Option<HoldRule> {
        self.hold
    }

    pub fn applicable(&self) -> u32 {
        self.applicable
    }

    /// No zone on the continent currently matches the target rule.
    pub fn is_disabled(&self) -> bool {
        self.applicable == 0
    }

    pub fn adjust_weight(&mut self, delta: i32) {
        self.base_weight += delta;
    }

    /// Restores the weight the mood was registered with.
    pub fn reset_weight(&mut self) {
        self.base_weight = self.initial_weight;
    }

    pub fn clear_applicable(&mut self) {
        self.applicable = 0;
    }

    pub fn count_applicable(&mut self) {
        self.applicable += 1;
    }

    /// Scores this mood for a unit standing on `current`.
    pub fn evaluate(
        &self,
        graph: &WorldGraph,
        finder: &mut PathFinder,
        current: ZoneId,
    ) -> ZoneIntend {
        if let Some(hold) = self.hold {
            if hold.rule.matches(graph.zone(current)) {
                return ZoneIntend::hold(current, hold.weight);
            }
        }

        if self.is_disabled() {
            return ZoneIntend::sentinel();
        }

        let target = self.target;
        match finder.find_nearest(graph, current, |zone| target.matches(zone)) {
            Some(hit) => ZoneIntend {
                target: Some(hit.target),
                step: Some(hit.first_step),
                distance: hit.distance,
                weight: self.base_weight - hit.distance as i32,
            },
            None => ZoneIntend::sentinel(),
        }
    }
}
