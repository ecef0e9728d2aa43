//! Zone predicates used by moods.

use crate::state::Zone;

/// Stateless predicate over a zone.
///
/// Each variant names the kind of zone a mood is looking for. The set is
/// closed: moods pick one of these rather than carrying arbitrary closures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ZoneRule {
    /// Rich zone about to be overwhelmed.
    RichUnderThreat,
    /// Rich zone I do not own, about to be overwhelmed by someone.
    RichUnclaimedUnderThreat,
    /// Platinum zone I do not own that is either under threat or untouched.
    OpenPlatinum,
    /// Enemy zone whose defenders are about to be outnumbered.
    WeakenedHostile,
    /// Any zone I do not own that nobody of mine is heading to.
    Unclaimed,
}

impl ZoneRule {
    pub fn matches(self, zone: &Zone) -> bool {
        match self {
            ZoneRule::RichUnderThreat => zone.has_big_platinum() && zone.will_lose_supremacy(),
            ZoneRule::RichUnclaimedUnderThreat => {
                !zone.is_mine() && zone.has_big_platinum() && zone.will_lose_supremacy()
            }
            ZoneRule::OpenPlatinum => {
                !zone.is_mine()
                    && zone.has_platinum()
                    && (zone.will_lose_supremacy() || zone.is_virgin())
            }
            ZoneRule::WeakenedHostile => zone.is_hostile() && zone.will_lose_supremacy(),
            ZoneRule::Unclaimed => !zone.is_mine() && !zone.has_intend(),
        }
    }
}
