use arrayvec::ArrayVec;

use super::{ContinentId, Garrison, Owner, PlayerId, ZoneId};
use crate::config::EngineConfig;

/// Adjacency list bounded by the map format's neighbour capacity.
pub type Links = ArrayVec<ZoneId, { EngineConfig::MAX_NEIGHBOURS }>;

/// Platinum above which a zone counts as a rich target.
const BIG_PLATINUM: u32 = 4;

/// One node of the territory graph.
///
/// Static fields (`id`, `platinum`, `links`, `continent`) are fixed after the
/// graph is built. Ownership and garrisons are refreshed from every turn
/// observation; `value` and `pod_danger` are derived by the valuation pass;
/// `intend` counts units ordered onto (positive) or away from (negative) the
/// zone during the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id: ZoneId,
    pub platinum: u32,
    pub owner: Owner,
    pub garrison: Garrison,
    pub links: Links,
    pub continent: ContinentId,
    pub value: i32,
    pub pod_danger: u32,
    pub intend: i32,
    me: PlayerId,
}

impl Zone {
    pub fn new(id: ZoneId, platinum: u32, me: PlayerId) -> Self {
        Self {
            id,
            platinum,
            owner: Owner::Neutral,
            garrison: Garrison::EMPTY,
            links: Links::new(),
            continent: ContinentId::default(),
            value: 0,
            pod_danger: 0,
            intend: 0,
            me,
        }
    }

    /// Seat of the player this engine plays for.
    pub fn me(&self) -> PlayerId {
        self.me
    }

    // ===== ownership =====

    pub fn is_neutral(&self) -> bool {
        self.owner == Owner::Neutral
    }

    pub fn is_mine(&self) -> bool {
        self.owner == Owner::Player(self.me)
    }

    /// Owned by another player.
    pub fn is_hostile(&self) -> bool {
        matches!(self.owner, Owner::Player(player) if player != self.me)
    }

    // ===== garrisons =====

    /// Enemy units present and none of mine to hold the zone.
    pub fn is_contested(&self) -> bool {
        self.garrison.has_enemy() && self.garrison.mine == 0
    }

    pub fn is_peaceful(&self) -> bool {
        self.is_mine() && !self.is_contested()
    }

    pub fn max_enemy(&self) -> u32 {
        self.garrison.max_enemy()
    }

    /// My units already here plus units ordered here this turn.
    pub fn effective_garrison(&self) -> i64 {
        i64::from(self.garrison.mine) + i64::from(self.intend)
    }

    /// Strictly more effective units than the strongest enemy garrison.
    pub fn has_supremacy(&self) -> bool {
        self.effective_garrison() > i64::from(self.max_enemy())
    }

    /// Under pressure and outnumbered once next turn's incoming enemies arrive.
    pub fn will_lose_supremacy(&self) -> bool {
        let pressured = self.is_contested() || self.has_danger() || self.is_hostile();
        pressured
            && self.effective_garrison() < i64::from(self.max_enemy()) + i64::from(self.pod_danger)
    }

    // ===== resources and pressure =====

    pub fn has_platinum(&self) -> bool {
        self.platinum > 0
    }

    pub fn has_big_platinum(&self) -> bool {
        self.platinum > BIG_PLATINUM
    }

    pub fn has_intend(&self) -> bool {
        self.intend > 0
    }

    pub fn has_danger(&self) -> bool {
        self.pod_danger > 0
    }

    /// Neutral and nobody of mine is heading there yet.
    pub fn is_virgin(&self) -> bool {
        self.is_neutral() && !self.has_intend()
    }

    /// Enemy pressure this zone exports to its neighbours next turn.
    pub fn unopposed_enemies(&self) -> u32 {
        self.max_enemy().saturating_sub(self.garrison.mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(owner: Owner, garrison: Garrison) -> Zone {
        let mut zone = Zone::new(ZoneId(0), 0, PlayerId(0));
        zone.owner = owner;
        zone.garrison = garrison;
        zone
    }

    #[test]
    fn ownership_is_relative_to_my_seat() {
        let mine = zone(Owner::Player(PlayerId(0)), Garrison::EMPTY);
        let theirs = zone(Owner::Player(PlayerId(1)), Garrison::EMPTY);
        let nobody = zone(Owner::Neutral, Garrison::EMPTY);

        assert!(mine.is_mine() && !mine.is_hostile());
        assert!(theirs.is_hostile() && !theirs.is_mine());
        assert!(nobody.is_neutral() && !nobody.is_hostile());
    }

    #[test]
    fn contested_requires_absent_defenders() {
        let held = zone(Owner::Player(PlayerId(0)), Garrison::new(1, [2, 0, 0]));
        let lost = zone(Owner::Player(PlayerId(0)), Garrison::new(0, [2, 0, 0]));

        assert!(!held.is_contested());
        assert!(held.is_peaceful());
        assert!(lost.is_contested());
        assert!(!lost.is_peaceful());
    }

    #[test]
    fn danger_drives_supremacy_loss() {
        let mut held = zone(Owner::Player(PlayerId(0)), Garrison::new(1, [0, 0, 0]));
        assert!(!held.will_lose_supremacy());

        held.pod_danger = 2;
        assert!(held.will_lose_supremacy());

        held.intend = 2;
        assert!(!held.will_lose_supremacy());
        assert!(held.has_supremacy());
    }

    #[test]
    fn virgin_zone_loses_status_once_targeted() {
        let mut nobody = zone(Owner::Neutral, Garrison::EMPTY);
        assert!(nobody.is_virgin());
        nobody.intend = 1;
        assert!(!nobody.is_virgin());
    }
}
