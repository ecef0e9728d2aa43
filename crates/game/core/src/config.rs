/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Platinum spent per purchased unit.
    pub pod_price: u32,
    /// How local combat reduces enemy garrisons on a contested zone.
    pub attrition: AttritionRule,
    /// Give non-bonus zones a linear platinum value on the first turn.
    pub first_turn_linear_fallback: bool,
    /// Soft per-turn deadline in milliseconds. Overruns are logged, never enforced.
    pub turn_budget_ms: u64,
}

impl EngineConfig {
    // ===== compile-time constants =====
    /// Base weight shared by every mood; individual moods add an offset.
    pub const DEFAULT_RATIO: i32 = 10;
    /// Sentinel weight of an intent with no usable target.
    pub const MIN_WEIGHT: i32 = -10_000;
    pub const WEALTH_CONCENTRATION_FACTOR: u32 = 50;
    pub const MAX_NEIGHBOURS: usize = 6;
    pub const MAX_PLAYERS: usize = 4;
    /// Value pinned on platinum-2 zones during the opening turn.
    pub const FIRST_TURN_BONUS: i32 = 1_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_POD_PRICE: u32 = 20;
    pub const DEFAULT_TURN_BUDGET_MS: u64 = 100;

    pub fn new() -> Self {
        Self {
            pod_price: Self::DEFAULT_POD_PRICE,
            attrition: AttritionRule::default(),
            first_turn_linear_fallback: false,
            turn_budget_ms: Self::DEFAULT_TURN_BUDGET_MS,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Garrison attrition applied when a unit sits on a contested zone.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttritionRule {
    /// First enemy column loses one unit; the other two columns are then
    /// overwritten with that reduced count minus one (floored at zero).
    #[default]
    Legacy,
    /// Each enemy column loses one unit (floored at zero).
    PerOpponent,
}

impl AttritionRule {
    /// Applies one round of attrition to the enemy garrison columns.
    pub fn apply(self, enemies: &mut [u32; 3]) {
        match self {
            AttritionRule::Legacy => {
                enemies[0] = enemies[0].saturating_sub(1);
                enemies[1] = enemies[0].saturating_sub(1);
                enemies[2] = enemies[0].saturating_sub(1);
            }
            AttritionRule::PerOpponent => {
                for count in enemies.iter_mut() {
                    *count = count.saturating_sub(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_attrition_reuses_first_column() {
        let mut enemies = [3, 5, 0];
        AttritionRule::Legacy.apply(&mut enemies);
        assert_eq!(enemies, [2, 1, 1]);
    }

    #[test]
    fn per_opponent_attrition_hits_each_column() {
        let mut enemies = [3, 5, 0];
        AttritionRule::PerOpponent.apply(&mut enemies);
        assert_eq!(enemies, [2, 4, 0]);
    }

    #[test]
    fn attrition_rule_parses_from_config_strings() {
        assert_eq!(
            "per_opponent".parse::<AttritionRule>().unwrap(),
            AttritionRule::PerOpponent
        );
        assert_eq!("LEGACY".parse::<AttritionRule>().unwrap(), AttritionRule::Legacy);
    }
}
