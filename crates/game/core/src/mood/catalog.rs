use super::{Mood, MoodKind, ZoneRule};
use crate::config::EngineConfig;
use crate::state::Zone;

/// The moods registered for one continent, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoodCatalog {
    moods: Vec<Mood>,
}

impl MoodCatalog {
    pub fn new(moods: Vec<Mood>) -> Self {
        Self { moods }
    }

    /// The five standard moods.
    ///
    /// | mood        | weight | hold |
    /// |-------------|--------|------|
    /// | defend      | 14     | 30   |
    /// | greedy      | 14     | -    |
    /// | slow_expand | 13     | -    |
    /// | conquest    | 10     | -    |
    /// | default     | 10     | -    |
    pub fn standard() -> Self {
        let ratio = EngineConfig::DEFAULT_RATIO;
        Self::new(vec![
            Mood::new(MoodKind::Defend, ratio + 4, ZoneRule::RichUnderThreat)
                .with_hold(ZoneRule::RichUnderThreat, ratio + 20),
            Mood::new(MoodKind::Greedy, ratio + 4, ZoneRule::RichUnclaimedUnderThreat),
            Mood::new(MoodKind::SlowExpand, ratio + 3, ZoneRule::OpenPlatinum),
            Mood::new(MoodKind::Conquest, ratio, ZoneRule::WeakenedHostile),
            Mood::new(MoodKind::Default, ratio, ZoneRule::Unclaimed),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mood> {
        self.moods.iter()
    }

    pub fn get(&self, kind: MoodKind) -> Option<&Mood> {
        self.moods.iter().find(|mood| mood.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: MoodKind) -> Option<&mut Mood> {
        self.moods.iter_mut().find(|mood| mood.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn clear_applicable(&mut self) {
        for mood in &mut self.moods {
            mood.clear_applicable();
        }
    }

    /// Counts `zone` towards every mood whose target rule it matches.
    pub fn tally(&mut self, zone: &Zone) {
        for mood in &mut self.moods {
            if mood.target().matches(zone) {
                mood.count_applicable();
            }
        }
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_priority_ordered() {
        let catalog = MoodCatalog::standard();
        let kinds: Vec<_> = catalog.iter().map(Mood::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MoodKind::Defend,
                MoodKind::Greedy,
                MoodKind::SlowExpand,
                MoodKind::Conquest,
                MoodKind::Default
            ]
        );
        assert_eq!(catalog.get(MoodKind::Defend).unwrap().base_weight(), 14);
        assert_eq!(catalog.get(MoodKind::Defend).unwrap().hold().unwrap().weight, 30);
        assert_eq!(catalog.get(MoodKind::SlowExpand).unwrap().base_weight(), 13);
    }

    #[test]
    fn every_mood_starts_disabled() {
        let catalog = MoodCatalog::standard();
        assert!(catalog.iter().all(Mood::is_disabled));
    }
}
