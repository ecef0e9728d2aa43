use std::fmt;

/// Identifier of a zone. Equal to the zone's index in the [`crate::WorldGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneId(pub u32);

impl ZoneId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a continent, assigned in flood-fill discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinentId(pub u32);

impl ContinentId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ContinentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Player seat index as announced by the match (0..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Who controls a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    #[default]
    Neutral,
    Player(PlayerId),
}

impl Owner {
    /// Decodes the protocol owner column, where `-1` means nobody.
    pub fn from_protocol(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(Owner::Neutral),
            0..=3 => Some(Owner::Player(PlayerId(raw as u8))),
            _ => None,
        }
    }
}

/// Per-player unit counts on one zone (or one continent, for aggregates).
///
/// My column is split out from the protocol record; the three remaining
/// columns keep their protocol order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Garrison {
    pub mine: u32,
    pub enemies: [u32; 3],
}

impl Garrison {
    pub const EMPTY: Self = Self {
        mine: 0,
        enemies: [0; 3],
    };

    pub const fn new(mine: u32, enemies: [u32; 3]) -> Self {
        Self { mine, enemies }
    }

    /// Splits a four-column protocol record around my seat.
    pub fn from_columns(columns: [u32; 4], me: PlayerId) -> Self {
        let mut enemies = [0; 3];
        let mut slot = 0;
        for (seat, count) in columns.into_iter().enumerate() {
            if seat == me.0 as usize {
                continue;
            }
            enemies[slot] = count;
            slot += 1;
        }
        Self {
            mine: columns[me.0 as usize],
            enemies,
        }
    }

    /// Strongest single enemy garrison.
    pub fn max_enemy(&self) -> u32 {
        self.enemies.iter().copied().max().unwrap_or(0)
    }

    pub fn total_enemy(&self) -> u32 {
        self.enemies.iter().sum()
    }

    pub fn has_enemy(&self) -> bool {
        self.enemies.iter().any(|&count| count > 0)
    }

    /// Adds another garrison column-wise.
    pub fn absorb(&mut self, other: &Garrison) {
        self.mine += other.mine;
        for (total, count) in self.enemies.iter_mut().zip(other.enemies) {
            *total += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_around_my_seat() {
        let garrison = Garrison::from_columns([1, 2, 3, 4], PlayerId(2));
        assert_eq!(garrison.mine, 3);
        assert_eq!(garrison.enemies, [1, 2, 4]);
        assert_eq!(garrison.max_enemy(), 4);
        assert_eq!(garrison.total_enemy(), 7);
    }

    #[test]
    fn owner_decodes_protocol_values() {
        assert_eq!(Owner::from_protocol(-1), Some(Owner::Neutral));
        assert_eq!(Owner::from_protocol(3), Some(Owner::Player(PlayerId(3))));
        assert_eq!(Owner::from_protocol(4), None);
    }
}
