//! The [`Tile`] type: a numbered piece occupying one board cell.

use std::fmt;

/// Opaque tile identity, unique among all boards derived from one another.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tile. Its value is always a power of two, at least 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    value: u64,
    id: TileId,
    merged: bool,
}

impl Tile {
    /// A freshly spawned (unmerged) tile.
    pub(crate) fn new(value: u64, id: TileId) -> Self {
        debug_assert!(is_tile_value(value), "invalid tile value {value}");
        Self {
            value,
            id,
            merged: false,
        }
    }

    /// The tile produced by a merge during the current move.
    pub(crate) fn merged(value: u64, id: TileId) -> Self {
        Self {
            merged: true,
            ..Self::new(value, id)
        }
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.value
    }

    #[inline]
    pub fn id(self) -> TileId {
        self.id
    }

    /// Whether this tile was produced by a merge in the latest move.
    #[inline]
    pub fn is_merged(self) -> bool {
        self.merged
    }

    /// log2 of the value (2 → 1, 4 → 2, ...).
    #[inline]
    pub fn rank(self) -> u32 {
        self.value.trailing_zeros()
    }

    #[inline]
    pub(crate) fn clear_merged(&mut self) {
        self.merged = false;
    }
}

/// Whether `value` is a legal tile value (a power of two ≥ 2).
#[inline]
pub fn is_tile_value(value: u64) -> bool {
    value >= 2 && value.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_values() {
        assert!(is_tile_value(2));
        assert!(is_tile_value(2048));
        assert!(!is_tile_value(0));
        assert!(!is_tile_value(1));
        assert!(!is_tile_value(6));
    }

    #[test]
    fn rank_is_log2() {
        assert_eq!(Tile::new(2, TileId(0)).rank(), 1);
        assert_eq!(Tile::new(2048, TileId(0)).rank(), 11);
    }

    #[test]
    fn merged_flag() {
        let mut t = Tile::merged(8, TileId(3));
        assert!(t.is_merged());
        assert_eq!(t.value(), 8);
        assert_eq!(t.id(), TileId(3));
        t.clear_merged();
        assert!(!t.is_merged());
    }
}
