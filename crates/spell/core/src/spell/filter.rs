//! Target filters, targeting modes and range bounds.

/// Rule constraining which tiles/units a spell may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetFilter {
    /// A unit of the opposing side must occupy the tile.
    #[default]
    EnemyUnit,
    /// A unit on the caster's side must occupy the tile.
    FriendlyUnit,
    /// Any unit must occupy the tile.
    AnyUnit,
    /// The tile must be unoccupied.
    EmptyTile,
    /// Any tile in range.
    AnyTile,
    /// Unrecognised filter from data; never matches.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// How a spell selects what it affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetingMode {
    /// Targets a board tile and whatever unit stands on it.
    #[default]
    UnitOrTile,
    /// Targets an enchantment quad.
    Enchantment,
}

/// Configured Manhattan range of a spell.
///
/// Values come straight from data and may be misconfigured (negative minimum,
/// maximum below minimum); [`RangeBounds::effective`] normalises them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBounds {
    pub min: i32,
    pub max: i32,
}

impl RangeBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns the inclusive `(min, max)` distance window actually enforced.
    ///
    /// The minimum is clamped to be non-negative and the maximum is raised to
    /// the minimum when configured below it.
    ///
    /// The lower bound is `max(min, 0)`, not `min(min, 0)`: a positive
    /// minimum range is enforced, so `min = 2` rejects distance 1.
    pub fn effective(&self) -> (u32, u32) {
        let min = self.min.max(0) as u32;
        let max = self.max.max(self.min).max(0) as u32;
        (min, max.max(min))
    }

    pub fn contains(&self, distance: u32) -> bool {
        let (min, max) = self.effective();
        (min..=max).contains(&distance)
    }
}

impl Default for RangeBounds {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
