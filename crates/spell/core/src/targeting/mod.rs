//! Targeting validation for tile/unit-targeted spells.
//!
//! Pure functions: no side effects, and the result depends only on the
//! arguments. Enchantment spells use the quad-based path in
//! [`crate::enchantment`] instead.
//!
//! ## Rules
//!
//! 1. The Manhattan distance from caster to candidate must fall inside the
//!    spell's effective range window ([`RangeBounds::effective`]).
//! 2. The first unit occupying the candidate tile decides occupancy.
//! 3. The spell's [`TargetFilter`] is matched against that occupancy.
//!
//! [`RangeBounds::effective`]: crate::spell::RangeBounds::effective

use crate::spell::{SpellDefinition, TargetFilter};
use crate::state::{Allegiance, TilePos, UnitSnapshot};

/// Presence predicate supplied by the caller's occupancy tracking.
pub type PresenceFn<'a> = &'a dyn Fn(&UnitSnapshot, TilePos) -> bool;

/// Caster data needed for targeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caster {
    pub position: TilePos,
    pub allegiance: Allegiance,
}

impl Caster {
    pub const fn new(position: TilePos, allegiance: Allegiance) -> Self {
        Self {
            position,
            allegiance,
        }
    }

    /// Returns `None` for units that are not placed on the board.
    pub fn from_snapshot(unit: &UnitSnapshot) -> Option<Self> {
        unit.position.map(|position| Self::new(position, unit.allegiance))
    }
}

/// What occupies a candidate tile, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Friendly,
    Enemy,
}

impl Occupancy {
    pub fn classify(caster: Allegiance, found: Option<&UnitSnapshot>) -> Self {
        match found {
            None => Occupancy::Empty,
            Some(unit) if unit.allegiance.is_friendly_to(caster) => Occupancy::Friendly,
            Some(_) => Occupancy::Enemy,
        }
    }

    pub fn is_occupied(self) -> bool {
        !matches!(self, Occupancy::Empty)
    }
}

/// Finds the first unit occupying `tile`.
///
/// When `presence` is supplied it is the sole occupancy test; otherwise the
/// snapshot positions are compared directly.
pub fn find_unit_at<'u>(
    units: &'u [UnitSnapshot],
    tile: TilePos,
    presence: Option<PresenceFn<'_>>,
) -> Option<&'u UnitSnapshot> {
    units.iter().find(|unit| match presence {
        Some(is_at) => is_at(*unit, tile),
        None => unit.position == Some(tile),
    })
}

/// Returns true if `candidate` lies in the spell's range from `from`.
pub fn is_in_range(spell: &SpellDefinition, from: TilePos, candidate: TilePos) -> bool {
    spell.range.contains(from.manhattan(candidate))
}

/// Matches a target filter against the occupancy of the candidate tile.
///
/// Unknown filters fail closed.
pub fn filter_accepts(filter: TargetFilter, occupancy: Occupancy) -> bool {
    match filter {
        TargetFilter::EnemyUnit => occupancy == Occupancy::Enemy,
        TargetFilter::FriendlyUnit => occupancy == Occupancy::Friendly,
        TargetFilter::AnyUnit => occupancy.is_occupied(),
        TargetFilter::EmptyTile => !occupancy.is_occupied(),
        TargetFilter::AnyTile => true,
        TargetFilter::Unknown => false,
    }
}

/// Decides whether `candidate` is a legal target for `spell` cast by `caster`.
pub fn is_legal_target(
    spell: &SpellDefinition,
    caster: Caster,
    candidate: TilePos,
    units: &[UnitSnapshot],
) -> bool {
    is_legal_target_with(spell, caster, candidate, units, None)
}

/// [`is_legal_target`] with a caller-supplied presence predicate.
pub fn is_legal_target_with(
    spell: &SpellDefinition,
    caster: Caster,
    candidate: TilePos,
    units: &[UnitSnapshot],
    presence: Option<PresenceFn<'_>>,
) -> bool {
    if !is_in_range(spell, caster.position, candidate) {
        return false;
    }

    let found = find_unit_at(units, candidate, presence);
    filter_accepts(
        spell.target_filter,
        Occupancy::classify(caster.allegiance, found),
    )
}

/// Filters `tiles` down to the legal targets, preserving order.
///
/// Used by input layers to highlight castable tiles.
pub fn legal_targets(
    spell: &SpellDefinition,
    caster: Caster,
    tiles: impl IntoIterator<Item = TilePos>,
    units: &[UnitSnapshot],
) -> Vec<TilePos> {
    tiles
        .into_iter()
        .filter(|tile| is_legal_target(spell, caster, *tile, units))
        .collect()
}
