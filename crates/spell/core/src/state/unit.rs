//! Read views into the external unit system.

use super::common::{Allegiance, TilePos, UnitId, Vec3};

/// Persistent identity of a unit: save-instance id plus the unit-type id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitIdentity {
    pub instance_id: String,
    pub unit_type_id: String,
}

impl UnitIdentity {
    pub fn new(instance_id: impl Into<String>, unit_type_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            unit_type_id: unit_type_id.into(),
        }
    }
}

/// Stat values the spell core reads from a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitStats {
    pub life: i32,
    pub spell: i32,
}

impl UnitStats {
    pub const fn new(life: i32, spell: i32) -> Self {
        Self { life, spell }
    }

    pub const fn is_dead(&self) -> bool {
        self.life <= 0
    }
}

/// Snapshot of one tracked unit, taken from the unit provider.
///
/// `position` is `None` when the unit is not currently placed on the board,
/// and `stats` is `None` when the unit has no stat block attached.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub identity: UnitIdentity,
    pub allegiance: Allegiance,
    pub position: Option<TilePos>,
    pub world_position: Option<Vec3>,
    pub active: bool,
    pub stats: Option<UnitStats>,
}

impl UnitSnapshot {
    /// Creates an active, unplaced unit with no stats attached.
    pub fn new(id: UnitId, identity: UnitIdentity, allegiance: Allegiance) -> Self {
        Self {
            id,
            identity,
            allegiance,
            position: None,
            world_position: None,
            active: true,
            stats: None,
        }
    }

    pub fn at(mut self, position: TilePos) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_world_position(mut self, world_position: Vec3) -> Self {
        self.world_position = Some(world_position);
        self
    }

    pub fn with_stats(mut self, stats: UnitStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn is_player_controlled(&self) -> bool {
        self.allegiance.is_player_controlled()
    }

    /// Returns true when both units belong to the same side.
    pub fn is_friendly_to(&self, other: &UnitSnapshot) -> bool {
        self.allegiance.is_friendly_to(other.allegiance)
    }
}
