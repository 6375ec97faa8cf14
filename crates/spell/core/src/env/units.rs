//! Unit provider interface.
//!
//! The external unit system owns units and their stat blocks. The core reads
//! snapshots and calls a handful of mutation primitives by [`UnitId`].

use crate::error::{ErrorSeverity, GameError};
use crate::state::{StatBonus, TilePos, UnitId, UnitSnapshot};

/// Errors reported by the unit provider when a mutation cannot be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("unit {0} is not tracked")]
    UnitNotFound(UnitId),

    #[error("unit {0} has no stat block")]
    StatsMissing(UnitId),

    #[error("unit {unit} rejected the change: {reason}")]
    Rejected { unit: UnitId, reason: String },
}

impl GameError for UnitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnitNotFound(_) | Self::StatsMissing(_) => ErrorSeverity::Validation,
            Self::Rejected { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "UNIT_NOT_FOUND",
            Self::StatsMissing(_) => "UNIT_STATS_MISSING",
            Self::Rejected { .. } => "UNIT_REJECTED",
        }
    }
}

/// Enumerates tracked units and applies effect primitives to them.
pub trait UnitProvider {
    /// Returns every tracked unit, in the provider's iteration order.
    fn tracked_units(&self) -> Vec<UnitSnapshot>;

    /// Looks up a single unit.
    fn unit(&self, id: UnitId) -> Option<UnitSnapshot> {
        self.tracked_units().into_iter().find(|unit| unit.id == id)
    }

    /// Presence predicate: does `unit` currently occupy `tile`?
    ///
    /// Providers with their own occupancy tracking override this; the default
    /// compares the snapshot's tile position.
    fn is_at(&self, unit: &UnitSnapshot, tile: TilePos) -> bool {
        unit.position == Some(tile)
    }

    fn take_damage(&mut self, id: UnitId, amount: u32) -> Result<(), UnitError>;

    fn heal(&mut self, id: UnitId, amount: u32) -> Result<(), UnitError>;

    /// Adds `bonus` to the unit's stats (a negated bonus reverts it).
    fn apply_stat_bonus(&mut self, id: UnitId, bonus: &StatBonus) -> Result<(), UnitError>;
}
