//! Persistence shapes exposed to save/load collaborators.
//!
//! The core never writes files. Save code collects these records and, with
//! the `serde` feature, may encode a whole [`BattleSnapshot`] with bincode.

use std::collections::BTreeMap;

use crate::state::Allegiance;

/// One active enchantment, as persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentSnapshot {
    pub spell_id: String,
    pub quad_index: usize,
    pub caster_instance_id: String,
    pub caster_unit_id: String,
    pub caster_allegiance: Allegiance,
}

/// A unit's deck, as persisted (spell ids plus capacities).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSnapshot {
    pub assigned: Vec<String>,
    pub deck: Vec<String>,
    pub hand: Vec<String>,
    pub deck_capacity: usize,
    pub draw_capacity: usize,
}

/// Everything the core needs to rebuild a battle after reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub enchantments: Vec<EnchantmentSnapshot>,
    /// Decks keyed by the owning unit's save-instance id.
    pub decks: BTreeMap<String, DeckSnapshot>,
}

impl BattleSnapshot {
    pub fn new(enchantments: Vec<EnchantmentSnapshot>) -> Self {
        Self {
            enchantments,
            decks: BTreeMap::new(),
        }
    }

    pub fn with_deck(mut self, owner_instance_id: impl Into<String>, deck: DeckSnapshot) -> Self {
        self.decks.insert(owner_instance_id.into(), deck);
        self
    }
}

#[cfg(feature = "serde")]
mod bytes {
    use super::BattleSnapshot;
    use crate::error::{ErrorSeverity, GameError};

    /// Errors from encoding or decoding a [`BattleSnapshot`].
    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum SnapshotError {
        #[error("failed to encode battle snapshot: {0}")]
        Encode(String),

        #[error("failed to decode battle snapshot: {0}")]
        Decode(String),
    }

    impl GameError for SnapshotError {
        fn severity(&self) -> ErrorSeverity {
            match self {
                Self::Encode(_) => ErrorSeverity::Internal,
                Self::Decode(_) => ErrorSeverity::Validation,
            }
        }

        fn error_code(&self) -> &'static str {
            match self {
                Self::Encode(_) => "SNAPSHOT_ENCODE",
                Self::Decode(_) => "SNAPSHOT_DECODE",
            }
        }
    }

    impl BattleSnapshot {
        pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
            bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
        }

        pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
            bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
        }
    }

}

#[cfg(feature = "serde")]
pub use bytes::SnapshotError;
