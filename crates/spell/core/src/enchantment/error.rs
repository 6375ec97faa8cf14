//! Enchantment placement errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

/// Reasons a placement or restore was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnchantmentError {
    #[error("spell '{0}' is not an enchantment")]
    NotAnEnchantment(String),

    #[error("quad {index} is out of range (battlefield has {count})")]
    QuadOutOfRange { index: usize, count: usize },

    #[error("quad {0} has invalid geometry")]
    InvalidQuad(usize),

    #[error("quad {0} is already enchanted")]
    QuadOccupied(usize),

    #[error("caster {0} is not tracked")]
    CasterNotFound(UnitId),
}

impl GameError for EnchantmentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::QuadOccupied(_) => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAnEnchantment(_) => "ENCHANTMENT_NOT_AN_ENCHANTMENT",
            Self::QuadOutOfRange { .. } => "ENCHANTMENT_QUAD_OUT_OF_RANGE",
            Self::InvalidQuad(_) => "ENCHANTMENT_INVALID_QUAD",
            Self::QuadOccupied(_) => "ENCHANTMENT_QUAD_OCCUPIED",
            Self::CasterNotFound(_) => "ENCHANTMENT_CASTER_NOT_FOUND",
        }
    }
}
