//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::TilePos;

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// BoardOracle is not available in the environment.
    #[error("BoardOracle not available")]
    BoardNotAvailable,

    /// PresentationOracle is not available in the environment.
    #[error("PresentationOracle not available")]
    PresentationNotAvailable,

    /// SpellOracle is not available in the environment.
    #[error("SpellOracle not available")]
    SpellsNotAvailable,

    /// Spell definition was not found by id.
    #[error("spell '{0}' not found")]
    SpellNotFound(String),

    /// The board could not project the tile.
    #[error("tile {0} is not on the board")]
    TileOffBoard(TilePos),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            BoardNotAvailable | PresentationNotAvailable | SpellsNotAvailable => {
                ErrorSeverity::Fatal
            }
            SpellNotFound(_) | TileOffBoard(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            BoardNotAvailable => "ORACLE_BOARD_NOT_AVAILABLE",
            PresentationNotAvailable => "ORACLE_PRESENTATION_NOT_AVAILABLE",
            SpellsNotAvailable => "ORACLE_SPELLS_NOT_AVAILABLE",
            SpellNotFound(_) => "ORACLE_SPELL_NOT_FOUND",
            TileOffBoard(_) => "ORACLE_TILE_OFF_BOARD",
        }
    }
}
