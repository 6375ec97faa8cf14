//! Cast execution errors.

use crate::env::{OracleError, PresentationError, UnitError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

/// Errors that abort or fail a cast.
///
/// The `Caster*` variants are raised by validation, before any lifecycle
/// callback fires. Every other variant is contained by the engine and
/// reported after `on_complete`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("caster {0} is not tracked")]
    CasterNotFound(UnitId),

    #[error("caster {0} has no stat block")]
    CasterStatsMissing(UnitId),

    #[error("caster {0} has no board position")]
    CasterPositionUnknown(UnitId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl CastError {
    /// Returns true for validation failures that stop a cast before it starts.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            Self::CasterNotFound(_) | Self::CasterStatsMissing(_) | Self::CasterPositionUnknown(_)
        )
    }
}

impl GameError for CastError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CasterNotFound(_)
            | Self::CasterStatsMissing(_)
            | Self::CasterPositionUnknown(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
            Self::Unit(err) => err.severity(),
            Self::Presentation(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CasterNotFound(_) => "CAST_CASTER_NOT_FOUND",
            Self::CasterStatsMissing(_) => "CAST_CASTER_STATS_MISSING",
            Self::CasterPositionUnknown(_) => "CAST_CASTER_POSITION_UNKNOWN",
            Self::Oracle(err) => err.error_code(),
            Self::Unit(err) => err.error_code(),
            Self::Presentation(err) => err.error_code(),
        }
    }
}
