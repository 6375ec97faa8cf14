use crate::amount::SpellAmount;
use crate::env::EffectHandle;
use crate::state::{UnitId, Vec3};

use super::CastError;

/// How a cast ended.
#[derive(Debug, PartialEq, Eq)]
pub enum CastStatus {
    /// Every step ran.
    Completed,
    /// A step failed after the cast started; `on_complete` still fired.
    Failed(CastError),
    /// Validation failed; no callbacks fired, nothing was spent.
    Aborted(CastError),
}

/// What a cast did, filled in step by step.
///
/// On failure this holds whatever the steps before the failing one produced.
#[derive(Debug, Default)]
pub struct CastOutcome {
    pub target: Option<UnitId>,
    pub target_position: Option<Vec3>,
    pub amount: Option<SpellAmount>,
    pub target_died: bool,
    /// `Some(cost)` once action points were consumed.
    pub action_points: Option<u32>,
    /// Cast visuals still alive; callers may destroy them to cancel early.
    pub visuals: Vec<EffectHandle>,
}

/// Result of [`CastEngine::execute`](super::CastEngine::execute).
#[derive(Debug)]
pub struct CastReport {
    pub spell_id: String,
    pub caster: UnitId,
    pub status: CastStatus,
    pub outcome: CastOutcome,
}

impl CastReport {
    pub fn is_completed(&self) -> bool {
        matches!(self.status, CastStatus::Completed)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.status, CastStatus::Aborted(_))
    }

    pub fn error(&self) -> Option<&CastError> {
        match &self.status {
            CastStatus::Completed => None,
            CastStatus::Failed(err) | CastStatus::Aborted(err) => Some(err),
        }
    }
}
