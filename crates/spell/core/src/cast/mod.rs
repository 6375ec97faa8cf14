//! Cast execution for tile/unit-targeted spells.
//!
//! ## Sequence
//!
//! 1. Validate the caster (tracked, has stats, placed). Failure aborts the
//!    cast with no callbacks and nothing spent.
//! 2. `on_start`
//! 3. Resolve the unit on the target tile and the world position
//! 4. Spawn the cast visual and play the cast sound
//! 5. Compute the amount through the modifier chain
//! 6. Apply damage or heal to the target unit, if any
//! 7. `on_unit_died` when the target's life reached zero
//! 8. `on_action_points_consumed`
//! 9. `on_stats_changed` when the caster targeted itself
//! 10. `on_complete`, always, even when a step in 3..=9 failed
//!
//! A failure in steps 3..=9 skips the remaining ones, is logged, and is
//! surfaced as [`CastStatus::Failed`].

mod error;
mod listener;
mod pipeline;
mod report;

pub use error::CastError;
pub use listener::{CastEvent, CastListener, NoopListener};
pub use report::{CastOutcome, CastReport, CastStatus};

use tracing::{debug, error};

use crate::amount::ModifierRegistry;
use crate::env::{SpellEnv, UnitProvider};
use crate::error::GameError;
use crate::spell::SpellDefinition;
use crate::state::{TilePos, UnitId};
use crate::targeting::{Caster, PresenceFn, is_legal_target_with};

/// Executes spells against the unit provider and the environment oracles.
#[derive(Clone, Copy, Debug)]
pub struct CastEngine<'a> {
    env: SpellEnv<'a>,
    modifiers: &'a ModifierRegistry,
}

impl<'a> CastEngine<'a> {
    pub fn new(env: SpellEnv<'a>, modifiers: &'a ModifierRegistry) -> Self {
        Self { env, modifiers }
    }

    pub fn env(&self) -> &SpellEnv<'a> {
        &self.env
    }

    pub fn modifiers(&self) -> &'a ModifierRegistry {
        self.modifiers
    }

    /// Checks the targeting rules for `caster` against the current unit state.
    ///
    /// The engine itself does not re-validate targets; input layers call this
    /// before [`CastEngine::execute`].
    pub fn can_target(
        &self,
        spell: &SpellDefinition,
        caster: UnitId,
        target: TilePos,
        units: &dyn UnitProvider,
    ) -> bool {
        let Some(caster) = units.unit(caster).as_ref().and_then(Caster::from_snapshot) else {
            return false;
        };
        let tracked = units.tracked_units();
        let presence: PresenceFn<'_> = &|unit, tile| units.is_at(unit, tile);
        is_legal_target_with(spell, caster, target, &tracked, Some(presence))
    }

    /// Runs one cast to completion.
    pub fn execute(
        &self,
        spell: &SpellDefinition,
        caster: UnitId,
        target: TilePos,
        units: &mut dyn UnitProvider,
        listener: &mut dyn CastListener,
    ) -> CastReport {
        let mut report = CastReport {
            spell_id: spell.id.clone(),
            caster,
            status: CastStatus::Completed,
            outcome: CastOutcome::default(),
        };

        let validated = match pipeline::validate(caster, &*units) {
            Ok(validated) => validated,
            Err(err) => {
                debug!(spell = %spell.id, %caster, error = %err, "cast aborted");
                report.status = CastStatus::Aborted(err);
                return report;
            }
        };

        listener.on_start();

        let result = pipeline::perform(
            spell,
            &validated,
            target,
            units,
            &self.env,
            self.modifiers,
            listener,
            &mut report.outcome,
        );
        if let Err(err) = result {
            error!(
                spell = %spell.id,
                %caster,
                target = %target,
                code = err.error_code(),
                error = %err,
                "cast failed"
            );
            report.status = CastStatus::Failed(err);
        }

        listener.on_complete();
        report
    }
}
