//! Cast step functions.
//!
//! [`validate`] runs before `on_start`; [`perform`] runs everything between
//! `on_start` and `on_complete` and records what it did into a
//! [`CastOutcome`] as it goes.

use tracing::debug;

use crate::amount::{ModifierRegistry, compute_amount};
use crate::env::{SpellEnv, UnitProvider};
use crate::spell::{EffectKind, SpellDefinition};
use crate::state::{TilePos, UnitId, UnitSnapshot, Vec3};
use crate::targeting::{PresenceFn, find_unit_at};

use super::listener::CastListener;
use super::report::CastOutcome;
use super::CastError;

/// Caster data captured by validation.
pub(super) struct ValidatedCaster {
    pub snapshot: UnitSnapshot,
    pub spell_stat: i32,
}

// ============================================================================
// Validation
// ============================================================================

pub(super) fn validate(
    caster: UnitId,
    units: &dyn UnitProvider,
) -> Result<ValidatedCaster, CastError> {
    let snapshot = units.unit(caster).ok_or(CastError::CasterNotFound(caster))?;
    let stats = snapshot
        .stats
        .ok_or(CastError::CasterStatsMissing(caster))?;
    if snapshot.position.is_none() {
        return Err(CastError::CasterPositionUnknown(caster));
    }

    Ok(ValidatedCaster {
        snapshot,
        spell_stat: stats.spell,
    })
}

// ============================================================================
// Execution
// ============================================================================

/// Runs the cast steps after `on_start`.
///
/// Returns at the first failing step; `outcome` then holds the results of the
/// steps that ran.
#[allow(clippy::too_many_arguments)]
pub(super) fn perform(
    spell: &SpellDefinition,
    caster: &ValidatedCaster,
    target_tile: TilePos,
    units: &mut dyn UnitProvider,
    env: &SpellEnv<'_>,
    modifiers: &ModifierRegistry,
    listener: &mut dyn CastListener,
    outcome: &mut CastOutcome,
) -> Result<(), CastError> {
    // Resolve target
    let target = resolve_target(target_tile, &*units);
    let world_position = resolve_world_position(target.as_ref(), target_tile, caster, env)?;
    outcome.target = target.as_ref().map(|unit| unit.id);
    outcome.target_position = Some(world_position);

    // Visual and audio
    if let Ok(presentation) = env.presentation() {
        if let Some(cue) = &spell.visual {
            let handle = presentation.spawn_cast_visual(spell, cue, world_position)?;
            outcome.visuals.push(handle);
        }
        if let Some(cue) = &spell.audio {
            presentation.play_cast_audio(spell, cue, world_position)?;
        }
    }

    // Amount
    let amount = compute_amount(spell, caster.spell_stat, modifiers);
    outcome.amount = amount;

    // Effect and death
    if let (Some(target), Some(amount)) = (&target, amount) {
        match amount.kind {
            EffectKind::Damage => {
                units.take_damage(target.id, amount.amount)?;
                debug!(
                    spell = %spell.id,
                    target = %target.id,
                    amount = amount.amount,
                    "damage applied"
                );

                let died = units
                    .unit(target.id)
                    .and_then(|unit| unit.stats)
                    .is_some_and(|stats| stats.is_dead());
                if died {
                    outcome.target_died = true;
                    listener.on_unit_died(target.id, &target.identity);
                }
            }
            EffectKind::Heal => {
                units.heal(target.id, amount.amount)?;
                debug!(
                    spell = %spell.id,
                    target = %target.id,
                    amount = amount.amount,
                    "heal applied"
                );
            }
            EffectKind::None => {}
        }
    }

    // Action points
    let cost = spell.effective_cost();
    listener.on_action_points_consumed(cost);
    outcome.action_points = Some(cost);

    if target.is_some_and(|unit| unit.id == caster.snapshot.id) {
        listener.on_stats_changed();
    }

    Ok(())
}

fn resolve_target(tile: TilePos, units: &dyn UnitProvider) -> Option<UnitSnapshot> {
    let tracked = units.tracked_units();
    let presence: PresenceFn<'_> = &|unit, tile| units.is_at(unit, tile);
    find_unit_at(&tracked, tile, Some(presence)).cloned()
}

/// World position the cast resolves at.
///
/// A unit on the tile supplies its own world position. Otherwise the tile
/// centre is used, snapped to the caster's depth plane so effects render at
/// the caster's layer.
fn resolve_world_position(
    target: Option<&UnitSnapshot>,
    tile: TilePos,
    caster: &ValidatedCaster,
    env: &SpellEnv<'_>,
) -> Result<Vec3, CastError> {
    if let Some(position) = target.and_then(|unit| unit.world_position) {
        return Ok(position);
    }

    let board = env.board()?;
    let centre = board
        .tile_center(tile)
        .ok_or(crate::env::OracleError::TileOffBoard(tile))?;
    let depth = match caster.snapshot.world_position {
        Some(position) => position.z,
        None => caster
            .snapshot
            .position
            .and_then(|tile| board.tile_center(tile))
            .map_or(centre.z, |position| position.z),
    };
    Ok(centre.with_z(depth))
}
