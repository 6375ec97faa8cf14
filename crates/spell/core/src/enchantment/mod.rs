//! Quad-bound enchantments.
//!
//! The controller keeps at most one [`ActiveEnchantment`] per quad, keyed by
//! quad index. Placement applies the enchantment's stat bonus once, to the
//! units tracked and active at that moment. Units spawned afterwards are not
//! buffed retroactively. A battlefield change clears everything and
//! re-places the enchantments whose quad survives in the new layout.

mod active;
mod battlefield;
mod error;
mod quad;

pub use active::{ActiveEnchantment, EnchantmentCaster};
pub use battlefield::{BattlefieldChanged, BattlefieldFeed, BattlefieldSubscription};
pub use error::EnchantmentError;
pub use quad::EnchantmentQuad;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::env::{EffectHandle, PresentationOracle, SpellEnv, UnitProvider};
use crate::snapshot::EnchantmentSnapshot;
use crate::spell::{EnchantmentParams, SpellDefinition, SpellRef};
use crate::state::{Allegiance, StatBonus, UnitId, UnitIdentity, UnitSnapshot, Vec2};

/// Owns the active enchantments of one battlefield.
#[derive(Debug, Default)]
pub struct EnchantmentController {
    quads: Vec<EnchantmentQuad>,
    active: BTreeMap<usize, ActiveEnchantment>,
    subscription: Option<BattlefieldSubscription>,
}

impl EnchantmentController {
    pub fn new(quads: Vec<EnchantmentQuad>) -> Self {
        Self {
            quads,
            active: BTreeMap::new(),
            subscription: None,
        }
    }

    /// Subscribes to battlefield changes for the controller's lifetime.
    pub fn subscribed(mut self, feed: &BattlefieldFeed) -> Self {
        self.subscription = Some(feed.subscribe());
        self
    }

    pub fn quads(&self) -> &[EnchantmentQuad] {
        &self.quads
    }

    pub fn quad(&self, index: usize) -> Option<&EnchantmentQuad> {
        self.quads.get(index)
    }

    pub fn active(&self, quad_index: usize) -> Option<&ActiveEnchantment> {
        self.active.get(&quad_index)
    }

    /// Active enchantments in quad order.
    pub fn active_enchantments(&self) -> impl Iterator<Item = &ActiveEnchantment> + '_ {
        self.active.values()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True iff the index exists, the quad is valid, and nothing occupies it.
    pub fn is_quad_available(&self, index: usize) -> bool {
        self.check_available(index).is_ok()
    }

    pub fn available_quad_count(&self) -> usize {
        (0..self.quads.len())
            .filter(|index| self.is_quad_available(*index))
            .count()
    }

    /// Sum of the bonuses of every active enchantment whose scope covers
    /// `unit`.
    ///
    /// Save code subtracts this before persisting base stats.
    pub fn total_bonus_for(&self, unit: &UnitSnapshot) -> StatBonus {
        self.total_bonus_for_allegiance(unit.allegiance)
    }

    pub fn total_bonus_for_allegiance(&self, allegiance: Allegiance) -> StatBonus {
        self.active
            .values()
            .filter(|enchantment| enchantment.affects(allegiance))
            .map(|enchantment| enchantment.bonus)
            .sum()
    }

    /// Projects a screen point onto the board and returns the first valid
    /// quad containing it.
    pub fn try_get_hovered_quad(&self, screen: Vec2, env: &SpellEnv<'_>) -> Option<usize> {
        let local = env.board().ok()?.screen_to_board(screen)?;
        self.quad_at(local)
    }

    /// First valid quad containing the local board point.
    pub fn quad_at(&self, local: Vec2) -> Option<usize> {
        self.quads.iter().position(|quad| quad.contains(local))
    }

    // ========================================================================
    // Placement
    // ========================================================================

    /// Places `spell` on `quad_index` for a live caster.
    pub fn try_place(
        &mut self,
        spell: &SpellRef,
        quad_index: usize,
        caster: UnitId,
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
    ) -> Result<(), EnchantmentError> {
        let caster = units
            .unit(caster)
            .ok_or(EnchantmentError::CasterNotFound(caster))?;
        self.place(
            spell,
            quad_index,
            EnchantmentCaster::from_snapshot(&caster),
            units,
            env,
            false,
        )
    }

    /// Places `spell` from persisted caster data, optionally without
    /// spawning visuals or audio.
    #[allow(clippy::too_many_arguments)]
    pub fn try_restore(
        &mut self,
        spell: &SpellRef,
        quad_index: usize,
        allegiance: Allegiance,
        caster: UnitIdentity,
        skip_visual: bool,
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
    ) -> Result<(), EnchantmentError> {
        self.place(
            spell,
            quad_index,
            EnchantmentCaster::new(allegiance, caster),
            units,
            env,
            skip_visual,
        )
    }

    fn place(
        &mut self,
        spell: &SpellRef,
        quad_index: usize,
        caster: EnchantmentCaster,
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
        skip_visual: bool,
    ) -> Result<(), EnchantmentError> {
        let params = match (&spell.enchantment, spell.is_enchantment()) {
            (Some(params), true) => params,
            _ => return Err(EnchantmentError::NotAnEnchantment(spell.id.clone())),
        };
        let quad = *self.check_available(quad_index)?;

        let handles = if skip_visual {
            Vec::new()
        } else {
            spawn_presentation(spell, params, &quad, env)
        };
        let recipients = broadcast_bonus(params, caster.allegiance, units);

        debug!(
            spell = %spell.id,
            quad = quad_index,
            caster = %caster.identity.instance_id,
            recipients = recipients.len(),
            "enchantment placed"
        );

        self.active.insert(
            quad_index,
            ActiveEnchantment {
                spell: SpellRef::clone(spell),
                quad_index,
                caster,
                bonus: params.bonus,
                scope: params.scope,
                recipients,
                presented: !skip_visual,
                handles,
            },
        );
        Ok(())
    }

    fn check_available(&self, index: usize) -> Result<&EnchantmentQuad, EnchantmentError> {
        let quad = self
            .quads
            .get(index)
            .ok_or(EnchantmentError::QuadOutOfRange {
                index,
                count: self.quads.len(),
            })?;
        if !quad.is_valid() {
            return Err(EnchantmentError::InvalidQuad(index));
        }
        if self.active.contains_key(&index) {
            return Err(EnchantmentError::QuadOccupied(index));
        }
        Ok(quad)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the enchantment on `quad_index`, destroying its handles and
    /// reverting the bonus on the units that received it.
    ///
    /// Returns false if the quad was empty.
    pub fn remove(
        &mut self,
        quad_index: usize,
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
    ) -> bool {
        let Some(enchantment) = self.active.remove(&quad_index) else {
            return false;
        };

        revert_bonus(&enchantment, units);
        release(enchantment.handles, env);

        debug!(spell = %enchantment.spell.id, quad = quad_index, "enchantment removed");
        true
    }

    /// Destroys every enchantment's handles and empties the quad map.
    ///
    /// Stats are left as they are; this is the battlefield-reset path.
    pub fn clear_all(&mut self, env: &SpellEnv<'_>) {
        let cleared = self.active.len();
        for enchantment in std::mem::take(&mut self.active).into_values() {
            release(enchantment.handles, env);
        }
        if cleared > 0 {
            debug!(cleared, "enchantments cleared");
        }
    }

    /// Clears all enchantments and adopts a new battlefield layout.
    pub fn set_quads(&mut self, quads: Vec<EnchantmentQuad>, env: &SpellEnv<'_>) {
        self.clear_all(env);
        self.quads = quads;
    }

    /// Clears every enchantment, adopts `quads`, then re-places each
    /// enchantment whose quad index is still available in the new layout.
    ///
    /// Re-placed enchantments keep their recipients, so no bonus is applied
    /// twice; their presentation is respawned on the new quad if they had
    /// any. Enchantments that no longer fit are reverted as by
    /// [`Self::remove`]. Returns the number re-placed.
    pub fn reapply_on(
        &mut self,
        quads: Vec<EnchantmentQuad>,
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
    ) -> usize {
        let mut previous = std::mem::take(&mut self.active);
        for enchantment in previous.values_mut() {
            release(std::mem::take(&mut enchantment.handles), env);
        }
        self.quads = quads;

        let mut reapplied = 0;
        for (quad_index, mut enchantment) in previous {
            let quad = match self.check_available(quad_index) {
                Ok(quad) => *quad,
                Err(err) => {
                    debug!(
                        spell = %enchantment.spell.id,
                        quad = quad_index,
                        reason = %err,
                        "enchantment dropped by battlefield change"
                    );
                    revert_bonus(&enchantment, units);
                    continue;
                }
            };

            if enchantment.presented {
                let spell = SpellRef::clone(&enchantment.spell);
                if let Some(params) = &spell.enchantment {
                    enchantment.handles = spawn_presentation(&spell, params, &quad, env);
                }
            }
            self.active.insert(quad_index, enchantment);
            reapplied += 1;
        }

        debug!(reapplied, quads = self.quads.len(), "battlefield reapplied");
        reapplied
    }

    /// Applies the most recent pending battlefield change, if any, through
    /// [`Self::reapply_on`].
    ///
    /// Returns true if the layout was replaced.
    pub fn sync_battlefield(&mut self, units: &mut dyn UnitProvider, env: &SpellEnv<'_>) -> bool {
        let Some(change) = self
            .subscription
            .as_mut()
            .and_then(BattlefieldSubscription::try_latest)
        else {
            return false;
        };
        self.reapply_on(change.quads, units, env);
        true
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    pub fn snapshot(&self) -> Vec<EnchantmentSnapshot> {
        self.active
            .values()
            .map(|enchantment| EnchantmentSnapshot {
                spell_id: enchantment.spell.id.clone(),
                quad_index: enchantment.quad_index,
                caster_instance_id: enchantment.caster.identity.instance_id.clone(),
                caster_unit_id: enchantment.caster.identity.unit_type_id.clone(),
                caster_allegiance: enchantment.caster.allegiance,
            })
            .collect()
    }

    /// Restores persisted enchantments through [`Self::try_restore`],
    /// resolving spells with the environment's spell oracle.
    ///
    /// Entries with unknown spells or unavailable quads are skipped. Returns
    /// the number restored.
    pub fn restore(
        &mut self,
        snapshots: &[EnchantmentSnapshot],
        units: &mut dyn UnitProvider,
        env: &SpellEnv<'_>,
        skip_visual: bool,
    ) -> usize {
        let spells = match env.spells() {
            Ok(spells) => spells,
            Err(err) => {
                warn!(error = %err, pending = snapshots.len(), "cannot restore enchantments");
                return 0;
            }
        };

        let mut restored = 0;
        for entry in snapshots {
            let Some(spell) = spells.spell(&entry.spell_id) else {
                warn!(
                    spell = %entry.spell_id,
                    quad = entry.quad_index,
                    "unknown enchantment spell; skipping"
                );
                continue;
            };
            let caster = UnitIdentity::new(&entry.caster_instance_id, &entry.caster_unit_id);
            match self.try_restore(
                &spell,
                entry.quad_index,
                entry.caster_allegiance,
                caster,
                skip_visual,
                units,
                env,
            ) {
                Ok(()) => restored += 1,
                Err(err) => {
                    warn!(
                        spell = %entry.spell_id,
                        quad = entry.quad_index,
                        error = %err,
                        "enchantment not restored"
                    );
                }
            }
        }
        restored
    }
}

/// Applies `params.bonus` once to every active unit in scope and returns the
/// recipients.
fn broadcast_bonus(
    params: &EnchantmentParams,
    caster: Allegiance,
    units: &mut dyn UnitProvider,
) -> Vec<UnitId> {
    if params.bonus.is_zero() {
        return Vec::new();
    }

    let mut recipients = Vec::new();
    for unit in units.tracked_units() {
        if !unit.active || !params.scope.includes(caster, unit.allegiance) {
            continue;
        }
        match units.apply_stat_bonus(unit.id, &params.bonus) {
            Ok(()) => recipients.push(unit.id),
            Err(err) => warn!(unit = %unit.id, error = %err, "enchantment bonus rejected"),
        }
    }
    recipients
}

/// Spawns the enchantment sprite and ambient sound. Failures are logged and do
/// not block placement.
fn spawn_presentation(
    spell: &SpellDefinition,
    params: &EnchantmentParams,
    quad: &EnchantmentQuad,
    env: &SpellEnv<'_>,
) -> Vec<EffectHandle> {
    let Ok(presentation) = env.presentation() else {
        return Vec::new();
    };

    let mut handles = Vec::new();
    if let Some(cue) = &params.visual {
        match presentation.spawn_enchantment_visual(spell, cue, quad) {
            Ok(handle) => handles.push(handle),
            Err(err) => warn!(spell = %spell.id, error = %err, "enchantment visual failed"),
        }
    }
    if let Some(cue) = &params.audio {
        match presentation.spawn_enchantment_audio(spell, cue, quad) {
            Ok(handle) => handles.push(handle),
            Err(err) => warn!(spell = %spell.id, error = %err, "enchantment audio failed"),
        }
    }
    handles
}

/// Undoes the enchantment's bonus on the units that received it.
fn revert_bonus(enchantment: &ActiveEnchantment, units: &mut dyn UnitProvider) {
    let revert = -enchantment.bonus;
    if revert.is_zero() {
        return;
    }
    for unit in &enchantment.recipients {
        if let Err(err) = units.apply_stat_bonus(*unit, &revert) {
            warn!(
                quad = enchantment.quad_index,
                %unit,
                error = %err,
                "failed to revert enchantment bonus"
            );
        }
    }
}

fn release(handles: Vec<EffectHandle>, env: &SpellEnv<'_>) {
    if handles.is_empty() {
        return;
    }
    match env.presentation() {
        Ok(presentation) => destroy_all(presentation, handles),
        Err(err) => {
            warn!(count = handles.len(), error = %err, "cannot destroy enchantment effects")
        }
    }
}

fn destroy_all(presentation: &dyn PresentationOracle, handles: Vec<EffectHandle>) {
    for handle in handles {
        presentation.destroy(handle);
    }
}
