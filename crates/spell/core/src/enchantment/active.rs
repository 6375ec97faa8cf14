use crate::env::EffectHandle;
use crate::spell::{SpellRef, TargetScope};
use crate::state::{Allegiance, StatBonus, UnitId, UnitIdentity, UnitSnapshot};

/// Who placed an enchantment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnchantmentCaster {
    pub allegiance: Allegiance,
    pub identity: UnitIdentity,
}

impl EnchantmentCaster {
    pub fn new(allegiance: Allegiance, identity: UnitIdentity) -> Self {
        Self {
            allegiance,
            identity,
        }
    }

    pub fn from_snapshot(unit: &UnitSnapshot) -> Self {
        Self::new(unit.allegiance, unit.identity.clone())
    }
}

/// An enchantment occupying one quad.
///
/// The record owns the presentation handles it spawned; they are released
/// when the record is removed.
#[derive(Debug)]
pub struct ActiveEnchantment {
    pub(super) spell: SpellRef,
    pub(super) quad_index: usize,
    pub(super) caster: EnchantmentCaster,
    pub(super) bonus: StatBonus,
    pub(super) scope: TargetScope,
    /// Units that received the bonus at placement time.
    pub(super) recipients: Vec<UnitId>,
    /// False when restored without visuals.
    pub(super) presented: bool,
    pub(super) handles: Vec<EffectHandle>,
}

impl ActiveEnchantment {
    pub fn spell(&self) -> &SpellRef {
        &self.spell
    }

    pub fn quad_index(&self) -> usize {
        self.quad_index
    }

    pub fn caster(&self) -> &EnchantmentCaster {
        &self.caster
    }

    pub fn bonus(&self) -> StatBonus {
        self.bonus
    }

    pub fn scope(&self) -> TargetScope {
        self.scope
    }

    pub fn recipients(&self) -> &[UnitId] {
        &self.recipients
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if a unit of `allegiance` falls inside the scope.
    pub fn affects(&self, allegiance: Allegiance) -> bool {
        self.scope.includes(self.caster.allegiance, allegiance)
    }
}
