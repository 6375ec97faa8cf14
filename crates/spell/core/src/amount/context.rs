use crate::spell::{DamageElement, EffectKind};

/// Mutable accumulator passed through the modifier chain.
///
/// `amount` is re-clamped to be non-negative after every provider and once
/// more at the end of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpellAmountContext {
    pub kind: EffectKind,
    pub element: DamageElement,
    /// Base amount before stat scaling (already clamped to `>= 0`).
    pub base_amount: i32,
    /// Running amount; providers read and overwrite this.
    pub amount: i32,
    pub caster_spell_stat: i32,
}

impl SpellAmountContext {
    pub(super) fn clamp(&mut self) {
        self.amount = self.amount.max(0);
    }
}

/// Result of the amount pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpellAmount {
    pub kind: EffectKind,
    /// `max(0, base_amount)` from the spell definition.
    pub base: u32,
    /// Base plus stat scaling, before modifiers.
    pub scaled: u32,
    /// Final amount after every modifier.
    pub amount: u32,
}
