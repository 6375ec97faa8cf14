//! Amount calculation for damage/heal spells.
//!
//! ## Pipeline
//!
//! 1. `base = max(0, spell.base_amount)`
//! 2. `scaled = base + round(caster_spell_stat * stat_scaling)` (skipped when
//!    scaling is zero)
//! 3. Every registered [`ModifierProvider`] whose filter matches runs in
//!    registration order over a [`SpellAmountContext`]
//! 4. The final amount is clamped to `>= 0`
//!
//! Previews and casts call the same function, so a displayed number always
//! equals the number applied.

mod context;
mod modifier;
mod registry;

pub use context::{SpellAmount, SpellAmountContext};
pub use modifier::{ModifierError, ModifierFilter, ModifierProvider, ScalingModifier};
pub use registry::ModifierRegistry;

use crate::spell::{EffectKind, SpellDefinition};
use crate::state::UnitSnapshot;

/// Rounds half-way values to the nearest even integer, saturating at the
/// `i32` bounds.
pub(crate) fn round_to_int(value: f64) -> i32 {
    let rounded = value.round_ties_even();
    if rounded.is_nan() {
        0
    } else {
        rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

/// Computes base and final amount of a spell.
///
/// Returns `None` for spells whose primary effect kind is [`EffectKind::None`].
pub fn compute_amount(
    spell: &SpellDefinition,
    caster_spell_stat: i32,
    modifiers: &ModifierRegistry,
) -> Option<SpellAmount> {
    let effect = &spell.effect;
    if effect.kind == EffectKind::None {
        return None;
    }

    let base = effect.base_amount.max(0);
    let scaled = if effect.stat_scaling != 0.0 {
        base.saturating_add(round_to_int(
            f64::from(caster_spell_stat) * f64::from(effect.stat_scaling),
        ))
    } else {
        base
    };

    let mut ctx = SpellAmountContext {
        kind: effect.kind,
        element: effect.element,
        base_amount: base,
        amount: scaled,
        caster_spell_stat,
    };
    let scaled = scaled.max(0) as u32;

    modifiers.apply(spell, &mut ctx);
    ctx.clamp();

    Some(SpellAmount {
        kind: effect.kind,
        base: base as u32,
        scaled,
        amount: ctx.amount as u32,
    })
}

/// Read-only preview for UI, using the caster's current spell stat.
///
/// Casters without a stat block preview with a spell stat of zero.
pub fn preview_amount(
    spell: &SpellDefinition,
    caster: &UnitSnapshot,
    modifiers: &ModifierRegistry,
) -> Option<SpellAmount> {
    let spell_stat = caster.stats.map_or(0, |stats| stats.spell);
    compute_amount(spell, spell_stat, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::{DamageElement, PrimaryEffect};

    struct Failing;

    impl ModifierProvider for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn modify_spell_amount(
            &self,
            _spell: &SpellDefinition,
            ctx: &mut SpellAmountContext,
        ) -> Result<(), ModifierError> {
            ctx.amount = 9999;
            Err(ModifierError::failed("failing", "boom"))
        }
    }

    struct Subtract(i32);

    impl ModifierProvider for Subtract {
        fn name(&self) -> &str {
            "subtract"
        }

        fn modify_spell_amount(
            &self,
            _spell: &SpellDefinition,
            ctx: &mut SpellAmountContext,
        ) -> Result<(), ModifierError> {
            ctx.amount -= self.0;
            Ok(())
        }
    }

    fn bolt(base: i32, scaling: f32) -> SpellDefinition {
        SpellDefinition::new("bolt")
            .with_effect(PrimaryEffect::damage(DamageElement::Lightning, base).scaled(scaling))
    }

    #[test]
    fn no_effect_spells_have_no_amount() {
        let spell = SpellDefinition::new("blink");
        assert_eq!(compute_amount(&spell, 10, &ModifierRegistry::new()), None);
    }

    #[test]
    fn scaling_then_flat_modifier() {
        let spell = bolt(5, 1.0);

        let plain = compute_amount(&spell, 2, &ModifierRegistry::new()).unwrap();
        assert_eq!((plain.base, plain.scaled, plain.amount), (5, 7, 7));

        let modifiers = ModifierRegistry::new().with(ScalingModifier::new("ward").flat(-4));
        let modified = compute_amount(&spell, 2, &modifiers).unwrap();
        assert_eq!(modified.base, 5);
        assert_eq!(modified.scaled, 7);
        assert_eq!(modified.amount, 3);
    }

    #[test]
    fn negative_base_is_clamped() {
        let spell = bolt(-8, 0.0);
        let amount = compute_amount(&spell, 50, &ModifierRegistry::new()).unwrap();
        assert_eq!((amount.base, amount.scaled, amount.amount), (0, 0, 0));
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_to_int(2.5), 2);
        assert_eq!(round_to_int(3.5), 4);
        assert_eq!(round_to_int(-1.5), -2);
        assert_eq!(round_to_int(f64::NAN), 0);

        let spell = bolt(0, 0.5);
        assert_eq!(compute_amount(&spell, 5, &ModifierRegistry::new()).unwrap().amount, 2);
    }

    #[test]
    fn failing_modifier_is_isolated() {
        let modifiers = ModifierRegistry::new()
            .with(Subtract(1))
            .with(Failing)
            .with(Subtract(2));

        let amount = compute_amount(&bolt(10, 0.0), 0, &modifiers).unwrap();
        assert_eq!(amount.amount, 7);
    }

    #[test]
    fn amount_is_clamped_after_each_modifier() {
        // 3 - 5 clamps to 0, then the next provider adds onto 0 rather than -2.
        let modifiers = ModifierRegistry::new()
            .with(Subtract(5))
            .with(ScalingModifier::new("bonus").flat(4));
        let amount = compute_amount(&bolt(3, 0.0), 0, &modifiers).unwrap();
        assert_eq!(amount.amount, 4);
    }

    #[test]
    fn filtered_modifier_skips_other_spells() {
        let modifiers = ModifierRegistry::new().with(
            ScalingModifier::new("fire only")
                .with_filter(ModifierFilter::any().element(DamageElement::Fire))
                .multiplier(2.0),
        );
        assert_eq!(compute_amount(&bolt(4, 0.0), 0, &modifiers).unwrap().amount, 4);
    }

    #[test]
    fn amount_is_monotonic_in_spell_stat() {
        let spell = bolt(3, 0.75);
        let registry = ModifierRegistry::new();
        let mut previous = 0;
        for stat in -20..=40 {
            let amount = compute_amount(&spell, stat, &registry).unwrap().amount;
            assert!(amount >= previous);
            previous = amount;
        }
    }

    #[test]
    fn modifiers_run_in_registration_order() {
        let doubled_first = ModifierRegistry::new()
            .with(ScalingModifier::new("x2").multiplier(2.0))
            .with(ScalingModifier::new("+1").flat(1));
        let flat_first = ModifierRegistry::new()
            .with(ScalingModifier::new("+1").flat(1))
            .with(ScalingModifier::new("x2").multiplier(2.0));

        let spell = bolt(5, 0.0);
        assert_eq!(compute_amount(&spell, 0, &doubled_first).unwrap().amount, 11);
        assert_eq!(compute_amount(&spell, 0, &flat_first).unwrap().amount, 12);
        assert_eq!(doubled_first.names().collect::<Vec<_>>(), ["x2", "+1"]);
    }

    #[test]
    fn preview_uses_caster_spell_stat() {
        use crate::state::{Allegiance, UnitId, UnitIdentity, UnitStats};

        let caster = UnitSnapshot::new(UnitId(1), UnitIdentity::default(), Allegiance::Player)
            .with_stats(UnitStats::new(10, 2));
        let preview = preview_amount(&bolt(5, 1.0), &caster, &ModifierRegistry::new()).unwrap();
        assert_eq!(preview.scaled, 7);
    }
}
