//! Pluggable amount modifiers.

use crate::error::{ErrorSeverity, GameError};
use crate::spell::{DamageElement, EffectKind, SpellDefinition};

use super::SpellAmountContext;
use super::round_to_int;

/// Failure reported by a modifier provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModifierError {
    #[error("modifier '{provider}' failed: {reason}")]
    Failed { provider: String, reason: String },
}

impl ModifierError {
    pub fn failed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

impl GameError for ModifierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "MODIFIER_FAILED"
    }
}

/// Optional match conditions for a provider. Unset fields match anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierFilter {
    pub spell_id: Option<String>,
    pub kind: Option<EffectKind>,
    pub element: Option<DamageElement>,
}

impl ModifierFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn spell(mut self, spell_id: impl Into<String>) -> Self {
        self.spell_id = Some(spell_id.into());
        self
    }

    pub fn kind(mut self, kind: EffectKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn element(mut self, element: DamageElement) -> Self {
        self.element = Some(element);
        self
    }

    pub fn matches(&self, spell: &SpellDefinition) -> bool {
        self.spell_id.as_deref().is_none_or(|id| id == spell.id)
            && self.kind.is_none_or(|kind| kind == spell.effect.kind)
            && self.element.is_none_or(|element| element == spell.effect.element)
    }
}

/// Anything able to adjust a spell's amount.
///
/// Providers are invoked in registration order and may overwrite
/// `ctx.amount`. Returning an error discards that provider's changes.
pub trait ModifierProvider {
    /// Returns a human-readable name (used in logging).
    fn name(&self) -> &str;

    /// Match conditions; `None` applies the provider to every spell.
    fn filter(&self) -> Option<&ModifierFilter> {
        None
    }

    fn modify_spell_amount(
        &self,
        spell: &SpellDefinition,
        ctx: &mut SpellAmountContext,
    ) -> Result<(), ModifierError>;
}

/// Reference modifier: `amount = max(minimum, round((amount + flat_bonus) * multiplier))`.
///
/// A multiplier of `0.0` zeroes the amount; negative multipliers are treated
/// as `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalingModifier {
    pub name: String,
    pub filter: ModifierFilter,
    pub flat_bonus: i32,
    pub multiplier: f32,
    pub minimum: i32,
}

impl ScalingModifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter: ModifierFilter::any(),
            flat_bonus: 0,
            multiplier: 1.0,
            minimum: 0,
        }
    }

    pub fn with_filter(mut self, filter: ModifierFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn flat(mut self, flat_bonus: i32) -> Self {
        self.flat_bonus = flat_bonus;
        self
    }

    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn minimum(mut self, minimum: i32) -> Self {
        self.minimum = minimum;
        self
    }

    /// Applies the formula to a running amount.
    pub fn scale(&self, amount: i32) -> i32 {
        let multiplier = f64::from(self.multiplier.max(0.0));
        let scaled = if multiplier == 0.0 {
            0
        } else {
            round_to_int(f64::from(amount.saturating_add(self.flat_bonus)) * multiplier)
        };
        scaled.max(self.minimum)
    }
}

impl ModifierProvider for ScalingModifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn filter(&self) -> Option<&ModifierFilter> {
        Some(&self.filter)
    }

    fn modify_spell_amount(
        &self,
        _spell: &SpellDefinition,
        ctx: &mut SpellAmountContext,
    ) -> Result<(), ModifierError> {
        ctx.amount = self.scale(ctx.amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_is_added_before_multiplying() {
        let modifier = ScalingModifier::new("m").flat(2).multiplier(1.5);
        // (4 + 2) * 1.5 = 9
        assert_eq!(modifier.scale(4), 9);
    }

    #[test]
    fn zero_multiplier_zeroes_the_amount() {
        let modifier = ScalingModifier::new("m").flat(10).multiplier(0.0);
        assert_eq!(modifier.scale(50), 0);

        let negative = ScalingModifier::new("m").multiplier(-2.0);
        assert_eq!(negative.scale(50), 0);
    }

    #[test]
    fn minimum_floor_applies_last() {
        let modifier = ScalingModifier::new("m").flat(-10).minimum(2);
        assert_eq!(modifier.scale(3), 2);

        let zeroed = ScalingModifier::new("m").multiplier(0.0).minimum(1);
        assert_eq!(zeroed.scale(3), 1);
    }

    #[test]
    fn filter_fields_all_must_match() {
        let fireball = SpellDefinition::new("fireball")
            .with_effect(crate::spell::PrimaryEffect::damage(DamageElement::Fire, 5));

        assert!(ModifierFilter::any().matches(&fireball));
        assert!(ModifierFilter::any().element(DamageElement::Fire).matches(&fireball));
        assert!(
            ModifierFilter::any()
                .spell("fireball")
                .kind(EffectKind::Damage)
                .matches(&fireball)
        );
        assert!(!ModifierFilter::any().kind(EffectKind::Heal).matches(&fireball));
        assert!(!ModifierFilter::any().spell("frostbolt").matches(&fireball));
    }
}
