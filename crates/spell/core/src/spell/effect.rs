//! Primary effect of a spell: what it does to the unit on the target tile.

/// Kind of primary effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    #[default]
    None,
    Damage,
    Heal,
}

/// Damage element, used for modifier filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageElement {
    #[default]
    Physical,
    Fire,
    Frost,
    Lightning,
    Arcane,
    Holy,
    Shadow,
}

/// Primary effect parameters.
///
/// `stat_scaling` multiplies the caster's spell stat; `0.0` disables scaling.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrimaryEffect {
    pub kind: EffectKind,
    pub element: DamageElement,
    pub base_amount: i32,
    pub stat_scaling: f32,
}

impl PrimaryEffect {
    pub fn damage(element: DamageElement, base_amount: i32) -> Self {
        Self {
            kind: EffectKind::Damage,
            element,
            base_amount,
            stat_scaling: 0.0,
        }
    }

    pub fn heal(base_amount: i32) -> Self {
        Self {
            kind: EffectKind::Heal,
            element: DamageElement::Holy,
            base_amount,
            stat_scaling: 0.0,
        }
    }

    pub fn scaled(mut self, stat_scaling: f32) -> Self {
        self.stat_scaling = stat_scaling;
        self
    }
}
