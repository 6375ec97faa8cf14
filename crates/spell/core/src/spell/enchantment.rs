use crate::state::{Allegiance, StatBonus};

use super::cue::{AudioCue, VisualCue};

/// Which units an enchantment buffs, relative to the caster's allegiance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetScope {
    #[default]
    All,
    FriendlyUnits,
    EnemyUnits,
}

impl TargetScope {
    /// Returns true if a unit with `unit` allegiance falls under this scope
    /// for an enchantment cast by a `caster` allegiance.
    pub fn includes(self, caster: Allegiance, unit: Allegiance) -> bool {
        match self {
            TargetScope::All => true,
            TargetScope::FriendlyUnits => caster == unit,
            TargetScope::EnemyUnits => caster != unit,
        }
    }
}

/// Enchantment parameters of a quad-targeted spell.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnchantmentParams {
    pub bonus: StatBonus,
    pub scope: TargetScope,
    pub visual: Option<VisualCue>,
    pub audio: Option<AudioCue>,
}

impl EnchantmentParams {
    pub fn new(bonus: StatBonus, scope: TargetScope) -> Self {
        Self {
            bonus,
            scope,
            visual: None,
            audio: None,
        }
    }

    pub fn with_visual(mut self, visual: VisualCue) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_audio(mut self, audio: AudioCue) -> Self {
        self.audio = Some(audio);
        self
    }
}
