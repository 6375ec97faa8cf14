//! Spell configuration data.
//!
//! A [`SpellDefinition`] is loaded before battle by an external asset system
//! (see `spell-content`) and is never mutated while a battle runs. Components
//! share definitions through [`SpellRef`]; deck deduplication compares these
//! references by identity, not by value.

mod cue;
mod effect;
mod enchantment;
mod filter;

use std::sync::Arc;

pub use cue::{AudioCue, VisualCue};
pub use effect::{DamageElement, EffectKind, PrimaryEffect};
pub use enchantment::{EnchantmentParams, TargetScope};
pub use filter::{RangeBounds, TargetFilter, TargetingMode};

/// Shared handle to an immutable spell definition.
pub type SpellRef = Arc<SpellDefinition>;

/// Per-spell constants.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellDefinition {
    /// Stable identifier used by save data and modifier filters.
    pub id: String,
    pub range: RangeBounds,
    pub target_filter: TargetFilter,
    pub targeting_mode: TargetingMode,
    pub effect: PrimaryEffect,
    /// Action points spent per cast; negative values are treated as zero.
    pub action_point_cost: i32,
    pub enchantment: Option<EnchantmentParams>,
    pub visual: Option<VisualCue>,
    pub audio: Option<AudioCue>,
}

impl SpellDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.range = RangeBounds::new(min, max);
        self
    }

    pub fn with_filter(mut self, target_filter: TargetFilter) -> Self {
        self.target_filter = target_filter;
        self
    }

    pub fn with_effect(mut self, effect: PrimaryEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_cost(mut self, action_point_cost: i32) -> Self {
        self.action_point_cost = action_point_cost;
        self
    }

    /// Turns this spell into a quad-targeted enchantment.
    pub fn with_enchantment(mut self, params: EnchantmentParams) -> Self {
        self.targeting_mode = TargetingMode::Enchantment;
        self.enchantment = Some(params);
        self
    }

    pub fn with_visual(mut self, visual: VisualCue) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_audio(mut self, audio: AudioCue) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Wraps the definition into a shareable reference.
    pub fn into_ref(self) -> SpellRef {
        Arc::new(self)
    }

    /// Returns true if the spell is placed on quads rather than cast on tiles.
    pub fn is_enchantment(&self) -> bool {
        self.targeting_mode == TargetingMode::Enchantment && self.enchantment.is_some()
    }

    /// Action point cost clamped to be non-negative.
    pub fn effective_cost(&self) -> u32 {
        self.action_point_cost.max(0) as u32
    }
}
