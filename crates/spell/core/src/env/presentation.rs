//! Visual/audio spawn interface.
//!
//! Presentation is side-effect-only: fades, lifetimes and projectile flight
//! run in the presentation layer's own tick-driven task queue. The core only
//! requests spawns and holds the returned [`EffectHandle`]s so it can cancel
//! them early.

use crate::enchantment::EnchantmentQuad;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::{AudioCue, SpellDefinition, VisualCue};
use crate::state::Vec3;

/// Opaque, move-only handle to a spawned visual or audio instance.
///
/// Handles are not `Clone`: whoever holds one is the only party able to pass
/// it to [`PresentationOracle::destroy`], so each is released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "dropping a handle leaks the spawned effect until it expires"]
pub struct EffectHandle(u64);

impl EffectHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PresentationError {
    #[error("failed to spawn '{asset}': {reason}")]
    SpawnFailed { asset: String, reason: String },
}

impl PresentationError {
    pub fn spawn_failed(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SpawnFailed {
            asset: asset.into(),
            reason: reason.into(),
        }
    }
}

impl GameError for PresentationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpawnFailed { .. } => "PRESENTATION_SPAWN_FAILED",
        }
    }
}

/// Spawns visual/audio side effects for casts and enchantments.
pub trait PresentationOracle {
    /// Spawns a cast visual at `at`; it fades out on its own after
    /// `cue.lifetime_secs`.
    fn spawn_cast_visual(
        &self,
        spell: &SpellDefinition,
        cue: &VisualCue,
        at: Vec3,
    ) -> Result<EffectHandle, PresentationError>;

    /// Plays a one-shot cast sound at `at`.
    fn play_cast_audio(
        &self,
        spell: &SpellDefinition,
        cue: &AudioCue,
        at: Vec3,
    ) -> Result<(), PresentationError>;

    /// Spawns the persistent sprite of an enchantment fitted to `quad`.
    fn spawn_enchantment_visual(
        &self,
        spell: &SpellDefinition,
        cue: &VisualCue,
        quad: &EnchantmentQuad,
    ) -> Result<EffectHandle, PresentationError>;

    /// Starts the (usually looping) ambient sound of an enchantment.
    fn spawn_enchantment_audio(
        &self,
        spell: &SpellDefinition,
        cue: &AudioCue,
        quad: &EnchantmentQuad,
    ) -> Result<EffectHandle, PresentationError>;

    /// Destroys a previously spawned instance, cancelling any running fade.
    fn destroy(&self, handle: EffectHandle);
}
