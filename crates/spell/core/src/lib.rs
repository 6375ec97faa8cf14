//! Spell resolution rules for the tactical battle layer.
//!
//! `spell-core` decides which tiles a spell may target, computes damage and
//! heal amounts through a pluggable modifier chain, executes casts, manages
//! quad-bound enchantments and draws each unit's per-turn spell hand. Units,
//! the board, presentation and spell assets stay with external systems that
//! the core reaches through the traits in [`env`].
pub mod amount;
pub mod cast;
pub mod config;
pub mod deck;
pub mod enchantment;
pub mod env;
pub mod error;
pub mod snapshot;
pub mod spell;
pub mod state;
pub mod targeting;

pub use amount::{
    ModifierError, ModifierFilter, ModifierProvider, ModifierRegistry, ScalingModifier,
    SpellAmount, SpellAmountContext, compute_amount, preview_amount,
};
pub use cast::{
    CastEngine, CastError, CastEvent, CastListener, CastOutcome, CastReport, CastStatus,
    NoopListener,
};
pub use config::SpellCoreConfig;
pub use deck::{DeckSettings, SpellDeck};
pub use enchantment::{
    ActiveEnchantment, BattlefieldChanged, BattlefieldFeed, BattlefieldSubscription,
    EnchantmentCaster, EnchantmentController, EnchantmentError, EnchantmentQuad,
};
pub use env::{
    BoardOracle, EffectHandle, OracleError, PcgRng, PresentationError, PresentationOracle,
    RandomSource, SpellEnv, SpellOracle, UnitError, UnitProvider,
};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use snapshot::SnapshotError;
pub use snapshot::{BattleSnapshot, DeckSnapshot, EnchantmentSnapshot};
pub use spell::{
    AudioCue, DamageElement, EffectKind, EnchantmentParams, PrimaryEffect, RangeBounds,
    SpellDefinition, SpellRef, TargetFilter, TargetScope, TargetingMode, VisualCue,
};
pub use state::{
    Allegiance, Ray, StatBonus, TilePos, UnitId, UnitIdentity, UnitSnapshot, UnitStats, Vec2,
    Vec3,
};
pub use targeting::{Caster, Occupancy, is_legal_target, is_legal_target_with, legal_targets};
