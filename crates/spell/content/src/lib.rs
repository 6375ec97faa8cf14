//! Data-driven spell content and loaders.
//!
//! This crate turns data files into `spell-core` types:
//! - Spell catalogs (data-driven via RON)
//! - Battlefield quad layouts (data-driven via RON)
//! - Spell-core configuration (data-driven via TOML)
//!
//! [`SpellCatalog`] is the in-memory spell oracle handed to the core.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::SpellCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{BattlefieldLoader, ConfigLoader, ContentFactory, SpellLoader};
