//! Content loaders for reading spell data from files.
//!
//! Every loader has a path-based `load` and a string-based `parse`; the
//! latter is what tests and embedded assets use.

pub mod battlefield;
pub mod config;
pub mod factory;
pub mod spells;

pub use battlefield::BattlefieldLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use spells::SpellLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
