//! Content factory for building spell data from a data directory.

use std::path::{Path, PathBuf};

use spell_core::{EnchantmentQuad, SpellCoreConfig, SpellDefinition};

use crate::catalog::SpellCatalog;
use crate::loaders::{BattlefieldLoader, ConfigLoader, LoadResult, SpellLoader};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// └── battlefields/
///     ├── crossroads.ron
///     └── bridge.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load spell-core configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SpellCoreConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load spell definitions from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<Vec<SpellDefinition>> {
        let path = self.data_dir.join("spells.ron");
        SpellLoader::load(&path)
    }

    /// Load `spells.ron` into a catalog usable as a spell oracle.
    pub fn load_catalog(&self) -> LoadResult<SpellCatalog> {
        self.load_spells().map(SpellCatalog::new)
    }

    /// Load a quad layout from `battlefields/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the battlefield file (without `.ron` extension)
    pub fn load_battlefield(&self, name: &str) -> LoadResult<Vec<EnchantmentQuad>> {
        let path = self
            .data_dir
            .join("battlefields")
            .join(format!("{}.ron", name));
        BattlefieldLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
