//! Spell-core configuration loader.

use std::path::Path;

use spell_core::SpellCoreConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for spell-core configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing SpellCoreConfig
    pub fn load(path: &Path) -> LoadResult<SpellCoreConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from a TOML string. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<SpellCoreConfig> {
        let config: SpellCoreConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("draw_capacity = 5\n").unwrap();
        assert_eq!(config.draw_capacity, 5);
        assert_eq!(config.deck_capacity, SpellCoreConfig::DEFAULT_DECK_CAPACITY);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "deck_capacity = 8\ndraw_capacity = 4\nshuffle_seed = 99\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.deck_settings().effective_capacity(20), 8);
        assert_eq!(config.shuffle_seed, Some(99));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("draw_capacity = \"three\"\n").is_err());
    }
}
