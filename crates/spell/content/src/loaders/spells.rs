//! Spell catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::{SpellDefinition, TargetFilter, TargetingMode};

use crate::catalog::SpellCatalog;
use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalogRon {
    pub spells: Vec<SpellDefinition>,
}

/// Loader for spell catalogs from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load spell definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SpellDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load a RON file straight into a [`SpellCatalog`].
    pub fn load_catalog(path: &Path) -> LoadResult<SpellCatalog> {
        Self::load(path).map(SpellCatalog::new)
    }

    /// Parse and validate a spell catalog.
    ///
    /// Rejects empty or duplicate ids and enchantment-mode spells without
    /// enchantment parameters. Unknown target filters are accepted (they
    /// never match) but logged.
    pub fn parse(content: &str) -> LoadResult<Vec<SpellDefinition>> {
        let catalog: SpellCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for spell in &catalog.spells {
            if spell.id.is_empty() {
                anyhow::bail!("Spell with empty id in catalog");
            }
            if !seen.insert(spell.id.as_str()) {
                anyhow::bail!("Duplicate spell id '{}'", spell.id);
            }
            if spell.targeting_mode == TargetingMode::Enchantment && spell.enchantment.is_none() {
                anyhow::bail!("Enchantment spell '{}' has no enchantment parameters", spell.id);
            }
            if spell.target_filter == TargetFilter::Unknown {
                tracing::warn!(spell = %spell.id, "unknown target filter; spell can never target");
            }
        }

        Ok(catalog.spells)
    }
}
