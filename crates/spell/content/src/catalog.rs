//! In-memory spell catalog.

use std::collections::HashMap;

use spell_core::{SpellDefinition, SpellOracle, SpellRef};

/// Spell definitions indexed by id, in load order.
///
/// Each definition is wrapped in a single [`SpellRef`] so every lookup for an
/// id returns the same reference (decks compare spells by identity).
#[derive(Clone, Debug, Default)]
pub struct SpellCatalog {
    spells: Vec<SpellRef>,
    by_id: HashMap<String, usize>,
}

impl SpellCatalog {
    /// Builds a catalog; later definitions with an already-seen id are
    /// ignored.
    pub fn new(definitions: impl IntoIterator<Item = SpellDefinition>) -> Self {
        let mut catalog = Self::default();
        for definition in definitions {
            if catalog.by_id.contains_key(&definition.id) {
                tracing::warn!(spell = %definition.id, "duplicate spell id; keeping the first");
                continue;
            }
            catalog
                .by_id
                .insert(definition.id.clone(), catalog.spells.len());
            catalog.spells.push(definition.into_ref());
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&SpellRef> {
        self.by_id.get(id).map(|index| &self.spells[*index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellRef> + '_ {
        self.spells.iter()
    }

    /// Looks up several ids at once, skipping unknown ones.
    pub fn resolve<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<SpellRef> {
        ids.into_iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellOracle for SpellCatalog {
    fn spell(&self, id: &str) -> Option<SpellRef> {
        self.get(id).cloned()
    }
}
