use crate::spell::SpellRef;

/// Lookup of spell definitions by stable id.
///
/// Used when rebuilding enchantments and decks from persisted ids.
pub trait SpellOracle {
    fn spell(&self, id: &str) -> Option<SpellRef>;
}
