/// Spell-core configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellCoreConfig {
    /// Maximum number of distinct spells a unit may bring into battle.
    /// `0` means unlimited.
    pub deck_capacity: usize,

    /// Number of spells drawn into the hand each turn.
    /// `0` means the whole deck.
    pub draw_capacity: usize,

    /// Fixed seed for deck shuffles; `None` lets the caller pick one per match.
    pub shuffle_seed: Option<u64>,
}

impl SpellCoreConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DECK_CAPACITY: usize = 0;
    pub const DEFAULT_DRAW_CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self {
            deck_capacity: Self::DEFAULT_DECK_CAPACITY,
            draw_capacity: Self::DEFAULT_DRAW_CAPACITY,
            shuffle_seed: None,
        }
    }

    /// Deck settings derived from this configuration.
    pub fn deck_settings(&self) -> crate::deck::DeckSettings {
        crate::deck::DeckSettings::new(self.deck_capacity, self.draw_capacity)
    }
}

impl Default for SpellCoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
