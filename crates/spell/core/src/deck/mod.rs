//! Per-unit spell decks.
//!
//! A unit's assigned spells are configured once. At battle start the working
//! deck is rebuilt from them and shuffled; every turn a hand is drawn from the
//! deck. Spells are compared by reference identity ([`Arc::ptr_eq`]), never by
//! value, so two distinct definitions with equal fields are distinct spells.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::env::{RandomSource, SpellOracle};
use crate::snapshot::DeckSnapshot;
use crate::spell::SpellRef;

/// Capacity settings of one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSettings {
    /// Maximum distinct spells kept; `0` keeps every assigned spell.
    pub deck_capacity: usize,
    /// Hand size per turn; `0` draws the whole deck.
    pub draw_capacity: usize,
}

impl DeckSettings {
    pub const fn new(deck_capacity: usize, draw_capacity: usize) -> Self {
        Self {
            deck_capacity,
            draw_capacity,
        }
    }

    /// Capacity applied to a list of `available` spells.
    pub fn effective_capacity(&self, available: usize) -> usize {
        if self.deck_capacity == 0 {
            available
        } else {
            self.deck_capacity.min(available)
        }
    }

    /// Number of spells drawn from a deck of `deck_size`.
    pub fn draw_count(&self, deck_size: usize) -> usize {
        if self.draw_capacity == 0 {
            deck_size
        } else {
            self.draw_capacity.min(deck_size)
        }
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        crate::config::SpellCoreConfig::default().deck_settings()
    }
}

/// Assigned spells, the working deck and the current hand of one unit.
#[derive(Clone, Debug, Default)]
pub struct SpellDeck {
    settings: DeckSettings,
    assigned: Vec<SpellRef>,
    deck: Vec<SpellRef>,
    hand: Vec<SpellRef>,
}

impl SpellDeck {
    pub fn new(settings: DeckSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Builder form of [`SpellDeck::configure`].
    pub fn with_spells(mut self, spells: impl IntoIterator<Item = SpellRef>) -> Self {
        self.configure(spells);
        self
    }

    pub fn settings(&self) -> DeckSettings {
        self.settings
    }

    pub fn assigned(&self) -> &[SpellRef] {
        &self.assigned
    }

    pub fn deck(&self) -> &[SpellRef] {
        &self.deck
    }

    pub fn hand(&self) -> &[SpellRef] {
        &self.hand
    }

    /// Replaces the assigned spells, dropping duplicates and anything past
    /// the deck capacity.
    ///
    /// The working deck is left untouched until the next
    /// [`SpellDeck::reset_for_battle`].
    pub fn configure(&mut self, spells: impl IntoIterator<Item = SpellRef>) {
        let unique = dedup_by_identity(spells);
        let capacity = self.settings.effective_capacity(unique.len());
        if capacity < unique.len() {
            let dropped: Vec<&str> = unique[capacity..].iter().map(|s| s.id.as_str()).collect();
            warn!(
                capacity,
                assigned = unique.len(),
                ?dropped,
                "deck capacity exceeded; dropping spells"
            );
        }
        self.assigned = unique;
        self.assigned.truncate(capacity);
    }

    /// Changes the capacities and re-trims the assigned spells.
    pub fn set_settings(&mut self, settings: DeckSettings) {
        self.settings = settings;
        let assigned = std::mem::take(&mut self.assigned);
        self.configure(assigned);
    }

    /// Rebuilds the deck from the assigned spells, shuffles it and clears
    /// the hand.
    pub fn reset_for_battle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut deck = dedup_by_identity(self.assigned.iter().cloned());
        deck.truncate(self.settings.effective_capacity(deck.len()));

        // Fisher-Yates
        for i in (1..deck.len()).rev() {
            let j = rng.index_in(0, i + 1);
            deck.swap(i, j);
        }

        debug!(deck = deck.len(), "deck reset for battle");
        self.deck = deck;
        self.hand.clear();
    }

    /// Draws this turn's hand.
    ///
    /// Only the first `n` deck positions are shuffled (partial Fisher-Yates),
    /// which leaves the deck order partially permuted.
    pub fn draw_for_turn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &[SpellRef] {
        let len = self.deck.len();
        let n = self.settings.draw_count(len);
        for i in 0..n {
            let j = rng.index_in(i, len);
            self.deck.swap(i, j);
        }

        self.hand.clear();
        self.hand.extend(self.deck[..n].iter().cloned());
        &self.hand
    }

    /// Removes the first occurrence of `spell` from the deck and the hand.
    ///
    /// Returns true if either contained it.
    pub fn remove_spell_for_battle(&mut self, spell: &SpellRef) -> bool {
        let from_deck = remove_first(&mut self.deck, spell);
        let from_hand = remove_first(&mut self.hand, spell);
        from_deck || from_hand
    }

    pub fn contains(&self, spell: &SpellRef) -> bool {
        self.deck.iter().any(|s| Arc::ptr_eq(s, spell))
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    pub fn snapshot(&self) -> DeckSnapshot {
        let ids = |spells: &[SpellRef]| spells.iter().map(|s| s.id.clone()).collect();
        DeckSnapshot {
            assigned: ids(&self.assigned),
            deck: ids(&self.deck),
            hand: ids(&self.hand),
            deck_capacity: self.settings.deck_capacity,
            draw_capacity: self.settings.draw_capacity,
        }
    }

    /// Rebuilds a deck from persisted ids.
    ///
    /// Assigned ids are resolved through `spells`; deck and hand entries
    /// resolve against the assigned list so identity is shared. Unknown ids
    /// are skipped.
    pub fn from_snapshot(snapshot: &DeckSnapshot, spells: &dyn SpellOracle) -> Self {
        let settings = DeckSettings::new(snapshot.deck_capacity, snapshot.draw_capacity);
        let mut deck = SpellDeck::new(settings);

        let assigned = snapshot.assigned.iter().filter_map(|id| {
            let spell = spells.spell(id);
            if spell.is_none() {
                warn!(spell = %id, "unknown spell in deck snapshot; skipping");
            }
            spell
        });
        deck.configure(assigned.collect::<Vec<_>>());

        deck.deck = deck.resolve_assigned(&snapshot.deck);
        deck.hand = deck.resolve_assigned(&snapshot.hand);
        deck
    }

    fn resolve_assigned(&self, ids: &[String]) -> Vec<SpellRef> {
        ids.iter()
            .filter_map(|id| self.assigned.iter().find(|s| s.id == *id).cloned())
            .collect()
    }
}

/// Keeps the first occurrence of every spell reference.
fn dedup_by_identity(spells: impl IntoIterator<Item = SpellRef>) -> Vec<SpellRef> {
    let mut unique: Vec<SpellRef> = Vec::new();
    for spell in spells {
        if !unique.iter().any(|s| Arc::ptr_eq(s, &spell)) {
            unique.push(spell);
        }
    }
    unique
}

fn remove_first(spells: &mut Vec<SpellRef>, spell: &SpellRef) -> bool {
    match spells.iter().position(|s| Arc::ptr_eq(s, spell)) {
        Some(index) => {
            spells.remove(index);
            true
        }
        None => false,
    }
}
