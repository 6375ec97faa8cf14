//! Spell deck draws over a simulated battle.

mod common;

use std::sync::Arc;

use common::{Library, init_tracing};
use spell_core::{DeckSettings, PcgRng, SpellCoreConfig, SpellDeck, SpellDefinition, SpellRef};

fn grimoire(count: usize) -> Vec<SpellRef> {
    (0..count)
        .map(|i| SpellDefinition::new(format!("rune-{i}")).into_ref())
        .collect()
}

#[test]
fn every_turn_draws_a_bounded_distinct_hand() {
    init_tracing();
    let spells = grimoire(7);
    let config = SpellCoreConfig {
        shuffle_seed: Some(2024),
        ..SpellCoreConfig::default()
    };
    let mut rng = PcgRng::from_config(&config, 0);
    let mut deck = SpellDeck::new(config.deck_settings()).with_spells(spells.clone());
    deck.reset_for_battle(&mut rng);

    for _turn in 0..20 {
        let hand = deck.draw_for_turn(&mut rng).to_vec();
        assert_eq!(hand.len(), 3);
        for (i, spell) in hand.iter().enumerate() {
            assert!(spells.iter().any(|s| Arc::ptr_eq(s, spell)));
            assert!(!hand[..i].iter().any(|s| Arc::ptr_eq(s, spell)));
        }
    }
}

#[test]
fn consumed_spells_shrink_later_hands() {
    init_tracing();
    let spells = grimoire(3);
    let mut rng = PcgRng::seeded(8);
    let mut deck = SpellDeck::new(DeckSettings::new(0, 3)).with_spells(spells.clone());
    deck.reset_for_battle(&mut rng);

    let first = deck.draw_for_turn(&mut rng)[0].clone();
    assert!(deck.remove_spell_for_battle(&first));
    assert_eq!(deck.draw_for_turn(&mut rng).len(), 2);

    // A new battle restores the full assigned list.
    deck.reset_for_battle(&mut rng);
    assert_eq!(deck.draw_for_turn(&mut rng).len(), 3);
}

#[test]
fn capped_deck_never_exceeds_capacity() {
    init_tracing();
    let mut rng = PcgRng::seeded(1);
    let mut deck = SpellDeck::new(DeckSettings::new(4, 0)).with_spells(grimoire(10));
    deck.reset_for_battle(&mut rng);

    assert_eq!(deck.deck().len(), 4);
    assert_eq!(deck.draw_for_turn(&mut rng).len(), 4);
}

#[test]
fn seeded_battles_replay_identically() {
    init_tracing();
    let spells = grimoire(9);
    let replay = || {
        let mut rng = PcgRng::seeded(77);
        let mut deck = SpellDeck::new(DeckSettings::new(0, 2)).with_spells(spells.clone());
        deck.reset_for_battle(&mut rng);
        (0..5)
            .map(|_| {
                deck.draw_for_turn(&mut rng)
                    .iter()
                    .map(|s| s.id.clone())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(replay(), replay());
}

#[test]
fn reloaded_deck_continues_from_saved_hand() {
    init_tracing();
    let spells = grimoire(5);
    let library = spells
        .iter()
        .cloned()
        .fold(Library::default(), |library, spell| library.with(spell));

    let mut rng = PcgRng::seeded(3);
    let mut deck = SpellDeck::new(DeckSettings::new(0, 2)).with_spells(spells.clone());
    deck.reset_for_battle(&mut rng);
    deck.draw_for_turn(&mut rng);

    let reloaded = SpellDeck::from_snapshot(&deck.snapshot(), &library);
    let ids = |d: &SpellDeck| d.hand().iter().map(|s| s.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&reloaded), ids(&deck));
    assert_eq!(reloaded.deck().len(), 5);
    assert_eq!(reloaded.settings(), deck.settings());
}
