//! Enchantment placement, scoping, hover and persistence scenarios.

mod common;

use common::{Board, Library, Roster, Stage, init_tracing, quad_row};
use spell_core::{
    Allegiance, AudioCue, BattlefieldFeed, EnchantmentController, EnchantmentError,
    EnchantmentParams, EnchantmentSnapshot, SpellDefinition, SpellEnv, SpellRef, StatBonus,
    TargetScope, TilePos, UnitId, Vec2, VisualCue,
};

fn hex(scope: TargetScope) -> SpellRef {
    SpellDefinition::new("hex")
        .with_enchantment(
            EnchantmentParams::new(StatBonus::ZERO.attack(3).defense(1), scope)
                .with_visual(VisualCue::new("fx/hex-sigil"))
                .with_audio(AudioCue::new("sfx/hex-hum").looping()),
        )
        .into_ref()
}

#[test]
fn enemy_scope_buffs_only_enemies_present_at_placement() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);
    roster.spawn(2, Allegiance::Player, TilePos::new(1, 0), 10, 0);
    roster.spawn(3, Allegiance::Ai, TilePos::new(5, 5), 10, 0);

    let stage = Stage::default();
    let env = SpellEnv::empty().with_presentation(&stage);
    let mut controller = EnchantmentController::new(quad_row(3));

    controller
        .try_place(&hex(TargetScope::EnemyUnits), 1, UnitId(1), &mut roster, &env)
        .unwrap();

    let bonus = StatBonus::ZERO.attack(3).defense(1);
    assert_eq!(roster.bonus(UnitId(3)), bonus);
    assert!(roster.bonus(UnitId(1)).is_zero());
    assert!(roster.bonus(UnitId(2)).is_zero());

    // Spawned after placement: not buffed retroactively.
    roster.spawn(4, Allegiance::Ai, TilePos::new(6, 6), 10, 0);
    assert!(roster.bonus(UnitId(4)).is_zero());

    // The aggregate view still reports what an AI unit is entitled to.
    let late = roster.units[3].clone();
    assert_eq!(controller.total_bonus_for(&late), bonus);
    assert!(controller.total_bonus_for(&roster.units[0]).is_zero());
}

#[test]
fn inactive_units_are_skipped() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);
    roster.spawn(2, Allegiance::Ai, TilePos::new(1, 0), 10, 0);
    roster.units[1].active = false;

    let mut controller = EnchantmentController::new(quad_row(1));
    controller
        .try_place(&hex(TargetScope::All), 0, UnitId(1), &mut roster, &SpellEnv::empty())
        .unwrap();

    assert!(!roster.bonus(UnitId(1)).is_zero());
    assert!(roster.bonus(UnitId(2)).is_zero());
}

#[test]
fn quad_stays_taken_until_removed_or_cleared() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);

    let stage = Stage::default();
    let env = SpellEnv::empty().with_presentation(&stage);
    let mut controller = EnchantmentController::new(quad_row(2));
    let spell = hex(TargetScope::FriendlyUnits);

    controller.try_place(&spell, 0, UnitId(1), &mut roster, &env).unwrap();
    assert!(!controller.is_quad_available(0));
    assert_eq!(
        controller.try_place(&spell, 0, UnitId(1), &mut roster, &env),
        Err(EnchantmentError::QuadOccupied(0))
    );

    assert!(controller.remove(0, &mut roster, &env));
    assert!(controller.is_quad_available(0));
    assert!(roster.bonus(UnitId(1)).is_zero());

    controller.try_place(&spell, 0, UnitId(1), &mut roster, &env).unwrap();
    controller.try_place(&spell, 1, UnitId(1), &mut roster, &env).unwrap();
    assert_eq!(controller.available_quad_count(), 0);

    controller.clear_all(&env);
    assert_eq!(controller.available_quad_count(), 2);
}

#[test]
fn handles_are_destroyed_exactly_once() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);

    let stage = Stage::default();
    let env = SpellEnv::empty().with_presentation(&stage);
    let mut controller = EnchantmentController::new(quad_row(2));
    let spell = hex(TargetScope::All);

    controller.try_place(&spell, 0, UnitId(1), &mut roster, &env).unwrap();
    controller.try_place(&spell, 1, UnitId(1), &mut roster, &env).unwrap();
    assert_eq!(stage.log.borrow().live.len(), 4);

    controller.remove(0, &mut roster, &env);
    controller.clear_all(&env);
    controller.clear_all(&env);

    let log = stage.log.borrow();
    assert!(log.live.is_empty());
    let mut destroyed = log.destroyed.clone();
    destroyed.sort_unstable();
    assert_eq!(destroyed, vec![1, 2, 3, 4]);
}

#[test]
fn hover_projects_screen_point_onto_quads() {
    init_tracing();
    let board = Board;
    let env = SpellEnv::empty().with_board(&board);
    let controller = EnchantmentController::new(quad_row(3));

    assert_eq!(controller.try_get_hovered_quad(Vec2::new(1.5, 0.5), &env), Some(1));
    assert_eq!(controller.try_get_hovered_quad(Vec2::new(2.25, 0.9), &env), Some(2));
    assert_eq!(controller.try_get_hovered_quad(Vec2::new(1.5, 3.0), &env), None);
    // Shared edge: first quad in order wins.
    assert_eq!(controller.try_get_hovered_quad(Vec2::new(1.0, 0.5), &env), Some(0));
    // No board, no hover.
    assert_eq!(
        controller.try_get_hovered_quad(Vec2::new(1.5, 0.5), &SpellEnv::empty()),
        None
    );
}

#[test]
fn snapshot_restores_without_visuals() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);
    roster.spawn(2, Allegiance::Ai, TilePos::new(1, 0), 10, 0);

    let spell = hex(TargetScope::EnemyUnits);
    let library = Library::default().with(spell.clone());
    let stage = Stage::default();
    let env = SpellEnv::empty()
        .with_presentation(&stage)
        .with_spells(&library);

    let mut controller = EnchantmentController::new(quad_row(3));
    controller.try_place(&spell, 2, UnitId(1), &mut roster, &env).unwrap();
    let mut saved = controller.snapshot();
    let forgotten = EnchantmentSnapshot {
        spell_id: "forgotten".into(),
        ..saved[0].clone()
    };
    saved.push(forgotten);

    let spawned_before = stage.log.borrow().live.len();
    let mut reloaded = EnchantmentController::new(quad_row(3));
    let mut fresh = Roster::default();
    fresh.spawn(2, Allegiance::Ai, TilePos::new(1, 0), 10, 0);

    assert_eq!(reloaded.restore(&saved, &mut fresh, &env, true), 1);
    assert_eq!(stage.log.borrow().live.len(), spawned_before);

    let restored = reloaded.active(2).unwrap();
    assert_eq!(restored.caster().identity.instance_id, "save-1");
    assert_eq!(restored.caster().allegiance, Allegiance::Player);
    assert_eq!(restored.handle_count(), 0);
    assert_eq!(fresh.bonus(UnitId(2)), StatBonus::ZERO.attack(3).defense(1));
}

#[test]
fn battlefield_change_reapplies_surviving_enchantments() {
    init_tracing();
    let mut roster = Roster::default();
    roster.spawn(1, Allegiance::Player, TilePos::new(0, 0), 10, 0);
    roster.spawn(2, Allegiance::Ai, TilePos::new(4, 4), 10, 0);

    let feed = BattlefieldFeed::new();
    let stage = Stage::default();
    let env = SpellEnv::empty().with_presentation(&stage);
    let mut controller = EnchantmentController::new(quad_row(3)).subscribed(&feed);

    controller
        .try_place(&hex(TargetScope::FriendlyUnits), 0, UnitId(1), &mut roster, &env)
        .unwrap();
    controller
        .try_place(&hex(TargetScope::EnemyUnits), 2, UnitId(1), &mut roster, &env)
        .unwrap();
    let bonus = StatBonus::ZERO.attack(3).defense(1);

    assert_eq!(feed.publish(quad_row(2)), 1);
    assert!(controller.sync_battlefield(&mut roster, &env));

    assert_eq!(controller.quads().len(), 2);
    assert_eq!(controller.active_count(), 1);
    assert_eq!(controller.active(0).map(|e| e.handle_count()), Some(2));
    assert_eq!(stage.log.borrow().live.len(), 2);

    // The surviving enchantment is neither lost nor stacked.
    assert_eq!(roster.bonus(UnitId(1)), bonus);
    assert_eq!(controller.total_bonus_for(&roster.units[0]), bonus);

    // Quad 2 is gone: its bonus is reverted along with the record.
    assert!(roster.bonus(UnitId(2)).is_zero());
    assert!(controller.total_bonus_for(&roster.units[1]).is_zero());

    controller.clear_all(&env);
    assert!(stage.log.borrow().live.is_empty());
}
