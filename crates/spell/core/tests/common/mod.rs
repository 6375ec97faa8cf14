//! In-memory collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use spell_core::{
    Allegiance, AudioCue, BoardOracle, EffectHandle, EnchantmentQuad, PresentationError,
    PresentationOracle, Ray, SpellDefinition, SpellOracle, SpellRef, StatBonus, TilePos,
    UnitError, UnitId, UnitIdentity, UnitProvider, UnitSnapshot, UnitStats, Vec2, Vec3,
    VisualCue,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ============================================================================
// Units
// ============================================================================

#[derive(Default)]
pub struct Roster {
    pub units: Vec<UnitSnapshot>,
    /// Applied bonuses per unit, summed.
    pub bonuses: HashMap<UnitId, StatBonus>,
    pub fail_damage: bool,
}

impl Roster {
    pub fn spawn(&mut self, id: u32, allegiance: Allegiance, tile: TilePos, life: i32, spell: i32) {
        self.units.push(
            UnitSnapshot::new(
                UnitId(id),
                UnitIdentity::new(format!("save-{id}"), "adept"),
                allegiance,
            )
            .at(tile)
            .with_world_position(Vec3::new(tile.x as f32, tile.y as f32, 2.0))
            .with_stats(UnitStats::new(life, spell)),
        );
    }

    pub fn life(&self, id: UnitId) -> Option<i32> {
        self.units
            .iter()
            .find(|unit| unit.id == id)
            .and_then(|unit| unit.stats)
            .map(|stats| stats.life)
    }

    pub fn bonus(&self, id: UnitId) -> StatBonus {
        self.bonuses.get(&id).copied().unwrap_or_default()
    }

    fn stats_mut(&mut self, id: UnitId) -> Result<&mut UnitStats, UnitError> {
        self.units
            .iter_mut()
            .find(|unit| unit.id == id)
            .ok_or(UnitError::UnitNotFound(id))?
            .stats
            .as_mut()
            .ok_or(UnitError::StatsMissing(id))
    }
}

impl UnitProvider for Roster {
    fn tracked_units(&self) -> Vec<UnitSnapshot> {
        self.units.clone()
    }

    fn take_damage(&mut self, id: UnitId, amount: u32) -> Result<(), UnitError> {
        if self.fail_damage {
            return Err(UnitError::Rejected {
                unit: id,
                reason: "stat block locked".into(),
            });
        }
        self.stats_mut(id)?.life -= amount as i32;
        Ok(())
    }

    fn heal(&mut self, id: UnitId, amount: u32) -> Result<(), UnitError> {
        self.stats_mut(id)?.life += amount as i32;
        Ok(())
    }

    fn apply_stat_bonus(&mut self, id: UnitId, bonus: &StatBonus) -> Result<(), UnitError> {
        self.stats_mut(id)?;
        *self.bonuses.entry(id).or_default() += *bonus;
        Ok(())
    }
}

// ============================================================================
// Board
// ============================================================================

/// 8x8 board of unit tiles; the camera looks straight down from `z = 10`.
pub struct Board;

impl BoardOracle for Board {
    fn tile_center(&self, tile: TilePos) -> Option<Vec3> {
        let on_board = (0..8).contains(&tile.x) && (0..8).contains(&tile.y);
        on_board.then(|| Vec3::new(tile.x as f32 + 0.5, tile.y as f32 + 0.5, 0.0))
    }

    fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        Some(Ray::new(
            Vec3::new(screen.x, screen.y, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
        ))
    }
}

// ============================================================================
// Presentation
// ============================================================================

#[derive(Debug, Default)]
pub struct PresentationLog {
    next: u64,
    pub live: Vec<u64>,
    pub destroyed: Vec<u64>,
    pub cast_visuals_at: Vec<Vec3>,
    pub sounds: Vec<String>,
}

#[derive(Default)]
pub struct Stage {
    pub log: RefCell<PresentationLog>,
    pub fail_cast_visuals: bool,
}

impl Stage {
    fn spawn(&self) -> EffectHandle {
        let mut log = self.log.borrow_mut();
        log.next += 1;
        let raw = log.next;
        log.live.push(raw);
        EffectHandle::new(raw)
    }
}

impl PresentationOracle for Stage {
    fn spawn_cast_visual(
        &self,
        _spell: &SpellDefinition,
        cue: &VisualCue,
        at: Vec3,
    ) -> Result<EffectHandle, PresentationError> {
        if self.fail_cast_visuals {
            return Err(PresentationError::spawn_failed(&cue.asset, "missing prefab"));
        }
        self.log.borrow_mut().cast_visuals_at.push(at);
        Ok(self.spawn())
    }

    fn play_cast_audio(
        &self,
        _spell: &SpellDefinition,
        cue: &AudioCue,
        _at: Vec3,
    ) -> Result<(), PresentationError> {
        self.log.borrow_mut().sounds.push(cue.clip.clone());
        Ok(())
    }

    fn spawn_enchantment_visual(
        &self,
        _spell: &SpellDefinition,
        _cue: &VisualCue,
        _quad: &EnchantmentQuad,
    ) -> Result<EffectHandle, PresentationError> {
        Ok(self.spawn())
    }

    fn spawn_enchantment_audio(
        &self,
        _spell: &SpellDefinition,
        _cue: &AudioCue,
        _quad: &EnchantmentQuad,
    ) -> Result<EffectHandle, PresentationError> {
        Ok(self.spawn())
    }

    fn destroy(&self, handle: EffectHandle) {
        let mut log = self.log.borrow_mut();
        log.live.retain(|raw| *raw != handle.raw());
        log.destroyed.push(handle.raw());
    }
}

// ============================================================================
// Spells
// ============================================================================

#[derive(Default)]
pub struct Library {
    pub spells: Vec<SpellRef>,
}

impl Library {
    pub fn with(mut self, spell: SpellRef) -> Self {
        self.spells.push(spell);
        self
    }
}

impl SpellOracle for Library {
    fn spell(&self, id: &str) -> Option<SpellRef> {
        self.spells.iter().find(|spell| spell.id == id).cloned()
    }
}

/// Row of unit quads along `y = 0..1`.
pub fn quad_row(count: usize) -> Vec<EnchantmentQuad> {
    (0..count)
        .map(|i| {
            let x = i as f32;
            EnchantmentQuad::axis_aligned(Vec2::new(x, 0.0), Vec2::new(x + 1.0, 1.0))
        })
        .collect()
}
