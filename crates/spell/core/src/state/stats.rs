//! Stat bonus vectors granted by enchantments.
//!
//! A [`StatBonus`] is a flat, additive delta over the unit stats the external
//! stat system exposes. Bonuses compose by addition and revert by negation.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};

/// Flat additive delta applied to a unit's stat block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBonus {
    pub life: i32,
    pub attack: i32,
    pub defense: i32,
    pub spell: i32,
    pub movement: i32,
    pub initiative: i32,
}

impl StatBonus {
    pub const ZERO: Self = Self {
        life: 0,
        attack: 0,
        defense: 0,
        spell: 0,
        movement: 0,
        initiative: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Builder: add `value` to life.
    pub fn life(mut self, value: i32) -> Self {
        self.life += value;
        self
    }

    /// Builder: add `value` to attack.
    pub fn attack(mut self, value: i32) -> Self {
        self.attack += value;
        self
    }

    /// Builder: add `value` to defense.
    pub fn defense(mut self, value: i32) -> Self {
        self.defense += value;
        self
    }

    /// Builder: add `value` to the spell stat.
    pub fn spell(mut self, value: i32) -> Self {
        self.spell += value;
        self
    }

    /// Builder: add `value` to movement.
    pub fn movement(mut self, value: i32) -> Self {
        self.movement += value;
        self
    }

    /// Builder: add `value` to initiative.
    pub fn initiative(mut self, value: i32) -> Self {
        self.initiative += value;
        self
    }
}

impl Add for StatBonus {
    type Output = StatBonus;

    fn add(self, rhs: StatBonus) -> StatBonus {
        StatBonus {
            life: self.life.saturating_add(rhs.life),
            attack: self.attack.saturating_add(rhs.attack),
            defense: self.defense.saturating_add(rhs.defense),
            spell: self.spell.saturating_add(rhs.spell),
            movement: self.movement.saturating_add(rhs.movement),
            initiative: self.initiative.saturating_add(rhs.initiative),
        }
    }
}

impl AddAssign for StatBonus {
    fn add_assign(&mut self, rhs: StatBonus) {
        *self = *self + rhs;
    }
}

impl Neg for StatBonus {
    type Output = StatBonus;

    fn neg(self) -> StatBonus {
        StatBonus {
            life: self.life.saturating_neg(),
            attack: self.attack.saturating_neg(),
            defense: self.defense.saturating_neg(),
            spell: self.spell.saturating_neg(),
            movement: self.movement.saturating_neg(),
            initiative: self.initiative.saturating_neg(),
        }
    }
}

impl Sum for StatBonus {
    fn sum<I: Iterator<Item = StatBonus>>(iter: I) -> StatBonus {
        iter.fold(StatBonus::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a StatBonus> for StatBonus {
    fn sum<I: Iterator<Item = &'a StatBonus>>(iter: I) -> StatBonus {
        iter.copied().sum()
    }
}
