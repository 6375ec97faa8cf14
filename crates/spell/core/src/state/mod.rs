//! Value types shared by every spell-core component.
//!
//! Units, tiles and stat blocks are owned by external systems; the types here
//! are the read views and identifiers the core exchanges with them.

mod common;
mod stats;
mod unit;

pub use common::{Allegiance, Ray, TilePos, UnitId, Vec2, Vec3};
pub use stats::StatBonus;
pub use unit::{UnitIdentity, UnitSnapshot, UnitStats};
