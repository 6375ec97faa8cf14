//! Cast lifecycle callbacks.

use crate::state::{UnitId, UnitIdentity};

/// Receives lifecycle notifications for one cast.
///
/// All methods default to no-ops. `on_complete` fires exactly once for every
/// cast that got past validation, on success and on failure alike, so input
/// locking code may treat it as the only re-enable signal.
pub trait CastListener {
    /// Cast started; begin caster animation, lock input.
    fn on_start(&mut self) {}

    /// Action points spent by the cast, fired even when the cost is zero.
    fn on_action_points_consumed(&mut self, _cost: u32) {}

    /// The caster targeted itself and its stats may have changed.
    fn on_stats_changed(&mut self) {}

    /// The target's life dropped to zero or below. Removing the unit from the
    /// board is the unit-lifecycle collaborator's job.
    fn on_unit_died(&mut self, _unit: UnitId, _identity: &UnitIdentity) {}

    /// Terminal callback.
    fn on_complete(&mut self) {}
}

/// Listener that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl CastListener for NoopListener {}

/// Recorded lifecycle notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CastEvent {
    Started,
    ActionPointsConsumed(u32),
    StatsChanged,
    UnitDied(UnitId, UnitIdentity),
    Completed,
}

/// A `Vec<CastEvent>` records the notifications in order.
impl CastListener for Vec<CastEvent> {
    fn on_start(&mut self) {
        self.push(CastEvent::Started);
    }

    fn on_action_points_consumed(&mut self, cost: u32) {
        self.push(CastEvent::ActionPointsConsumed(cost));
    }

    fn on_stats_changed(&mut self) {
        self.push(CastEvent::StatsChanged);
    }

    fn on_unit_died(&mut self, unit: UnitId, identity: &UnitIdentity) {
        self.push(CastEvent::UnitDied(unit, identity.clone()));
    }

    fn on_complete(&mut self) {
        self.push(CastEvent::Completed);
    }
}
