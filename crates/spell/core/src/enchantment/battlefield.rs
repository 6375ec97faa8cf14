//! Battlefield-changed notifications.
//!
//! The battlefield owner publishes a new quad layout through a
//! [`BattlefieldFeed`]; every [`EnchantmentController`] holding a
//! [`BattlefieldSubscription`] picks it up on its next
//! [`sync_battlefield`] call. Dropping the subscription unsubscribes.
//!
//! The channel is bounded. A subscriber that falls behind loses the oldest
//! layouts, which is fine because only the latest one is ever applied.
//!
//! [`EnchantmentController`]: super::EnchantmentController
//! [`sync_battlefield`]: super::EnchantmentController::sync_battlefield

use tokio::sync::broadcast::{self, error::TryRecvError};

use super::EnchantmentQuad;

/// A new battlefield definition was pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct BattlefieldChanged {
    pub quads: Vec<EnchantmentQuad>,
}

/// Publisher side of the battlefield notifications.
#[derive(Clone, Debug)]
pub struct BattlefieldFeed {
    sender: broadcast::Sender<BattlefieldChanged>,
}

impl BattlefieldFeed {
    /// Pending layouts kept per subscriber before the oldest are dropped.
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a feed keeping up to `capacity` pending layouts (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Registers a new subscriber.
    pub fn subscribe(&self) -> BattlefieldSubscription {
        BattlefieldSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Sends the new layout to every live subscriber and returns how many
    /// received it.
    ///
    /// No subscribers is not an error.
    pub fn publish(&self, quads: Vec<EnchantmentQuad>) -> usize {
        let count = quads.len();
        let delivered = self
            .sender
            .send(BattlefieldChanged { quads })
            .unwrap_or(0);
        tracing::debug!(delivered, quads = count, "battlefield changed");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BattlefieldFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side; unsubscribes from the feed when dropped.
#[derive(Debug)]
pub struct BattlefieldSubscription {
    receiver: broadcast::Receiver<BattlefieldChanged>,
}

impl BattlefieldSubscription {
    /// Drains pending notifications and returns the most recent one.
    pub fn try_latest(&mut self) -> Option<BattlefieldChanged> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(change) => latest = Some(change),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "skipped stale battlefield layouts");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return latest,
            }
        }
    }
}
