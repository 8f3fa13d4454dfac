//! Per-seat FIFO of deferred effects.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::effect::{Effect, QueuedAction};

/// One seat's pending actions.
///
/// ## Behavior
///
/// - `enqueue()`: appends; nothing runs
/// - `pop_next()`: removes the front entry for the caller to execute
/// - A non-empty queue blocks its seat from rolling
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vector<QueuedAction>,
}

impl ActionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with an explicit label.
    pub fn enqueue(&mut self, label: impl Into<String>, effect: Effect) {
        self.pending.push_back(QueuedAction::new(label, effect));
    }

    /// Append an entry labelled by its effect.
    pub fn enqueue_effect(&mut self, effect: Effect) {
        self.pending.push_back(QueuedAction::from(effect));
    }

    /// Remove the front entry.
    pub fn pop_next(&mut self) -> Option<QueuedAction> {
        self.pending.pop_front()
    }

    /// The entry the next confirmation will run.
    #[must_use]
    pub fn peek(&self) -> Option<&QueuedAction> {
        self.pending.front()
    }

    /// Iterate over entries, front first.
    pub fn iter(&self) -> impl Iterator<Item = &QueuedAction> {
        self.pending.iter()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
