//! Deferred action queues.
//!
//! Landing outcomes such as rent, tax, pot collection and card effects are
//! offered to the seat before any cash moves. Each seat has one FIFO; the
//! engine runs exactly one entry per explicit confirmation, never on its own.
//!
//! ## Example
//!
//! ```
//! use spaceopoly::queue::{ActionQueue, Effect};
//!
//! let mut queue = ActionQueue::new();
//! queue.enqueue_effect(Effect::receive(200, "passing Launch"));
//! queue.enqueue_effect(Effect::GoToJail);
//!
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.peek().unwrap().label, "Receive $200M");
//! ```

mod action_queue;
mod effect;

pub use action_queue::ActionQueue;
pub use effect::{Effect, QueuedAction};
