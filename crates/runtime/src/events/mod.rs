//! Topic-based event bus for fight events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Publishing is best-effort.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{FightEvent, TurnEvent};
