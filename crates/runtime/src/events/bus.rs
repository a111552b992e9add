//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{FightEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Fight lifecycle (start, end)
    Fight,
    /// Turn resolution (alterations, actions)
    Turn,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Fight(FightEvent),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Fight(_) => Topic::Fight,
            Event::Turn(_) => Topic::Turn,
        }
    }
}

impl From<FightEvent> for Event {
    fn from(event: FightEvent) -> Self {
        Event::Fight(event)
    }
}

impl From<TurnEvent> for Event {
    fn from(event: TurnEvent) -> Self {
        Event::Turn(event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    fight: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            fight: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Fight => &self.fight,
            Topic::Turn => &self.turn,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("fight_subscribers", &self.fight.receiver_count())
            .field("turn_subscribers", &self.turn.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use fight_core::{FightResult, FighterId, Winner};

    use super::*;

    fn ended() -> FightEvent {
        FightEvent::Ended {
            fighters: [FighterId(1), FighterId(2)],
            result: FightResult {
                winner: Winner::Draw,
                turns: 3,
            },
        }
    }

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut fight_rx = bus.subscribe(Topic::Fight);
        let mut turn_rx = bus.subscribe(Topic::Turn);

        bus.publish(ended());

        let event = fight_rx.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Fight);
        assert!(turn_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_not_an_error() {
        let bus = EventBus::default();
        bus.publish(ended());
    }
}
