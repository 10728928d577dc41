//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{DispatchEvent, SlotEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Slot queue bookkeeping (admissions, evictions, releases)
    Slots,
    /// Resolve-and-trigger cycles and instance endings
    Dispatch,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Slot(SlotEvent),
    Dispatch(DispatchEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Slot(_) => Topic::Slots,
            Event::Dispatch(_) => Topic::Dispatch,
        }
    }
}

impl From<SlotEvent> for Event {
    fn from(event: SlotEvent) -> Self {
        Event::Slot(event)
    }
}

impl From<DispatchEvent> for Event {
    fn from(event: DispatchEvent) -> Self {
        Event::Dispatch(event)
    }
}

struct Channels {
    slots: broadcast::Sender<Event>,
    dispatch: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Slots => &self.slots,
            Topic::Dispatch => &self.dispatch,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                slots: broadcast::channel(capacity).0,
                dispatch: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::{EffectId, EndReason, EntityId};
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn events_reach_only_their_topic() {
        let bus = EventBus::new();
        let mut slots = bus.subscribe(Topic::Slots);
        let mut dispatch = bus.subscribe(Topic::Dispatch);

        bus.publish(SlotEvent::Cleared {
            caster: EntityId(1),
            dropped: 2,
        });

        assert_eq!(
            slots.try_recv().unwrap(),
            Event::Slot(SlotEvent::Cleared {
                caster: EntityId(1),
                dropped: 2
            })
        );
        assert_eq!(dispatch.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(1);
        bus.publish(DispatchEvent::Ended {
            caster: EntityId(1),
            effect: EffectId(2),
            reason: EndReason::Expired,
        });

        let clone = bus.clone();
        let mut rx = clone.subscribe(Topic::Dispatch);
        bus.publish(DispatchEvent::CasterLost {
            caster: EntityId(1),
            effect: EffectId(2),
        });
        assert!(rx.try_recv().is_ok());
    }
}
