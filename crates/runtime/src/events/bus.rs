//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{ChatMessage, CraftingEvent, Notification};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// User-facing info/warning/error messages
    Notification,
    /// Roll announcements
    Chat,
    /// Completed and failed crafts
    Crafting,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Notification(Notification),
    Chat(ChatMessage),
    Crafting(CraftingEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Notification(_) => Topic::Notification,
            Event::Chat(_) => Topic::Chat,
            Event::Crafting(_) => Topic::Crafting,
        }
    }
}

struct Channels {
    notification: broadcast::Sender<Event>,
    chat: broadcast::Sender<Event>,
    crafting: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Notification => &self.notification,
            Topic::Chat => &self.chat,
            Topic::Crafting => &self.crafting,
        }
    }
}

/// Topic-based event bus
///
/// Publishing is fire-and-forget: events sent while a topic has no
/// subscribers are dropped.
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
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                notification: broadcast::channel(capacity).0,
                chat: broadcast::channel(capacity).0,
                crafting: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }

    /// Subscribe to several topics at once.
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
    use alchemy_core::ActorId;

    use super::*;
    use crate::events::NotificationLevel;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut chat = bus.subscribe(Topic::Chat);
        let mut notes = bus.subscribe(Topic::Notification);

        bus.publish(Event::Notification(Notification::new(
            ActorId(1),
            NotificationLevel::Info,
            "hello",
        )));

        let Event::Notification(note) = notes.recv().await.unwrap() else {
            panic!("expected a notification");
        };
        assert_eq!(note.message, "hello");
        assert!(chat.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(Event::Notification(Notification::new(
            ActorId(1),
            NotificationLevel::Warning,
            "nobody listens",
        )));
    }
}
