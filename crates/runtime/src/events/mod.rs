//! Topic-based event bus for runtime events.
//!
//! The engine publishes user notifications, chat announcements and craft
//! reports to separate topics; consumers subscribe only to the topics they
//! render.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ChatMessage, ConsumedReagent, CraftReport, CraftingEvent, Notification, NotificationLevel};
