//! In-memory repository implementations for testing and development.

mod actors;

pub use actors::{ActorRecord, InMemoryActorRepo};
