//! High-level runtime wiring.
//!
//! The runtime owns the event bus and the crafting engine, and exposes a
//! builder-based API for clients to plug in repositories, dice and world
//! data.

use std::sync::Arc;

use alchemy_core::{ActorId, AlchemyConfig};
use tokio::sync::broadcast;

use crate::api::{Result, RollProvider, RuntimeError};
use crate::engine::CraftingEngine;
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;
use crate::providers::RngRollProvider;
use crate::repository::ActorRepository;
use crate::session::CraftingSession;

/// Runtime configuration shared across the engine and event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub alchemy: AlchemyConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            alchemy: AlchemyConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Crafting runtime.
///
/// Cheap to clone; clones share the engine, its reentrancy guard and the
/// event bus.
#[derive(Clone)]
pub struct Runtime {
    engine: CraftingEngine,
    events: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn engine(&self) -> &CraftingEngine {
        &self.engine
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to one event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Opens an empty crafting session for `actor`.
    pub fn session(&self, actor: ActorId) -> CraftingSession {
        CraftingSession::new(actor)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    actors: Option<Arc<dyn ActorRepository>>,
    rolls: Option<Arc<dyn RollProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            actors: None,
            rolls: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// World item directory and predefined outcomes (empty if not set)
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the required actor repository
    pub fn actors(mut self, actors: Arc<dyn ActorRepository>) -> Self {
        self.actors = Some(actors);
        self
    }

    /// Set the roll provider (entropy-seeded dice if not set)
    pub fn rolls(mut self, rolls: Arc<dyn RollProvider>) -> Self {
        self.rolls = Some(rolls);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let actors = self.actors.ok_or(RuntimeError::MissingActorRepository)?;
        let rolls = self
            .rolls
            .unwrap_or_else(|| Arc::new(RngRollProvider::from_entropy()) as Arc<dyn RollProvider>);
        let events = EventBus::with_capacity(self.config.event_buffer_size);

        let engine = CraftingEngine::new(
            self.config.alchemy,
            actors,
            rolls,
            self.oracles.unwrap_or_default(),
            events.clone(),
        );

        Ok(Runtime { engine, events })
    }
}
