//! Runtime orchestration for alchemy crafting.
//!
//! This crate wires the pure rules of `alchemy-core` to async collaborators:
//! actor repositories, dice, world data and an event bus. Consumers build a
//! [`Runtime`], open [`CraftingSession`]s and craft through the
//! [`CraftingEngine`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the builder and configuration
//! - [`api`] exposes the error type and collaborator traits
//! - [`engine`] runs crafts, guards reentrancy and commits results
//! - [`session`] holds one actor's selection
//! - [`events`] provides topic-based event bus for notifications and reports
//! - [`oracle`], [`repository`] and [`providers`] provide adapters
pub mod api;
pub mod engine;
pub mod events;
pub mod oracle;
pub mod providers;
pub mod repository;
pub mod runtime;
pub mod session;

pub use api::{CommitStage, Result, RollProvider, RuntimeError, ToolCheck};
pub use engine::{COMPLETION_NOTICE, CraftingEngine};
pub use events::{
    ChatMessage, ConsumedReagent, CraftReport, CraftingEvent, Event, EventBus, Notification,
    NotificationLevel, Topic,
};
pub use oracle::{ItemOracleImpl, OracleManager, OutcomeTableImpl};
pub use providers::{RngRollProvider, ScriptedRollProvider};
pub use repository::{ActorRecord, ActorRepository, InMemoryActorRepo, RepositoryError};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::CraftingSession;
