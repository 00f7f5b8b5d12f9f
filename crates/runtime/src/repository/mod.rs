//! Repository layer for mutable actor data.
//!
//! Repositories hold data that CHANGES when crafting:
//! - Inventories (created items, consumed reagents)
//! - Currency
//! - Known outcomes ledgers
//!
//! World data (item directory, predefined outcomes) is served by oracles.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::{ActorRecord, InMemoryActorRepo};
pub use traits::ActorRepository;
