//! Error types raised by repository implementations.

use alchemy_core::{ActorId, ItemId};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("actor repository lock was poisoned")]
    LockPoisoned,

    #[error("{0} not found")]
    ActorNotFound(ActorId),

    #[error("{item} not found in inventory of {actor}")]
    ItemNotFound { actor: ActorId, item: ItemId },

    /// The stored value no longer satisfies a check made earlier.
    #[error("conflicting update: {0}")]
    Conflict(String),

    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
