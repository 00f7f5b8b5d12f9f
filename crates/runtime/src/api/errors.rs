//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule violations from `alchemy-core`, repository failures, and roll
//! failures so callers can report them with consistent context.
use std::fmt;

use alchemy_core::{
    ActorId, AlchemyError, CraftError, ErrorSeverity, ItemId, OutcomeTableError, SlotError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Write steps of a craft, in commit order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitStage {
    CreateItem,
    RecordOutcome,
    ConsumeReagents,
    DeductCurrency,
}

impl fmt::Display for CommitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommitStage::CreateItem => "creating the crafted item",
            CommitStage::RecordOutcome => "recording the discovered outcome",
            CommitStage::ConsumeReagents => "consuming reagents",
            CommitStage::DeductCurrency => "deducting gold",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Craft(#[from] CraftError),

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error(transparent)]
    OutcomeTable(#[from] OutcomeTableError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{actor} already has a craft in progress")]
    CraftInProgress { actor: ActorId },

    #[error("{item} is not a reagent")]
    NotAReagent { item: ItemId },

    #[error("dice roll failed: {0}")]
    Roll(String),

    /// A write step failed after earlier steps succeeded.
    ///
    /// `rolled_back` is true when every completed step was compensated;
    /// otherwise `unreconciled` lists the compensations that failed.
    #[error("crafting failed while {stage}: {source}")]
    Commit {
        stage: CommitStage,
        #[source]
        source: RepositoryError,
        rolled_back: bool,
        unreconciled: Vec<String>,
    },

    #[error("runtime requires an actor repository before building")]
    MissingActorRepository,
}

impl RuntimeError {
    /// Precondition failures the user can fix by changing the selection,
    /// the inventory, or the purse.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RuntimeError::Craft(_) | RuntimeError::Slot(_) | RuntimeError::NotAReagent { .. }
        )
    }
}

impl AlchemyError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Craft(e) => e.severity(),
            RuntimeError::Slot(e) => e.severity(),
            RuntimeError::OutcomeTable(e) => e.severity(),
            RuntimeError::NotAReagent { .. } => ErrorSeverity::Validation,
            RuntimeError::CraftInProgress { .. } | RuntimeError::Roll(_) => ErrorSeverity::Recoverable,
            RuntimeError::Repository(_) | RuntimeError::MissingActorRepository => ErrorSeverity::Internal,
            RuntimeError::Commit { rolled_back: true, .. } => ErrorSeverity::Internal,
            RuntimeError::Commit { rolled_back: false, .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Craft(e) => e.error_code(),
            RuntimeError::Slot(e) => e.error_code(),
            RuntimeError::OutcomeTable(e) => e.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
            RuntimeError::CraftInProgress { .. } => "RUNTIME_CRAFT_IN_PROGRESS",
            RuntimeError::NotAReagent { .. } => "RUNTIME_NOT_A_REAGENT",
            RuntimeError::Roll(_) => "RUNTIME_ROLL_FAILED",
            RuntimeError::Commit { .. } => "RUNTIME_COMMIT_FAILED",
            RuntimeError::MissingActorRepository => "RUNTIME_MISSING_ACTOR_REPOSITORY",
        }
    }
}
