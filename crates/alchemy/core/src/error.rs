//! Common error infrastructure for alchemy-core.
//!
//! Domain-specific errors live next to the rules they validate
//! ([`crate::ReagentError`], [`crate::SlotError`], [`crate::OutcomeTableError`]);
//! this module holds the severity classification they share and the
//! precondition errors raised before a craft touches any state.

use crate::types::{Category, ItemId};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: a collaborator failed; retrying later may succeed
/// - **Validation**: the user must change their input before retrying
/// - **Internal**: state is inconsistent and needs investigation
/// - **Fatal**: the engine cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the user can fix the cause and try again.
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Returns true if this error indicates an internal bug or corrupted state.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all alchemy errors.
///
/// Every error enum derives `thiserror::Error` for its user-facing message and
/// implements this trait for classification.
pub trait AlchemyError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Preconditions a craft must satisfy before any roll or write happens.
///
/// The display strings are shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CraftError {
    #[error("You must select exactly 3 reagents to craft! ({filled} selected)")]
    IncompleteSelection { filled: usize },

    #[error("No outcome determined: the selected reagents carry no influence points.")]
    NoOutcome,

    #[error("Please select a crafting outcome!")]
    TiebreakUnresolved { options: Vec<Category> },

    #[error("{choice} is not one of the tied outcomes")]
    InvalidTiebreakChoice {
        choice: Category,
        options: Vec<Category>,
    },

    #[error("Crafting requires the '{tool_key}' tool, which was not found in the inventory.")]
    MissingTool { tool_key: String },

    #[error("Insufficient gold! Need {required} gp, have {available} gp.")]
    InsufficientCurrency { required: u64, available: u64 },

    #[error("Reagent {item} is no longer available in the inventory.")]
    ReagentUnavailable { item: ItemId },
}

impl AlchemyError for CraftError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CraftError::*;
        match self {
            IncompleteSelection { .. } => "CRAFT_INCOMPLETE_SELECTION",
            NoOutcome => "CRAFT_NO_OUTCOME",
            TiebreakUnresolved { .. } => "CRAFT_TIEBREAK_UNRESOLVED",
            InvalidTiebreakChoice { .. } => "CRAFT_INVALID_TIEBREAK_CHOICE",
            MissingTool { .. } => "CRAFT_MISSING_TOOL",
            InsufficientCurrency { .. } => "CRAFT_INSUFFICIENT_CURRENCY",
            ReagentUnavailable { .. } => "CRAFT_REAGENT_UNAVAILABLE",
        }
    }
}
