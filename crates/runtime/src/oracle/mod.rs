//! Runtime wrappers around world data oracles.
//!
//! These implementations expose `alchemy-core` oracle traits and bundle them
//! into an [`OracleManager`] so the engine can build [`CraftEnv`] views on
//! demand. Item data is immutable at runtime; the predefined outcomes table
//! can be edited by GM tooling through [`OutcomeTableImpl`].
mod items;
mod outcomes;

use std::sync::Arc;

use alchemy_content::ContentBundle;
use alchemy_core::CraftEnv;

pub use items::ItemOracleImpl;
pub use outcomes::OutcomeTableImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Default)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) outcomes: Arc<OutcomeTableImpl>,
}

impl OracleManager {
    pub fn new(items: Arc<ItemOracleImpl>, outcomes: Arc<OutcomeTableImpl>) -> Self {
        Self { items, outcomes }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(ItemOracleImpl::from_catalog(&content.items)),
            Arc::new(OutcomeTableImpl::new(content.outcomes.clone())),
        )
    }

    pub fn env(&self) -> CraftEnv<'_> {
        CraftEnv::new(self.items.as_ref(), self.outcomes.as_ref())
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn outcomes(&self) -> &OutcomeTableImpl {
        &self.outcomes
    }
}
