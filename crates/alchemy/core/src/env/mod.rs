//! Traits describing read-only world data.
//!
//! Oracles expose the world item directory and the predefined outcomes table.
//! [`CraftEnv`] bundles them so the rules can resolve items without coupling
//! to concrete stores.
mod items;
mod outcomes;

pub use items::ItemOracle;
pub use outcomes::{OutcomeOracle, OutcomeTableError, PredefinedOutcomes};

use crate::types::{Category, ItemData, ItemId};

/// Aggregates the read-only oracles needed for classification and item
/// resolution.
#[derive(Clone, Copy)]
pub struct CraftEnv<'a> {
    items: &'a dyn ItemOracle,
    outcomes: &'a dyn OutcomeOracle,
}

impl<'a> CraftEnv<'a> {
    pub fn new(items: &'a dyn ItemOracle, outcomes: &'a dyn OutcomeOracle) -> Self {
        Self { items, outcomes }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn outcomes(&self) -> &'a dyn OutcomeOracle {
        self.outcomes
    }

    /// Predefined item id for `(category, sum)`, if the table links one.
    pub fn predefined_id(&self, category: Category, sum: u32) -> Option<ItemId> {
        self.outcomes.predefined(category, sum)
    }

    /// Predefined item document for `(category, sum)`.
    ///
    /// Returns the id alongside `None` when the link points at an item that no
    /// longer exists.
    pub fn predefined_item(&self, category: Category, sum: u32) -> Option<(ItemId, Option<ItemData>)> {
        let id = self.predefined_id(category, sum)?;
        Some((id, self.items.item(id)))
    }
}

impl core::fmt::Debug for CraftEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CraftEnv").finish_non_exhaustive()
    }
}

/// Empty oracles, for contexts without world data.
pub struct NoWorld;

impl ItemOracle for NoWorld {
    fn item(&self, _id: ItemId) -> Option<ItemData> {
        None
    }
}

impl OutcomeOracle for NoWorld {
    fn predefined(&self, _category: Category, _sum: u32) -> Option<ItemId> {
        None
    }
}
