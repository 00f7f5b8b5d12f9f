//! Shared, editable predefined outcomes table.
use std::sync::RwLock;

use alchemy_core::{Category, ItemId, OutcomeOracle, PredefinedOutcomes};

use crate::api::{Result, RuntimeError};
use crate::repository::RepositoryError;

/// [`OutcomeOracle`] over a lock-protected [`PredefinedOutcomes`].
///
/// Reads during a craft see either the table before or after an edit,
/// never a partial one.
#[derive(Default)]
pub struct OutcomeTableImpl {
    table: RwLock<PredefinedOutcomes>,
}

impl OutcomeTableImpl {
    pub fn new(table: PredefinedOutcomes) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// Links `item` to `(category, sum)`, returning the previous link.
    pub fn assign(&self, category: Category, sum: u32, item: ItemId) -> Result<Option<ItemId>> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let previous = table.assign(category, sum, item)?;
        tracing::info!(%category, sum, %item, "predefined outcome assigned");
        Ok(previous)
    }

    pub fn clear(&self, category: Category, sum: u32) -> Result<Option<ItemId>> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let removed = table.clear(category, sum)?;
        if removed.is_some() {
            tracing::info!(%category, sum, "predefined outcome cleared");
        }
        Ok(removed)
    }

    pub fn snapshot(&self) -> Result<PredefinedOutcomes> {
        self.table
            .read()
            .map(|table| table.clone())
            .map_err(|_| RuntimeError::Repository(RepositoryError::LockPoisoned))
    }
}

impl OutcomeOracle for OutcomeTableImpl {
    fn predefined(&self, category: Category, sum: u32) -> Option<ItemId> {
        self.table.read().ok()?.get(category, sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_are_visible_through_the_oracle() {
        let table = OutcomeTableImpl::default();
        assert_eq!(table.assign(Category::Entropy, 31, ItemId(7)).unwrap(), None);
        assert_eq!(table.predefined(Category::Entropy, 31), Some(ItemId(7)));

        assert_eq!(table.clear(Category::Entropy, 31).unwrap(), Some(ItemId(7)));
        assert_eq!(table.predefined(Category::Entropy, 31), None);
    }

    #[test]
    fn out_of_range_sums_are_rejected() {
        let table = OutcomeTableImpl::default();
        assert!(matches!(
            table.assign(Category::Combat, 32, ItemId(1)),
            Err(RuntimeError::OutcomeTable(_))
        ));
        assert!(table.snapshot().unwrap().is_empty());
    }
}
