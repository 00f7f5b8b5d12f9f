//! GM-authored mapping from `(category, sum)` to a specific item.

use std::collections::BTreeMap;

use crate::error::{AlchemyError, ErrorSeverity};
use crate::types::{Category, ItemId, Rarity};

/// Read access to the predefined outcomes table.
pub trait OutcomeOracle: Send + Sync {
    fn predefined(&self, category: Category, sum: u32) -> Option<ItemId>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeTableError {
    #[error("outcome sum {0} is outside 1..=31")]
    SumOutOfRange(u32),
}

impl AlchemyError for OutcomeTableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            OutcomeTableError::SumOutOfRange(_) => "OUTCOME_SUM_OUT_OF_RANGE",
        }
    }
}

/// Predefined outcomes for sums `1..=31` in each category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PredefinedOutcomes {
    pub combat: BTreeMap<u32, ItemId>,
    pub utility: BTreeMap<u32, ItemId>,
    pub entropy: BTreeMap<u32, ItemId>,
}

impl PredefinedOutcomes {
    pub fn new() -> Self {
        Self::default()
    }

    fn column(&self, category: Category) -> &BTreeMap<u32, ItemId> {
        match category {
            Category::Combat => &self.combat,
            Category::Utility => &self.utility,
            Category::Entropy => &self.entropy,
        }
    }

    fn column_mut(&mut self, category: Category) -> &mut BTreeMap<u32, ItemId> {
        match category {
            Category::Combat => &mut self.combat,
            Category::Utility => &mut self.utility,
            Category::Entropy => &mut self.entropy,
        }
    }

    pub fn get(&self, category: Category, sum: u32) -> Option<ItemId> {
        self.column(category).get(&sum).copied()
    }

    /// Links `item` to `(category, sum)`, returning the previous link.
    pub fn assign(
        &mut self,
        category: Category,
        sum: u32,
        item: ItemId,
    ) -> Result<Option<ItemId>, OutcomeTableError> {
        check_sum(sum)?;
        Ok(self.column_mut(category).insert(sum, item))
    }

    /// Removes the link for `(category, sum)`, returning it.
    pub fn clear(&mut self, category: Category, sum: u32) -> Result<Option<ItemId>, OutcomeTableError> {
        check_sum(sum)?;
        Ok(self.column_mut(category).remove(&sum))
    }

    /// Rejects entries outside the addressable range.
    pub fn validate(&self) -> Result<(), OutcomeTableError> {
        Category::all()
            .flat_map(|category| self.column(category).keys().copied())
            .try_for_each(check_sum)
    }

    pub fn len(&self) -> usize {
        self.combat.len() + self.utility.len() + self.entropy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutcomeOracle for PredefinedOutcomes {
    fn predefined(&self, category: Category, sum: u32) -> Option<ItemId> {
        self.get(category, sum)
    }
}

fn check_sum(sum: u32) -> Result<(), OutcomeTableError> {
    if (1..=Rarity::MAX_OUTCOME_SUM).contains(&sum) {
        Ok(())
    } else {
        Err(OutcomeTableError::SumOutOfRange(sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_and_clear_round_trip_per_category() {
        let mut table = PredefinedOutcomes::new();
        assert_eq!(table.assign(Category::Utility, 14, ItemId(3)), Ok(None));
        assert_eq!(table.predefined(Category::Utility, 14), Some(ItemId(3)));
        assert_eq!(table.predefined(Category::Combat, 14), None);

        assert_eq!(table.clear(Category::Utility, 14), Ok(Some(ItemId(3))));
        assert!(table.is_empty());
    }

    #[test]
    fn sums_outside_table_are_rejected() {
        let mut table = PredefinedOutcomes::new();
        assert_eq!(
            table.assign(Category::Combat, 0, ItemId(1)),
            Err(OutcomeTableError::SumOutOfRange(0))
        );
        assert_eq!(
            table.assign(Category::Combat, 32, ItemId(1)),
            Err(OutcomeTableError::SumOutOfRange(32))
        );

        table.entropy.insert(40, ItemId(2));
        assert_eq!(table.validate(), Err(OutcomeTableError::SumOutOfRange(40)));
    }
}
