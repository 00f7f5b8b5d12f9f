//! Per-actor record of discovered outcomes.

use crate::types::{Category, ItemId};

/// A `(sum → item)` association the actor has crafted at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveredOutcome {
    pub sum: u32,
    /// The item created by the first craft of this outcome.
    pub item: ItemId,
}

/// Known outcomes, one set per category.
///
/// Holds at most one entry per sum per category and only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnownOutcomes {
    combat: Vec<DiscoveredOutcome>,
    utility: Vec<DiscoveredOutcome>,
    entropy: Vec<DiscoveredOutcome>,
}

impl KnownOutcomes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &[DiscoveredOutcome] {
        match category {
            Category::Combat => &self.combat,
            Category::Utility => &self.utility,
            Category::Entropy => &self.entropy,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<DiscoveredOutcome> {
        match category {
            Category::Combat => &mut self.combat,
            Category::Utility => &mut self.utility,
            Category::Entropy => &mut self.entropy,
        }
    }

    pub fn get(&self, category: Category, sum: u32) -> Option<&DiscoveredOutcome> {
        self.entries(category).iter().find(|entry| entry.sum == sum)
    }

    pub fn is_known(&self, category: Category, sum: u32) -> bool {
        self.get(category, sum).is_some()
    }

    /// Records a discovery. Returns `false` (and changes nothing) if the
    /// pair is already known.
    pub fn record(&mut self, category: Category, sum: u32, item: ItemId) -> bool {
        if self.is_known(category, sum) {
            return false;
        }
        self.entries_mut(category)
            .push(DiscoveredOutcome { sum, item });
        true
    }

    pub fn len(&self) -> usize {
        self.combat.len() + self.utility.len() + self.entropy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
