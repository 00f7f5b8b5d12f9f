//! Read-only view of the outcome table for one actor.

use crate::env::{ItemOracle, OutcomeOracle};
use crate::ledger::KnownOutcomes;
use crate::types::{Category, ItemId, Rarity};

/// One outcome slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompendiumEntry {
    pub sum: u32,
    pub known: bool,
    pub item: Option<ItemId>,
    pub name: Option<String>,
    pub img: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RarityGroup {
    pub rarity: Rarity,
    pub entries: Vec<CompendiumEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryPage {
    pub category: Category,
    pub groups: Vec<RarityGroup>,
}

impl CategoryPage {
    pub fn entry(&self, sum: u32) -> Option<&CompendiumEntry> {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .find(|entry| entry.sum == sum)
    }

    pub fn known_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .filter(|entry| entry.known)
            .count()
    }
}

/// Every outcome slot (`1..=31`) per category, grouped by rarity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compendium {
    pub pages: Vec<CategoryPage>,
}

impl Compendium {
    pub fn build(ledger: &KnownOutcomes, outcomes: &dyn OutcomeOracle, items: &dyn ItemOracle) -> Self {
        let pages = Category::all()
            .map(|category| CategoryPage {
                category,
                groups: Rarity::all()
                    .map(|rarity| RarityGroup {
                        rarity,
                        entries: rarity
                            .outcome_sums()
                            .map(|sum| {
                                let item = outcomes.predefined(category, sum);
                                let data = item.and_then(|id| items.item(id));
                                CompendiumEntry {
                                    sum,
                                    known: ledger.is_known(category, sum),
                                    item,
                                    name: data.as_ref().map(|d| d.name.clone()),
                                    img: data.and_then(|d| d.img),
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { pages }
    }

    pub fn page(&self, category: Category) -> Option<&CategoryPage> {
        self.pages.iter().find(|page| page.category == category)
    }
}
