//! Minimal [`alchemy_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use alchemy_content::ItemCatalog;
use alchemy_core::{ItemData, ItemId, ItemOracle};

/// ItemOracle implementation with static world items
#[derive(Default)]
pub struct ItemOracleImpl {
    items: HashMap<ItemId, ItemData>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: &ItemCatalog) -> Self {
        Self {
            items: catalog
                .items
                .iter()
                .map(|world| (world.id, world.item.clone()))
                .collect(),
        }
    }

    pub fn add_item(&mut self, id: ItemId, data: ItemData) {
        self.items.insert(id, data);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn item(&self, id: ItemId) -> Option<ItemData> {
        self.items.get(&id).cloned()
    }
}
