use crate::types::{ItemData, ItemId};

/// World-level item documents (the host's item directory).
pub trait ItemOracle: Send + Sync {
    fn item(&self, id: ItemId) -> Option<ItemData>;
}
