//! Repository contract for the actor documents crafting reads and writes.

use alchemy_core::{ActorId, InventoryItem, ItemData, ItemId, KnownOutcomes};
use async_trait::async_trait;

use super::Result;

/// Actor-scoped store: inventory, purse, tool proficiencies and the known
/// outcomes ledger.
///
/// Every write may suspend; the engine awaits each one before issuing the
/// next so commit order is preserved.
#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn inventory(&self, actor: ActorId) -> Result<Vec<InventoryItem>>;

    async fn item(&self, actor: ActorId, item: ItemId) -> Result<Option<InventoryItem>>;

    /// Check modifier for `tool_key`, or `None` when the actor does not own
    /// the tool.
    async fn tool_proficiency(&self, actor: ActorId, tool_key: &str) -> Result<Option<i32>>;

    async fn known_outcomes(&self, actor: ActorId) -> Result<KnownOutcomes>;

    async fn set_known_outcomes(&self, actor: ActorId, ledger: &KnownOutcomes) -> Result<()>;

    /// Adds an item to the inventory and returns its new id.
    async fn create_item(&self, actor: ActorId, data: &ItemData) -> Result<ItemId>;

    /// Puts `data` back under `item`, an id the actor no longer holds.
    async fn restore_item(&self, actor: ActorId, item: ItemId, data: &ItemData) -> Result<()>;

    async fn update_item_quantity(&self, actor: ActorId, item: ItemId, quantity: u32) -> Result<()>;

    async fn delete_item(&self, actor: ActorId, item: ItemId) -> Result<()>;

    /// Gold pieces.
    async fn currency(&self, actor: ActorId) -> Result<u64>;

    async fn set_currency(&self, actor: ActorId, amount: u64) -> Result<()>;
}
