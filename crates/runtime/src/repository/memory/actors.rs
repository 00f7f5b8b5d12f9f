//! In-memory ActorRepository implementation for tests and local runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use alchemy_content::ActorFixture;
use alchemy_core::{ActorId, InventoryItem, ItemData, ItemId, ItemKind, KnownOutcomes};
use async_trait::async_trait;

use crate::repository::{ActorRepository, RepositoryError, Result};

/// Mutable state of one actor.
#[derive(Debug, Clone, Default)]
pub struct ActorRecord {
    pub name: String,
    pub currency: u64,
    /// Check modifier per tool key.
    pub tool_bonuses: BTreeMap<String, i32>,
    pub inventory: BTreeMap<ItemId, ItemData>,
    pub known_outcomes: KnownOutcomes,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: u64) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_tool_bonus(mut self, tool_key: impl Into<String>, bonus: i32) -> Self {
        self.tool_bonuses.insert(tool_key.into(), bonus);
        self
    }

    pub fn with_item(mut self, id: ItemId, data: ItemData) -> Self {
        self.inventory.insert(id, data);
        self
    }

    fn owns_tool(&self, tool_key: &str) -> bool {
        self.inventory
            .values()
            .any(|data| data.kind == ItemKind::Tool && data.tool.as_deref() == Some(tool_key))
    }
}

impl From<ActorFixture> for ActorRecord {
    fn from(fixture: ActorFixture) -> Self {
        Self {
            name: fixture.name,
            currency: fixture.currency,
            tool_bonuses: fixture.tool_bonuses,
            inventory: fixture
                .inventory
                .into_iter()
                .map(|item| (item.id, item.data))
                .collect(),
            known_outcomes: fixture.known_outcomes,
        }
    }
}

/// In-memory implementation of ActorRepository.
///
/// Newly created items get ids above every id seen so far.
pub struct InMemoryActorRepo {
    actors: RwLock<HashMap<ActorId, ActorRecord>>,
    next_item_id: AtomicU64,
}

impl InMemoryActorRepo {
    pub fn new() -> Self {
        Self {
            actors: RwLock::new(HashMap::new()),
            next_item_id: AtomicU64::new(1),
        }
    }

    pub fn from_fixtures(fixtures: impl IntoIterator<Item = ActorFixture>) -> Result<Self> {
        let repo = Self::new();
        for fixture in fixtures {
            repo.insert_actor(fixture.id, fixture.into())?;
        }
        Ok(repo)
    }

    /// Adds or replaces an actor.
    pub fn insert_actor(&self, id: ActorId, record: ActorRecord) -> Result<()> {
        if let Some(max) = record.inventory.keys().map(|id| id.0).max() {
            self.next_item_id.fetch_max(max + 1, Ordering::SeqCst);
        }
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        actors.insert(id, record);
        Ok(())
    }

    /// Copy of an actor's record.
    pub fn snapshot(&self, actor: ActorId) -> Result<ActorRecord> {
        self.read(actor, |record| Ok(record.clone()))
    }

    pub fn actor_ids(&self) -> Result<Vec<ActorId>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<ActorId> = actors.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn read<T>(&self, actor: ActorId, f: impl FnOnce(&ActorRecord) -> Result<T>) -> Result<T> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = actors.get(&actor).ok_or(RepositoryError::ActorNotFound(actor))?;
        f(record)
    }

    fn write<T>(&self, actor: ActorId, f: impl FnOnce(&mut ActorRecord) -> Result<T>) -> Result<T> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = actors
            .get_mut(&actor)
            .ok_or(RepositoryError::ActorNotFound(actor))?;
        f(record)
    }
}

impl Default for InMemoryActorRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActorRepository for InMemoryActorRepo {
    async fn inventory(&self, actor: ActorId) -> Result<Vec<InventoryItem>> {
        self.read(actor, |record| {
            Ok(record
                .inventory
                .iter()
                .map(|(id, data)| InventoryItem::new(*id, data.clone()))
                .collect())
        })
    }

    async fn item(&self, actor: ActorId, item: ItemId) -> Result<Option<InventoryItem>> {
        self.read(actor, |record| {
            Ok(record
                .inventory
                .get(&item)
                .map(|data| InventoryItem::new(item, data.clone())))
        })
    }

    async fn tool_proficiency(&self, actor: ActorId, tool_key: &str) -> Result<Option<i32>> {
        self.read(actor, |record| {
            Ok(record
                .owns_tool(tool_key)
                .then(|| record.tool_bonuses.get(tool_key).copied().unwrap_or(0)))
        })
    }

    async fn known_outcomes(&self, actor: ActorId) -> Result<KnownOutcomes> {
        self.read(actor, |record| Ok(record.known_outcomes.clone()))
    }

    async fn set_known_outcomes(&self, actor: ActorId, ledger: &KnownOutcomes) -> Result<()> {
        self.write(actor, |record| {
            record.known_outcomes = ledger.clone();
            Ok(())
        })
    }

    async fn create_item(&self, actor: ActorId, data: &ItemData) -> Result<ItemId> {
        self.write(actor, |record| {
            let id = ItemId(self.next_item_id.fetch_add(1, Ordering::SeqCst));
            record.inventory.insert(id, data.clone());
            Ok(id)
        })
    }

    async fn restore_item(&self, actor: ActorId, item: ItemId, data: &ItemData) -> Result<()> {
        self.write(actor, |record| {
            if record.inventory.contains_key(&item) {
                return Err(RepositoryError::Conflict(format!("{item} already exists for {actor}")));
            }
            record.inventory.insert(item, data.clone());
            self.next_item_id.fetch_max(item.0.saturating_add(1), Ordering::SeqCst);
            Ok(())
        })
    }

    async fn update_item_quantity(&self, actor: ActorId, item: ItemId, quantity: u32) -> Result<()> {
        self.write(actor, |record| {
            let data = record
                .inventory
                .get_mut(&item)
                .ok_or(RepositoryError::ItemNotFound { actor, item })?;
            data.quantity = quantity;
            Ok(())
        })
    }

    async fn delete_item(&self, actor: ActorId, item: ItemId) -> Result<()> {
        self.write(actor, |record| {
            record
                .inventory
                .remove(&item)
                .map(|_| ())
                .ok_or(RepositoryError::ItemNotFound { actor, item })
        })
    }

    async fn currency(&self, actor: ActorId) -> Result<u64> {
        self.read(actor, |record| Ok(record.currency))
    }

    async fn set_currency(&self, actor: ActorId, amount: u64) -> Result<()> {
        self.write(actor, |record| {
            record.currency = amount;
            Ok(())
        })
    }
}
