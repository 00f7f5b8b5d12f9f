//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alchemy_core::{
    ActorId, Essence, InventoryItem, IpVector, ItemData, ItemId, ItemKind, KnownOutcomes, Rarity,
    ReagentProps,
};
use alchemy_runtime::{
    ActorRecord, ActorRepository, Event, InMemoryActorRepo, OracleManager, RepositoryError,
    RollProvider, Runtime, RuntimeConfig, ScriptedRollProvider,
};
use async_trait::async_trait;
use tokio::sync::broadcast;

pub const ACTOR: ActorId = ActorId(1);
pub const SUPPLIES: ItemId = ItemId(1);
pub const BLOODCAP: ItemId = ItemId(2);
pub const FIRE_MOSS: ItemId = ItemId(3);
pub const WYRMTONGUE: ItemId = ItemId(4);

pub fn reagent(name: &str, quantity: u32, rarity: Rarity, ip: IpVector) -> ItemData {
    ItemData::new(name, ItemKind::Loot)
        .with_quantity(quantity)
        .with_rarity(rarity)
        .with_reagent(ReagentProps::new(ip, Essence::Primal))
}

pub fn supplies() -> ItemData {
    ItemData::new("Alchemist's Supplies", ItemKind::Tool).with_tool("alchemist")
}

/// An alchemist with three common combat reagents (IP 4 each) and 100 gp.
pub fn alchemist() -> ActorRecord {
    ActorRecord::new("Ysolde")
        .with_currency(100)
        .with_tool_bonus("alchemist", 2)
        .with_item(SUPPLIES, supplies())
        .with_item(BLOODCAP, reagent("Bloodcap", 1, Rarity::Common, IpVector::new(4, 0, 0)))
        .with_item(FIRE_MOSS, reagent("Fire Moss", 2, Rarity::Common, IpVector::new(4, 0, 0)))
        .with_item(WYRMTONGUE, reagent("Wyrmtongue Leaf", 3, Rarity::Common, IpVector::new(4, 0, 0)))
}

pub fn repo_with(record: ActorRecord) -> Arc<InMemoryActorRepo> {
    let repo = InMemoryActorRepo::new();
    repo.insert_actor(ACTOR, record).unwrap();
    Arc::new(repo)
}

pub fn runtime(actors: Arc<dyn ActorRepository>, rolls: Arc<dyn RollProvider>, oracles: OracleManager) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default())
        .actors(actors)
        .rolls(rolls)
        .oracles(oracles)
        .build()
        .unwrap()
}

pub fn scripted(checks: &[i32], draws: &[u32]) -> Arc<ScriptedRollProvider> {
    let provider = ScriptedRollProvider::new();
    for &total in checks {
        provider.push_check(total);
    }
    for &total in draws {
        provider.push_draw(total);
    }
    Arc::new(provider)
}

/// Drains every event currently queued on a receiver.
pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Repository operations a [`FaultyRepo`] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    CreateItem,
    RestoreItem,
    SetKnownOutcomes,
    UpdateQuantity,
    DeleteItem,
    SetCurrency,
}

/// Wraps the in-memory repository and fails chosen writes.
///
/// Each registered op succeeds `after` more times, then fails forever.
pub struct FaultyRepo {
    pub inner: Arc<InMemoryActorRepo>,
    faults: Mutex<HashMap<Op, usize>>,
}

impl FaultyRepo {
    pub fn new(inner: Arc<InMemoryActorRepo>) -> Self {
        Self {
            inner,
            faults: Mutex::new(HashMap::new()),
        }
    }

    pub fn fail(self, op: Op, after: usize) -> Self {
        self.faults.lock().unwrap().insert(op, after);
        self
    }

    fn check(&self, op: Op) -> alchemy_runtime::repository::Result<()> {
        let mut faults = self.faults.lock().unwrap();
        match faults.get_mut(&op) {
            Some(0) => Err(RepositoryError::Unavailable(format!("{op:?} failed"))),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

type RepoResult<T> = alchemy_runtime::repository::Result<T>;

#[async_trait]
impl ActorRepository for FaultyRepo {
    async fn inventory(&self, actor: ActorId) -> RepoResult<Vec<InventoryItem>> {
        self.inner.inventory(actor).await
    }

    async fn item(&self, actor: ActorId, item: ItemId) -> RepoResult<Option<InventoryItem>> {
        self.inner.item(actor, item).await
    }

    async fn tool_proficiency(&self, actor: ActorId, tool_key: &str) -> RepoResult<Option<i32>> {
        self.inner.tool_proficiency(actor, tool_key).await
    }

    async fn known_outcomes(&self, actor: ActorId) -> RepoResult<KnownOutcomes> {
        self.inner.known_outcomes(actor).await
    }

    async fn set_known_outcomes(&self, actor: ActorId, ledger: &KnownOutcomes) -> RepoResult<()> {
        self.check(Op::SetKnownOutcomes)?;
        self.inner.set_known_outcomes(actor, ledger).await
    }

    async fn create_item(&self, actor: ActorId, data: &ItemData) -> RepoResult<ItemId> {
        self.check(Op::CreateItem)?;
        self.inner.create_item(actor, data).await
    }

    async fn restore_item(&self, actor: ActorId, item: ItemId, data: &ItemData) -> RepoResult<()> {
        self.check(Op::RestoreItem)?;
        self.inner.restore_item(actor, item, data).await
    }

    async fn update_item_quantity(&self, actor: ActorId, item: ItemId, quantity: u32) -> RepoResult<()> {
        self.check(Op::UpdateQuantity)?;
        self.inner.update_item_quantity(actor, item, quantity).await
    }

    async fn delete_item(&self, actor: ActorId, item: ItemId) -> RepoResult<()> {
        self.check(Op::DeleteItem)?;
        self.inner.delete_item(actor, item).await
    }

    async fn currency(&self, actor: ActorId) -> RepoResult<u64> {
        self.inner.currency(actor).await
    }

    async fn set_currency(&self, actor: ActorId, amount: u64) -> RepoResult<()> {
        self.check(Op::SetCurrency)?;
        self.inner.set_currency(actor, amount).await
    }
}
