//! Crafting against the bundled demo content.

use std::sync::Arc;

use alchemy_content::{ContentBundle, ContentFactory};
use alchemy_core::{ActorId, Category, CraftError, ItemId, ItemSource};
use alchemy_runtime::{
    InMemoryActorRepo, OracleManager, RngRollProvider, RollProvider, Runtime, RuntimeConfig,
    RuntimeError, ScriptedRollProvider,
};

const YSOLDE: ActorId = ActorId(1);
const TAMSIN: ActorId = ActorId(2);

fn content() -> ContentBundle {
    ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../alchemy/content/data"))
        .load_all()
        .unwrap()
}

fn build(content: &ContentBundle, rolls: Arc<dyn RollProvider>) -> (Runtime, Arc<InMemoryActorRepo>) {
    let repo = Arc::new(InMemoryActorRepo::from_fixtures(content.actors.clone()).unwrap());
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            alchemy: content.config.clone(),
            ..RuntimeConfig::default()
        })
        .actors(repo.clone())
        .oracles(OracleManager::from_content(content))
        .rolls(rolls)
        .build()
        .unwrap();
    (runtime, repo)
}

#[tokio::test]
async fn seeded_craft_commits_a_consistent_result() {
    let content = content();
    let (runtime, repo) = build(&content, Arc::new(RngRollProvider::from_seed(7)));

    let mut session = runtime.session(YSOLDE);
    for (slot, item) in [ItemId(2), ItemId(3), ItemId(4)].into_iter().enumerate() {
        session.slot_item(runtime.engine(), slot, item).await.unwrap();
    }
    let report = session.craft(runtime.engine()).await.unwrap();

    assert_eq!(report.quote.sum, 12);
    assert_eq!(report.quote.category, Category::Combat);
    assert_eq!(report.gold_spent, 20);
    assert_eq!(report.balance, 480);
    assert!((1..=2).contains(&report.item.quantity));

    let record = repo.snapshot(YSOLDE).unwrap();
    assert_eq!(record.currency, 480);
    assert_eq!(record.inventory[&report.item_id], report.item);
    let entry = record
        .known_outcomes
        .get(report.resolution.category, report.resolution.sum)
        .unwrap();
    assert_eq!(entry.item, report.item_id);
}

#[tokio::test]
async fn predefined_outcome_clones_the_world_item() {
    let content = content();
    let rolls = Arc::new(ScriptedRollProvider::new().with_check(12));
    let (runtime, repo) = build(&content, rolls);

    // Bloodcap, Wyrmtongue Leaf and Silverthorn sum to combat 8.
    let mut session = runtime.session(YSOLDE);
    for (slot, item) in [ItemId(2), ItemId(4), ItemId(5)].into_iter().enumerate() {
        session.slot_item(runtime.engine(), slot, item).await.unwrap();
    }
    let report = session.craft(runtime.engine()).await.unwrap();

    assert_eq!(report.resolution.sum, 8);
    assert_eq!(report.source, ItemSource::Predefined(ItemId(1001)));
    assert_eq!(report.item.name, "Draught of Embers");
    // Reagents offset more than the base cost; the minimum applies.
    assert_eq!(report.gold_spent, 5);

    let record = repo.snapshot(YSOLDE).unwrap();
    assert!(!record.inventory.contains_key(&ItemId(4)));
    assert_eq!(record.inventory[&ItemId(5)].quantity, 3);

    let compendium = runtime.engine().compendium(YSOLDE).await.unwrap();
    let page = compendium.page(Category::Combat).unwrap();
    let entry = page.entry(8).unwrap();
    assert!(entry.known);
    assert_eq!(entry.name.as_deref(), Some("Draught of Embers"));
}

#[tokio::test]
async fn apprentice_cannot_fill_the_slots() {
    let content = content();
    let (runtime, _repo) = build(&content, Arc::new(RngRollProvider::from_seed(1)));

    let mut session = runtime.session(TAMSIN);
    session.slot_item(runtime.engine(), 0, ItemId(21)).await.unwrap();
    assert!(matches!(
        session.slot_item(runtime.engine(), 1, ItemId(21)).await,
        Err(RuntimeError::Slot(_))
    ));
    assert!(matches!(
        session.craft(runtime.engine()).await,
        Err(RuntimeError::Craft(CraftError::IncompleteSelection { filled: 1 }))
    ));
}
