mod common;

use std::sync::Arc;

use alchemy_core::{
    Category, CheckDegree, DiceFormula, IpVector, ItemData, ItemId, ItemKind, ItemSource, Outcome,
    PredefinedOutcomes, Rarity, SessionPhase,
};
use alchemy_runtime::{
    COMPLETION_NOTICE, CraftingEvent, Event, ItemOracleImpl, NotificationLevel, OracleManager,
    OutcomeTableImpl, Topic,
};
use common::*;

/// Three combat reagents (IP 4 each), roll equal to the DC.
#[tokio::test]
async fn crafts_generic_consumable_at_exact_dc() {
    let repo = repo_with(alchemist());
    let rolls = scripted(&[10], &[]);
    let runtime = runtime(repo.clone(), rolls.clone(), OracleManager::default());
    let engine = runtime.engine();

    let mut session = runtime.session(ACTOR);
    session.slot_item(engine, 0, BLOODCAP).await.unwrap();
    session.slot_item(engine, 1, FIRE_MOSS).await.unwrap();
    session.slot_item(engine, 2, WYRMTONGUE).await.unwrap();
    assert_eq!(session.phase(engine), SessionPhase::SlotsFull);

    let report = session.craft(engine).await.unwrap();

    assert_eq!(report.quote.sum, 12);
    assert_eq!(report.quote.dc, 10);
    assert_eq!(report.resolution.margin, 0);
    assert_eq!(report.resolution.degree, CheckDegree::Success);
    assert_eq!(report.resolution.sum, 12);
    assert_eq!(report.resolution.rarity, Rarity::Common);
    assert_eq!(report.item.name, "common Combat Consumable");
    assert_eq!(report.item.quantity, 1);
    assert_eq!(report.source, ItemSource::Synthesized);
    assert_eq!(report.gold_spent, 20);
    assert!(report.newly_discovered);

    let check = &rolls.requested_checks()[0];
    assert_eq!(check.dc, 10);
    assert_eq!(check.tool_key, "alchemist");
    assert_eq!(check.modifier, 2);
    assert!(rolls.requested_draws().is_empty());

    let actor = repo.snapshot(ACTOR).unwrap();
    assert_eq!(actor.currency, 80);
    assert!(!actor.inventory.contains_key(&BLOODCAP));
    assert_eq!(actor.inventory[&FIRE_MOSS].quantity, 1);
    assert_eq!(actor.inventory[&WYRMTONGUE].quantity, 2);

    let crafted = &actor.inventory[&report.item_id];
    assert_eq!(crafted.kind, ItemKind::Consumable);
    assert_eq!(crafted.quantity, 1);

    let entry = actor.known_outcomes.get(Category::Combat, 12).unwrap();
    assert_eq!(entry.item, report.item_id);
    assert_eq!(actor.known_outcomes.len(), 1);
}

#[tokio::test]
async fn great_success_doubles_quantity_and_ledger_does_not_duplicate() {
    let record = alchemist()
        .with_currency(1_000)
        .with_item(BLOODCAP, reagent("Bloodcap", 5, Rarity::Common, IpVector::new(4, 0, 0)));
    let repo = repo_with(record);
    let runtime = runtime(repo.clone(), scripted(&[20, 12], &[]), OracleManager::default());
    let engine = runtime.engine();

    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }

    let first = session.craft(engine).await.unwrap();
    assert_eq!(first.resolution.degree, CheckDegree::GreatSuccess);
    assert_eq!(first.item.quantity, 2);
    assert!(first.newly_discovered);

    // Slots stay filled; crafting again uses the same reagents.
    assert!(session.selection().is_full());
    let second = session.craft(engine).await.unwrap();
    assert_eq!(second.item.quantity, 1);
    assert!(!second.newly_discovered);

    let actor = repo.snapshot(ACTOR).unwrap();
    assert_eq!(actor.known_outcomes.entries(Category::Combat).len(), 1);
    assert_eq!(actor.known_outcomes.get(Category::Combat, 12).unwrap().item, first.item_id);
    assert_eq!(actor.inventory[&BLOODCAP].quantity, 3);
    assert!(!actor.inventory.contains_key(&FIRE_MOSS));
    assert_eq!(actor.currency, 1_000 - 40);

    let outcome = session.classify(engine).await.unwrap();
    assert!(outcome.is_known());
    assert_eq!(outcome.tooltip(), "Known combat consumable (Sum: 12)");
}

#[tokio::test]
async fn large_miss_reduces_potency_and_shifts_category() {
    let record = alchemist()
        .with_currency(500)
        .with_item(BLOODCAP, reagent("Stormcap", 1, Rarity::Common, IpVector::new(5, 5, 2)))
        .with_item(FIRE_MOSS, reagent("Stormcap", 1, Rarity::Common, IpVector::new(5, 5, 2)))
        .with_item(WYRMTONGUE, reagent("Gloomroot", 1, Rarity::Common, IpVector::new(5, 5, 1)));
    let repo = repo_with(record);
    let rolls = scripted(&[5], &[7]);
    let runtime = runtime(repo.clone(), rolls.clone(), OracleManager::default());
    let engine = runtime.engine();
    let mut chat = runtime.subscribe(Topic::Chat);

    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }
    assert_eq!(session.phase(engine), SessionPhase::TiebreakPending);
    let Outcome::Tiebreak(tie) = session.classify(engine).await.unwrap() else {
        panic!("expected a tie between combat and utility");
    };
    assert_eq!(tie.categories(), vec![Category::Combat, Category::Utility]);

    session.select_outcome(Some(Category::Combat));
    assert_eq!(session.phase(engine), SessionPhase::TiebreakResolved);

    let report = session.craft(engine).await.unwrap();
    assert_eq!(report.quote.sums, IpVector::new(15, 15, 5));
    assert_eq!(report.quote.dc, 15);
    assert_eq!(report.resolution.degree, CheckDegree::LargeMiss);
    assert_eq!(report.resolution.potency_draw, Some(7));
    assert_eq!(report.resolution.sum, 8);
    assert_eq!(report.resolution.category, Category::Utility);
    assert_eq!(report.item.name, "common Utility Consumable");
    assert_eq!(report.gold_spent, 200 - 30);
    assert_eq!(rolls.requested_draws(), vec![DiceFormula::LARGE_MISS]);

    let Event::Chat(message) = chat.try_recv().unwrap() else {
        panic!("expected a chat announcement");
    };
    assert_eq!(message.flavor, "Reduction to IP sum due to crafting failure (large miss)");
    assert_eq!(message.total, 7);

    let actor = repo.snapshot(ACTOR).unwrap();
    assert!(actor.known_outcomes.is_known(Category::Utility, 8));
    assert!(!actor.known_outcomes.is_known(Category::Combat, 15));
}

#[tokio::test]
async fn near_miss_never_drops_potency_below_one() {
    let record = alchemist()
        .with_item(BLOODCAP, reagent("Dustleaf", 1, Rarity::Common, IpVector::new(0, 0, 1)))
        .with_item(FIRE_MOSS, reagent("Dustleaf", 1, Rarity::Common, IpVector::new(0, 0, 1)))
        .with_item(WYRMTONGUE, reagent("Dustleaf", 1, Rarity::Common, IpVector::new(0, 0, 0)));
    let repo = repo_with(record);
    let runtime = runtime(repo, scripted(&[9], &[4]), OracleManager::default());
    let engine = runtime.engine();

    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }

    let report = session.craft(engine).await.unwrap();
    assert_eq!(report.resolution.degree, CheckDegree::NearMiss);
    assert_eq!(report.resolution.sum, 1);
    assert_eq!(report.resolution.category, Category::Entropy);
    assert_eq!(report.item.name, "common Entropy Consumable");
}

#[tokio::test]
async fn predefined_outcome_is_cloned_with_quantity() {
    let mut items = ItemOracleImpl::new();
    items.add_item(
        ItemId(900),
        ItemData::new("Draught of Embers", ItemKind::Consumable).with_img("icons/ember.webp"),
    );
    let mut table = PredefinedOutcomes::new();
    table.assign(Category::Combat, 12, ItemId(900)).unwrap();
    let oracles = OracleManager::new(Arc::new(items), Arc::new(OutcomeTableImpl::new(table)));

    let repo = repo_with(alchemist());
    let runtime = runtime(repo.clone(), scripted(&[25], &[]), oracles);
    let engine = runtime.engine();

    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }
    let report = session.craft(engine).await.unwrap();

    assert_eq!(report.source, ItemSource::Predefined(ItemId(900)));
    assert_eq!(report.item.name, "Draught of Embers");
    assert_eq!(report.item.quantity, 2);
    assert_ne!(report.item_id, ItemId(900));

    let actor = repo.snapshot(ACTOR).unwrap();
    assert_eq!(actor.inventory[&report.item_id].img.as_deref(), Some("icons/ember.webp"));

    let compendium = engine.compendium(ACTOR).await.unwrap();
    let entry = compendium.page(Category::Combat).unwrap().entry(12).unwrap();
    assert!(entry.known);
    assert_eq!(entry.name.as_deref(), Some("Draught of Embers"));
}

#[tokio::test]
async fn dangling_predefined_link_falls_back_to_generic_item() {
    let mut table = PredefinedOutcomes::new();
    table.assign(Category::Combat, 12, ItemId(404)).unwrap();
    let oracles = OracleManager::new(Arc::new(ItemOracleImpl::new()), Arc::new(OutcomeTableImpl::new(table)));

    let runtime = runtime(repo_with(alchemist()), scripted(&[10], &[]), oracles);
    let engine = runtime.engine();
    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }

    let report = session.craft(engine).await.unwrap();
    assert_eq!(report.source, ItemSource::MissingPredefined(ItemId(404)));
    assert_eq!(report.item.name, "common Combat Consumable");
}

#[tokio::test]
async fn success_publishes_notices_and_report() {
    let runtime = runtime(repo_with(alchemist()), scripted(&[10], &[]), OracleManager::default());
    let engine = runtime.engine();
    let mut notes = runtime.subscribe(Topic::Notification);
    let mut crafting = runtime.subscribe(Topic::Crafting);

    let mut session = runtime.session(ACTOR);
    for (slot, item) in [BLOODCAP, FIRE_MOSS, WYRMTONGUE].into_iter().enumerate() {
        session.slot_item(engine, slot, item).await.unwrap();
    }
    let report = session.craft(engine).await.unwrap();

    let messages: Vec<_> = drain(&mut notes)
        .into_iter()
        .map(|event| match event {
            Event::Notification(note) => (note.level, note.message),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(
        messages,
        vec![
            (NotificationLevel::Info, "You crafted 1 common Combat Consumable(s)!".to_string()),
            (NotificationLevel::Info, COMPLETION_NOTICE.to_string()),
        ]
    );

    match crafting.try_recv().unwrap() {
        Event::Crafting(CraftingEvent::Completed(published)) => assert_eq!(*published, report),
        other => panic!("unexpected event {other:?}"),
    }

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("common Combat Consumable"));
}
