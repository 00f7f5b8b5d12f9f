//! One scripted crafting session against in-memory stores.
use alchemy_core::{Category, Outcome, ReagentQuery, ReagentSort};
use alchemy_runtime::{CraftingEvent, Event, NotificationLevel, Runtime, Topic};
use anyhow::{Context, Result, bail};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Prints every event on the notification, chat and crafting topics until
/// the bus closes.
pub fn spawn_printers(runtime: &Runtime) -> Vec<JoinHandle<()>> {
    runtime
        .events()
        .subscribe_multiple(&[Topic::Notification, Topic::Chat, Topic::Crafting])
        .into_iter()
        .map(|(topic, rx)| tokio::spawn(print_events(topic, rx)))
        .collect()
}

async fn print_events(topic: Topic, mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(event) => print_event(&event),
            Err(RecvError::Lagged(skipped)) => warn!(?topic, skipped, "event printer lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}

fn print_event(event: &Event) {
    match event {
        Event::Notification(note) => {
            let tag = match note.level {
                NotificationLevel::Info => "info",
                NotificationLevel::Warning => "warn",
                NotificationLevel::Error => "error",
            };
            println!("[{tag}] {}", note.message);
        }
        Event::Chat(chat) => {
            println!("[chat] {} {}: {}", chat.flavor, chat.formula, chat.total);
        }
        Event::Crafting(CraftingEvent::Completed(report)) => {
            println!(
                "[craft] {} {} (sum {}, margin {}), {} gp spent, {} gp left",
                report.resolution.rarity,
                report.resolution.category,
                report.resolution.sum,
                report.resolution.margin,
                report.gold_spent,
                report.balance,
            );
        }
        Event::Crafting(CraftingEvent::Failed { code, stage, .. }) => match stage {
            Some(stage) => println!("[craft] failed while {stage} ({code})"),
            None => println!("[craft] rejected ({code})"),
        },
    }
}

/// Slots the actor's three largest reagent stacks and crafts once.
pub async fn run(runtime: &Runtime, actor: alchemy_core::ActorId) -> Result<()> {
    let engine = runtime.engine();
    let mut session = runtime.session(actor);

    let reagents = session
        .available_reagents(engine, &ReagentQuery::default().sorted_by(ReagentSort::Quantity))
        .await
        .with_context(|| format!("Failed to list reagents for {actor}"))?;
    println!("Reagents of {actor}:");
    for reagent in &reagents {
        println!("  {} x{} {}", reagent.name, reagent.quantity, reagent.label());
    }
    if reagents.len() < 3 {
        bail!("{actor} holds {} reagent stacks; three are needed", reagents.len());
    }

    for (slot, reagent) in reagents.iter().take(3).enumerate() {
        session.slot_item(engine, slot, reagent.id).await?;
    }

    match session.classify(engine).await? {
        Outcome::None => println!("Outcome: {}", Outcome::None.tooltip()),
        Outcome::Resolved(resolved) => println!("Outcome: {}", resolved.tooltip),
        Outcome::Tiebreak(tie) => {
            let choice: Option<Category> = tie.options.first().map(|option| option.category);
            info!(options = ?tie.categories(), ?choice, "tie between outcomes, picking the first");
            for option in &tie.options {
                println!("Tied outcome: {}", option.tooltip);
            }
            session.select_outcome(choice);
        }
    }

    match engine.quote(session.selection()) {
        Ok(quote) => println!(
            "Quote: {} {} (sum {}), DC {}, {} gp",
            quote.rarity, quote.category, quote.sum, quote.dc, quote.cost.total
        ),
        Err(err) => println!("Quote unavailable: {err}"),
    }

    // Failures are published on the bus; the printers show them.
    if let Ok(report) = session.craft(engine).await {
        info!(item = %report.item_id, discovered = report.newly_discovered, "demo craft committed");
    }

    let compendium = engine.compendium(actor).await?;
    for page in &compendium.pages {
        println!("Compendium {}: {} known", page.category, page.known_count());
    }

    Ok(())
}
