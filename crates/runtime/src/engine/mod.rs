//! The crafting engine.
//!
//! [`CraftingEngine`] drives the async part of a craft: it re-reads the
//! actor's reagents, checks preconditions, rolls through the
//! [`RollProvider`], hands the results to the pure rules in `alchemy-core`,
//! and commits the outcome through the [`ActorRepository`].

mod commit;
mod guard;

use std::sync::Arc;

use alchemy_core::{
    ActorId, AlchemyConfig, AlchemyError, CheckDegree, Compendium, CraftError, CraftQuote,
    CraftingSelection, InventoryItem, ItemSource, Outcome, Reagent, ReagentQuery,
    available_reagents, classify, quote, resolve, resolve_item,
};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::api::{Result, RollProvider, RuntimeError, ToolCheck};
use crate::events::{
    ChatMessage, CraftReport, CraftingEvent, Event, EventBus, Notification, NotificationLevel,
};
use crate::oracle::OracleManager;
use crate::repository::ActorRepository;

use commit::{CommitPlan, commit};
use guard::CraftLocks;

/// Shown after every successful craft.
pub const COMPLETION_NOTICE: &str = "Crafting complete! Reagents remain in slots. Use 'Clear Slots' to reset.";

/// Stateless crafting service shared by every session.
///
/// The only state it keeps is the set of actors with a craft in flight.
#[derive(Clone)]
pub struct CraftingEngine {
    config: Arc<AlchemyConfig>,
    actors: Arc<dyn ActorRepository>,
    rolls: Arc<dyn RollProvider>,
    oracles: OracleManager,
    events: EventBus,
    locks: CraftLocks,
}

impl CraftingEngine {
    pub fn new(
        config: AlchemyConfig,
        actors: Arc<dyn ActorRepository>,
        rolls: Arc<dyn RollProvider>,
        oracles: OracleManager,
        events: EventBus,
    ) -> Self {
        Self {
            config: Arc::new(config),
            actors,
            rolls,
            oracles,
            events,
            locks: CraftLocks::default(),
        }
    }

    pub fn config(&self) -> &AlchemyConfig {
        &self.config
    }

    pub fn actors(&self) -> &dyn ActorRepository {
        self.actors.as_ref()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// True while a craft for `actor` is running.
    pub fn is_crafting(&self, actor: ActorId) -> bool {
        self.locks.is_busy(actor)
    }

    /// Classifies the selection against the actor's ledger.
    pub async fn classify(&self, actor: ActorId, selection: &CraftingSelection) -> Result<Outcome> {
        let ledger = self.actors.known_outcomes(actor).await?;
        let outcome = classify(selection, &ledger, &self.oracles.env());
        debug!(%actor, category = ?outcome.category(), sum = outcome.sum(), known = outcome.is_known(), "selection classified");
        Ok(outcome)
    }

    /// Prices the selection without rolling or writing.
    pub fn quote(&self, selection: &CraftingSelection) -> Result<CraftQuote> {
        Ok(quote(selection, &self.config)?)
    }

    /// Reagents the actor can still put in a slot.
    pub async fn available_reagents(
        &self,
        actor: ActorId,
        selection: &CraftingSelection,
        query: &ReagentQuery,
    ) -> Result<Vec<Reagent>> {
        let inventory = self.actors.inventory(actor).await?;
        Ok(available_reagents(&inventory, selection, query))
    }

    /// The actor's view of the outcome table.
    pub async fn compendium(&self, actor: ActorId) -> Result<Compendium> {
        let ledger = self.actors.known_outcomes(actor).await?;
        Ok(Compendium::build(
            &ledger,
            self.oracles.outcomes(),
            self.oracles.items(),
        ))
    }

    /// Crafts once from `selection`.
    ///
    /// Preconditions fail before any roll or write. After the tool check the
    /// craft always yields an item unless a write fails, in which case the
    /// completed writes are compensated. The selection is left untouched.
    pub async fn craft(&self, actor: ActorId, selection: &CraftingSelection) -> Result<CraftReport> {
        let _guard = self.locks.acquire(actor)?;
        info!(%actor, "craft started");

        match self.craft_inner(actor, selection).await {
            Ok(report) => {
                info!(
                    %actor,
                    item = %report.item.name,
                    quantity = report.item.quantity,
                    sum = report.resolution.sum,
                    gold = report.gold_spent,
                    "craft finished"
                );
                self.notify(actor, NotificationLevel::Info, report.summary());
                self.notify(actor, NotificationLevel::Info, COMPLETION_NOTICE);
                self.events
                    .publish(Event::Crafting(CraftingEvent::Completed(Box::new(report.clone()))));
                Ok(report)
            }
            Err(err) => {
                if err.is_precondition() {
                    info!(%actor, code = err.error_code(), "craft rejected: {err}");
                }
                self.notify(actor, NotificationLevel::Error, err.to_string());
                let stage = match &err {
                    RuntimeError::Commit { stage, .. } => Some(*stage),
                    _ => None,
                };
                self.events.publish(Event::Crafting(CraftingEvent::Failed {
                    actor,
                    stage,
                    error: err.to_string(),
                    code: err.error_code().to_string(),
                }));
                Err(err)
            }
        }
    }

    async fn craft_inner(&self, actor: ActorId, selection: &CraftingSelection) -> Result<CraftReport> {
        if !selection.is_full() {
            return Err(CraftError::IncompleteSelection {
                filled: selection.filled(),
            }
            .into());
        }

        let (fresh, stacks) = self.refresh(actor, selection).await?;
        let quote = quote(&fresh, &self.config)?;
        debug!(%actor, sums = ?quote.sums, category = %quote.category, rarity = %quote.rarity, dc = quote.dc, cost = quote.cost.total, "craft quoted");

        let modifier = self
            .actors
            .tool_proficiency(actor, &self.config.tool_key)
            .await?
            .ok_or_else(|| CraftError::MissingTool {
                tool_key: self.config.tool_key.clone(),
            })?;

        let available = self.actors.currency(actor).await?;
        if available < quote.cost.total {
            return Err(CraftError::InsufficientCurrency {
                required: quote.cost.total,
                available,
            }
            .into());
        }

        let check = ToolCheck {
            dc: quote.dc,
            tool_key: self.config.tool_key.clone(),
            modifier,
        };
        let roll_total = self.rolls.roll_tool_check(actor, &check).await?;
        let degree = CheckDegree::from_margin(roll_total - quote.dc, &self.config);
        debug!(%actor, roll_total, dc = quote.dc, ?degree, "tool check resolved");

        let draw = match degree.potency_die() {
            Some(formula) => {
                let total = self.rolls.roll(formula).await?;
                debug!(%actor, %formula, total, "potency draw");
                self.events.publish(Event::Chat(ChatMessage {
                    actor,
                    flavor: degree.flavor().unwrap_or_default().to_string(),
                    formula,
                    total,
                    at: Utc::now(),
                }));
                Some(total)
            }
            None => None,
        };

        let resolution = resolve(&quote, roll_total, draw, &self.config);
        if resolution.category != quote.category {
            debug!(%actor, from = %quote.category, to = %resolution.category, "potency loss shifted the dominant category");
        }

        let crafted = resolve_item(&resolution, &self.oracles.env());
        if let ItemSource::MissingPredefined(item) = crafted.source {
            warn!(
                %actor,
                %item,
                category = %resolution.category,
                sum = resolution.sum,
                "predefined outcome points at a missing item, using a generic consumable"
            );
        }

        let committed = commit(
            self.actors.as_ref(),
            CommitPlan {
                actor,
                item: &crafted.data,
                category: resolution.category,
                sum: resolution.sum,
                reagents: &stacks,
                cost: quote.cost.total,
            },
        )
        .await?;

        Ok(CraftReport {
            actor,
            gold_spent: quote.cost.total,
            quote,
            resolution,
            item_id: committed.item_id,
            item: crafted.data,
            source: crafted.source,
            newly_discovered: committed.newly_discovered,
            consumed: committed.consumed,
            balance: committed.balance,
            completed_at: Utc::now(),
        })
    }

    /// Re-reads every slotted reagent; the craft uses the stored values.
    async fn refresh(
        &self,
        actor: ActorId,
        selection: &CraftingSelection,
    ) -> Result<(CraftingSelection, Vec<InventoryItem>)> {
        let mut fresh = CraftingSelection::new();
        fresh.select_outcome(selection.selected_outcome());
        let mut stacks = Vec::with_capacity(CraftingSelection::SLOT_COUNT);

        for (index, slot) in selection.slots().iter().enumerate() {
            let Some(slotted) = slot else { continue };
            let unavailable = || CraftError::ReagentUnavailable { item: slotted.id };

            let stack = self
                .actors
                .item(actor, slotted.id)
                .await?
                .filter(|stack| stack.data.quantity > 0)
                .ok_or_else(unavailable)?;
            let reagent = Reagent::from_item(&stack).ok_or_else(unavailable)?;

            fresh.set_slot(index, reagent)?;
            stacks.push(stack);
        }
        Ok((fresh, stacks))
    }

    fn notify(&self, actor: ActorId, level: NotificationLevel, message: impl Into<String>) {
        self.events
            .publish(Event::Notification(Notification::new(actor, level, message)));
    }
}
