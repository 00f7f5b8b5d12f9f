//! Crafting sessions: one actor, one selection.
//!
//! A session is owned by whatever drives the crafting UI and is passed to
//! the engine explicitly. Nothing global tracks open sessions.

use alchemy_core::{ActorId, Category, CraftingSelection, ItemId, Outcome, Reagent, ReagentQuery, SessionPhase};

use crate::api::{Result, RuntimeError};
use crate::engine::CraftingEngine;
use crate::events::CraftReport;

#[derive(Debug, Clone)]
pub struct CraftingSession {
    actor: ActorId,
    selection: CraftingSelection,
}

impl CraftingSession {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            selection: CraftingSelection::new(),
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn selection(&self) -> &CraftingSelection {
        &self.selection
    }

    /// Lifecycle phase; `Crafting` while the engine runs a craft for the actor.
    pub fn phase(&self, engine: &CraftingEngine) -> SessionPhase {
        if engine.is_crafting(self.actor) {
            SessionPhase::Crafting
        } else {
            self.selection.phase()
        }
    }

    /// Reads `item` from the actor's inventory and puts it in slot `index`.
    pub async fn slot_item(&mut self, engine: &CraftingEngine, index: usize, item: ItemId) -> Result<Option<Reagent>> {
        let stack = engine
            .actors()
            .item(self.actor, item)
            .await?
            .ok_or(RuntimeError::NotAReagent { item })?;
        let reagent = Reagent::from_item(&stack).ok_or(RuntimeError::NotAReagent { item })?;
        Ok(self.selection.set_slot(index, reagent)?)
    }

    pub fn clear_slot(&mut self, index: usize) -> Result<Option<Reagent>> {
        Ok(self.selection.clear_slot(index)?)
    }

    /// "Clear Slots".
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn select_outcome(&mut self, category: Option<Category>) {
        self.selection.select_outcome(category);
    }

    pub async fn classify(&self, engine: &CraftingEngine) -> Result<Outcome> {
        engine.classify(self.actor, &self.selection).await
    }

    pub async fn available_reagents(&self, engine: &CraftingEngine, query: &ReagentQuery) -> Result<Vec<Reagent>> {
        engine.available_reagents(self.actor, &self.selection, query).await
    }

    /// Crafts from the current selection; the slots stay filled afterwards.
    pub async fn craft(&self, engine: &CraftingEngine) -> Result<CraftReport> {
        engine.craft(self.actor, &self.selection).await
    }
}
