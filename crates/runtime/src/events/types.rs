//! Event types for different topics.

use alchemy_core::{
    ActorId, CraftQuote, CraftResolution, DiceFormula, ItemData, ItemId, ItemSource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::CommitStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A message shown to the crafting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub actor: ActorId,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(actor: ActorId, level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            actor,
            level,
            message: message.into(),
        }
    }
}

/// A roll announced to the table, e.g. a potency loss draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub actor: ActorId,
    pub flavor: String,
    pub formula: DiceFormula,
    pub total: u32,
    pub at: DateTime<Utc>,
}

/// One reagent stack after consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedReagent {
    pub item: ItemId,
    /// Stack size left; zero means the stack was deleted.
    pub remaining: u32,
}

/// Everything a successful craft decided and wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftReport {
    pub actor: ActorId,
    pub quote: CraftQuote,
    pub resolution: CraftResolution,
    /// Id of the created inventory item.
    pub item_id: ItemId,
    pub item: ItemData,
    pub source: ItemSource,
    /// True when this craft added the outcome to the ledger.
    pub newly_discovered: bool,
    pub consumed: Vec<ConsumedReagent>,
    pub gold_spent: u64,
    pub balance: u64,
    pub completed_at: DateTime<Utc>,
}

impl CraftReport {
    /// `"You crafted 2 Quickstep Tonic(s)!"`
    pub fn summary(&self) -> String {
        format!("You crafted {} {}(s)!", self.item.quantity, self.item.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CraftingEvent {
    Completed(Box<CraftReport>),
    Failed {
        actor: ActorId,
        /// Set when the failure happened while writing.
        stage: Option<CommitStage>,
        error: String,
        code: String,
    },
}
