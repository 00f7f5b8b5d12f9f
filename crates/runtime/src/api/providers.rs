//! Asynchronous abstraction for dice.
//!
//! The engine never rolls on its own: a [`RollProvider`] decides tool checks
//! and potency draws so the runtime can use seeded randomness, scripted
//! fixtures, or a host's dice service.
use alchemy_core::{ActorId, DiceFormula};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// A tool check against a difficulty class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCheck {
    pub dc: i32,
    pub tool_key: String,
    /// The actor's bonus with the tool.
    pub modifier: i32,
}

#[async_trait]
pub trait RollProvider: Send + Sync {
    /// Rolls the check and returns its total (die plus modifier).
    async fn roll_tool_check(&self, actor: ActorId, check: &ToolCheck) -> Result<i32>;

    /// Rolls `formula` and returns the sum of the dice.
    async fn roll(&self, formula: DiceFormula) -> Result<u32>;
}
