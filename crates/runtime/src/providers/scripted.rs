//! Predetermined rolls for tests and replays.

use std::collections::VecDeque;
use std::sync::Mutex;

use alchemy_core::{ActorId, DiceFormula};
use async_trait::async_trait;

use crate::api::{Result, RollProvider, RuntimeError, ToolCheck};

#[derive(Default)]
struct Script {
    checks: VecDeque<i32>,
    draws: VecDeque<u32>,
    requested_checks: Vec<ToolCheck>,
    requested_draws: Vec<DiceFormula>,
}

/// Returns queued totals in order and records every request.
///
/// Running out of queued totals is a roll failure.
#[derive(Default)]
pub struct ScriptedRollProvider {
    script: Mutex<Script>,
}

impl ScriptedRollProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a tool check total.
    pub fn with_check(self, total: i32) -> Self {
        self.push_check(total);
        self
    }

    /// Queues a potency draw.
    pub fn with_draw(self, total: u32) -> Self {
        self.push_draw(total);
        self
    }

    pub fn push_check(&self, total: i32) {
        if let Ok(mut script) = self.script.lock() {
            script.checks.push_back(total);
        }
    }

    pub fn push_draw(&self, total: u32) {
        if let Ok(mut script) = self.script.lock() {
            script.draws.push_back(total);
        }
    }

    /// Tool checks requested so far.
    pub fn requested_checks(&self) -> Vec<ToolCheck> {
        self.script
            .lock()
            .map(|script| script.requested_checks.clone())
            .unwrap_or_default()
    }

    /// Dice formulas requested so far.
    pub fn requested_draws(&self) -> Vec<DiceFormula> {
        self.script
            .lock()
            .map(|script| script.requested_draws.clone())
            .unwrap_or_default()
    }

    fn with_script<T>(&self, f: impl FnOnce(&mut Script) -> Result<T>) -> Result<T> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| RuntimeError::Roll("roll script lock was poisoned".into()))?;
        f(&mut script)
    }
}

#[async_trait]
impl RollProvider for ScriptedRollProvider {
    async fn roll_tool_check(&self, _actor: ActorId, check: &ToolCheck) -> Result<i32> {
        self.with_script(|script| {
            script.requested_checks.push(check.clone());
            script
                .checks
                .pop_front()
                .ok_or_else(|| RuntimeError::Roll("no scripted tool check left".into()))
        })
    }

    async fn roll(&self, formula: DiceFormula) -> Result<u32> {
        self.with_script(|script| {
            script.requested_draws.push(formula);
            script
                .draws
                .pop_front()
                .ok_or_else(|| RuntimeError::Roll(format!("no scripted {formula} roll left")))
        })
    }
}
