//! Dice backed by a seedable pseudo-random generator.

use std::sync::Mutex;

use alchemy_core::{ActorId, DiceFormula};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::{Result, RollProvider, RuntimeError, ToolCheck};

/// Rolls `1d20 + modifier` for tool checks and real dice for potency draws.
///
/// A fixed seed makes a whole session reproducible.
pub struct RngRollProvider {
    rng: Mutex<StdRng>,
}

impl RngRollProvider {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn roll_dice(&self, formula: DiceFormula) -> Result<u32> {
        if formula.count == 0 || formula.sides == 0 {
            return Err(RuntimeError::Roll(format!("cannot roll {formula}")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RuntimeError::Roll("random generator lock was poisoned".into()))?;
        Ok((0..formula.count).map(|_| rng.gen_range(1..=formula.sides)).sum())
    }
}

#[async_trait]
impl RollProvider for RngRollProvider {
    async fn roll_tool_check(&self, actor: ActorId, check: &ToolCheck) -> Result<i32> {
        let natural = self.roll_dice(DiceFormula::D20)?;
        let total = natural as i32 + check.modifier;
        tracing::debug!(%actor, natural, modifier = check.modifier, total, dc = check.dc, "tool check rolled");
        Ok(total)
    }

    async fn roll(&self, formula: DiceFormula) -> Result<u32> {
        let total = self.roll_dice(formula)?;
        tracing::debug!(%formula, total, "dice rolled");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rolls_stay_within_formula_bounds() {
        let provider = RngRollProvider::from_seed(7);
        for _ in 0..200 {
            let draw = provider.roll(DiceFormula::LARGE_MISS).await.unwrap();
            assert!((2..=8).contains(&draw));
        }

        let check = ToolCheck {
            dc: 10,
            tool_key: "alchemist".into(),
            modifier: 3,
        };
        for _ in 0..200 {
            let total = provider.roll_tool_check(ActorId(1), &check).await.unwrap();
            assert!((4..=23).contains(&total));
        }
    }

    #[tokio::test]
    async fn same_seed_same_rolls() {
        let a = RngRollProvider::from_seed(42);
        let b = RngRollProvider::from_seed(42);
        for _ in 0..20 {
            assert_eq!(
                a.roll(DiceFormula::D20).await.unwrap(),
                b.roll(DiceFormula::D20).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn zero_sided_dice_fail() {
        let provider = RngRollProvider::from_seed(1);
        assert!(matches!(
            provider.roll(DiceFormula::new(1, 0)).await,
            Err(RuntimeError::Roll(_))
        ));
    }
}
