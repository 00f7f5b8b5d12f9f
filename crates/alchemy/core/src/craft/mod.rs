//! The crafting rules: aggregation, classification, and resolution.

mod aggregate;
mod classify;
mod dice;
mod resolve;

pub use aggregate::{aggregate, aggregate_reagents};
pub use classify::{
    NO_REAGENTS_TOOLTIP, Outcome, ResolvedOutcome, Tiebreak, TiebreakOption, UNKNOWN_TOOLTIP,
    classify, classify_sums,
};
pub use dice::{DiceFormula, DiceParseError};
pub use resolve::{
    CheckDegree, CraftQuote, CraftResolution, CraftedItem, GoldCost, ItemSource, gold_cost,
    quote, reduce_potency, reresolve_category, resolve, resolve_item, synthesize_consumable,
};
