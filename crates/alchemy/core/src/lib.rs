//! Pure crafting rules for the alchemy subsystem.
//!
//! Three reagents go in; their influence points (IP) are summed per
//! category, the dominant category and rarity are derived, and a skill check
//! decides quantity and potency of the consumable that comes out. This crate
//! holds every decision in that pipeline and none of the I/O: rolls, item
//! stores and currency live behind the runtime's collaborator traits.
//!
//! Modules:
//! - [`types`]: ids, categories, rarities, items and reagents
//! - [`craft`]: aggregation, classification, resolution
//! - [`selection`]: the three-slot crafting selection and reagent listing
//! - [`ledger`]: per-actor discovered outcomes
//! - [`env`]: read-only oracles for world items and the predefined table
//! - [`compendium`]: outcome table view model
pub mod compendium;
pub mod config;
pub mod craft;
pub mod env;
pub mod error;
pub mod ledger;
pub mod selection;
pub mod types;

pub use compendium::{CategoryPage, Compendium, CompendiumEntry, RarityGroup};
pub use config::AlchemyConfig;
pub use craft::{
    CheckDegree, CraftQuote, CraftResolution, CraftedItem, DiceFormula, DiceParseError, GoldCost,
    ItemSource, Outcome, ResolvedOutcome, Tiebreak, TiebreakOption, aggregate, classify, quote,
    resolve, resolve_item, synthesize_consumable,
};
pub use env::{CraftEnv, ItemOracle, NoWorld, OutcomeOracle, OutcomeTableError, PredefinedOutcomes};
pub use error::{AlchemyError, CraftError, ErrorSeverity};
pub use ledger::{DiscoveredOutcome, KnownOutcomes};
pub use selection::{
    CraftingSelection, ReagentQuery, ReagentSort, SessionPhase, SlotError, available_reagents,
};
pub use types::*;
