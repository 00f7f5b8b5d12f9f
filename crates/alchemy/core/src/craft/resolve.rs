//! Pure parts of crafting resolution.
//!
//! The runtime performs the rolls and writes; everything decided from those
//! rolls lives here: costs, difficulty, degree of success, potency loss,
//! category re-resolution, and the crafted item.

use super::aggregate::aggregate;
use super::dice::DiceFormula;
use crate::config::AlchemyConfig;
use crate::env::CraftEnv;
use crate::error::CraftError;
use crate::selection::CraftingSelection;
use crate::types::{Category, IpVector, ItemData, ItemId, ItemKind, Rarity, Reagent, Uses};

/// Gold cost breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldCost {
    pub base: u64,
    /// Value offset by the reagents.
    pub reagents: u64,
    /// Floor: `minimum_cost_percent` of the base cost.
    pub minimum: u64,
    pub total: u64,
}

/// Computes `max(floor(base * pct / 100), max(0, base - reagents))`.
///
/// Reagents of unknown rarity offset nothing.
pub fn gold_cost<'a>(
    config: &AlchemyConfig,
    rarity: Rarity,
    reagents: impl IntoIterator<Item = &'a Reagent>,
) -> GoldCost {
    let base = config.base_cost.get(rarity).unwrap_or(0);
    let offset = reagents
        .into_iter()
        .filter_map(|r| config.reagent_cost.get(r.rarity))
        .fold(0u64, u64::saturating_add);
    let minimum = base.saturating_mul(config.minimum_cost_percent) / 100;
    GoldCost {
        base,
        reagents: offset,
        minimum,
        total: minimum.max(base.saturating_sub(offset)),
    }
}

/// Everything known about a craft before any roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftQuote {
    pub sums: IpVector,
    /// Largest IP sum (the outcome's potency before the check).
    pub sum: u32,
    pub category: Category,
    pub rarity: Rarity,
    pub cost: GoldCost,
    pub dc: i32,
}

/// Validates the selection and prices the craft.
///
/// Fails with a precondition error when a slot is empty, every sum is zero,
/// or a tie has no valid choice.
pub fn quote(selection: &CraftingSelection, config: &AlchemyConfig) -> Result<CraftQuote, CraftError> {
    if !selection.is_full() {
        return Err(CraftError::IncompleteSelection {
            filled: selection.filled(),
        });
    }

    let sums = aggregate(selection);
    let dominant = sums.dominant();
    let category = match dominant.as_slice() {
        [] => return Err(CraftError::NoOutcome),
        [category] => *category,
        tied => match selection.selected_outcome() {
            Some(choice) if tied.contains(&choice) => choice,
            Some(choice) => {
                return Err(CraftError::InvalidTiebreakChoice {
                    choice,
                    options: tied.to_vec(),
                });
            }
            None => {
                return Err(CraftError::TiebreakUnresolved {
                    options: tied.to_vec(),
                });
            }
        },
    };

    let sum = sums.max();
    // Always one of the five tiers, so every table has an entry.
    let rarity = Rarity::from_sum(sum);
    Ok(CraftQuote {
        sums,
        sum,
        category,
        rarity,
        cost: gold_cost(config, rarity, selection.reagents()),
        dc: config.difficulty.get(rarity).unwrap_or_default(),
    })
}

/// How the skill check went relative to the DC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckDegree {
    /// Margin at or above the great-success threshold: bonus quantity.
    GreatSuccess,
    Success,
    /// Missed by a little: potency drops by `1d4`.
    NearMiss,
    /// Missed by a lot: potency drops by `2d4`.
    LargeMiss,
}

impl CheckDegree {
    pub fn from_margin(margin: i32, config: &AlchemyConfig) -> Self {
        if margin >= config.great_success_margin {
            CheckDegree::GreatSuccess
        } else if margin >= 0 {
            CheckDegree::Success
        } else if margin >= config.near_miss_floor {
            CheckDegree::NearMiss
        } else {
            CheckDegree::LargeMiss
        }
    }

    pub fn quantity(self, config: &AlchemyConfig) -> u32 {
        match self {
            CheckDegree::GreatSuccess => config.great_success_quantity,
            _ => 1,
        }
    }

    /// Dice rolled for potency loss, if any.
    pub const fn potency_die(self) -> Option<DiceFormula> {
        match self {
            CheckDegree::GreatSuccess | CheckDegree::Success => None,
            CheckDegree::NearMiss => Some(DiceFormula::NEAR_MISS),
            CheckDegree::LargeMiss => Some(DiceFormula::LARGE_MISS),
        }
    }

    /// Chat flavor text announcing the potency roll.
    pub const fn flavor(self) -> Option<&'static str> {
        match self {
            CheckDegree::GreatSuccess | CheckDegree::Success => None,
            CheckDegree::NearMiss => Some("Reduction to IP sum due to crafting failure (near miss)"),
            CheckDegree::LargeMiss => Some("Reduction to IP sum due to crafting failure (large miss)"),
        }
    }
}

/// Potency after a draw; never below 1.
pub fn reduce_potency(sum: u32, draw: u32) -> u32 {
    sum.saturating_sub(draw).max(1)
}

/// Category after potency loss.
///
/// The reduced sum replaces the selected category's contribution. If that
/// category is no longer dominant, the first newly dominant one wins.
pub fn reresolve_category(sums: IpVector, selected: Category, final_sum: u32) -> Category {
    let adjusted = sums.with(selected, final_sum);
    let dominant = adjusted.dominant();
    if dominant.contains(&selected) {
        selected
    } else {
        dominant.first().copied().unwrap_or(selected)
    }
}

/// Outcome of the skill check applied to a quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftResolution {
    pub degree: CheckDegree,
    pub roll_total: i32,
    pub margin: i32,
    /// Potency lost to the draw, if one was rolled.
    pub potency_draw: Option<u32>,
    pub category: Category,
    pub sum: u32,
    pub rarity: Rarity,
    pub quantity: u32,
}

impl CraftResolution {
    pub fn potency_reduced(&self) -> bool {
        self.potency_draw.is_some()
    }
}

/// Applies the check result and an optional potency draw to a quote.
///
/// `draw` is ignored when the degree calls for no potency loss.
pub fn resolve(quote: &CraftQuote, roll_total: i32, draw: Option<u32>, config: &AlchemyConfig) -> CraftResolution {
    let margin = roll_total - quote.dc;
    let degree = CheckDegree::from_margin(margin, config);
    let potency_draw = degree.potency_die().and(draw);

    let sum = potency_draw.map_or(quote.sum, |draw| reduce_potency(quote.sum, draw));
    let category = if sum == quote.sum {
        quote.category
    } else {
        reresolve_category(quote.sums, quote.category, sum)
    };

    CraftResolution {
        degree,
        roll_total,
        margin,
        potency_draw,
        category,
        sum,
        rarity: Rarity::from_sum(sum),
        quantity: degree.quantity(config),
    }
}

/// Where the crafted item's data came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSource {
    /// Cloned from the predefined outcomes table.
    Predefined(ItemId),
    /// Generic consumable; the table had no entry.
    Synthesized,
    /// The table pointed at an item that no longer exists.
    MissingPredefined(ItemId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftedItem {
    pub data: ItemData,
    pub source: ItemSource,
}

/// Picks the item to create for a resolution.
pub fn resolve_item(resolution: &CraftResolution, env: &CraftEnv<'_>) -> CraftedItem {
    let synthesized = || synthesize_consumable(resolution.category, resolution.sum, resolution.quantity);

    match env.predefined_item(resolution.category, resolution.sum) {
        Some((id, Some(data))) => CraftedItem {
            data: data.with_quantity(resolution.quantity),
            source: ItemSource::Predefined(id),
        },
        Some((id, None)) => CraftedItem {
            data: synthesized(),
            source: ItemSource::MissingPredefined(id),
        },
        None => CraftedItem {
            data: synthesized(),
            source: ItemSource::Synthesized,
        },
    }
}

/// Generic single-charge consumable for `(category, sum)`.
pub fn synthesize_consumable(category: Category, sum: u32, quantity: u32) -> ItemData {
    let rarity = Rarity::from_sum(sum);
    ItemData {
        name: format!("{rarity} {} Consumable", category.title()),
        kind: ItemKind::Consumable,
        description: format!(
            "A {} {category} consumable crafted via alchemy (potency {sum}).",
            rarity.label()
        ),
        quantity,
        rarity: Some(rarity),
        img: None,
        uses: Some(Uses::SINGLE_CHARGE),
        consumable_type: Some("potion".to_string()),
        reagent: None,
        tool: None,
    }
}
