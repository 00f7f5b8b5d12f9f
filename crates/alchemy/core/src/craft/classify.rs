//! Outcome classification: dominant category, tiebreaks, and known status.

use arrayvec::ArrayVec;

use super::aggregate::aggregate;
use crate::env::CraftEnv;
use crate::ledger::KnownOutcomes;
use crate::selection::CraftingSelection;
use crate::types::{Category, IpVector, ItemId};

pub const NO_REAGENTS_TOOLTIP: &str = "No reagents selected";
pub const UNKNOWN_TOOLTIP: &str = "Unknown Outcome";
const LINKED_SUFFIX: &str = " - Click to view item";

fn known_tooltip(category: Category, sum: u32) -> String {
    format!("Known {category} consumable (Sum: {sum})")
}

/// A single dominant category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOutcome {
    pub category: Category,
    pub sum: u32,
    pub known: bool,
    pub tooltip: String,
}

/// One member of a tie.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiebreakOption {
    pub category: Category,
    pub sum: u32,
    pub known: bool,
    pub tooltip: String,
    pub selected: bool,
    /// Predefined item linked to this `(category, sum)`.
    pub item: Option<ItemId>,
    pub img: Option<String>,
}

/// Two or three categories share the maximum; the crafter must pick one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiebreak {
    pub sum: u32,
    pub options: ArrayVec<TiebreakOption, 3>,
}

impl Tiebreak {
    pub fn categories(&self) -> Vec<Category> {
        self.options.iter().map(|o| o.category).collect()
    }

    pub fn selected(&self) -> Option<&TiebreakOption> {
        self.options.iter().find(|o| o.selected)
    }
}

/// Result of classifying a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every IP sum is zero.
    None,
    Resolved(ResolvedOutcome),
    Tiebreak(Tiebreak),
}

impl Outcome {
    /// Category that would be crafted: the single dominant one, or the
    /// selected tie member.
    pub fn category(&self) -> Option<Category> {
        match self {
            Outcome::None => None,
            Outcome::Resolved(outcome) => Some(outcome.category),
            Outcome::Tiebreak(tie) => tie.selected().map(|o| o.category),
        }
    }

    pub fn sum(&self) -> u32 {
        match self {
            Outcome::None => 0,
            Outcome::Resolved(outcome) => outcome.sum,
            Outcome::Tiebreak(tie) => tie.sum,
        }
    }

    /// Known status used for UI gating; for ties this reflects the selected
    /// member and is `false` until one is chosen.
    pub fn is_known(&self) -> bool {
        match self {
            Outcome::None => false,
            Outcome::Resolved(outcome) => outcome.known,
            Outcome::Tiebreak(tie) => tie.selected().is_some_and(|o| o.known),
        }
    }

    pub fn tooltip(&self) -> &str {
        match self {
            Outcome::None => NO_REAGENTS_TOOLTIP,
            Outcome::Resolved(outcome) => &outcome.tooltip,
            Outcome::Tiebreak(tie) => tie
                .selected()
                .map_or(UNKNOWN_TOOLTIP, |o| o.tooltip.as_str()),
        }
    }

    pub fn is_tiebreak(&self) -> bool {
        matches!(self, Outcome::Tiebreak(_))
    }
}

/// Classifies a selection against the actor's ledger.
pub fn classify(selection: &CraftingSelection, ledger: &KnownOutcomes, env: &CraftEnv<'_>) -> Outcome {
    classify_sums(aggregate(selection), selection.selected_outcome(), ledger, env)
}

/// Classification on precomputed sums.
pub fn classify_sums(
    sums: IpVector,
    selected: Option<Category>,
    ledger: &KnownOutcomes,
    env: &CraftEnv<'_>,
) -> Outcome {
    let dominant = sums.dominant();
    let sum = sums.max();

    match dominant.as_slice() {
        [] => Outcome::None,
        [category] => {
            let known = ledger.is_known(*category, sum);
            Outcome::Resolved(ResolvedOutcome {
                category: *category,
                sum,
                known,
                tooltip: if known {
                    known_tooltip(*category, sum)
                } else {
                    UNKNOWN_TOOLTIP.to_string()
                },
            })
        }
        tied => {
            let options = tied
                .iter()
                .map(|&category| tiebreak_option(category, sum, selected, ledger, env))
                .collect();
            Outcome::Tiebreak(Tiebreak { sum, options })
        }
    }
}

fn tiebreak_option(
    category: Category,
    sum: u32,
    selected: Option<Category>,
    ledger: &KnownOutcomes,
    env: &CraftEnv<'_>,
) -> TiebreakOption {
    let known = ledger.is_known(category, sum);
    let item = env.predefined_id(category, sum);
    let img = item
        .and_then(|id| env.items().item(id))
        .and_then(|data| data.img);

    let mut tooltip = if known {
        known_tooltip(category, sum)
    } else {
        UNKNOWN_TOOLTIP.to_string()
    };
    if item.is_some() {
        tooltip.push_str(LINKED_SUFFIX);
    }

    TiebreakOption {
        category,
        sum,
        known,
        tooltip,
        selected: selected == Some(category),
        item,
        img,
    }
}
