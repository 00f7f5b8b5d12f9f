//! Transient crafting selection and reagent listing.

use crate::craft::aggregate;
use crate::error::{AlchemyError, ErrorSeverity};
use crate::types::{Category, InventoryItem, ItemId, Reagent};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("slot {0} does not exist")]
    IndexOutOfRange(usize),

    #[error("{item} is already in slot {slot}")]
    AlreadySlotted { item: ItemId, slot: usize },
}

impl AlchemyError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SlotError::IndexOutOfRange(_) => "SLOT_INDEX_OUT_OF_RANGE",
            SlotError::AlreadySlotted { .. } => "SLOT_ALREADY_SLOTTED",
        }
    }
}

/// Three reagent slots plus the tie-break choice.
///
/// The selection is owned by whoever drives the crafting session and is
/// passed to the rules by reference; crafting never clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftingSelection {
    slots: [Option<Reagent>; CraftingSelection::SLOT_COUNT],
    selected_outcome: Option<Category>,
}

impl CraftingSelection {
    pub const SLOT_COUNT: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection with every slot filled, in order.
    pub fn from_reagents(reagents: [Reagent; Self::SLOT_COUNT]) -> Result<Self, SlotError> {
        let mut selection = Self::new();
        for (index, reagent) in reagents.into_iter().enumerate() {
            selection.set_slot(index, reagent)?;
        }
        Ok(selection)
    }

    /// Puts a reagent in a slot, returning the reagent it replaced.
    ///
    /// An item may occupy only one slot at a time.
    pub fn set_slot(&mut self, index: usize, reagent: Reagent) -> Result<Option<Reagent>, SlotError> {
        if index >= Self::SLOT_COUNT {
            return Err(SlotError::IndexOutOfRange(index));
        }
        if let Some(slot) = self.slot_of(reagent.id)
            && slot != index
        {
            return Err(SlotError::AlreadySlotted {
                item: reagent.id,
                slot,
            });
        }
        Ok(self.slots[index].replace(reagent))
    }

    pub fn clear_slot(&mut self, index: usize) -> Result<Option<Reagent>, SlotError> {
        self.slots
            .get_mut(index)
            .map(Option::take)
            .ok_or(SlotError::IndexOutOfRange(index))
    }

    /// Empties every slot and forgets the tie-break choice.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn select_outcome(&mut self, category: Option<Category>) {
        self.selected_outcome = category;
    }

    pub fn selected_outcome(&self) -> Option<Category> {
        self.selected_outcome
    }

    pub fn slot(&self, index: usize) -> Option<&Reagent> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Reagent>; Self::SLOT_COUNT] {
        &self.slots
    }

    /// Filled slots, in slot order.
    pub fn reagents(&self) -> impl Iterator<Item = &Reagent> {
        self.slots.iter().flatten()
    }

    pub fn filled(&self) -> usize {
        self.reagents().count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == Self::SLOT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    pub fn slot_of(&self, item: ItemId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|r| r.id == item))
    }

    /// Where the selection stands in the crafting session lifecycle.
    pub fn phase(&self) -> SessionPhase {
        if self.is_empty() {
            return SessionPhase::Idle;
        }
        if !self.is_full() {
            return SessionPhase::SlotsPartial;
        }
        let dominant = aggregate(self).dominant();
        if dominant.len() < 2 {
            return SessionPhase::SlotsFull;
        }
        match self.selected_outcome {
            Some(choice) if dominant.contains(&choice) => SessionPhase::TiebreakResolved,
            _ => SessionPhase::TiebreakPending,
        }
    }
}

/// Lifecycle of a crafting session.
///
/// `Crafting` is entered only by the runtime while a craft is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    Idle,
    SlotsPartial,
    SlotsFull,
    TiebreakPending,
    TiebreakResolved,
    Crafting,
}

impl SessionPhase {
    /// Whether a craft request may be issued from this phase.
    pub const fn can_craft(self) -> bool {
        matches!(self, SessionPhase::SlotsFull | SessionPhase::TiebreakResolved)
    }
}

/// Ordering for reagent listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReagentSort {
    #[default]
    Name,
    /// Largest stacks first.
    Quantity,
}

/// Filter and ordering for [`available_reagents`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReagentQuery {
    pub search: Option<String>,
    pub sort: ReagentSort,
}

impl ReagentQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: ReagentSort) -> Self {
        self.sort = sort;
        self
    }
}

/// Reagents from `inventory` that can still go into a slot.
///
/// Skips empty stacks and items already slotted in `selection`; applies the
/// case-insensitive name search and ordering of `query`.
pub fn available_reagents<'a>(
    inventory: impl IntoIterator<Item = &'a InventoryItem>,
    selection: &CraftingSelection,
    query: &ReagentQuery,
) -> Vec<Reagent> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let mut reagents: Vec<Reagent> = inventory
        .into_iter()
        .filter_map(Reagent::from_item)
        .filter(|r| r.quantity > 0)
        .filter(|r| selection.slot_of(r.id).is_none())
        .filter(|r| {
            needle
                .as_deref()
                .is_none_or(|needle| r.name.to_lowercase().contains(needle))
        })
        .collect();

    match query.sort {
        ReagentSort::Name => reagents.sort_by(|a, b| a.name.cmp(&b.name)),
        ReagentSort::Quantity => reagents.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
    }
    reagents
}
