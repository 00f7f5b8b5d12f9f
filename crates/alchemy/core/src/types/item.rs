//! Item documents as the crafting rules see them.

use super::common::ItemId;
use super::rarity::Rarity;
use super::reagent::ReagentProps;

/// Coarse item type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    Consumable,
    #[default]
    Loot,
    Tool,
}

/// Charge tracking for consumables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uses {
    pub value: u32,
    pub max: u32,
    /// Destroy the item once its last charge is spent.
    pub auto_destroy: bool,
}

impl Uses {
    pub const SINGLE_CHARGE: Self = Self {
        value: 1,
        max: 1,
        auto_destroy: true,
    };
}

/// Item payload, independent of where the item lives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemData {
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub quantity: u32,
    pub rarity: Option<Rarity>,
    pub img: Option<String>,
    pub uses: Option<Uses>,
    pub consumable_type: Option<String>,
    /// Present on items flagged as reagents.
    pub reagent: Option<ReagentProps>,
    /// Tool identifier (e.g. `"alchemist"`) for tool items.
    pub tool: Option<String>,
}

impl ItemData {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            quantity: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    #[must_use]
    pub fn with_reagent(mut self, props: ReagentProps) -> Self {
        self.reagent = Some(props);
        self
    }

    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    #[must_use]
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    pub fn is_reagent(&self) -> bool {
        self.reagent.is_some()
    }
}

/// An item embedded in an actor's inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: ItemId,
    pub data: ItemData,
}

impl InventoryItem {
    pub fn new(id: ItemId, data: ItemData) -> Self {
        Self { id, data }
    }
}
