//! Reagent attributes and validation.

use strum::{Display, EnumString};

use super::category::{Category, IpVector};
use super::common::ItemId;
use super::item::InventoryItem;
use super::rarity::{Rarity, RarityTable};
use crate::error::{AlchemyError, ErrorSeverity};

/// Cosmetic essence tag carried by reagents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Essence {
    #[default]
    None,
    Primal,
    Fey,
    Eldritch,
}

impl Essence {
    /// Single-letter tag shown next to reagent names.
    pub const fn initial(self) -> char {
        match self {
            Essence::None => 'N',
            Essence::Primal => 'P',
            Essence::Fey => 'F',
            Essence::Eldritch => 'E',
        }
    }
}

/// Reagent-specific attributes stored on an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReagentProps {
    pub ip: IpVector,
    pub essence: Essence,
}

impl ReagentProps {
    pub const fn new(ip: IpVector, essence: Essence) -> Self {
        Self { ip, essence }
    }

    /// Checks every IP component against the cap for the reagent's rarity.
    ///
    /// An unknown rarity has no cap.
    pub fn validate(&self, rarity: Rarity, limits: &RarityTable<u32>) -> Result<(), ReagentError> {
        let Some(limit) = limits.get(rarity) else {
            return Ok(());
        };
        for category in Category::all() {
            let value = self.ip.get(category);
            if value > limit {
                return Err(ReagentError::IpExceedsLimit {
                    category,
                    value,
                    rarity,
                    limit,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReagentError {
    #[error("{category} IP {value} exceeds the {rarity} limit of {limit}")]
    IpExceedsLimit {
        category: Category,
        value: u32,
        rarity: Rarity,
        limit: u32,
    },
}

impl AlchemyError for ReagentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ReagentError::IpExceedsLimit { .. } => "REAGENT_IP_EXCEEDS_LIMIT",
        }
    }
}

/// Read-only view of an inventory item that is flagged as a reagent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reagent {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub rarity: Rarity,
    pub ip: IpVector,
    pub essence: Essence,
}

impl Reagent {
    /// Builds the reagent view; `None` when the item carries no reagent flags.
    ///
    /// Items without a rarity read as common.
    pub fn from_item(item: &InventoryItem) -> Option<Self> {
        let props = item.data.reagent?;
        Some(Self {
            id: item.id,
            name: item.data.name.clone(),
            quantity: item.data.quantity,
            rarity: item.data.rarity.unwrap_or_default(),
            ip: props.ip,
            essence: props.essence,
        })
    }

    /// Inventory annotation, e.g. `(P: 3 1 0)`.
    pub fn label(&self) -> String {
        format!(
            "({}: {} {} {})",
            self.essence.initial(),
            self.ip.combat,
            self.ip.utility,
            self.ip.entropy
        )
    }
}
