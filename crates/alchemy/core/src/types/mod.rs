//! Data types shared by every crafting stage.

mod category;
mod common;
mod item;
mod rarity;
mod reagent;

pub use category::{Category, IpVector};
pub use common::{ActorId, ItemId};
pub use item::{InventoryItem, ItemData, ItemKind, Uses};
pub use rarity::{Rarity, RarityTable, rarity_of};
pub use reagent::{Essence, Reagent, ReagentError, ReagentProps};
