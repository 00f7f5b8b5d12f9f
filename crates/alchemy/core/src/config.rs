use crate::types::RarityTable;

/// Crafting rules tables and tunable parameters.
///
/// The defaults reproduce the published alchemy rules; a TOML file can
/// override any subset of fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlchemyConfig {
    /// Tool identifier the actor must own and roll with.
    pub tool_key: String,
    /// Gold cost of an outcome, keyed by the outcome's initial rarity.
    pub base_cost: RarityTable<u64>,
    /// Gold value each reagent offsets, keyed by the reagent's own rarity.
    pub reagent_cost: RarityTable<u64>,
    /// Skill check difficulty, keyed by the outcome's initial rarity.
    pub difficulty: RarityTable<i32>,
    /// Floor on the gold cost as a percentage of the base cost.
    pub minimum_cost_percent: u64,
    /// Margin at or above which the craft yields the bonus quantity.
    pub great_success_margin: i32,
    /// Lowest margin that still counts as a near miss.
    pub near_miss_floor: i32,
    pub great_success_quantity: u32,
    /// Per-component IP cap for reagents, keyed by reagent rarity.
    pub ip_limits: RarityTable<u32>,
}

impl AlchemyConfig {
    pub const DEFAULT_TOOL_KEY: &'static str = "alchemist";
    pub const DEFAULT_BASE_COST: RarityTable<u64> = RarityTable::new(50, 200, 2_000, 20_000, 100_000);
    pub const DEFAULT_REAGENT_COST: RarityTable<u64> = RarityTable::new(10, 50, 600, 6_000, 50_000);
    pub const DEFAULT_DIFFICULTY: RarityTable<i32> = RarityTable::new(10, 15, 20, 25, 30);
    pub const DEFAULT_IP_LIMITS: RarityTable<u32> = RarityTable::new(5, 7, 10, 11, 10);

    pub fn new() -> Self {
        Self {
            tool_key: Self::DEFAULT_TOOL_KEY.to_string(),
            base_cost: Self::DEFAULT_BASE_COST,
            reagent_cost: Self::DEFAULT_REAGENT_COST,
            difficulty: Self::DEFAULT_DIFFICULTY,
            minimum_cost_percent: 10,
            great_success_margin: 10,
            near_miss_floor: -9,
            great_success_quantity: 2,
            ip_limits: Self::DEFAULT_IP_LIMITS,
        }
    }

    pub fn with_tool_key(mut self, tool_key: impl Into<String>) -> Self {
        self.tool_key = tool_key.into();
        self
    }
}

impl Default for AlchemyConfig {
    fn default() -> Self {
        Self::new()
    }
}
