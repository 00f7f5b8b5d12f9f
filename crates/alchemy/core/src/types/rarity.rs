//! Rarity tiers and the fixed sum bands that derive them.

use std::ops::RangeInclusive;

use strum::{Display, EnumString};

/// Rarity tier of a reagent or a crafted consumable.
///
/// Item data may name a rarity outside the five tiers; it reads as
/// [`Rarity::Unknown`], which has no entry in any [`RarityTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Rarity {
    /// The five tiers, lowest first.
    pub const TIERS: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::VeryRare,
        Rarity::Legendary,
    ];

    /// Highest sum that has its own outcome slot (the legendary band).
    pub const MAX_OUTCOME_SUM: u32 = 31;

    /// Derives the rarity of an IP sum.
    ///
    /// Bands: common `[1,12]`, uncommon `[13,21]`, rare `[22,27]`,
    /// veryRare `[28,30]`, legendary `[31,∞)`. Zero reads as common.
    pub const fn from_sum(sum: u32) -> Self {
        match sum {
            0..=12 => Rarity::Common,
            13..=21 => Rarity::Uncommon,
            22..=27 => Rarity::Rare,
            28..=30 => Rarity::VeryRare,
            _ => Rarity::Legendary,
        }
    }

    /// Sums that map to this rarity within the outcome table (`1..=31`).
    ///
    /// Empty for [`Rarity::Unknown`].
    #[allow(clippy::reversed_empty_ranges)]
    pub const fn outcome_sums(self) -> RangeInclusive<u32> {
        match self {
            Rarity::Common => 1..=12,
            Rarity::Uncommon => 13..=21,
            Rarity::Rare => 22..=27,
            Rarity::VeryRare => 28..=30,
            Rarity::Legendary => 31..=31,
            Rarity::Unknown => 1..=0,
        }
    }

    /// Human-readable label ("very rare").
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::VeryRare => "very rare",
            Rarity::Legendary => "legendary",
            Rarity::Unknown => "unknown",
        }
    }

    pub fn all() -> impl Iterator<Item = Rarity> {
        Self::TIERS.into_iter()
    }
}

/// Shorthand for [`Rarity::from_sum`].
pub const fn rarity_of(sum: u32) -> Rarity {
    Rarity::from_sum(sum)
}

/// A value per rarity tier (cost tables, DCs, IP limits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RarityTable<T> {
    pub common: T,
    pub uncommon: T,
    pub rare: T,
    pub very_rare: T,
    pub legendary: T,
}

impl<T: Copy> RarityTable<T> {
    pub const fn new(common: T, uncommon: T, rare: T, very_rare: T, legendary: T) -> Self {
        Self {
            common,
            uncommon,
            rare,
            very_rare,
            legendary,
        }
    }

    /// `None` for [`Rarity::Unknown`].
    pub const fn get(&self, rarity: Rarity) -> Option<T> {
        match rarity {
            Rarity::Common => Some(self.common),
            Rarity::Uncommon => Some(self.uncommon),
            Rarity::Rare => Some(self.rare),
            Rarity::VeryRare => Some(self.very_rare),
            Rarity::Legendary => Some(self.legendary),
            Rarity::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_match_boundaries() {
        assert_eq!(rarity_of(12), Rarity::Common);
        assert_eq!(rarity_of(13), Rarity::Uncommon);
        assert_eq!(rarity_of(21), Rarity::Uncommon);
        assert_eq!(rarity_of(22), Rarity::Rare);
        assert_eq!(rarity_of(27), Rarity::Rare);
        assert_eq!(rarity_of(28), Rarity::VeryRare);
        assert_eq!(rarity_of(30), Rarity::VeryRare);
        assert_eq!(rarity_of(31), Rarity::Legendary);
        assert_eq!(rarity_of(100), Rarity::Legendary);
    }

    #[test]
    fn outcome_sums_agree_with_bands() {
        for rarity in Rarity::all() {
            for sum in rarity.outcome_sums() {
                assert_eq!(rarity_of(sum), rarity, "sum {sum}");
            }
        }
    }

    #[test]
    fn identifiers_use_camel_case() {
        assert_eq!(Rarity::VeryRare.to_string(), "veryRare");
        assert_eq!("veryrare".parse::<Rarity>().unwrap(), Rarity::VeryRare);
        assert_eq!("Legendary".parse::<Rarity>().unwrap(), Rarity::Legendary);
    }

    #[test]
    fn unknown_rarity_has_no_table_entry_or_sums() {
        let table = RarityTable::new(1, 2, 3, 4, 5);
        assert_eq!(table.get(Rarity::VeryRare), Some(4));
        assert_eq!(table.get(Rarity::Unknown), None);
        assert_eq!(Rarity::Unknown.outcome_sums().count(), 0);
        assert!(!Rarity::all().any(|rarity| rarity == Rarity::Unknown));
    }
}
