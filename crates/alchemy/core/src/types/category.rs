//! Outcome categories and influence point vectors.

use std::ops::{Add, AddAssign};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One of the three influence categories a reagent contributes to.
///
/// Declaration order is significant: when several categories share the
/// maximum, the first one in this order is reported first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Combat,
    Utility,
    Entropy,
}

impl Category {
    /// Capitalized label used in item names ("Combat").
    pub const fn title(self) -> &'static str {
        match self {
            Category::Combat => "Combat",
            Category::Utility => "Utility",
            Category::Entropy => "Entropy",
        }
    }

    /// All categories in declaration order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

/// Influence points per category.
///
/// Used both for a single reagent's contribution and for the sum over a
/// crafting selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IpVector {
    pub combat: u32,
    pub utility: u32,
    pub entropy: u32,
}

impl IpVector {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(combat: u32, utility: u32, entropy: u32) -> Self {
        Self {
            combat,
            utility,
            entropy,
        }
    }

    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Combat => self.combat,
            Category::Utility => self.utility,
            Category::Entropy => self.entropy,
        }
    }

    /// Returns a copy with one component replaced.
    #[must_use]
    pub const fn with(mut self, category: Category, value: u32) -> Self {
        match category {
            Category::Combat => self.combat = value,
            Category::Utility => self.utility = value,
            Category::Entropy => self.entropy = value,
        }
        self
    }

    /// Largest component.
    pub fn max(&self) -> u32 {
        self.combat.max(self.utility).max(self.entropy)
    }

    pub fn is_zero(&self) -> bool {
        self.max() == 0
    }

    /// Categories whose component equals the maximum, in declaration order.
    ///
    /// Empty when every component is zero.
    pub fn dominant(&self) -> arrayvec::ArrayVec<Category, 3> {
        let max = self.max();
        if max == 0 {
            return arrayvec::ArrayVec::new();
        }
        Category::all().filter(|c| self.get(*c) == max).collect()
    }
}

impl Add for IpVector {
    type Output = IpVector;

    fn add(self, rhs: Self) -> Self::Output {
        IpVector::new(
            self.combat.saturating_add(rhs.combat),
            self.utility.saturating_add(rhs.utility),
            self.entropy.saturating_add(rhs.entropy),
        )
    }
}

impl AddAssign for IpVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
