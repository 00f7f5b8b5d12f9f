use std::fmt;
use std::str::FromStr;

/// `NdS` dice expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceFormula {
    pub count: u32,
    pub sides: u32,
}

impl DiceFormula {
    pub const D20: Self = Self::new(1, 20);
    /// Potency loss on a near miss.
    pub const NEAR_MISS: Self = Self::new(1, 4);
    /// Potency loss on a large miss.
    pub const LARGE_MISS: Self = Self::new(2, 4);

    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid dice formula '{0}'")]
pub struct DiceParseError(pub String);

impl FromStr for DiceFormula {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceParseError(s.to_string());
        let (count, sides) = s.trim().split_once(['d', 'D']).ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| invalid())?
        };
        let sides: u32 = sides.parse().map_err(|_| invalid())?;
        if count == 0 || sides == 0 {
            return Err(invalid());
        }
        Ok(Self::new(count, sides))
    }
}
