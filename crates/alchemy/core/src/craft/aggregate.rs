use crate::selection::CraftingSelection;
use crate::types::{IpVector, Reagent};

/// Component-wise IP sum over the filled slots. Empty slots contribute zero.
pub fn aggregate(selection: &CraftingSelection) -> IpVector {
    aggregate_reagents(selection.reagents())
}

pub fn aggregate_reagents<'a>(reagents: impl IntoIterator<Item = &'a Reagent>) -> IpVector {
    reagents
        .into_iter()
        .fold(IpVector::ZERO, |sum, reagent| sum + reagent.ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Essence, ItemId, Rarity};

    fn reagent(id: u64, ip: IpVector) -> Reagent {
        Reagent {
            id: ItemId(id),
            name: format!("r{id}"),
            quantity: 1,
            rarity: Rarity::Common,
            ip,
            essence: Essence::None,
        }
    }

    #[test]
    fn empty_selection_sums_to_zero() {
        assert_eq!(aggregate(&CraftingSelection::new()), IpVector::ZERO);
    }

    #[test]
    fn sums_filled_slots_and_skips_gaps() {
        let mut selection = CraftingSelection::new();
        selection.set_slot(0, reagent(1, IpVector::new(4, 0, 1))).unwrap();
        selection.set_slot(2, reagent(2, IpVector::new(3, 2, 0))).unwrap();
        assert_eq!(aggregate(&selection), IpVector::new(7, 2, 1));

        selection.set_slot(1, reagent(3, IpVector::new(0, 5, 5))).unwrap();
        assert_eq!(aggregate(&selection), IpVector::new(7, 7, 6));
    }
}
